pub const MOBILITY_ACCESS: &str = "Mobility & Access";
pub const FOOD_BEVERAGES: &str = "Food & Beverages";
pub const RETAIL_LIFESTYLE: &str = "Retail & Lifestyle";
pub const HEALTH_FITNESS_EDUCATION: &str = "Health, Fitness & Education";
pub const SERVICES_UTILITIES: &str = "Services & Utilities";
pub const ENTERTAINMENT_LEISURE_STAY: &str = "Entertainment, Leisure & Stay";

/// Canonical display order.
pub const CATEGORY_LABELS: [&str; 6] = [
    MOBILITY_ACCESS,
    FOOD_BEVERAGES,
    RETAIL_LIFESTYLE,
    HEALTH_FITNESS_EDUCATION,
    SERVICES_UTILITIES,
    ENTERTAINMENT_LEISURE_STAY,
];

pub const RELIGIOUS_SERVICES: &str = "religious services";

pub fn is_canonical(category: &str) -> bool {
    CATEGORY_LABELS.contains(&category)
}

pub fn persona_for(category: &str) -> &'static str {
    match category {
        MOBILITY_ACCESS => "commuters, parking, work routes",
        FOOD_BEVERAGES => "food seekers, quick bites",
        RETAIL_LIFESTYLE => "shoppers, retail stops",
        HEALTH_FITNESS_EDUCATION => "students, clinics, gyms",
        SERVICES_UTILITIES => "ATMs, exchanges, daily services",
        ENTERTAINMENT_LEISURE_STAY => "tourists, hotels, leisure",
        _ => "general visitors",
    }
}

pub fn sponsorship_label_for(category: &str) -> &'static str {
    match category {
        FOOD_BEVERAGES => "cafe sponsorship opportunity",
        RETAIL_LIFESTYLE => "retail sponsorship opportunity",
        SERVICES_UTILITIES => "banking or exchange sponsorship opportunity",
        ENTERTAINMENT_LEISURE_STAY => "hotel or leisure sponsorship opportunity",
        MOBILITY_ACCESS => "mobility services sponsorship opportunity",
        HEALTH_FITNESS_EDUCATION => "clinic or education sponsorship opportunity",
        _ => "local sponsorship opportunity",
    }
}
