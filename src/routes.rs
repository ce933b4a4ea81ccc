//! Best-effort extraction of bus route codes from free-text answers.
//!
//! Explicit phrasings ("bus 8", "route no. 12A", "number 44 bus", "the 52 bus")
//! are tried first. Only when none of them match is each sentence that
//! mentions a bus scanned for bare short codes, with stop/station numbers and
//! quantities such as "5 minutes" or "200 m" filtered out.
//!
//! Word boundaries are ASCII-only, so a code followed by a non-ASCII letter
//! ("12é") still matches.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BUS_OR_ROUTE: Lazy<Regex> = Lazy::new(|| {
    // bus|route [number|no.|#] CODE [and|or|, CODE]
    Regex::new(r"(?i)(?-u:\b)(?:bus|route)\s*(?:number|no\.?|#)?\s*([0-9]{1,3}[a-zA-Z]?)(?:\s*(?:and|or|,)\s*([0-9]{1,3}[a-zA-Z]?))?").unwrap()
});

static RE_NUMBER_BUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)number\s*([0-9]{1,3}[a-zA-Z]?)\s*bus(?-u:\b)").unwrap()
});

static RE_CODE_BUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)([0-9]{1,3}[a-zA-Z]?)\s*bus(?-u:\b)").unwrap()
});

static RE_SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n.!?]+").unwrap());

static RE_BARE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]{1,3}[a-zA-Z]?(?-u:\b)").unwrap());

const STOP_WORDS_BEFORE: &[&str] = &["stop", "station"];

const UNIT_WORDS_AFTER: &[&str] = &[
    "minute", "minutes", "min", "mins",
    "meter", "meters", "metre", "metres", "m",
    "km", "kilometer", "kilometers", "kilometre", "kilometres",
    "hour", "hours",
];

/// Route codes mentioned in `text`, upper-cased, deduplicated, in discovery order.
pub fn extract_routes(text: &str) -> Vec<String> {
    let mut routes = Vec::new();
    if text.is_empty() {
        return routes;
    }

    for re in [&*RE_BUS_OR_ROUTE, &*RE_NUMBER_BUS, &*RE_CODE_BUS] {
        for caps in re.captures_iter(text) {
            for group in caps.iter().skip(1).flatten() {
                push_unique(&mut routes, group.as_str());
            }
        }
    }
    if !routes.is_empty() {
        return routes;
    }

    for segment in RE_SEGMENT_SPLIT.split(text) {
        if !segment.to_lowercase().contains("bus") {
            continue;
        }
        for m in RE_BARE_CODE.find_iter(segment) {
            let prev = segment[..m.start()]
                .split_whitespace()
                .last()
                .unwrap_or("")
                .to_lowercase();
            let next = segment[m.end()..]
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_lowercase();
            if STOP_WORDS_BEFORE.contains(&prev.as_str()) || UNIT_WORDS_AFTER.contains(&next.as_str()) {
                continue;
            }
            push_unique(&mut routes, m.as_str());
        }
    }
    routes
}

fn push_unique(routes: &mut Vec<String>, code: &str) {
    let code = code.to_uppercase();
    if !routes.contains(&code) {
        routes.push(code);
    }
}
