pub mod record;
pub mod counter;
pub mod categories;
pub mod routes;
pub mod aggregate;
pub mod ranking;
pub mod audience;
pub mod hub_spoke;
pub mod geocode;
pub mod filter;
pub mod config;
pub mod loader;
pub mod snapshot;

pub use config::DashboardOpts;
pub use geocode::CoordinateReference;
pub use record::ConversationRecord;
pub use snapshot::{build_snapshot, DashboardSnapshot};
