mod blocklist;
mod classifier;
mod domain_rules;
mod patterns;
mod stats_rules;

pub use blocklist::load_blocklist;
pub use classifier::is_spam_server;
pub use domain_rules::check_domain_pattern;
pub use patterns::{HostPattern, PatternTables};
pub use stats_rules::check_stats_anomaly;
