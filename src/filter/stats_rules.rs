use crate::domain::PeerServer;

// Fixed thresholds, kept in sync with the upstream dataset tooling.
const MAX_POSTS_PER_USER: f64 = 50_000.0;
const MAX_ACTIVE_RATIO: f64 = 1.5;

/// Flags physically implausible usage counters. Missing stats, or counters
/// that are all zero, are a plain domain list and never count as evidence.
pub fn check_stats_anomaly(server: &PeerServer) -> Option<String> {
    let stats = server.stats.as_ref()?;

    let users = stats.total_users.unwrap_or(0);
    let active = stats.active_users.unwrap_or(0);
    let posts = stats.local_posts.unwrap_or(0);

    if users == 0 && active == 0 && posts == 0 {
        return None;
    }

    if users > 0 && posts > 0 {
        let posts_per_user = posts as f64 / users as f64;
        if posts_per_user > MAX_POSTS_PER_USER {
            return Some(format!("abnormal post ratio ({posts_per_user:.0} per user)"));
        }
    }

    if users > 0 && active as f64 > users as f64 * MAX_ACTIVE_RATIO {
        return Some(format!("anomalous active-user count ({active} > {users})"));
    }

    None
}
