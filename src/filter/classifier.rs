use std::collections::HashSet;

use crate::domain::PeerServer;

use super::{
    domain_rules::check_domain_pattern, patterns::PatternTables, stats_rules::check_stats_anomaly,
};

/// The spam decision for one server. Pure: no I/O, deterministic for a
/// given (record, blocklist, tables). Fixed precedence, first positive
/// wins; cheaper, higher-confidence signals run first.
pub fn is_spam_server(
    server: &PeerServer,
    blocklist: &HashSet<String>,
    tables: &PatternTables,
) -> Option<String> {
    let host = server.host();

    if blocklist.contains(host) {
        return Some("listed on external blocklist".to_string());
    }

    // An absent field means a plain domain list without richer metadata,
    // not a failed verification.
    if server.verified_activitypub == Some(false) {
        return Some("ActivityPub verification failed".to_string());
    }

    if let Some(reason) = check_domain_pattern(host, tables) {
        return Some(reason);
    }

    check_stats_anomaly(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PeerRecord, PeerStats};

    fn tables() -> &'static PatternTables {
        PatternTables::builtin()
    }

    fn bare(host: &str) -> PeerServer {
        PeerRecord::Bare(host.to_string()).to_server()
    }

    #[test]
    fn clean_server_passes() {
        assert_eq!(
            is_spam_server(&bare("mastodon.social"), &HashSet::new(), tables()),
            None
        );
    }

    #[test]
    fn blocklist_wins_over_everything() {
        let blocklist: HashSet<String> = ["example.tk".to_string()].into_iter().collect();
        // the host would also trip the TLD rule; the blocklist reason wins
        assert_eq!(
            is_spam_server(&bare("example.tk"), &blocklist, tables()),
            Some("listed on external blocklist".to_string())
        );
    }

    #[test]
    fn blocklist_match_is_exact_and_case_sensitive() {
        let blocklist: HashSet<String> = ["Spam.Example".to_string()].into_iter().collect();
        assert_eq!(
            is_spam_server(&bare("spam.example"), &blocklist, tables()),
            None
        );
    }

    #[test]
    fn explicit_failed_verification_is_flagged() {
        let server = PeerServer {
            host: Some("clean-host.example".to_string()),
            verified_activitypub: Some(false),
            ..PeerServer::default()
        };
        assert_eq!(
            is_spam_server(&server, &HashSet::new(), tables()),
            Some("ActivityPub verification failed".to_string())
        );
    }

    #[test]
    fn absent_verification_field_is_not_failure() {
        let server = PeerServer {
            host: Some("clean-host.example".to_string()),
            ..PeerServer::default()
        };
        assert_eq!(is_spam_server(&server, &HashSet::new(), tables()), None);
    }

    #[test]
    fn verification_is_checked_before_domain_rules() {
        let server = PeerServer {
            host: Some("casino.example".to_string()),
            verified_activitypub: Some(false),
            ..PeerServer::default()
        };
        assert_eq!(
            is_spam_server(&server, &HashSet::new(), tables()),
            Some("ActivityPub verification failed".to_string())
        );
    }

    #[test]
    fn spam_tld_is_flagged_regardless_of_other_fields() {
        let server = PeerServer {
            host: Some("example.tk".to_string()),
            verified_activitypub: Some(true),
            stats: Some(PeerStats {
                total_users: Some(100),
                active_users: Some(50),
                local_posts: Some(1_000),
                ..PeerStats::default()
            }),
            ..PeerServer::default()
        };
        let reason = is_spam_server(&server, &HashSet::new(), tables()).unwrap();
        assert!(reason.contains(".tk"), "unexpected reason: {reason}");
    }

    #[test]
    fn stats_anomaly_is_the_last_resort() {
        let server = PeerServer {
            host: Some("quiet-host.example".to_string()),
            stats: Some(PeerStats {
                total_users: Some(10),
                active_users: Some(0),
                local_posts: Some(600_000),
                ..PeerStats::default()
            }),
            ..PeerServer::default()
        };
        assert_eq!(
            is_spam_server(&server, &HashSet::new(), tables()),
            Some("abnormal post ratio (60000 per user)".to_string())
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let server = bare("xxxcasino123456789012.tk");
        let blocklist = HashSet::new();
        let first = is_spam_server(&server, &blocklist, tables());
        let second = is_spam_server(&server, &blocklist, tables());
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
