use super::patterns::PatternTables;

/// Evaluates a hostname against the rule tables. Ordered, first match
/// wins: TLD suffix, then keyword substring, then host patterns.
pub fn check_domain_pattern(host: &str, tables: &PatternTables) -> Option<String> {
    for tld in &tables.tlds {
        if host.ends_with(tld) {
            return Some(format!("spam TLD: {tld}"));
        }
    }

    let host_lower = host.to_lowercase();
    for keyword in &tables.keywords {
        if host_lower.contains(keyword) {
            return Some(format!("suspicious keyword: {keyword}"));
        }
    }

    for pattern in &tables.patterns {
        if pattern.is_match(host) {
            return Some(format!("suspicious pattern: {}", pattern.label()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::patterns::HostPattern;

    fn tables() -> &'static PatternTables {
        PatternTables::builtin()
    }

    #[test]
    fn clean_host_passes() {
        assert_eq!(check_domain_pattern("mastodon.social", tables()), None);
    }

    #[test]
    fn tld_match_names_the_tld() {
        assert_eq!(
            check_domain_pattern("example.tk", tables()),
            Some("spam TLD: .tk".to_string())
        );
    }

    #[test]
    fn tld_is_checked_before_keywords() {
        // host carries both signals; the TLD rule runs first
        assert_eq!(
            check_domain_pattern("casino.ml", tables()),
            Some("spam TLD: .ml".to_string())
        );
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(
            check_domain_pattern("best-VIAGRA-deals.example", tables()),
            Some("suspicious keyword: viagra".to_string())
        );
    }

    #[test]
    fn digit_run_pattern_fires() {
        assert_eq!(
            check_domain_pattern("abc123456789.example", tables()),
            Some("suspicious pattern: [0-9]{8,}".to_string())
        );
    }

    #[test]
    fn leading_digits_pattern_fires() {
        assert_eq!(
            check_domain_pattern("1234.example", tables()),
            Some("suspicious pattern: ^\\d+\\.".to_string())
        );
    }

    #[test]
    fn repeated_character_pattern_fires() {
        assert_eq!(
            check_domain_pattern("zzzzzz.example", tables()),
            Some("suspicious pattern: (.)\\1{5,}".to_string())
        );
    }

    #[test]
    fn custom_tables_are_honored() {
        let small = PatternTables {
            tlds: vec![".test"],
            keywords: vec![],
            patterns: vec![HostPattern::regex(r"^\d+\.")],
        };
        assert_eq!(
            check_domain_pattern("example.test", &small),
            Some("spam TLD: .test".to_string())
        );
        assert_eq!(check_domain_pattern("casino.example", &small), None);
    }
}
