use once_cell::sync::Lazy;
use regex::Regex;

// Free registrars first, then gTLDs that show up in spam feeds.
const SPAM_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".gq",
    ".click", ".loan", ".download", ".racing", ".review",
];

const SPAM_KEYWORDS: &[&str] = &[
    "porn", "xxx", "adult", "sex", "casino", "poker", "betting",
    "pharma", "viagra", "cialis", "pills", "drugs",
    "crypto", "bitcoin", "investment", "forex",
    "replica", "fake", "counterfeit",
];

/// One suspicious-host rule. The label is the pattern text quoted in the
/// rejection reason.
#[derive(Debug)]
pub struct HostPattern {
    label: &'static str,
    kind: PatternKind,
}

#[derive(Debug)]
enum PatternKind {
    Regex(Regex),
    RepeatedRun(usize),
}

impl HostPattern {
    pub fn regex(label: &'static str) -> Self {
        let compiled = Regex::new(&format!("(?i){label}")).expect("valid host pattern regex");
        Self {
            label,
            kind: PatternKind::Regex(compiled),
        }
    }

    pub fn repeated_run(label: &'static str, run: usize) -> Self {
        Self {
            label,
            kind: PatternKind::RepeatedRun(run),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_match(&self, host: &str) -> bool {
        match &self.kind {
            PatternKind::Regex(regex) => regex.is_match(host),
            PatternKind::RepeatedRun(run) => has_repeated_run(host, *run),
        }
    }
}

// The regex crate has no backreferences, so the same-character rule is
// checked by hand. Case-insensitive like the regex rules.
fn has_repeated_run(host: &str, run: usize) -> bool {
    let mut current = None;
    let mut length = 0usize;
    for ch in host.chars().map(|c| c.to_ascii_lowercase()) {
        if current == Some(ch) {
            length += 1;
        } else {
            current = Some(ch);
            length = 1;
        }
        if length >= run {
            return true;
        }
    }
    false
}

/// Immutable rule tables consulted by the domain checker. Tests build
/// smaller tables; production code uses [`PatternTables::builtin`].
#[derive(Debug)]
pub struct PatternTables {
    pub tlds: Vec<&'static str>,
    pub keywords: Vec<&'static str>,
    pub patterns: Vec<HostPattern>,
}

impl PatternTables {
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }
}

static BUILTIN: Lazy<PatternTables> = Lazy::new(|| PatternTables {
    tlds: SPAM_TLDS.to_vec(),
    keywords: SPAM_KEYWORDS.to_vec(),
    patterns: vec![
        HostPattern::regex(r"^[a-z0-9]{20,}\."),
        HostPattern::regex(r"^\d+\."),
        HostPattern::regex(r"[0-9]{8,}"),
        HostPattern::repeated_run(r"(.)\1{5,}", 6),
    ],
});
