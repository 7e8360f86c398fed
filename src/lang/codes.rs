/// Canonicalizes a free-text language tag to a bare ISO 639 code: trims,
/// lowercases, keeps only the primary subtag (`en-US` becomes `en`), and
/// maps legacy aliases. Anything that is not a 2-3 letter subtag is
/// dropped.
pub fn normalize_language_code(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let primary = trimmed
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if primary.len() < 2
        || primary.len() > 3
        || !primary.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return None;
    }

    let canonical = match primary.as_str() {
        "iw" => "he",
        "in" => "id",
        "ji" => "yi",
        "mo" => "ro",
        other => other,
    };
    Some(canonical.to_string())
}
