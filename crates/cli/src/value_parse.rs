/// Boolean words, case-insensitive and trimmed. `None` when unrecognised.
pub(crate) fn parse_bool_flag(raw: &str) -> Option<bool> {
    let word = raw.trim().to_ascii_lowercase();
    match word.as_str() {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Boolean words, or any integer where non-zero means enabled.
/// Unrecognised values count as disabled.
pub(crate) fn parse_env_flag(raw: &str) -> bool {
    parse_bool_flag(raw)
        .or_else(|| raw.trim().parse::<i64>().ok().map(|value| value != 0))
        .unwrap_or(false)
}
