use serde::de::DeserializeOwned;
use tick_core::enums::Priority;
use tick_core::errors::CoreError;

/// Parse a `snake_case` enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a typed task number. Zero, negative and overflowing numbers map to
/// `Some(0)` so they are reported as out of range rather than as malformed input.
pub fn parse_task_number(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse::<usize>().unwrap_or(0))
}

/// Parse a typed priority. Returns the bare validation message on failure.
pub fn parse_priority(raw: &str) -> Result<Priority, String> {
    raw.parse::<Priority>().map_err(|error| match error {
        CoreError::Validation(message) => message,
        other => other.to_string(),
    })
}
