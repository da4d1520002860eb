//! ID prefixes and generation.
//!
//! IDs look like `tsk-a3f8b2c1`: a short entity prefix followed by eight
//! lowercase hex digits drawn from the OS entropy source.

use crate::errors::CoreError;

pub const PREFIX_TASK: &str = "tsk";

/// Generate a prefixed ID, e.g. `"tsk-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS entropy source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|error| anyhow::anyhow!("entropy source unavailable: {error}"))?;
    let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// Whether `id` has the `{prefix}-xxxxxxxx` shape.
#[must_use]
pub fn is_valid_id(prefix: &str, id: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| {
            hex.len() == 8
                && hex
                    .chars()
                    .all(|ch| ch.is_ascii_digit() || matches!(ch, 'a'..='f'))
        })
}
