use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::model::LearningPlan;

// Models frequently wrap their reply in a ```json fence even when told not
// to. Strip opening and closing fences globally, then trim.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\n?|\n?```").expect("invalid fence pattern"));

#[derive(Debug, Error)]
#[error("model reply did not match the expected plan shape: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Clean the raw model reply and parse it into a typed plan. Typed
/// deserialization doubles as field-presence validation; no constraint is
/// placed on how many path items a live reply carries.
pub fn parse_plan(raw: &str) -> Result<LearningPlan, ParseError> {
    let cleaned = CODE_FENCE.replace_all(raw, "");
    Ok(serde_json::from_str(cleaned.trim())?)
}
