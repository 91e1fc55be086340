use crate::error::{CoreError, CoreResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::candidates::normalize_candidates;
use super::invariants::check_payload;
use super::model::Payload;
use super::render::to_sorted_pretty_string;
use super::schema::validate_payload;

/// Run one candidate through parse, schema validation, and invariant checks.
/// Each candidate gets a fresh parse of its own string.
fn try_candidate(candidate: &str) -> CoreResult<Payload> {
    let parsed: Value =
        serde_json::from_str(candidate).map_err(|e| CoreError::Parse(e.to_string()))?;
    let payload = validate_payload(&parsed)?;
    check_payload(&payload)?;
    Ok(payload)
}

/// Try each candidate in order; the first fully valid one wins. On
/// exhaustion, the error from the last attempted candidate is surfaced.
pub fn sanitize_text(raw: &str) -> CoreResult<Payload> {
    let mut last_error: Option<CoreError> = None;
    for candidate in normalize_candidates(raw)? {
        if candidate.is_empty() {
            continue;
        }
        match try_candidate(&candidate) {
            Ok(payload) => return Ok(payload),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| {
        CoreError::InvalidInput("no candidate payload could be extracted".to_string())
    }))
}

/// Read, sanitize, and rewrite the target file. The file is written only
/// after a candidate passes every check; on failure it is left untouched.
pub fn sanitize_file(path: &Path) -> CoreResult<()> {
    let raw = fs::read_to_string(path)?;
    let payload = sanitize_text(&raw)?;
    let rendered = to_sorted_pretty_string(&payload)?;
    fs::write(path, rendered)?;
    Ok(())
}
