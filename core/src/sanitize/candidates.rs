use crate::error::{CoreError, CoreResult};
use regex::Regex;

/// Produce ordered textual hypotheses for the JSON payload buried in raw
/// model output. Earlier entries are preferred; entries identical after
/// trimming are dropped while keeping first-seen order.
pub fn normalize_candidates(raw: &str) -> CoreResult<Vec<String>> {
    let content_tag = Regex::new(r"</?content[^>]*>")
        .map_err(|_e| CoreError::InvalidInput("regex compilation failed".to_string()))?;
    let parameter_tag = Regex::new(r"<parameter[^>]*>")
        .map_err(|_e| CoreError::InvalidInput("regex compilation failed".to_string()))?;

    let mut candidates: Vec<String> = Vec::new();
    candidates.push(raw.to_string());

    // Models sometimes wrap the JSON in tool-call-looking markup.
    let stripped = content_tag.replace_all(raw, "");
    let stripped = parameter_tag.replace_all(&stripped, "");
    candidates.push(stripped.into_owned());

    // Extract the outermost JSON object when commentary surrounds it.
    if let (Some(first), Some(last)) = (raw.find('{'), raw.rfind('}')) {
        if last > first {
            candidates.push(raw[first..=last].to_string());
        }
    }

    let mut unique: Vec<String> = Vec::new();
    for candidate in candidates {
        let trimmed = candidate.trim().to_string();
        if !unique.contains(&trimmed) {
            unique.push(trimmed);
        }
    }
    Ok(unique)
}
