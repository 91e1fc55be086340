use crate::error::{CoreError, CoreResult};
use serde_json::{Map, Value};

use super::identity::normalize_name;
use super::model::{Commit, Payload, Person};

fn type_error(path: &str, expected: &str) -> CoreError {
    CoreError::Schema {
        path: path.to_string(),
        reason: format!("expected {}", expected),
    }
}

fn value_error(path: &str, reason: &str) -> CoreError {
    CoreError::Schema {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn field(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> CoreResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| type_error(path, "object"))
}

fn required_string(obj: &Map<String, Value>, key: &str, prefix: &str) -> CoreResult<String> {
    let path = field(prefix, key);
    let value = obj
        .get(key)
        .ok_or_else(|| value_error(&path, "missing required field"))?;
    let s = value.as_str().ok_or_else(|| type_error(&path, "string"))?;
    if s.is_empty() {
        return Err(value_error(&path, "must be a non-empty string"));
    }
    Ok(s.to_string())
}

fn optional_string(
    obj: &Map<String, Value>,
    key: &str,
    prefix: &str,
    allow_empty: bool,
) -> CoreResult<Option<String>> {
    let Some(value) = obj.get(key) else {
        return Ok(None);
    };
    let path = field(prefix, key);
    let s = value.as_str().ok_or_else(|| type_error(&path, "string"))?;
    if !allow_empty && s.is_empty() {
        return Err(value_error(&path, "must be a non-empty string"));
    }
    Ok(Some(s.to_string()))
}

fn string_list(value: &Value, path: &str) -> CoreResult<Vec<String>> {
    let arr = value.as_array().ok_or_else(|| type_error(path, "list"))?;
    let mut out = Vec::with_capacity(arr.len());
    for (idx, item) in arr.iter().enumerate() {
        let item_path = format!("{}[{}]", path, idx);
        let s = item
            .as_str()
            .ok_or_else(|| type_error(&item_path, "string"))?;
        out.push(s.to_string());
    }
    Ok(out)
}

fn person_list(value: &Value, path: &str) -> CoreResult<Vec<Person>> {
    let arr = value.as_array().ok_or_else(|| type_error(path, "list"))?;
    let mut out = Vec::with_capacity(arr.len());
    for (idx, item) in arr.iter().enumerate() {
        out.push(validate_person(item, &format!("{}[{}]", path, idx))?);
    }
    Ok(out)
}

/// Validate and normalize one person record. The name is mention-stripped
/// and trimmed before the non-emptiness check; login and slack_id are
/// trimmed.
pub fn validate_person(value: &Value, path: &str) -> CoreResult<Person> {
    let obj = as_object(value, path)?;

    let name_path = field(path, "name");
    let raw_name = obj
        .get("name")
        .ok_or_else(|| value_error(&name_path, "missing required field"))?;
    let raw_name = raw_name
        .as_str()
        .ok_or_else(|| type_error(&name_path, "string"))?;
    let name = normalize_name(raw_name);
    if name.is_empty() {
        return Err(value_error(&name_path, "must be a non-empty string"));
    }

    // Trim before the non-emptiness check: a whitespace-only login must be
    // rejected here, never written back as an empty string.
    let login = match optional_string(obj, "login", path, true)? {
        Some(s) => {
            let trimmed = s.trim().to_string();
            if trimmed.is_empty() {
                return Err(value_error(
                    &field(path, "login"),
                    "must be a non-empty string",
                ));
            }
            Some(trimmed)
        }
        None => None,
    };
    let slack_id = optional_string(obj, "slack_id", path, true)?.map(|s| s.trim().to_string());

    Ok(Person {
        name,
        login,
        slack_id,
    })
}

/// Validate and normalize one commit record.
pub fn validate_commit(value: &Value, path: &str) -> CoreResult<Commit> {
    let obj = as_object(value, path)?;

    let hash = required_string(obj, "hash", path)?;
    let url = optional_string(obj, "url", path, false)?;

    let author_path = field(path, "author");
    let author_value = obj
        .get("author")
        .ok_or_else(|| value_error(&author_path, "missing required field"))?;
    let author = validate_person(author_value, &author_path)?;

    let approvers = match obj.get("approvers") {
        Some(v) => Some(person_list(v, &field(path, "approvers"))?),
        None => None,
    };
    let relevant_developers = match obj.get("relevant_developers") {
        Some(v) => Some(person_list(v, &field(path, "relevant_developers"))?),
        None => None,
    };
    let relevant_files = match obj.get("relevant_files") {
        Some(v) => Some(string_list(v, &field(path, "relevant_files"))?),
        None => None,
    };

    Ok(Commit {
        hash,
        url,
        author,
        approvers,
        relevant_developers,
        relevant_files,
    })
}

/// Validate the top-level payload shape, producing a normalized structure.
/// Fails fast: the first violation aborts validation of this candidate.
/// The input value is never mutated, so a failed candidate leaks nothing
/// into the next attempt.
pub fn validate_payload(value: &Value) -> CoreResult<Payload> {
    let obj = as_object(value, "payload")?;

    let case = required_string(obj, "case", "")?;
    let scenario = required_string(obj, "scenario", "")?;
    let failure_message = required_string(obj, "failure_message", "")?;
    let slack_message = required_string(obj, "slack_message", "")?;

    let failing_run_url = optional_string(obj, "failing_run_url", "", false)?;
    let failing_run_label = optional_string(obj, "failing_run_label", "", false)?;
    let notes = optional_string(obj, "notes", "", true)?;

    let commits_value = obj
        .get("commits")
        .ok_or_else(|| value_error("commits", "missing required field"))?;
    let commits_arr = commits_value
        .as_array()
        .ok_or_else(|| type_error("commits", "list"))?;
    let mut commits = Vec::with_capacity(commits_arr.len());
    for (idx, item) in commits_arr.iter().enumerate() {
        commits.push(validate_commit(item, &format!("commits[{}]", idx))?);
    }

    let relevant_developers = match obj.get("relevant_developers") {
        Some(v) => Some(person_list(v, "relevant_developers")?),
        None => None,
    };
    let relevant_files = match obj.get("relevant_files") {
        Some(v) => Some(string_list(v, "relevant_files")?),
        None => None,
    };

    Ok(Payload {
        case,
        scenario,
        failure_message,
        slack_message,
        failing_run_url,
        failing_run_label,
        notes,
        commits,
        relevant_developers,
        relevant_files,
    })
}
