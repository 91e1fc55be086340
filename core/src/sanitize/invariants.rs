use crate::error::{CoreError, CoreResult};

use super::identity::IdentityKey;
use super::model::{Commit, Payload, Person};

fn violation(path: String, reason: String) -> CoreError {
    CoreError::Invariant { path, reason }
}

/// Identities that relevant developers must not collide with, each paired
/// with a role label for the violation message.
fn restricted_identities(commit: &Commit, commit_path: &str) -> Vec<(IdentityKey, String)> {
    let mut out = Vec::new();
    out.push((
        commit.author.identity(),
        format!("author of {}", commit_path),
    ));
    if let Some(approvers) = &commit.approvers {
        for (idx, approver) in approvers.iter().enumerate() {
            out.push((
                approver.identity(),
                format!("approver {}.approvers[{}]", commit_path, idx),
            ));
        }
    }
    out
}

/// No two entries within one list may share an identity. Checked
/// incrementally; the first duplicate wins and is reported.
fn check_no_duplicates(developers: &[Person], path: &str) -> CoreResult<()> {
    let mut seen: Vec<(IdentityKey, usize)> = Vec::new();
    for (idx, person) in developers.iter().enumerate() {
        let key = person.identity();
        if let Some((_, first_idx)) = seen.iter().find(|(k, _)| k.matches(&key)) {
            return Err(violation(
                format!("{}[{}]", path, idx),
                format!(
                    "\"{}\" duplicates entry {}[{}]",
                    person.label(),
                    path,
                    first_idx
                ),
            ));
        }
        seen.push((key, idx));
    }
    Ok(())
}

/// No entry may match any identity in the restricted set, on either the
/// slack_id or the normalized-name channel.
fn check_no_overlap(
    developers: &[Person],
    restricted: &[(IdentityKey, String)],
    path: &str,
) -> CoreResult<()> {
    for (idx, person) in developers.iter().enumerate() {
        let key = person.identity();
        if let Some((_, role)) = restricted.iter().find(|(k, _)| k.matches(&key)) {
            return Err(violation(
                format!("{}[{}]", path, idx),
                format!("\"{}\" matches the {}", person.label(), role),
            ));
        }
    }
    Ok(())
}

/// Enforce identity uniqueness and non-overlap rules across the payload:
/// per-commit duplicates, per-commit overlap with the commit's own author
/// and approvers, payload-wide duplicates, then payload-wide overlap with
/// every author and approver. The first violation aborts the candidate.
pub fn check_payload(payload: &Payload) -> CoreResult<()> {
    let mut all_restricted: Vec<(IdentityKey, String)> = Vec::new();
    for (idx, commit) in payload.commits.iter().enumerate() {
        let commit_path = format!("commits[{}]", idx);
        all_restricted.extend(restricted_identities(commit, &commit_path));
    }

    for (idx, commit) in payload.commits.iter().enumerate() {
        let commit_path = format!("commits[{}]", idx);
        if let Some(developers) = &commit.relevant_developers {
            let list_path = format!("{}.relevant_developers", commit_path);
            check_no_duplicates(developers, &list_path)?;
            let own_restricted = restricted_identities(commit, &commit_path);
            check_no_overlap(developers, &own_restricted, &list_path)?;
        }
    }

    if let Some(developers) = &payload.relevant_developers {
        check_no_duplicates(developers, "relevant_developers")?;
        check_no_overlap(developers, &all_restricted, "relevant_developers")?;
    }

    Ok(())
}
