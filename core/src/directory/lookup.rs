use serde::Serialize;

use super::model::{Directory, DirectoryUser};

/// Built-in bot account that carries no is_bot flag in the API payload.
const BUILTIN_BOT_ID: &str = "USLACKBOT";

/// Normalize a value for fuzzy comparison: lowercase, alphanumerics only.
pub fn normalize_query(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupMatch {
    pub query: String,
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub reason: String,
    pub score: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct LookupOptions {
    pub limit: usize,
    pub include_bots: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            limit: 1,
            include_bots: false,
        }
    }
}

/// Score how well one user matches a normalized query. An exact match on
/// any profile field beats a substring match; the reason names the field.
fn score_user(query_norm: &str, user: &DirectoryUser) -> Option<(u32, String)> {
    let fields = [
        ("display name", user.display_name.as_deref()),
        ("real name", user.real_name.as_deref()),
        ("username", user.username.as_deref()),
        ("email", user.email.as_deref()),
    ];

    let mut best: Option<(u32, String)> = None;
    for (label, value) in fields {
        let Some(value) = value else { continue };
        let norm = normalize_query(value);
        if norm.is_empty() {
            continue;
        }
        let scored = if norm == query_norm {
            Some((100, format!("exact match on {}", label)))
        } else if norm.contains(query_norm) {
            Some((70, format!("substring match on {}", label)))
        } else {
            None
        };
        if let Some((score, reason)) = scored {
            if best.as_ref().map_or(true, |(b, _)| score > *b) {
                best = Some((score, reason));
            }
        }
    }
    best
}

/// Top matches for one query, ordered by score descending. Deleted users
/// are always skipped; bots are skipped unless explicitly included.
pub fn search_users(query: &str, directory: &Directory, options: LookupOptions) -> Vec<LookupMatch> {
    let query_norm = normalize_query(query);

    let mut matches: Vec<(u32, &DirectoryUser, String)> = Vec::new();
    for user in &directory.users {
        if user.deleted {
            continue;
        }
        let builtin_bot = user.id.as_deref() == Some(BUILTIN_BOT_ID);
        if (user.is_bot || builtin_bot) && !options.include_bots {
            continue;
        }
        if let Some((score, reason)) = score_user(&query_norm, user) {
            matches.push((score, user, reason));
        }
    }

    // Stable sort keeps directory order among equal scores.
    matches.sort_by(|a, b| b.0.cmp(&a.0));

    matches
        .into_iter()
        .take(options.limit)
        .map(|(score, user, reason)| LookupMatch {
            query: query.to_string(),
            id: user.id.clone(),
            display_name: user.display_name.clone(),
            real_name: user.real_name.clone(),
            email: user.email.clone(),
            reason,
            score,
        })
        .collect()
}
