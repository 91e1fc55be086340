use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One workspace member record from the downloaded directory file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub deleted: bool,
}

/// One user group record from the downloaded directory file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryUsergroup {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The chat directory snapshot: `users` plus optional `usergroups`. The
/// sanitizer core never requires this file; it only backs the lookup tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub users: Vec<DirectoryUser>,
    #[serde(default)]
    pub usergroups: Vec<DirectoryUsergroup>,
}

impl Directory {
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            CoreError::InvalidInput(format!("failed to parse directory file: {}", e))
        })
    }
}
