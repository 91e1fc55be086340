use serde::{Deserialize, Serialize};

/// A person referenced by the triage payload, post-normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_id: Option<String>,
}

/// One commit implicated by the failing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub author: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvers: Option<Vec<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_developers: Option<Vec<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_files: Option<Vec<String>>,
}

/// The structured triage message recovered from raw model output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payload {
    pub case: String,
    pub scenario: String,
    pub failure_message: String,
    pub slack_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failing_run_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failing_run_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub commits: Vec<Commit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_developers: Option<Vec<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_files: Option<Vec<String>>,
}
