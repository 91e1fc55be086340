use super::model::Person;

/// Strip a leading run of mention markers and surrounding whitespace.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().trim_start_matches('@').trim().to_string()
}

/// The pair of channels used to decide whether two person records denote the
/// same individual. A match on either channel counts; an absent channel
/// never matches anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityKey {
    slack_id: Option<String>,
    name: Option<String>,
}

impl IdentityKey {
    pub fn matches(&self, other: &IdentityKey) -> bool {
        if let (Some(a), Some(b)) = (&self.slack_id, &other.slack_id) {
            if a == b {
                return true;
            }
        }
        if let (Some(a), Some(b)) = (&self.name, &other.name) {
            if a == b {
                return true;
            }
        }
        false
    }
}

impl Person {
    /// Derive the identity key. The name channel is case-insensitive and
    /// mention-stripped; it falls back to the login when no name survives
    /// normalization.
    pub fn identity(&self) -> IdentityKey {
        let slack_id = self.slack_id.as_ref().filter(|s| !s.is_empty()).cloned();
        let name_source = if !self.name.is_empty() {
            Some(self.name.as_str())
        } else {
            self.login.as_deref().filter(|s| !s.is_empty())
        };
        let name = name_source
            .map(|s| normalize_name(s).to_lowercase())
            .filter(|s| !s.is_empty());
        IdentityKey { slack_id, name }
    }

    /// Label used in invariant violation messages.
    pub fn label(&self) -> String {
        if !self.name.is_empty() {
            self.name.clone()
        } else if let Some(id) = self.slack_id.as_ref().filter(|s| !s.is_empty()) {
            id.clone()
        } else if let Some(login) = self.login.as_ref().filter(|s| !s.is_empty()) {
            login.clone()
        } else {
            "(unknown)".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, login: Option<&str>, slack_id: Option<&str>) -> Person {
        Person {
            name: name.to_string(),
            login: login.map(|s| s.to_string()),
            slack_id: slack_id.map(|s| s.to_string()),
        }
    }

    #[test]
    fn normalize_name_strips_mentions_and_whitespace() {
        assert_eq!(normalize_name("  @alice "), "alice");
        assert_eq!(normalize_name("@@alice"), "alice");
        assert_eq!(normalize_name("@ alice"), "alice");
        assert_eq!(normalize_name("alice"), "alice");
    }

    #[test]
    fn mention_marker_and_case_do_not_break_identity() {
        let a = person("@alice", None, None);
        let b = person("Alice", None, None);
        assert!(a.identity().matches(&b.identity()));
    }

    #[test]
    fn slack_id_match_is_sufficient_despite_different_names() {
        let a = person("Alice", None, Some("U123"));
        let b = person("Bob", None, Some("U123"));
        assert!(a.identity().matches(&b.identity()));
    }

    #[test]
    fn name_match_is_sufficient_despite_different_slack_ids() {
        let a = person("Alice", None, Some("U123"));
        let b = person("alice", None, Some("U999"));
        assert!(a.identity().matches(&b.identity()));
    }

    #[test]
    fn empty_slack_ids_never_match() {
        let a = person("Alice", None, Some(""));
        let b = person("Bob", None, Some(""));
        assert!(!a.identity().matches(&b.identity()));
    }

    #[test]
    fn login_backs_up_an_absent_name() {
        let a = person("", Some("alice"), None);
        let b = person("Alice", None, None);
        assert!(a.identity().matches(&b.identity()));
    }

    #[test]
    fn persons_with_no_usable_channel_match_nobody() {
        let a = person("", None, None);
        let b = person("", None, None);
        assert!(!a.identity().matches(&b.identity()));
    }
}
