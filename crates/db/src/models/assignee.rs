use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// Candidate record for a new assignee. Fields stay optional so a missing field is reported by
/// the store instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssignee {
    pub id: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl CreateAssignee {
    /// Returns the assignee when every field is present and non-empty.
    pub fn into_assignee(self) -> Option<Assignee> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        Some(Assignee {
            id: present(self.id)?,
            name: present(self.name)?,
            avatar: present(self.avatar)?,
        })
    }
}

impl From<&Assignee> for CreateAssignee {
    fn from(assignee: &Assignee) -> Self {
        Self {
            id: Some(assignee.id.clone()),
            name: Some(assignee.name.clone()),
            avatar: Some(assignee.avatar.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_with_all_fields_is_accepted() {
        let candidate = CreateAssignee {
            id: Some("7".to_string()),
            name: Some("Grace Hopper".to_string()),
            avatar: Some("https://example.com/g.png".to_string()),
        };

        let assignee = candidate.into_assignee().unwrap();
        assert_eq!(assignee.id, "7");
        assert_eq!(assignee.name, "Grace Hopper");
    }

    #[test]
    fn test_empty_or_missing_fields_are_rejected() {
        let empty_name = CreateAssignee {
            id: Some("1".to_string()),
            name: Some(String::new()),
            avatar: Some("x".to_string()),
        };
        assert!(empty_name.into_assignee().is_none());

        let missing_avatar = CreateAssignee {
            id: Some("1".to_string()),
            name: Some("Alice".to_string()),
            avatar: None,
        };
        assert!(missing_avatar.into_assignee().is_none());
    }

    #[test]
    fn test_missing_avatar_deserializes_to_empty() {
        let assignee: Assignee = serde_json::from_str(r#"{"id":"1","name":"Alice"}"#).unwrap();
        assert_eq!(assignee.avatar, "");
    }
}
