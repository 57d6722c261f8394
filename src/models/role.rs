//! Account role tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The primary function of an account.
///
/// Unknown tags are kept verbatim in [`Role::Other`] so they survive a
/// round trip and can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    SuperAdmin,
    Teacher,
    Student,
    HeadOfDepartment,
    Dean,
    CourseCoordinator,
    Other(String),
}

impl Role {
    /// The wire tag for this role.
    pub fn tag(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::HeadOfDepartment => "hod",
            Role::Dean => "dean",
            Role::CourseCoordinator => "cc",
            Role::Other(tag) => tag,
        }
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        match tag {
            "admin" => Role::Admin,
            "superadmin" => Role::SuperAdmin,
            "teacher" => Role::Teacher,
            "student" => Role::Student,
            "hod" => Role::HeadOfDepartment,
            "dean" => Role::Dean,
            "cc" => Role::CourseCoordinator,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match Role::from(tag.as_str()) {
            Role::Other(_) => Role::Other(tag),
            known => known,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        let known = [
            Role::Admin,
            Role::SuperAdmin,
            Role::Teacher,
            Role::Student,
            Role::HeadOfDepartment,
            Role::Dean,
            Role::CourseCoordinator,
        ];
        for role in known {
            assert_eq!(Role::from(role.tag()), role);
        }
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(Role::from("Dean"), Role::Other("Dean".to_string()));
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let role = Role::from("librarian".to_string());
        assert_eq!(role, Role::Other("librarian".to_string()));
        assert_eq!(String::from(role), "librarian");
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let roles: Vec<Role> = serde_json::from_str(r#"["hod","cc","janitor"]"#).unwrap();
        assert_eq!(
            roles,
            vec![
                Role::HeadOfDepartment,
                Role::CourseCoordinator,
                Role::Other("janitor".to_string())
            ]
        );
        assert_eq!(
            serde_json::to_string(&roles).unwrap(),
            r#"["hod","cc","janitor"]"#
        );
    }
}
