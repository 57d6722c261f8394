//! The authenticated user's profile record.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::role::Role;

/// A profile payload that could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileDecodeError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A school or department the account belongs to.
///
/// Backends send either a populated `{name, code}` object or just the
/// referenced id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Affiliation {
    Populated {
        #[serde(default, deserialize_with = "lenient_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_string")]
        code: Option<String>,
    },
    Reference(String),
}

impl Affiliation {
    /// `Name (CODE)`, degrading gracefully when parts are missing.
    pub fn display(&self) -> String {
        match self {
            Affiliation::Populated { name, code } => match (name, code) {
                (Some(name), Some(code)) => format!("{} ({})", name, code),
                (Some(name), None) => name.clone(),
                (None, Some(code)) => code.clone(),
                (None, None) => "-".to_string(),
            },
            Affiliation::Reference(id) => id.clone(),
        }
    }
}

/// Typed view over the fields the profile screen reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFields {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    reg_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    teacher_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    role: Option<Role>,
    #[serde(default, deserialize_with = "lenient_list")]
    roles: Vec<Role>,
    #[serde(default, deserialize_with = "lenient")]
    school: Option<Affiliation>,
    #[serde(default, deserialize_with = "lenient")]
    department: Option<Affiliation>,
    #[serde(default, deserialize_with = "lenient_list")]
    courses_assigned: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    updated_at: Option<String>,
}

/// Decode a field, treating any shape mismatch as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Strings, and numbers rendered as strings.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Arrays, skipping elements of the wrong shape. Anything else is empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// The authenticated user's account record.
///
/// The full JSON object is kept as received, key order included; the
/// accessors are a lenient typed view over it. Serializing a profile
/// yields the original object.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    raw: Map<String, Value>,
    fields: ProfileFields,
}

impl UserProfile {
    /// Build a profile from a JSON object.
    pub fn from_object(raw: Map<String, Value>) -> Self {
        let fields = ProfileFields::deserialize(Value::Object(raw.clone())).unwrap_or_default();
        Self { raw, fields }
    }

    /// Interpret a decoded payload.
    ///
    /// `null`, `false`, `0` and `""` mean "no profile" and yield `Ok(None)`.
    /// Any other non-object value is rejected.
    pub fn from_value(value: Value) -> Result<Option<Self>, ProfileDecodeError> {
        match value {
            Value::Object(map) => Ok(Some(Self::from_object(map))),
            Value::Null | Value::Bool(false) => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
            Value::Bool(true) => Err(ProfileDecodeError::NotAnObject("a boolean")),
            Value::Number(_) => Err(ProfileDecodeError::NotAnObject("a number")),
            Value::String(_) => Err(ProfileDecodeError::NotAnObject("a string")),
            Value::Array(_) => Err(ProfileDecodeError::NotAnObject("an array")),
        }
    }

    /// Interpret a raw response body. A blank body means "no profile".
    pub fn from_slice(body: &[u8]) -> Result<Option<Self>, ProfileDecodeError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ProfileDecodeError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// The record exactly as received.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// The record as indented JSON.
    pub fn to_pretty_json(&self) -> String {
        // A Map<String, Value> always serializes.
        serde_json::to_string_pretty(&self.raw).unwrap_or_default()
    }

    /// Backend id: `_id`, falling back to `id`.
    pub fn id(&self) -> Option<&str> {
        self.fields
            .mongo_id
            .as_deref()
            .or(self.fields.id.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.email.as_deref()
    }

    /// Student registration number.
    pub fn registration_number(&self) -> Option<&str> {
        non_empty(self.fields.reg_no.as_deref())
    }

    /// Staff identifier.
    pub fn staff_id(&self) -> Option<&str> {
        non_empty(self.fields.teacher_id.as_deref())
    }

    pub fn role(&self) -> Option<&Role> {
        self.fields.role.as_ref()
    }

    /// Every role tag the account holds.
    pub fn roles(&self) -> &[Role] {
        &self.fields.roles
    }

    /// Whether the account holds more than one role.
    pub fn has_multiple_roles(&self) -> bool {
        self.fields.roles.len() > 1
    }

    pub fn school(&self) -> Option<&Affiliation> {
        self.fields.school.as_ref()
    }

    pub fn department(&self) -> Option<&Affiliation> {
        self.fields.department.as_ref()
    }

    /// Number of assigned courses.
    pub fn course_count(&self) -> usize {
        self.fields.courses_assigned.len()
    }

    pub fn created_at(&self) -> Option<&str> {
        self.fields.created_at.as_deref()
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.fields.updated_at.as_deref()
    }

    /// Creation date for display.
    pub fn created_date(&self) -> String {
        display_date(self.created_at())
    }

    /// Last-update date for display.
    pub fn updated_date(&self) -> String {
        display_date(self.updated_at())
    }
}

impl Serialize for UserProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_object(raw))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an RFC 3339 timestamp or epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Format a timestamp as a calendar date, e.g. `Mar 4, 2024`.
///
/// Unparseable values are shown as received; absent ones as `Unknown`.
pub fn display_date(raw: Option<&str>) -> String {
    match raw {
        None => "Unknown".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "_id": "65f0c0ffee",
            "name": "Jane Doe",
            "email": "jane@campus.edu",
            "role": "teacher",
            "roles": ["teacher", "cc"],
            "teacherId": "T-042",
            "school": {"name": "School of Engineering", "code": "SOE"},
            "department": {"name": "Computer Science", "code": "CSE"},
            "coursesAssigned": ["c1", "c2", "c3"],
            "createdAt": "2024-03-04T10:00:00.000Z",
            "updatedAt": "2024-06-01T08:30:00.000Z",
            "preferences": {"theme": "dark", "notifications": [1, 2]},
            "__v": 0
        })
    }

    fn profile(value: Value) -> UserProfile {
        UserProfile::from_value(value).unwrap().unwrap()
    }

    #[test]
    fn test_typed_fields() {
        let p = profile(sample());
        assert_eq!(p.id(), Some("65f0c0ffee"));
        assert_eq!(p.name(), Some("Jane Doe"));
        assert_eq!(p.email(), Some("jane@campus.edu"));
        assert_eq!(p.role(), Some(&Role::Teacher));
        assert_eq!(p.roles(), &[Role::Teacher, Role::CourseCoordinator]);
        assert!(p.has_multiple_roles());
        assert_eq!(p.staff_id(), Some("T-042"));
        assert_eq!(p.registration_number(), None);
        assert_eq!(p.course_count(), 3);
        assert_eq!(p.school().unwrap().display(), "School of Engineering (SOE)");
        assert_eq!(p.department().unwrap().display(), "Computer Science (CSE)");
    }

    #[test]
    fn test_minimal_object_is_valid() {
        let p = profile(json!({}));
        assert_eq!(p.name(), None);
        assert_eq!(p.role(), None);
        assert!(p.roles().is_empty());
        assert!(!p.has_multiple_roles());
        assert_eq!(p.course_count(), 0);
        assert_eq!(p.created_date(), "Unknown");
    }

    #[test]
    fn test_falsy_payloads_are_empty() {
        for value in [json!(null), json!(false), json!(0), json!("")] {
            assert_eq!(UserProfile::from_value(value).unwrap(), None);
        }
        assert_eq!(UserProfile::from_slice(b"").unwrap(), None);
        assert_eq!(UserProfile::from_slice(b"  \n").unwrap(), None);
        assert_eq!(UserProfile::from_slice(b"null").unwrap(), None);
    }

    #[test]
    fn test_non_object_payloads_are_rejected() {
        assert_eq!(
            UserProfile::from_value(json!([1, 2])).unwrap_err(),
            ProfileDecodeError::NotAnObject("an array")
        );
        assert_eq!(
            UserProfile::from_value(json!("jane")).unwrap_err(),
            ProfileDecodeError::NotAnObject("a string")
        );
        assert!(matches!(
            UserProfile::from_slice(b"<html>"),
            Err(ProfileDecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_mismatched_shapes_do_not_fail_the_profile() {
        let p = profile(json!({
            "name": 42,
            "role": {"unexpected": true},
            "roles": ["student", 7, null, "dean"],
            "school": "64aa00school",
            "department": null,
            "coursesAssigned": "none",
            "createdAt": 1709546400000i64
        }));
        assert_eq!(p.name(), Some("42"));
        assert_eq!(p.role(), None);
        assert_eq!(p.roles(), &[Role::Student, Role::Dean]);
        assert_eq!(
            p.school(),
            Some(&Affiliation::Reference("64aa00school".to_string()))
        );
        assert_eq!(p.department(), None);
        assert_eq!(p.course_count(), 0);
        assert_eq!(p.created_date(), "Mar 4, 2024");
    }

    #[test]
    fn test_id_falls_back_to_plain_id() {
        let p = profile(json!({"id": "abc"}));
        assert_eq!(p.id(), Some("abc"));
        let both = profile(json!({"_id": "mongo", "id": "plain"}));
        assert_eq!(both.id(), Some("mongo"));
    }

    #[test]
    fn test_blank_identifiers_are_hidden() {
        let p = profile(json!({"regNo": "  ", "teacherId": ""}));
        assert_eq!(p.registration_number(), None);
        assert_eq!(p.staff_id(), None);
    }

    #[test]
    fn test_affiliation_display_variants() {
        let name_only = Affiliation::Populated {
            name: Some("Law".to_string()),
            code: None,
        };
        let code_only = Affiliation::Populated {
            name: None,
            code: Some("LAW".to_string()),
        };
        let neither = Affiliation::Populated {
            name: None,
            code: None,
        };
        assert_eq!(name_only.display(), "Law");
        assert_eq!(code_only.display(), "LAW");
        assert_eq!(neither.display(), "-");
    }

    #[test]
    fn test_serialization_is_the_original_object() {
        let original = sample();
        let p = profile(original.clone());
        let reserialized: Value = serde_json::to_value(&p).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_pretty_json_keeps_every_key_in_order() {
        let p = profile(sample());
        let dump = p.to_pretty_json();
        let mut last = 0;
        for key in sample().as_object().unwrap().keys() {
            let needle = format!("\"{}\":", key);
            let at = dump.find(&needle).unwrap_or_else(|| panic!("missing {}", key));
            assert!(at >= last, "key {} out of order", key);
            last = at;
        }
        assert!(dump.contains("\"theme\": \"dark\""));
    }

    #[test]
    fn test_deserialize_impl() {
        let p: UserProfile = serde_json::from_value(sample()).unwrap();
        assert_eq!(p.name(), Some("Jane Doe"));
    }

    #[test]
    fn test_display_date_fallbacks() {
        assert_eq!(display_date(Some("2024-06-01T08:30:00.000Z")), "Jun 1, 2024");
        assert_eq!(display_date(Some("yesterday")), "yesterday");
        assert_eq!(display_date(None), "Unknown");
    }
}
