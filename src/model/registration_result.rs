//! RegistrationResult
//!
//! The response of the registration API, shown in the confirmation panel.
use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserializer;
use serde_json::Value;

/// The message from the API, either a single line or a list of lines.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Message {
    fn default() -> Self {
        Message::Text("".to_string())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Message::Text(s) => write!(f, "{}", s),
            Message::Lines(lines) => write!(f, "{}", lines.join("\n")),
        }
    }
}

/// CreatedUser
///
/// Every field is only displayed, so values of an unexpected shape decode to
/// their defaults instead of failing the whole response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatedUser {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub challenge_mode: String,
    #[serde(deserialize_with = "lenient_string")]
    pub challenge_formula: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_verified: bool,
    #[serde(deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de> {
    Ok(match <Value as serde::Deserialize>::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where D: Deserializer<'de> {
    Ok(match <Value as serde::Deserialize>::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s == "true",
        _ => false,
    })
}

/// Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS` (as UTC), anything else is None.
fn lenient_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where D: Deserializer<'de> {
    let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
    let s = match value.as_str() {
        Some(s) => s.trim(),
        None => return Ok(None),
    };
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(t.with_timezone(&Utc)));
    }
    Ok(NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|t| Utc.from_utc_datetime(&t)))
}

impl fmt::Display for CreatedUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<CreatedUser {id}>", id = &self.id)
    }
}

impl CreatedUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// RegistrationResult
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RegistrationResult {
    pub user: CreatedUser,
    #[serde(default)]
    pub message: Message,
}
