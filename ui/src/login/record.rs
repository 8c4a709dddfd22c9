// Identity records returned by the backend, validated right after parsing
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::LoginMode;
use crate::services::client::LoginError;

/// Conference every registered user belongs to
pub const DEFAULT_CONFERENCE_NAME: &str = "Aviation Tech Summit 2025";

/// Airline customer looked up by account number
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub name: String,
    pub account_number: String,
    /// Remaining columns (email, conference flags, ...), passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Conference user looked up by registration ID
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Registration form contents; the shape varies per conference
    pub details: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IdentityRecord {
    Customer(CustomerRecord),
    User(UserRecord),
}

/// What the portal shows about a signed-in visitor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentitySummary {
    pub display_name: String,
    pub email: Option<String>,
    pub conference_attendee: bool,
    pub conference_name: Option<String>,
}

/// Truthiness of a JSON field as the backend's consumers have always judged it:
/// missing, null, false, 0 and "" are falsy, everything else is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Non-empty string value, if the field holds one
fn text_value(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn required_fields(mode: LoginMode) -> &'static [&'static str] {
    match mode {
        LoginMode::Customer => &["name", "account_number"],
        LoginMode::User => &["details"],
    }
}

impl IdentityRecord {
    /// Check the mode's required fields and convert the body into a typed record
    pub fn from_response(mode: LoginMode, body: Value) -> Result<Self, LoginError> {
        let object = body.as_object().ok_or_else(|| LoginError::InvalidData {
            reason: "response body is not an object".to_string(),
        })?;

        let missing: Vec<&str> = required_fields(mode)
            .iter()
            .copied()
            .filter(|field| !is_truthy(object.get(*field)))
            .collect();
        if !missing.is_empty() {
            return Err(LoginError::InvalidData {
                reason: format!("missing or empty fields: {}", missing.join(", ")),
            });
        }

        let invalid = |e: serde_json::Error| LoginError::InvalidData {
            reason: e.to_string(),
        };
        match mode {
            LoginMode::Customer => serde_json::from_value(body)
                .map(IdentityRecord::Customer)
                .map_err(invalid),
            LoginMode::User => serde_json::from_value(body)
                .map(IdentityRecord::User)
                .map_err(invalid),
        }
    }

    pub fn mode(&self) -> LoginMode {
        match self {
            IdentityRecord::Customer(_) => LoginMode::Customer,
            IdentityRecord::User(_) => LoginMode::User,
        }
    }

    pub fn summary(&self) -> IdentitySummary {
        match self {
            IdentityRecord::Customer(customer) => {
                let extra = &customer.extra;
                IdentitySummary {
                    display_name: customer.name.clone(),
                    email: text_value(extra.get("email")),
                    conference_attendee: extra
                        .get("is_conference_attendee")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                    conference_name: text_value(extra.get("conference_name")),
                }
            }
            IdentityRecord::User(user) => {
                let details = &user.details;
                let text = |key: &str| text_value(details.get(key));

                let display_name = text("user_name").unwrap_or_else(|| {
                    format!(
                        "{} {}",
                        text("firstName").unwrap_or_default(),
                        text("lastName").unwrap_or_default()
                    )
                    .trim()
                    .to_string()
                });

                IdentitySummary {
                    display_name,
                    email: text("registered_email").or_else(|| text("email")),
                    conference_attendee: true,
                    conference_name: Some(DEFAULT_CONFERENCE_NAME.to_string()),
                }
            }
        }
    }
}
