//! Value types exchanged with the PetFriends service.
//!
//! The service is consumed as a black box: responses are kept raw in
//! [`ApiResponse`] and only decoded into typed records on request.

use crate::error::PetError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Email/password pair used to obtain an [`AuthKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Opaque key issued by `GET /api/key`.
///
/// The key is never inspected locally. Tests overwrite it with garbage to
/// exercise rejection paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthKey {
    key: String,
}

impl AuthKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }
}

/// Selects which pets `GET /api/pets` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PetFilter {
    #[default]
    All,
    MyPets,
}

impl PetFilter {
    /// Value of the `filter` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    /// Data URI of the photo, empty when the pet has none.
    #[serde(default)]
    pub pet_photo: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

/// Pet fields as sent in form-encoded bodies.
#[derive(Debug, Serialize)]
pub(crate) struct PetFields<'a> {
    pub name: &'a str,
    pub animal_type: &'a str,
    pub age: &'a str,
}

// The service reports age as "3" on some endpoints and 3 on others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for age, got {}",
            other
        ))),
    }
}

/// Response payload: JSON when it parses, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }

    /// Membership test: object keys for a JSON object, substring otherwise.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            ResponseBody::Json(Value::Object(map)) => map.contains_key(needle),
            ResponseBody::Json(other) => other.to_string().contains(needle),
            ResponseBody::Text(text) => text.contains(needle),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

/// Raw `(status, body)` pair returned by every client call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, PetError> {
        match &self.body {
            ResponseBody::Json(value) => {
                T::deserialize(value).map_err(|e| PetError::unexpected_body(e.to_string()))
            }
            ResponseBody::Text(text) => Err(PetError::unexpected_body(format!(
                "status {} with non-JSON body: {}",
                self.status,
                truncate(text, 200)
            ))),
        }
    }

    pub fn auth_key(&self) -> Result<AuthKey, PetError> {
        self.json()
    }

    pub fn pets(&self) -> Result<Vec<Pet>, PetError> {
        self.json::<PetList>().map(|list| list.pets)
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
