//! Push notification message forwarded to the messaging provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::errors::{Collaborator, DomainError, NotificationError};

/// Message returned when a required field is absent
pub const REQUIRED_FIELDS_MESSAGE: &str = "token, title, body required";

/// Relay request as received from the client.
///
/// Every field is optional at this stage; [`PushMessage::try_from`] enforces
/// which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub token: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Free-form key/value payload delivered alongside the notification
    pub data: Option<Value>,
}

/// A validated notification ready for the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Registration token of the target device
    pub token: String,
    pub title: String,
    pub body: String,
    /// Data payload; the provider only accepts string values
    pub data: HashMap<String, String>,
}

impl PushMessage {
    pub fn new(
        token: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            title: title.into(),
            body: body.into(),
            data: HashMap::new(),
        }
    }

    pub fn with_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = data;
        self
    }
}

/// Provider-side rejection of a `data` payload that is not an object
pub const DATA_NOT_OBJECT_MESSAGE: &str = "data must be a non-null object";

/// Provider-side rejection of a `data` object with non-string values
pub const DATA_NOT_STRINGS_MESSAGE: &str = "data must only contain string values";

/// JSON values a client may send to mean "no data"
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) | Value::Bool(true) => false,
    }
}

impl TryFrom<NotificationRequest> for PushMessage {
    type Error = DomainError;

    /// Missing `token`, `title` or `body` is a client error. A `data` payload
    /// the provider cannot carry fails the same way a provider rejection
    /// would.
    fn try_from(request: NotificationRequest) -> Result<Self, Self::Error> {
        // Absent, null and empty strings all count as missing
        let required = |value: Option<String>| value.filter(|v| !v.is_empty());

        let (token, title, body) = match (
            required(request.token),
            required(request.title),
            required(request.body),
        ) {
            (Some(token), Some(title), Some(body)) => (token, title, body),
            _ => {
                return Err(NotificationError::InvalidRequest {
                    message: REQUIRED_FIELDS_MESSAGE.to_string(),
                }
                .into())
            }
        };

        let data = match request.data {
            None => HashMap::new(),
            Some(value) if is_blank(&value) => HashMap::new(),
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(s) => Ok((key, s)),
                    _ => Err(DomainError::collaborator(
                        Collaborator::PushProvider,
                        DATA_NOT_STRINGS_MESSAGE,
                    )),
                })
                .collect::<Result<_, _>>()?,
            Some(_) => {
                return Err(DomainError::collaborator(
                    Collaborator::PushProvider,
                    DATA_NOT_OBJECT_MESSAGE,
                ))
            }
        };

        Ok(Self {
            token,
            title,
            body,
            data,
        })
    }
}
