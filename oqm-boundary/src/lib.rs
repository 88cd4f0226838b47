use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ServiceId = u64;
pub type TicketId = u64;
pub type OfficerId = u64;

/// A category of counter service a customer can request a ticket for.
///
/// Kept exactly as the server sent it.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(transparent)]
pub struct Service(pub Map<String, Value>);

impl Service {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }
}

/// A customer's place in a service queue:
/// identifier, service reference, issuance and queue metadata.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(transparent)]
pub struct Ticket(pub Map<String, Value>);

impl Ticket {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }
}

/// Ticket status plus waiting-queue details.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(transparent)]
pub struct NotificationsResponse(pub Map<String, Value>);

impl NotificationsResponse {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct NewTicket {
    #[serde(rename = "ServiceID")]
    pub service_id: ServiceId,
}

/// The error payload of the API: `{ "error": <message> }`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{error}"))]
#[serde(deny_unknown_fields)]
pub struct Error {
    pub error: String,
}

impl Error {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
