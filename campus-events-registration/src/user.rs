use core::fmt;

use campus_events_catalog::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationMode {
    InPerson,
    /// Does not take one of the event's spots.
    Livestream,
}

impl RegistrationMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InPerson => "in-person",
            Self::Livestream => "livestream",
        }
    }
}

impl fmt::Display for RegistrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: EventId,
    pub registration_type: RegistrationMode,
    pub registered_on: DateTime<Utc>,
}

impl Registration {
    #[must_use]
    pub const fn new(
        event_id: EventId,
        registration_type: RegistrationMode,
        registered_on: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            registration_type,
            registered_on,
        }
    }

    #[must_use]
    pub const fn confirmation_message(&self) -> &'static str {
        match self.registration_type {
            RegistrationMode::InPerson => "Successfully registered for in-person attendance",
            RegistrationMode::Livestream => "Successfully registered for livestream",
        }
    }
}

/// A logged in user and the events they registered for, oldest registration first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(rename = "registeredEvents", default)]
    registrations: Vec<Registration>,
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<UserId>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            registrations: Vec::new(),
        }
    }

    #[must_use]
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    #[must_use]
    pub fn registration_for(&self, event_id: &str) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|registration| registration.event_id.as_str() == event_id)
    }

    #[must_use]
    pub fn is_registered(&self, event_id: &str) -> bool {
        self.registration_for(event_id).is_some()
    }

    // callers have checked that there is no registration for this event yet
    pub(crate) fn push_registration(&mut self, registration: Registration) {
        debug_assert!(!self.is_registered(registration.event_id.as_str()));
        self.registrations.push(registration);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
