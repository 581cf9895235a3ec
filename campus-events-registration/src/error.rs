use campus_events_catalog::{EventId, SpotError};
use thiserror::Error;

/// Why a registration was refused. The messages can be shown to the user as they are.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Event not found")]
    EventNotFound(EventId),
    #[error("You are already registered for this event")]
    AlreadyRegistered(EventId),
    #[error("This event does not have a livestream option")]
    LivestreamUnavailable(EventId),
    #[error("No spots remaining for this event")]
    EventFull(EventId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Unsupported,
    Full,
}

impl RegistrationError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EventNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyRegistered(_) => ErrorKind::Conflict,
            Self::LivestreamUnavailable(_) => ErrorKind::Unsupported,
            Self::EventFull(_) => ErrorKind::Full,
        }
    }

    #[must_use]
    pub const fn event_id(&self) -> &EventId {
        match self {
            Self::EventNotFound(event_id)
            | Self::AlreadyRegistered(event_id)
            | Self::LivestreamUnavailable(event_id)
            | Self::EventFull(event_id) => event_id,
        }
    }
}

impl From<SpotError> for RegistrationError {
    fn from(value: SpotError) -> Self {
        match value {
            SpotError::NotFound(event_id) => Self::EventNotFound(event_id),
            SpotError::AlreadyFull(event_id) => Self::EventFull(event_id),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please use your university email (@{domain})")]
    WrongDomain { domain: String },
}
