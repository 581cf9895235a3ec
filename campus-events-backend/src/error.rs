use campus_events_catalog::CatalogError;
use campus_events_config::ConfigError;
use campus_events_registration::{AuthError, RegistrationError};
use campus_events_transcript::TranscriptError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("transcript error: {0}")]
    Transcript(#[from] TranscriptError),
    #[error("IO error: {0}")]
    File(#[from] std::io::Error),
    #[error("You must be logged in to register for events")]
    NotLoggedIn,
}

impl AppError {
    /// Whether the message is meant for the user rather than the operator.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Registration(_)
                | Self::Auth(_)
                | Self::NotLoggedIn
                | Self::Catalog(CatalogError::NotFound(_) | CatalogError::AlreadyFull(_))
        )
    }
}
