pub mod error;
pub mod telemetry;

use std::borrow::Cow;
use std::collections::BTreeSet;

use campus_events_catalog::{Catalog, CatalogError, Event, EventFilter};
use campus_events_config::Config;
use campus_events_registration::{
    my_events, register, MyEvents, Registration, RegistrationMode, SessionStore, SessionToken,
    User,
};
use campus_events_transcript::{TranscriptAnalysis, TranscriptMatcher};
use chrono::NaiveDate;
use tracing::info;

pub use crate::error::AppError;

/// Everything the event site works with: the catalog, the logged in users and the transcript
/// matcher built from the configuration.
#[derive(Debug)]
pub struct EventHub {
    config: Config,
    catalog: Catalog,
    sessions: SessionStore,
    matcher: TranscriptMatcher,
}

impl EventHub {
    /// Loads the catalog from `catalog_path`, or the sample catalog if none is configured.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::sample()?,
        };
        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Result<Self, AppError> {
        config.validate()?;
        let matcher = TranscriptMatcher::new(&config.department_prefixes)?;
        let sessions = SessionStore::new(config.email_domain.clone());
        info!(events = catalog.len(), "event hub ready");
        Ok(Self {
            config,
            catalog,
            sessions,
            matcher,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionToken, AppError> {
        Ok(self.sessions.login(email, password)?)
    }

    pub fn logout(&mut self, token: &SessionToken) -> bool {
        self.sessions.logout(token)
    }

    #[must_use]
    pub fn current_user(&self, token: &SessionToken) -> Option<&User> {
        self.sessions.user(token)
    }

    #[must_use]
    pub fn browse(&self, filter: &EventFilter) -> Vec<&Event> {
        self.catalog.filter(filter)
    }

    #[must_use]
    pub fn clubs(&self) -> BTreeSet<&str> {
        self.catalog.list_organizers()
    }

    pub fn event(&self, id: &str) -> Result<&Event, AppError> {
        self.catalog
            .get_event(id)
            .ok_or_else(|| CatalogError::NotFound(id.into()).into())
    }

    /// The description shortened to the configured preview length.
    #[must_use]
    pub fn preview<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        event.summary(self.config.description_preview_len)
    }

    pub fn register(
        &mut self,
        token: &SessionToken,
        event_id: &str,
        mode: RegistrationMode,
    ) -> Result<Registration, AppError> {
        let user = self
            .sessions
            .user_mut(token)
            .ok_or(AppError::NotLoggedIn)?;
        Ok(register(&mut self.catalog, user, event_id, mode)?)
    }

    pub fn my_events(
        &self,
        token: &SessionToken,
        today: NaiveDate,
    ) -> Result<MyEvents<'_>, AppError> {
        let user = self.sessions.user(token).ok_or(AppError::NotLoggedIn)?;
        Ok(my_events(user, &self.catalog, today))
    }

    #[must_use]
    pub fn analyze_transcript(&self, text: &str) -> TranscriptAnalysis<'_> {
        self.matcher.analyze(text, &self.catalog)
    }
}
