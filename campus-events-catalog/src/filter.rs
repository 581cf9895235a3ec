use chrono::NaiveDate;

use crate::models::Event;

/// Criteria for browsing the catalog. Every criterion that is set has to match; unset or empty
/// criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    query: Option<String>,
    date: Option<NaiveDate>,
    club: Option<String>,
}

impl EventFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring of the title or the description.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into()).filter(|query| !query.is_empty());
        self
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Exact name of the organizer.
    #[must_use]
    pub fn club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into()).filter(|club| !club.is_empty());
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.query.is_none() && self.date.is_none() && self.club.is_none()
    }

    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        let text_match = self.query.as_deref().is_none_or(|query| {
            let query = query.to_lowercase();
            event.title.to_lowercase().contains(&query)
                || event.description.to_lowercase().contains(&query)
        });
        let date_match = self.date.is_none_or(|date| event.date == date);
        let club_match = self
            .club
            .as_deref()
            .is_none_or(|club| event.organizer == club);
        text_match && date_match && club_match
    }
}
