extern crate alloc;

pub mod error;
pub mod filter;
pub mod models;

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

pub use error::{CatalogError, SpotError};
pub use filter::EventFilter;
pub use models::{is_course_code, CatalogDocument, Event, EventId, RecommendationTable};
use tracing::{debug, info};

const SAMPLE_CATALOG: &str = include_str!("../data/sample-catalog.json");

/// The events that can be registered for and their remaining capacity.
///
/// Events keep the order they were added in; every query returns them in that order. The only
/// mutation after construction is [`Catalog::decrement_spots`].
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
    recommendations: RecommendationTable,
}

impl Catalog {
    pub fn new(
        events: Vec<Event>,
        recommendations: RecommendationTable,
    ) -> Result<Self, CatalogError> {
        validate(&events, &recommendations)?;
        Ok(Self {
            events,
            recommendations,
        })
    }

    /// The six sample events of the university demo and their course recommendations.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::new(document.events, document.course_recommendations)?;
        debug!(
            events = catalog.events.len(),
            courses = catalog.recommendations.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;
        info!("loading catalog from {}", path.display());
        Self::from_json(&json)
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub const fn recommendations(&self) -> &RecommendationTable {
        &self.recommendations
    }

    #[must_use]
    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id.as_str() == id)
    }

    /// The events with one of the given ids, in catalog order. Unknown ids are skipped.
    pub fn get_events<I>(&self, ids: I) -> Vec<&Event>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let ids: HashSet<String> = ids
            .into_iter()
            .map(|id| id.as_ref().to_owned())
            .collect();
        self.events
            .iter()
            .filter(|event| ids.contains(event.id.as_str()))
            .collect()
    }

    #[must_use]
    pub fn filter(&self, filter: &EventFilter) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| filter.matches(event))
            .collect()
    }

    #[must_use]
    pub fn list_organizers(&self) -> BTreeSet<&str> {
        self.events
            .iter()
            .map(|event| event.organizer.as_str())
            .collect()
    }

    /// Takes one spot of the event and returns how many are left.
    pub fn decrement_spots(&mut self, id: &str) -> Result<u32, SpotError> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id.as_str() == id)
            .ok_or_else(|| SpotError::NotFound(EventId::from(id)))?;
        event
            .take_spot()
            .ok_or_else(|| SpotError::AlreadyFull(event.id.clone()))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn validate(events: &[Event], recommendations: &RecommendationTable) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for event in events {
        if !seen.insert(event.id.as_str()) {
            return Err(CatalogError::DuplicateEvent(event.id.clone()));
        }
        if event.spots_remaining() > event.capacity {
            return Err(CatalogError::SpotsExceedCapacity {
                id: event.id.clone(),
                spots_remaining: event.spots_remaining(),
                capacity: event.capacity,
            });
        }
    }
    for (course, event_ids) in recommendations.iter() {
        if !is_course_code(course) {
            return Err(CatalogError::InvalidCourseCode(course.to_owned()));
        }
        if let Some(event_id) = event_ids
            .iter()
            .find(|event_id| !seen.contains(event_id.as_str()))
        {
            return Err(CatalogError::UnknownRecommendedEvent {
                course: course.to_owned(),
                event_id: event_id.clone(),
            });
        }
    }
    Ok(())
}
