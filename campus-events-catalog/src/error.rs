use std::path::PathBuf;

use thiserror::Error;

use crate::models::EventId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Event not found")]
    NotFound(EventId),
    #[error("No spots remaining for this event")]
    AlreadyFull(EventId),
    #[error("event id {0} appears more than once in the catalog")]
    DuplicateEvent(EventId),
    #[error("event {id} has {spots_remaining} spots remaining but a capacity of only {capacity}")]
    SpotsExceedCapacity {
        id: EventId,
        spots_remaining: u32,
        capacity: u32,
    },
    #[error("{0:?} is not a course code (three uppercase letters followed by three digits)")]
    InvalidCourseCode(String),
    #[error("course {course} recommends event {event_id} which is not in the catalog")]
    UnknownRecommendedEvent { course: String, event_id: EventId },
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why [`crate::Catalog::decrement_spots`] could not take a spot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpotError {
    #[error("Event not found")]
    NotFound(EventId),
    #[error("No spots remaining for this event")]
    AlreadyFull(EventId),
}

impl From<SpotError> for CatalogError {
    fn from(value: SpotError) -> Self {
        match value {
            SpotError::NotFound(id) => Self::NotFound(id),
            SpotError::AlreadyFull(id) => Self::AlreadyFull(id),
        }
    }
}
