use alloc::borrow::Cow;
use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Free-form display string such as `09:00 AM - 5:00 PM`.
    pub time: String,
    pub location: String,
    /// Name of the organizing club or department.
    pub organizer: String,
    pub category: String,
    pub image: String,
    pub has_livestream: bool,
    // only the catalog may change this, see `Catalog::decrement_spots`
    spots_remaining: u32,
    pub capacity: u32,
}

impl Event {
    /// An event with every spot still available and no livestream.
    #[must_use]
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        date: NaiveDate,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            date,
            time: String::new(),
            location: String::new(),
            organizer: String::new(),
            category: String::new(),
            image: String::new(),
            has_livestream: false,
            spots_remaining: capacity,
            capacity,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = organizer.into();
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub const fn with_livestream(mut self, has_livestream: bool) -> Self {
        self.has_livestream = has_livestream;
        self
    }

    /// Checked against the capacity when the event is added to a catalog.
    #[must_use]
    pub const fn with_spots_remaining(mut self, spots_remaining: u32) -> Self {
        self.spots_remaining = spots_remaining;
        self
    }

    #[must_use]
    pub const fn spots_remaining(&self) -> u32 {
        self.spots_remaining
    }

    #[must_use]
    pub const fn spots_taken(&self) -> u32 {
        self.capacity.saturating_sub(self.spots_remaining)
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.spots_remaining == 0
    }

    pub(crate) fn take_spot(&mut self) -> Option<u32> {
        self.spots_remaining = self.spots_remaining.checked_sub(1)?;
        Some(self.spots_remaining)
    }

    /// The date as shown to users, e.g. `May 15, 2023`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// The description cut down to `max_len` characters, with `...` appended if anything was cut.
    #[must_use]
    pub fn summary(&self, max_len: usize) -> Cow<'_, str> {
        self.description
            .char_indices()
            .nth(max_len)
            .map_or(Cow::Borrowed(self.description.as_str()), |(end, _)| {
                Cow::Owned(format!("{}...", &self.description[..end]))
            })
    }
}

/// Course code (e.g. `CSC245`) to the events recommended to students who took it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationTable(BTreeMap<String, BTreeSet<EventId>>);

impl RecommendationTable {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert<I>(&mut self, course: impl Into<String>, event_ids: I)
    where
        I: IntoIterator,
        I::Item: Into<EventId>,
    {
        self.0
            .entry(course.into())
            .or_default()
            .extend(event_ids.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn event_ids(&self, course: &str) -> Option<&BTreeSet<EventId>> {
        self.0.get(course)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<EventId>)> {
        self.0.iter().map(|(course, ids)| (course.as_str(), ids))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `CSC245`: three uppercase letters followed by three digits.
#[must_use]
pub fn is_course_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 6
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// On-disk shape of a catalog, using the same field names as the web frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub events: Vec<Event>,
    #[serde(default)]
    pub course_recommendations: RecommendationTable,
}
