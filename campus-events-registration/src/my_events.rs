use campus_events_catalog::{Catalog, Event};
use chrono::NaiveDate;

use crate::user::{Registration, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredEvent<'a> {
    pub event: &'a Event,
    pub registration: &'a Registration,
}

/// The events a user registered for, split at `today`. Events happening today count as upcoming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyEvents<'a> {
    pub upcoming: Vec<RegisteredEvent<'a>>,
    pub past: Vec<RegisteredEvent<'a>>,
}

impl MyEvents<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}

/// Registrations for events that are no longer in the catalog are left out.
#[must_use]
pub fn my_events<'a>(user: &'a User, catalog: &'a Catalog, today: NaiveDate) -> MyEvents<'a> {
    let (upcoming, past): (Vec<_>, Vec<_>) = catalog
        .get_events(
            user.registrations()
                .iter()
                .map(|registration| registration.event_id.as_str()),
        )
        .into_iter()
        .filter_map(|event| {
            user.registration_for(event.id.as_str())
                .map(|registration| RegisteredEvent {
                    event,
                    registration,
                })
        })
        .partition(|registered| registered.event.date >= today);
    MyEvents { upcoming, past }
}
