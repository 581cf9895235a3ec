use campus_events_catalog::{Catalog, EventId};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::RegistrationError;
use crate::user::{Registration, RegistrationMode, User};

/// Registers `user` for the event, timestamped with the current time.
pub fn register(
    catalog: &mut Catalog,
    user: &mut User,
    event_id: &str,
    mode: RegistrationMode,
) -> Result<Registration, RegistrationError> {
    register_at(catalog, user, event_id, mode, Utc::now())
}

/// Registers `user` for the event.
///
/// Checks happen in this order: the event has to exist, the user must not be registered for it
/// yet (in any mode), a livestream registration needs an event with a livestream and an
/// in-person registration needs a free spot. Nothing is changed unless all checks pass; then an
/// in-person registration takes one spot and the registration is appended to the user.
#[tracing::instrument(skip(catalog, user), fields(user = %user.id))]
pub fn register_at(
    catalog: &mut Catalog,
    user: &mut User,
    event_id: &str,
    mode: RegistrationMode,
    registered_on: DateTime<Utc>,
) -> Result<Registration, RegistrationError> {
    let event_id = check(catalog, user, event_id, mode)
        .inspect_err(|error| debug!("registration refused: {error}"))?;

    if mode == RegistrationMode::InPerson {
        let spots_remaining = catalog.decrement_spots(event_id.as_str())?;
        debug!(spots_remaining, "took a spot");
    }

    let registration = Registration::new(event_id, mode, registered_on);
    user.push_registration(registration.clone());
    info!(event = %registration.event_id, %mode, "registered");
    Ok(registration)
}

fn check(
    catalog: &Catalog,
    user: &User,
    event_id: &str,
    mode: RegistrationMode,
) -> Result<EventId, RegistrationError> {
    let event = catalog
        .get_event(event_id)
        .ok_or_else(|| RegistrationError::EventNotFound(EventId::from(event_id)))?;
    if user.is_registered(event.id.as_str()) {
        return Err(RegistrationError::AlreadyRegistered(event.id.clone()));
    }
    match mode {
        RegistrationMode::Livestream if !event.has_livestream => {
            Err(RegistrationError::LivestreamUnavailable(event.id.clone()))
        }
        RegistrationMode::InPerson if event.is_full() => {
            Err(RegistrationError::EventFull(event.id.clone()))
        }
        RegistrationMode::Livestream | RegistrationMode::InPerson => Ok(event.id.clone()),
    }
}
