use campus_events_backend::{AppError, EventHub};
use campus_events_catalog::{Catalog, Event, EventFilter, RecommendationTable};
use campus_events_config::Config;
use campus_events_registration::{ErrorKind, RegistrationMode};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn kind(result: Result<impl core::fmt::Debug, AppError>) -> ErrorKind {
    match result {
        Err(AppError::Registration(error)) => error.kind(),
        other => panic!("expected a registration error, got {other:?}"),
    }
}

fn last_seat_hub() -> Result<EventHub, AppError> {
    let events = vec![
        Event::new("seminar", "Last Seat Seminar", date(2030, 3, 1), 100).with_spots_remaining(1),
        Event::new("talk", "Streamed Talk", date(2030, 3, 2), 10)
            .with_spots_remaining(0)
            .with_livestream(true),
    ];
    let catalog = Catalog::new(events, RecommendationTable::new())?;
    EventHub::with_catalog(Config::default(), catalog)
}

#[test]
fn last_seat_goes_to_first_student() -> Result<(), AppError> {
    let mut hub = last_seat_hub()?;
    let alice = hub.login("alice.smith@lau.edu", "secret")?;
    let bob = hub.login("bob@lau.edu", "secret")?;

    hub.register(&alice, "seminar", RegistrationMode::InPerson)?;
    assert_eq!(hub.event("seminar")?.spots_remaining(), 0);

    assert_eq!(
        kind(hub.register(&bob, "seminar", RegistrationMode::InPerson)),
        ErrorKind::Full
    );
    assert_eq!(
        kind(hub.register(&alice, "seminar", RegistrationMode::InPerson)),
        ErrorKind::Conflict
    );
    assert_eq!(hub.event("seminar")?.spots_remaining(), 0);

    let registrations = hub.current_user(&alice).map(|user| user.registrations().len());
    assert_eq!(registrations, Some(1));
    let registrations = hub.current_user(&bob).map(|user| user.registrations().len());
    assert_eq!(registrations, Some(0));
    Ok(())
}

#[test]
fn livestream_ignores_capacity() -> Result<(), AppError> {
    let mut hub = last_seat_hub()?;
    let token = hub.login("carol@lau.edu", "secret")?;

    assert_eq!(
        kind(hub.register(&token, "talk", RegistrationMode::InPerson)),
        ErrorKind::Full
    );
    let registration = hub.register(&token, "talk", RegistrationMode::Livestream)?;
    assert_eq!(
        registration.confirmation_message(),
        "Successfully registered for livestream"
    );
    assert_eq!(hub.event("talk")?.spots_remaining(), 0);
    Ok(())
}

#[test]
fn livestream_needs_stream() -> Result<(), AppError> {
    let mut hub = last_seat_hub()?;
    let token = hub.login("dave@lau.edu", "secret")?;

    assert_eq!(
        kind(hub.register(&token, "seminar", RegistrationMode::Livestream)),
        ErrorKind::Unsupported
    );
    assert_eq!(hub.event("seminar")?.spots_remaining(), 1);
    assert!(hub
        .current_user(&token)
        .is_some_and(|user| user.registrations().is_empty()));
    Ok(())
}

#[test]
fn unknown_event_is_not_found() -> Result<(), AppError> {
    let mut hub = EventHub::new(Config::default())?;
    let token = hub.login("erin@lau.edu", "secret")?;
    assert_eq!(
        kind(hub.register(&token, "42", RegistrationMode::InPerson)),
        ErrorKind::NotFound
    );
    Ok(())
}

#[test]
fn registering_needs_a_session() -> Result<(), AppError> {
    let mut hub = EventHub::new(Config::default())?;
    let token = hub.login("frank@lau.edu", "secret")?;
    assert!(hub.logout(&token));

    let result = hub.register(&token, "2", RegistrationMode::InPerson);
    assert!(matches!(result, Err(AppError::NotLoggedIn)));
    assert_eq!(hub.event("2")?.spots_remaining(), 25);
    Ok(())
}

#[test]
fn login_checks_university_domain() -> Result<(), AppError> {
    let mut hub = EventHub::new(Config::default())?;
    let error = hub.login("grace@gmail.com", "secret").err();
    assert_eq!(
        error.map(|error| error.to_string()),
        Some("Please use your university email (@lau.edu)".to_owned())
    );
    assert!(matches!(
        hub.login("", "secret"),
        Err(AppError::Auth(_))
    ));
    Ok(())
}

#[test]
fn browsing_the_sample_catalog() -> Result<(), AppError> {
    let hub = EventHub::new(Config::default())?;

    assert_eq!(hub.browse(&EventFilter::new()).len(), 6);

    let found = hub.browse(&EventFilter::new().query("WORKSHOP"));
    let titles: Vec<&str> = found.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, vec!["Creative Writing Workshop"]);

    let found = hub.browse(
        &EventFilter::new()
            .club("School of Engineering")
            .date(date(2023, 5, 25)),
    );
    assert_eq!(found.len(), 1);
    let found = hub.browse(
        &EventFilter::new()
            .club("School of Engineering")
            .date(date(2023, 5, 20)),
    );
    assert!(found.is_empty());

    assert_eq!(hub.clubs().len(), 6);
    assert!(hub.clubs().contains("Student Council"));
    Ok(())
}

#[test]
fn my_events_splits_at_today() -> Result<(), AppError> {
    let mut hub = EventHub::new(Config::default())?;
    let token = hub.login("heidi@lau.edu", "secret")?;
    hub.register(&token, "6", RegistrationMode::InPerson)?;
    hub.register(&token, "1", RegistrationMode::Livestream)?;

    let view = hub.my_events(&token, date(2023, 6, 1))?;
    let past: Vec<&str> = view.past.iter().map(|entry| entry.event.id.as_str()).collect();
    let upcoming: Vec<&str> = view
        .upcoming
        .iter()
        .map(|entry| entry.event.id.as_str())
        .collect();
    assert_eq!(past, vec!["1"]);
    assert_eq!(upcoming, vec!["6"]);
    assert_eq!(
        view.past[0].registration.registration_type,
        RegistrationMode::Livestream
    );
    Ok(())
}

#[test]
fn transcript_recommendations() -> Result<(), AppError> {
    let hub = EventHub::new(Config::default())?;
    let analysis = hub.analyze_transcript("CSC245 - Algorithms ... BUS205 - Ethics");
    assert_eq!(analysis.courses, vec!["CSC245", "BUS205"]);
    let ids: Vec<&str> = analysis
        .events
        .iter()
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    Ok(())
}

#[test]
fn configured_prefixes_drive_extraction() -> Result<(), AppError> {
    let config = Config {
        department_prefixes: vec!["CSC".to_owned()],
        ..Config::default()
    };
    let hub = EventHub::new(config)?;
    let analysis = hub.analyze_transcript("CSC245 BUS205");
    assert_eq!(analysis.courses, vec!["CSC245"]);
    Ok(())
}
