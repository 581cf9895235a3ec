use std::path::Path;

use campus_events_backend::telemetry::setup_logging;
use campus_events_backend::{AppError, EventHub};
use campus_events_catalog::{Event, EventFilter};
use campus_events_config::get_config;
use tracing::{error, info};

fn print_event(hub: &EventHub, event: &Event) {
    println!(
        "[{}] {} ({}, {})",
        event.id,
        event.title,
        event.formatted_date(),
        event.organizer
    );
    println!("    {}", hub.preview(event));
    let livestream = if event.has_livestream {
        ", livestream available"
    } else {
        ""
    };
    println!(
        "    {} of {} spots remaining{livestream}",
        event.spots_remaining(),
        event.capacity
    );
}

fn list_catalog(hub: &EventHub) {
    for event in hub.browse(&EventFilter::new()) {
        print_event(hub, event);
    }
}

fn recommend(hub: &EventHub, transcript: &Path) -> Result<(), AppError> {
    let text = std::fs::read_to_string(transcript)?;
    info!("analyzing transcript {}", transcript.display());
    let analysis = hub.analyze_transcript(&text);
    if analysis.courses.is_empty() {
        println!("No recognised courses in the transcript.");
        return Ok(());
    }
    println!("Courses: {}", analysis.courses.join(", "));
    if analysis.events.is_empty() {
        println!("No events match your courses yet.");
    }
    for event in analysis.events {
        print_event(hub, event);
    }
    Ok(())
}

fn run() -> Result<(), AppError> {
    let config = get_config()?;
    let hub = EventHub::new(config)?;
    std::env::args_os().nth(1).map_or_else(
        || {
            list_catalog(&hub);
            Ok(())
        },
        |transcript| recommend(&hub, Path::new(&transcript)),
    )
}

fn main() -> Result<(), AppError> {
    setup_logging();
    run().inspect_err(|error| error!("{error}"))
}
