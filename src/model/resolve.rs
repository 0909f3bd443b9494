// File: src/model/resolve.rs
//! Turns raw field text into classified, display-ready events against an
//! explicit "now" value. The wall clock is read once by the caller;
//! nothing in this module consults it.

use crate::model::display::EventDisplay;
use crate::model::item::{Agenda, Classification, Event, EventStart, ParseError};
use crate::model::parser::{self, EventFields};
use crate::model::recurrence::RecurrenceEngine;
use chrono::{Duration, NaiveDateTime};

/// Resolves one event: parses its start, advances recurring events to
/// their next occurrence, and buckets the result.
///
/// Recurrence expansion searches from one day before `now` so that an
/// occurrence earlier today is found again rather than skipped past. A
/// rule with no occurrence left is excluded, not an error.
pub fn resolve_event(
    fields: &EventFields,
    now: NaiveDateTime,
    grace: Duration,
) -> Result<(Classification, Event), ParseError> {
    let mut start = EventStart::parse(&fields.start)?;

    if let Some(rule) = &fields.rrule {
        let floor = now - Duration::days(1);
        match RecurrenceEngine::occurrence_on_or_after(rule, start.as_datetime(), floor)? {
            Some(occurrence) => start = start.with_occurrence(occurrence),
            None => {
                log::debug!("recurrence exhausted for {:?}", fields.summary);
                return Ok((Classification::Excluded, build_event(fields, start)));
            }
        }
    }

    let event = build_event(fields, start);
    Ok((classify(&event.start, now, grace), event))
}

fn build_event(fields: &EventFields, start: EventStart) -> Event {
    Event {
        start,
        summary: fields
            .summary
            .as_deref()
            .map(parser::unescape)
            .unwrap_or_default(),
        location: fields
            .location
            .as_deref()
            .map(parser::unescape)
            .unwrap_or_default(),
    }
}

/// Buckets an occurrence by calendar date. A timed event today drops out
/// once `now` reaches its start plus `grace`; all-day events hold the
/// whole day, and tomorrow has no cutoff at all.
fn classify(start: &EventStart, now: NaiveDateTime, grace: Duration) -> Classification {
    let today = now.date();
    let date = start.date();
    if date == today {
        match start {
            EventStart::Timed(at) if now >= *at + grace => Classification::Excluded,
            _ => Classification::Today,
        }
    } else if date == today + Duration::days(1) {
        Classification::Tomorrow
    } else {
        Classification::Excluded
    }
}

/// One full pass over a calendar document. Chunks without a start line
/// are skipped; the first parse error aborts the whole pass. Both
/// listings come back sorted, which is chronological order because every
/// line starts with either HH:MM or the all-day leading space.
pub fn build_agenda(
    document: &str,
    now: NaiveDateTime,
    grace: Duration,
) -> Result<Agenda, ParseError> {
    let mut agenda = Agenda::default();
    for chunk in parser::split_events(document) {
        let Some(fields) = parser::extract_fields(chunk) else {
            continue;
        };
        let (classification, event) = resolve_event(&fields, now, grace)?;
        match classification {
            Classification::Today => agenda.today.push(event.display_line()),
            Classification::Tomorrow => agenda.tomorrow.push(event.display_line()),
            Classification::Excluded => {}
        }
    }
    agenda.today.sort();
    agenda.tomorrow.sort();
    Ok(agenda)
}
