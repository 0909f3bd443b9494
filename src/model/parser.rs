// File: src/model/parser.rs
//! Line-level extraction of the fields the agenda cares about. Everything
//! here works on raw text; dates and rules are interpreted downstream.

/// Marker line that opens an event record. It is used purely as a split
/// token, so a truncated final record still comes through as a chunk.
pub const EVENT_DELIMITER: &str = "BEGIN:VEVENT";

/// One event's raw field values, exactly as written in the source text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EventFields {
    pub start: String,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub rrule: Option<String>,
}

/// Splits a calendar document into per-event chunks. The first chunk is
/// the prologue before the first event; it carries no DTSTART line and
/// drops out in `extract_fields`.
pub fn split_events(document: &str) -> impl Iterator<Item = &str> {
    document.split(EVENT_DELIMITER)
}

/// Pulls the raw fields out of one chunk. `None` means the chunk has no
/// start line at all and is skipped rather than treated as an error.
pub fn extract_fields(chunk: &str) -> Option<EventFields> {
    let start = field_value(chunk, "DTSTART")?.to_string();
    Some(EventFields {
        start,
        summary: field_value(chunk, "SUMMARY").map(str::to_string),
        location: field_value(chunk, "LOCATION").map(str::to_string),
        rrule: rule_value(chunk).map(str::to_string),
    })
}

/// Value of the first line starting with `name` that carries a `:`
/// delimiter, trimmed. Parameter clauses (`DTSTART;TZID=...:value`) sit
/// before the first colon and are discarded with the name.
fn field_value<'a>(chunk: &'a str, name: &str) -> Option<&'a str> {
    chunk.lines().find_map(|line| {
        if !line.starts_with(name) {
            return None;
        }
        let (_, value) = line.split_once(':')?;
        Some(value.trim())
    })
}

/// The recurrence rule of a chunk: the remainder of the first line carrying
/// the fixed six-character `RRULE:` prefix. Unlike the named fields above,
/// parameterized variants are not recognized here.
fn rule_value(chunk: &str) -> Option<&str> {
    chunk.lines().find_map(|line| line.strip_prefix("RRULE:"))
}

/// Unescapes iCalendar text for display. The replacement order is
/// load-bearing: literal backslashes must be resolved last, otherwise a
/// `\\n` sequence would collapse into a bare newline.
pub fn unescape(text: &str) -> String {
    text.replace("\\N", "\n")
        .replace("\r\n", "\n")
        .replace("\\n", "\n")
        .replace("\\,", ",")
        .replace("\\;", ";")
        .replace("\\\\", "\\")
}
