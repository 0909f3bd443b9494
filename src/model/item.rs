// File: ./src/model/item.rs
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors raised while turning raw field text into dated events.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported DTSTART length {len} in {value:?}")]
    StartLength { value: String, len: usize },
    #[error("invalid DTSTART value {value:?}: {source}")]
    StartFormat {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid RRULE {rule:?}: {source}")]
    Rule {
        rule: String,
        source: rrule::RRuleError,
    },
}

// --- DATE TYPES ---

/// A parsed DTSTART. The wire format's all-day flavor is the variant.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EventStart {
    AllDay(NaiveDate),
    Timed(NaiveDateTime),
}

impl EventStart {
    /// Parses a raw DTSTART value. The value's length picks the format:
    /// 8 is a bare date (all-day), 15 a local date-time, 16 a date-time
    /// with a trailing Z. The Z form is read with a literal `Z` in the
    /// format string and kept as naive local time; no offset conversion
    /// happens anywhere in the pipeline.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let format_err = |source| ParseError::StartFormat {
            value: value.to_string(),
            source,
        };
        match value.len() {
            8 => NaiveDate::parse_from_str(value, "%Y%m%d")
                .map(Self::AllDay)
                .map_err(format_err),
            15 => NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S")
                .map(Self::Timed)
                .map_err(format_err),
            16 => NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ")
                .map(Self::Timed)
                .map_err(format_err),
            len => Err(ParseError::StartLength {
                value: value.to_string(),
                len,
            }),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::AllDay(d) => *d,
            Self::Timed(dt) => dt.date(),
        }
    }

    /// The timestamp a recurrence rule is anchored at. All-day starts
    /// count as midnight.
    pub fn as_datetime(&self) -> NaiveDateTime {
        match self {
            Self::AllDay(d) => d.and_time(NaiveTime::MIN),
            Self::Timed(dt) => *dt,
        }
    }

    /// Moves the start to a resolved occurrence, maintaining the all-day
    /// flavor of the anchor.
    pub fn with_occurrence(&self, at: NaiveDateTime) -> Self {
        match self {
            Self::AllDay(_) => Self::AllDay(at.date()),
            Self::Timed(_) => Self::Timed(at),
        }
    }
}

/// One event ready for display: resolved start plus unescaped text. An
/// absent SUMMARY or LOCATION becomes the empty string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub start: EventStart,
    pub summary: String,
    pub location: String,
}

/// Which listing an occurrence lands in, if any.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Classification {
    Today,
    Tomorrow,
    Excluded,
}

/// The two sorted listings produced by one pass over a calendar.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Agenda {
    pub today: Vec<String>,
    pub tomorrow: Vec<String>,
}

impl Agenda {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty()
    }
}
