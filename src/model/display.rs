// File: ./src/model/display.rs
use crate::model::item::{Event, EventStart};

pub trait EventDisplay {
    fn display_line(&self) -> String;
}

impl EventDisplay for Event {
    /// Renders the listing line: `HH:MM -- summary` for timed events, a
    /// leading space instead of the time for all-day ones. A non-empty
    /// location hangs below on a tab-indented row. Sorting these lines
    /// lexicographically is chronological, and the leading space puts
    /// all-day entries ahead of every timed one.
    fn display_line(&self) -> String {
        let mut s = match self.start {
            EventStart::Timed(at) => format!("{} -- {}", at.format("%H:%M"), self.summary),
            EventStart::AllDay(_) => format!(" {}", self.summary),
        };
        if !self.location.is_empty() {
            s.push_str(&format!("\n\t{}", self.location));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(start: EventStart, summary: &str, location: &str) -> Event {
        Event {
            start,
            summary: summary.to_string(),
            location: location.to_string(),
        }
    }

    fn timed(h: u32, m: u32) -> EventStart {
        EventStart::Timed(
            NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap(),
        )
    }

    #[test]
    fn timed_line_has_clock_prefix() {
        let line = event(timed(14, 30), "Meeting", "").display_line();
        assert_eq!(line, "14:30 -- Meeting");
    }

    #[test]
    fn all_day_line_leads_with_a_space() {
        let start = EventStart::AllDay(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(event(start, "Holiday", "").display_line(), " Holiday");
    }

    #[test]
    fn location_hangs_on_an_indented_row() {
        let line = event(timed(9, 0), "Standup", "Room 5").display_line();
        assert_eq!(line, "09:00 -- Standup\n\tRoom 5");
    }

    #[test]
    fn sorted_lines_read_chronologically_with_all_day_first() {
        let all_day = EventStart::AllDay(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let mut lines = vec![
            event(timed(9, 0), "A", "").display_line(),
            event(all_day, "AllDay", "").display_line(),
            event(timed(8, 0), "B", "").display_line(),
        ];
        lines.sort();
        assert_eq!(lines, vec![" AllDay", "08:00 -- B", "09:00 -- A"]);
    }
}
