// File: src/output.rs
use crate::model::Agenda;
use chrono::{Duration, NaiveDateTime};

/// Assembles the final overlay text: a "Today" section and a section
/// titled with tomorrow's weekday name, each only when it has entries.
/// The layout token is an opaque spacing hint for the overlay engine
/// (Conky's `${voffset N}` by default) and is emitted verbatim, glued to
/// headers and separated from entries by a single space.
pub fn render(agenda: &Agenda, now: NaiveDateTime, layout_token: &str) -> String {
    let mut out = String::new();
    if !agenda.today.is_empty() {
        out.push_str(&format!("------ Today ------{}\n", layout_token));
        for entry in &agenda.today {
            out.push_str(&format!("{} {}\n", entry, layout_token));
        }
    }
    if !agenda.tomorrow.is_empty() {
        let weekday = (now.date() + Duration::days(1)).format("%A");
        out.push_str(&format!(
            "{}------ {} ------{}\n",
            layout_token, weekday, layout_token
        ));
        for entry in &agenda.tomorrow {
            out.push_str(&format!("{} {}\n", entry, layout_token));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const TOKEN: &str = "${voffset 3}";

    // 2025-06-15 is a Sunday.
    fn sunday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn renders_both_sections() {
        let agenda = Agenda {
            today: vec![" Holiday".to_string(), "14:00 -- Call".to_string()],
            tomorrow: vec!["09:00 -- Standup".to_string()],
        };
        let text = render(&agenda, sunday_morning(), TOKEN);
        assert_eq!(
            text,
            concat!(
                "------ Today ------${voffset 3}\n",
                " Holiday ${voffset 3}\n",
                "14:00 -- Call ${voffset 3}\n",
                "${voffset 3}------ Monday ------${voffset 3}\n",
                "09:00 -- Standup ${voffset 3}\n",
            )
        );
    }

    #[test]
    fn empty_sections_are_omitted() {
        let agenda = Agenda {
            today: vec![],
            tomorrow: vec!["09:00 -- Standup".to_string()],
        };
        let text = render(&agenda, sunday_morning(), TOKEN);
        assert!(!text.contains("Today"));
        assert!(text.starts_with("${voffset 3}------ Monday ------"));
    }

    #[test]
    fn empty_agenda_renders_nothing() {
        assert_eq!(render(&Agenda::default(), sunday_morning(), TOKEN), "");
    }

    #[test]
    fn token_lands_after_a_hanging_location_row() {
        let agenda = Agenda {
            today: vec!["09:00 -- Standup\n\tRoom 5".to_string()],
            tomorrow: vec![],
        };
        let text = render(&agenda, sunday_morning(), TOKEN);
        assert_eq!(
            text,
            "------ Today ------${voffset 3}\n09:00 -- Standup\n\tRoom 5 ${voffset 3}\n"
        );
    }
}
