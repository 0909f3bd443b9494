// File: ./src/model/recurrence.rs
use crate::model::item::ParseError;
use chrono::NaiveDateTime;
use rrule::RRuleSet;
use std::str::FromStr;

pub struct RecurrenceEngine;

impl RecurrenceEngine {
    /// Calculates the first occurrence of `rule`, anchored at `anchor`,
    /// falling on or after `floor`. Returns None when the rule runs out
    /// before the floor (COUNT exhausted or UNTIL passed).
    ///
    /// The rrule crate wants zone-aware datetimes, so the naive values are
    /// stamped as UTC on the way in and the stamp is dropped on the way
    /// out. The crate only does arithmetic here; everything stays naive
    /// wall-clock time end to end.
    pub fn occurrence_on_or_after(
        rule: &str,
        anchor: NaiveDateTime,
        floor: NaiveDateTime,
    ) -> Result<Option<NaiveDateTime>, ParseError> {
        // Sanitize rule string. If it already carries the "RRULE:" prefix,
        // strip it to avoid double prefixing below.
        let clean_rule = rule.trim();
        let mut final_rule_part = if clean_rule.to_uppercase().starts_with("RRULE:") {
            clean_rule[6..].to_string()
        } else {
            clean_rule.to_string()
        };

        // Normalize UNTIL to DateTime form. The rrule crate (and RFC 5545)
        // requires UNTIL to match the type of DTSTART, and DTSTART is
        // always a UTC DateTime here. "UNTIL=20261231" must become
        // "UNTIL=20261231T235959Z" or the whole rule is rejected.
        if let Some(idx) = final_rule_part.find("UNTIL=") {
            let until_val_start = idx + 6;
            let until_val_end = final_rule_part[until_val_start..]
                .find(';')
                .map(|i| until_val_start + i)
                .unwrap_or(final_rule_part.len());

            let until_val = &final_rule_part[until_val_start..until_val_end];

            if until_val.len() == 8 && !until_val.contains('T') {
                let new_until = format!("{}T235959Z", until_val);
                final_rule_part.replace_range(until_val_start..until_val_end, &new_until);
            }
        }

        let dtstart_str = anchor.and_utc().format("%Y%m%dT%H%M%SZ").to_string();
        let rrule_string = format!("DTSTART:{}\nRRULE:{}\n", dtstart_str, final_rule_part);

        let rrule_set = RRuleSet::from_str(&rrule_string).map_err(|source| ParseError::Rule {
            rule: final_rule_part,
            source,
        })?;

        let search_floor = floor.and_utc();
        Ok(rrule_set
            .into_iter()
            .find(|d| d.to_utc() >= search_floor)
            .map(|d| d.to_utc().naive_utc()))
    }
}
