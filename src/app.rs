// File: src/app.rs
//! One invocation end to end: read the file, build the agenda, render it.
//! Failures map to the short messages the overlay shows in place of the
//! listing; the binary decides where they go based on strict mode.

use crate::cli::CliArgs;
use crate::config::Config;
use crate::model::resolve;
use crate::output;
use chrono::NaiveDateTime;
use std::fs;

pub const MSG_NO_FILE: &str = "No file location given";
pub const MSG_CANT_OPEN: &str = "Can't open ical file";

/// A classified failure: the single-line message shown to the user and
/// the exit code strict mode reports.
#[derive(Debug, Eq, PartialEq)]
pub struct Failure {
    pub message: String,
    pub code: u8,
}

/// Runs one invocation against an explicit `now`. Ok carries the rendered
/// listing, which is empty when nothing falls on today or tomorrow.
pub fn run(args: &CliArgs, config: &Config, now: NaiveDateTime) -> Result<String, Failure> {
    let Some(path) = args.file.as_deref() else {
        return Err(Failure {
            message: MSG_NO_FILE.to_string(),
            code: 2,
        });
    };

    let document = fs::read_to_string(path).map_err(|e| {
        log::warn!("failed to read '{}': {}", path.display(), e);
        Failure {
            message: MSG_CANT_OPEN.to_string(),
            code: 1,
        }
    })?;

    let agenda = resolve::build_agenda(&document, now, config.grace()).map_err(|e| Failure {
        message: format!("Error: {}", e),
        code: 1,
    })?;

    Ok(output::render(&agenda, now, &config.layout_token))
}
