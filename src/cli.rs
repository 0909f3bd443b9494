// File: ./src/cli.rs
//! Command-line argument scanning and help text.

use chrono::NaiveDateTime;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct CliArgs {
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Explicit "now" override, for testing against a fixed clock.
    pub now: Option<NaiveDateTime>,
    pub strict: bool,
    pub verbose: bool,
    pub help: bool,
    /// Tokens that were not recognized. They are logged and otherwise
    /// ignored so a stale overlay template cannot take the widget down.
    pub ignored: Vec<String>,
}

/// Scans raw arguments (without the program name). Unknown tokens and
/// value flags missing their value land in `ignored` instead of failing;
/// the caller logs them once the logger is up.
pub fn parse_args<I>(raw: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = raw.into_iter().collect();
    let mut parsed = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    parsed.file = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    parsed.ignored.push(args[i].clone());
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    parsed.ignored.push(args[i].clone());
                }
            }
            "--now" => {
                if i + 1 < args.len() {
                    match NaiveDateTime::parse_from_str(&args[i + 1], "%Y-%m-%dT%H:%M:%S") {
                        Ok(now) => parsed.now = Some(now),
                        Err(_) => {
                            parsed.ignored.push(args[i].clone());
                            parsed.ignored.push(args[i + 1].clone());
                        }
                    }
                    i += 1;
                } else {
                    parsed.ignored.push(args[i].clone());
                }
            }
            "--strict" => parsed.strict = true,
            "--verbose" | "-v" => parsed.verbose = true,
            "--help" | "-h" => parsed.help = true,
            other => parsed.ignored.push(other.to_string()),
        }
        i += 1;
    }
    parsed
}

pub fn print_help() {
    println!(
        "conky-agenda v{} - Today's and tomorrow's iCalendar events, formatted for Conky",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    conky-agenda --file <path/to/calendar.ics>");
    println!();
    println!("OPTIONS:");
    println!("    -f, --file <path>     iCalendar file to read (required).");
    println!("    --now <timestamp>     Resolve against this local time instead of the");
    println!("                          wall clock, e.g. 2025-06-15T10:00:00. For testing.");
    println!("    --config <path>       Use a different config file.");
    println!("    --strict              Report failures on stderr with a non-zero exit");
    println!("                          instead of a single stdout line and exit 0.");
    println!("    -v, --verbose         Debug logging on stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("CONFIG FILE (all keys optional):");
    println!("    grace_minutes = 60               Minutes a timed event outlives its start.");
    println!("    layout_token = \"${{voffset 3}}\"    Spacing hint emitted around output lines.");
    println!("    strict = false");
    println!();
    println!("CONKY USAGE:");
    println!("    ${{execpi 300 conky-agenda --file /home/user/calendar.ics}}");
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/trougnouf/conky-agenda");
    println!("    License:    GPL-3.0");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> CliArgs {
        parse_args(tokens.iter().map(|t| t.to_string()))
    }

    #[test]
    fn file_flag_takes_the_next_token() {
        let args = parse(&["--file", "/tmp/cal.ics"]);
        assert_eq!(args.file.as_deref(), Some(std::path::Path::new("/tmp/cal.ics")));
        assert!(args.ignored.is_empty());
    }

    #[test]
    fn short_flags_are_aliases() {
        let args = parse(&["-f", "cal.ics", "-v", "-h"]);
        assert!(args.file.is_some());
        assert!(args.verbose);
        assert!(args.help);
    }

    #[test]
    fn now_override_parses_the_fixed_format() {
        let args = parse(&["--now", "2025-06-15T10:00:00"]);
        let now = args.now.unwrap();
        assert_eq!(now.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-06-15 10:00:00");
    }

    #[test]
    fn malformed_now_is_ignored_not_fatal() {
        let args = parse(&["--now", "yesterday", "--file", "cal.ics"]);
        assert_eq!(args.now, None);
        assert!(args.file.is_some());
        assert_eq!(args.ignored, vec!["--now", "yesterday"]);
    }

    #[test]
    fn trailing_value_flag_is_ignored() {
        let args = parse(&["--file"]);
        assert_eq!(args.file, None);
        assert_eq!(args.ignored, vec!["--file"]);
    }

    #[test]
    fn unknown_tokens_are_collected() {
        let args = parse(&["--strict", "--frobnicate", "extra"]);
        assert!(args.strict);
        assert_eq!(args.ignored, vec!["--frobnicate", "extra"]);
    }
}
