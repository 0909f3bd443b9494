// File: src/main.rs
use chrono::Local;
use conky_agenda::app::{self, Failure};
use conky_agenda::cli;
use conky_agenda::config::Config;
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::parse_args(env::args().skip(1));

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    for token in &args.ignored {
        log::debug!("ignoring unrecognized argument {:?}", token);
    }

    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // Strict mode may be configured in the very file that failed,
            // so only the command line can ask for loud failure here.
            let failure = Failure {
                message: format!("Error: {:#}", e),
                code: 1,
            };
            return report(&failure, args.strict);
        }
    };
    let strict = args.strict || config.strict;

    // The clock is read exactly once; everything downstream takes `now`
    // as a plain value.
    let now = args.now.unwrap_or_else(|| Local::now().naive_local());

    match app::run(&args, &config, now) {
        Ok(listing) => {
            print!("{}", listing);
            ExitCode::SUCCESS
        }
        Err(failure) => report(&failure, strict),
    }
}

/// Widget mode puts the message on stdout and still exits 0, so Conky
/// shows it in place of the listing instead of rendering nothing. Strict
/// mode behaves like a regular CLI failure.
fn report(failure: &Failure, strict: bool) -> ExitCode {
    if strict {
        eprintln!("{}", failure.message);
        ExitCode::from(failure.code)
    } else {
        println!("{}", failure.message);
        ExitCode::SUCCESS
    }
}
