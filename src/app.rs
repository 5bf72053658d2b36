//! Entry-layer wiring
//!
//! Argument-count handling, timezone/date resolution, conversion, and the
//! post-success reveal. Only the input-not-found condition is recovered
//! here; everything else bubbles up as a fatal error.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, TimeZone};
use clap::CommandFactory;

use crate::cli::Cli;
use crate::consts::DEFAULT_POSTS_DIR;
use crate::convert::ConversionRequest;
use crate::error::AppError;
use crate::output::{output_json, print_result};
use crate::reveal::Revealer;
use crate::utils::{Timezone, parse_date};

pub(crate) fn run(cli: &Cli, revealer: &dyn Revealer) -> Result<(), AppError> {
    match cli.input.as_slice() {
        [] => {
            let _ = Cli::command().print_help();
            Ok(())
        }
        [input] => convert_one(cli, input, revealer),
        _ => {
            println!("Only one input file is allowed.");
            Ok(())
        }
    }
}

fn convert_one(cli: &Cli, input: &Path, revealer: &dyn Revealer) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let now = post_time(timezone, cli.date.as_deref())?;
    let posts_dir = cli
        .posts_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_POSTS_DIR));

    let request = match ConversionRequest::prepare(input, &posts_dir, now) {
        Ok(request) => request,
        Err(e @ AppError::InputNotFound { .. }) => {
            println!("{e}, please try again.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    request.write()?;

    if cli.json {
        println!("{}", output_json(&request));
    } else {
        print_result(&request);
    }

    if cli.should_reveal()
        && let Err(e) = revealer.reveal(&request.output_path)
    {
        eprintln!("Warning: {e}");
    }

    Ok(())
}

/// Conversion timestamp: now in the requested timezone, with the date
/// portion replaced when a backdate is given. Time of day and offset
/// always come from the clock.
fn post_time(
    timezone: Timezone,
    date_override: Option<&str>,
) -> Result<DateTime<FixedOffset>, AppError> {
    let now = timezone.now();
    let Some(raw) = date_override else {
        return Ok(now);
    };
    let day = parse_date(raw)?;
    let rebased = now
        .offset()
        .from_local_datetime(&day.and_time(now.time()))
        .single()
        .unwrap_or(now);
    Ok(rebased)
}
