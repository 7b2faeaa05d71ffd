use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info_span, trace};
use widgets_cli::input::read_text_source;
use widgets_cli::logging::redact_value;
use widgets_cli::report::{bmi_report, counter_report, text_report};
use widgets_cli::summary::{print_bmi, print_counter, print_text};

use crate::cli::{BmiArgs, CounterArgs, OutputArg, TextArgs};

pub fn run_bmi(args: &BmiArgs, output: OutputArg) -> Result<()> {
    let unit = args.unit;
    let _span = info_span!("bmi", %unit).entered();
    let report = bmi_report(&args.weight, &args.height, unit);
    match output {
        OutputArg::Table => print_bmi(&report),
        OutputArg::Json => print_json(&report)?,
    }
    Ok(())
}

pub fn run_text(args: &TextArgs, output: OutputArg) -> Result<()> {
    let _span = info_span!("text").entered();
    let text = read_text_source(args.file.as_deref())?;
    trace!(text = redact_value(&text), "input text");
    let report = text_report(&text);
    match output {
        OutputArg::Table => print_text(&report),
        OutputArg::Json => print_json(&report)?,
    }
    Ok(())
}

pub fn run_counter(args: &CounterArgs, output: OutputArg) -> Result<()> {
    let _span = info_span!("counter", start = args.start).entered();
    let report = counter_report(args.start, &args.actions);
    match output {
        OutputArg::Table => print_counter(&report),
        OutputArg::Json => print_json(&report)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize result")?;
    println!("{json}");
    Ok(())
}
