//! CLI argument definitions for the widgets front end.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use widgets_model::{CounterAction, UnitSystem};

#[derive(Parser)]
#[command(
    name = "widgets",
    version,
    about = "BMI calculator, text analyzer and counter",
    long_about = "Small form widgets for the terminal.\n\n\
                  Computes a BMI from weight and height, statistics for a block of text,\n\
                  and replays counter button presses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow user-entered text to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Result output format.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate a Body Mass Index.
    Bmi(BmiArgs),

    /// Count characters, words, sentences and paragraphs of a text.
    Text(TextArgs),

    /// Replay counter button presses.
    Counter(CounterArgs),
}

#[derive(Parser)]
pub struct BmiArgs {
    /// Weight in kg (metric) or lbs (imperial).
    #[arg(long = "weight", value_name = "WEIGHT", default_value = "")]
    pub weight: String,

    /// Height in cm (metric) or inches (imperial).
    #[arg(long = "height", value_name = "HEIGHT", default_value = "")]
    pub height: String,

    /// Unit system for weight and height (metric or imperial).
    #[arg(long = "unit", value_name = "UNIT", default_value = "metric")]
    pub unit: UnitSystem,
}

#[derive(Parser)]
pub struct TextArgs {
    /// File to analyze (reads stdin when omitted or `-`).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CounterArgs {
    /// Value to start from.
    #[arg(long = "start", default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// Button presses: inc/+, dec/-, reset/0.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<CounterAction>,
}

/// CLI result output choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counter_actions() {
        let cli = Cli::try_parse_from([
            "widgets", "counter", "--start", "-2", "+", "inc", "-", "reset",
        ])
        .expect("parse counter args");
        let Command::Counter(args) = cli.command else {
            panic!("expected counter command");
        };
        assert_eq!(args.start, -2);
        assert_eq!(
            args.actions,
            vec![
                CounterAction::Increment,
                CounterAction::Increment,
                CounterAction::Decrement,
                CounterAction::Reset,
            ]
        );
    }

    #[test]
    fn rejects_unknown_counter_action() {
        assert!(Cli::try_parse_from(["widgets", "counter", "double"]).is_err());
    }

    #[test]
    fn bmi_fields_default_to_empty() {
        let cli =
            Cli::try_parse_from(["widgets", "--output", "json", "bmi", "--unit", "imperial"])
                .expect("parse bmi args");
        assert!(cli.output == OutputArg::Json);
        let Command::Bmi(args) = cli.command else {
            panic!("expected bmi command");
        };
        assert!(args.weight.is_empty());
        assert!(args.height.is_empty());
        assert_eq!(args.unit, UnitSystem::Imperial);
    }

    #[test]
    fn unit_defaults_to_metric_and_rejects_unknown_systems() {
        let cli = Cli::try_parse_from(["widgets", "bmi", "--weight", "70", "--height", "175"])
            .expect("parse bmi args");
        let Command::Bmi(args) = cli.command else {
            panic!("expected bmi command");
        };
        assert_eq!(args.unit, UnitSystem::Metric);

        let error = Cli::try_parse_from(["widgets", "bmi", "--unit", "stone"])
            .err()
            .expect("unknown unit is rejected");
        assert!(error.to_string().contains("unknown unit system: stone"));
    }
}
