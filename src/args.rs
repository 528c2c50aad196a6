pub mod validation;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::dashboard::Timeframe;
use crate::model::PlayerId;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON document with players, courses and rounds
    #[arg(
        short = 'f',
        long,
        value_name = "DATA_FILE",
        value_parser = crate::args::validation::check_readable_round_document
    )]
    pub data: PathBuf,
    /// Log as JSON lines instead of human-readable text
    #[arg(long)]
    pub json_logs: bool,
    /// Pretty-print the JSON written to stdout
    #[arg(long)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Current index, index history and recent stats for a player
    Dashboard { player: PlayerId },
    /// A player's rounds with their differentials, newest first
    Rounds {
        player: PlayerId,
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=200))]
        limit: Option<u16>,
        #[arg(long, value_name = "COURSE_ID")]
        course_id: Option<String>,
    },
    /// A player's index history
    Series {
        player: PlayerId,
        #[command(flatten)]
        timeframe: TimeframeArgs,
    },
    /// Every player's index history on one date axis
    Compare {
        #[command(flatten)]
        timeframe: TimeframeArgs,
    },
    /// Dump all courses and rounds
    Export,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeframeName {
    #[value(name = "90d")]
    Last90Days,
    #[value(name = "6m")]
    SixMonths,
    #[value(name = "1y")]
    OneYear,
    All,
    Custom,
}

#[derive(clap::Args, Debug, Clone)]
pub struct TimeframeArgs {
    #[arg(long, value_enum, default_value_t = TimeframeName::All)]
    pub timeframe: TimeframeName,
    /// First date kept by a custom timeframe
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: Option<NaiveDate>,
    /// Last date kept by a custom timeframe
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end: Option<NaiveDate>,
}

impl TimeframeArgs {
    #[must_use]
    pub fn timeframe(&self) -> Timeframe {
        match self.timeframe {
            TimeframeName::Last90Days => Timeframe::Last90Days,
            TimeframeName::SixMonths => Timeframe::SixMonths,
            TimeframeName::OneYear => Timeframe::OneYear,
            TimeframeName::All => Timeframe::All,
            TimeframeName::Custom => Timeframe::Custom {
                start: self.start,
                end: self.end,
            },
        }
    }
}
