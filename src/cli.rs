//! Command-line options.
//!
//! The distance flag is deliberately forgiving at parse time: an unknown
//! value becomes "no preset" here, and rejecting that is the run flow's job
//! so it can exit with its own code and message.

use clap::{ArgAction, Parser};

use crate::spacing::Preset;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Distance between desktop icons. Valid values are: wide, medium or narrow. Alternatively: w, m or n
    #[arg(long, default_value = "WIDE")]
    distance: String,

    /// Automatically update the distance value
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    update: bool,
}

/// Options resolved from the process arguments.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Selected spacing preset; `None` when the distance flag was invalid.
    pub distance: Option<Preset>,

    /// Skip the confirmation prompt and proceed as if the user affirmed.
    pub update: bool,
}

impl Options {
    /// Parse the process arguments.
    pub fn from_cli() -> Self {
        Args::parse().into()
    }
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            distance: Preset::from_input(&args.distance),
            update: args.update,
        }
    }
}
