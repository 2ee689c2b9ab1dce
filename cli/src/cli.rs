use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "keel")]
#[command(about = "Play with intervals, bounded buffers and type registries")]
#[command(version)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Closed interval operations over integers
    Interval {
        /// Interval operation.
        #[command(subcommand)]
        action: IntervalAction,
    },
    /// Fill a bounded buffer, then drain the even values out of it
    Buffer {
        /// Buffer capacity (defaults to [buffer].capacity in the config)
        #[arg(long, short)]
        capacity: Option<usize>,

        /// Values to insert, in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Walk through cached, transient and shadowed registry bindings
    Registry,
}

/// Interval subcommands. Every interval is given as `<LOW> <HIGH>`.
#[derive(Subcommand, Debug)]
pub enum IntervalAction {
    /// Check whether VALUE lies in [LOW, HIGH]
    Contains {
        #[arg(allow_negative_numbers = true)]
        low: i64,
        #[arg(allow_negative_numbers = true)]
        high: i64,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Intersect two intervals
    Intersect {
        #[arg(allow_negative_numbers = true)]
        low: i64,
        #[arg(allow_negative_numbers = true)]
        high: i64,
        #[arg(allow_negative_numbers = true)]
        other_low: i64,
        #[arg(allow_negative_numbers = true)]
        other_high: i64,
    },
    /// Smallest interval covering two intervals
    Span {
        #[arg(allow_negative_numbers = true)]
        low: i64,
        #[arg(allow_negative_numbers = true)]
        high: i64,
        #[arg(allow_negative_numbers = true)]
        other_low: i64,
        #[arg(allow_negative_numbers = true)]
        other_high: i64,
    },
    /// Clamp VALUE into [LOW, HIGH]
    Clamp {
        #[arg(allow_negative_numbers = true)]
        low: i64,
        #[arg(allow_negative_numbers = true)]
        high: i64,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Smallest interval covering every value
    Cover {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}
