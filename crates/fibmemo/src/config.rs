//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibmemo — memoized fast-doubling Fibonacci calculator.
#[derive(Parser, Debug)]
#[command(name = "fibmemo", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(
        short,
        long,
        default_value_t = 1000,
        env = "FIBMEMO_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Algorithm to use: fast, iterative, or checked.
    #[arg(long, default_value = "fast")]
    pub algo: String,

    /// Verbose output (full value and timing).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show digit and bit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Write the decimal value to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
