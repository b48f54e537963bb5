//! CLI argument definitions: top-level `Cli` struct and `Commands` enum.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub(crate) const CLI_LONG_ABOUT: &str =
    "Certificate checker for the capped 3-walks bound over weighted tripartite \
    structures.\n\n\
    Canonical path:\n  \
    1. cappedwalks check\n  \
    2. cappedwalks check --format json --out report.json\n\n\
    Use `case` to re-solve a single case of the split, by index or by \
    explicit order/regime flags.";

#[derive(Parser)]
#[command(name = "cappedwalks")]
#[command(about = "Certificate checker for the capped 3-walks bound")]
#[command(long_about = CLI_LONG_ABOUT)]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the full 36-case survey and certify the bound
    #[command(display_order = 10)]
    Check {
        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,

        /// Optional path for a machine-readable JSON report artifact
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Solve a single case of the split
    #[command(display_order = 20)]
    Case {
        /// 1-based case index in enumeration order
        #[arg(long, conflicts_with_all = ["order12", "order23", "regime12", "regime23"])]
        index: Option<usize>,

        /// Ordering of W1 against W2: le | ge
        #[arg(long, default_value = "le")]
        order12: String,

        /// Ordering of W2 against W3: le | ge
        #[arg(long, default_value = "le")]
        order23: String,

        /// Regime of the 1-2 pair: m | rl13 | lr12
        #[arg(long, default_value = "m")]
        regime12: String,

        /// Regime of the 2-3 pair: m | rl13 | lr12
        #[arg(long, default_value = "m")]
        regime23: String,

        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,
    },
}
