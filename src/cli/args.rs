//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Wallet address book and transaction activity.
#[derive(Parser, Debug)]
#[command(name = "walletbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Address book file (overrides config and WALLETBOOK_BOOK)
    #[arg(long, value_name = "PATH", global = true)]
    pub book: Option<PathBuf>,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the address book
    #[command(subcommand)]
    Book(BookCommand),

    /// Show recent wallet activity from an account snapshot
    Activity(ActivityArgs),
}

/// Address book subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BookCommand {
    /// List all entries
    List,

    /// Show the address stored under a name
    Get {
        /// Entry name
        name: String,
    },

    /// Add an entry or replace the address of an existing name
    Put {
        /// Entry name
        name: String,
        /// Hex address, with or without 0x prefix
        address: String,
    },

    /// Remove an entry (no-op if the name is unknown)
    Remove {
        /// Entry name
        name: String,
    },

    /// Remove all entries
    Clear,
}

/// Arguments for the `activity` command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ActivityArgs {
    /// Account snapshot JSON exported by the wallet
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Transaction type to show (coinbase, transfer, delegate, vote, unvote)
    #[arg(long = "type", value_name = "TYPE")]
    pub tx_type: Option<String>,

    /// Maximum number of rows
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    #[default]
    Human,
    /// JSON output
    Json,
    /// Markdown output
    Md,
}
