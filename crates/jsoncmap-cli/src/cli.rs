//! CLI argument definitions for jsoncmap.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jsoncmap",
    version,
    about = "JSONC tooling and Maven Central publishing checks",
    long_about = "jsoncmap converts JSONC (JSON with Comments) and JSON5-flavoured \
                  documents to strict JSON, and verifies that a project's Maven \
                  Central publishing configuration is complete."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a JSONC file to strict JSON on stdout
    Strip {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
        /// Also remove trailing commas
        #[arg(long)]
        trailing_commas: bool,
        /// Accept the core JSON5 conveniences (implies --trailing-commas)
        #[arg(long)]
        json5: bool,
    },

    /// Validate Maven Central publishing configuration
    Check {
        /// Secrets file merged over the process environment (default: .publish.env in this directory or an ancestor)
        #[arg(long)]
        env_file: Option<PathBuf>,
        /// Publisher settings file to load and report
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Treat signing key and password as required
        #[arg(long)]
        require_signing: bool,
        /// Exit non-zero when the configuration is not ready
        #[arg(long)]
        strict: bool,
    },

    /// Print the entries of the publish secrets file
    Env {
        /// Secrets file (default: .publish.env in this directory or an ancestor)
        #[arg(long)]
        env_file: Option<PathBuf>,
        /// Show secret values unmasked
        #[arg(long)]
        reveal: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
