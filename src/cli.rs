//! Command-line interface for hero_draft.

use clap::{Parser, Subcommand};
use hero_draft::{DraftMode, SetCode};
use std::path::PathBuf;

/// Hero Draft - pick/ban drafting for team matches
#[derive(Parser, Debug)]
#[command(name = "hero_draft")]
#[command(about = "Draft heroes, map and starting position for a team match", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "hero_draft.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or change which sets are enabled
    Sets {
        /// What to do with the sets
        #[command(subcommand)]
        action: SetsAction,
    },

    /// Print the heroes and maps of the enabled sets
    Pool,

    /// Draw random heroes and maps from the enabled sets
    Random {
        /// Number of heroes (defaults to the configured count)
        #[arg(long)]
        heroes: Option<usize>,

        /// Number of maps (defaults to the configured count)
        #[arg(long)]
        maps: Option<usize>,
    },

    /// Run a draft interactively on stdin
    Draft {
        /// Draft format (duel, team, fixed)
        #[arg(short, long)]
        mode: Option<DraftMode>,

        /// Comma-separated hero codes to draft from instead of the enabled sets
        #[arg(long, requires = "maps")]
        heroes: Option<String>,

        /// Comma-separated map codes to draft from instead of the enabled sets
        #[arg(long, requires = "heroes")]
        maps: Option<String>,
    },
}

/// Set management actions
#[derive(Subcommand, Debug)]
pub enum SetsAction {
    /// List every set and whether it is enabled
    List,

    /// Enable or disable one set
    Toggle {
        /// Set code (e.g. VOL1)
        set: SetCode,
    },

    /// Enable every set
    All,

    /// Disable every set
    None,
}
