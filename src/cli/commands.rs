//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bodylog")]
#[command(about = "Terminal body-condition journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new body journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List body parts found in the video catalog
    Parts,

    /// Suggest a stretching video for a body part
    Suggest {
        /// Body part, matching a catalog heading
        part: String,

        /// Draw a fresh video instead of repeating the last suggestion
        #[arg(short, long)]
        reroll: bool,
    },

    /// Record how a body part feels today
    Log {
        /// When the entry is for (e.g., today, yesterday, 2026-01-17)
        #[arg(value_name = "TIME_REF", default_value = "today")]
        time_ref: String,

        /// Body part that bothered you
        #[arg(short, long)]
        part: Option<String>,

        /// Pain score from 0 (none) to 5 (worst)
        #[arg(long, default_value_t = 0)]
        pain: u8,

        /// Free-form note about how you feel
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show saved journal entries
    List {
        /// Only show the most recent N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
