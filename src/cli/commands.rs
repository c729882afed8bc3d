//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caltrack")]
#[command(about = "Track daily calorie intake and burn", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log store and storage activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a day's calories
    Add {
        /// Date of the entry (YYYY-MM-DD, today, yesterday)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Calories taken in
        #[arg(short, long)]
        intake: String,

        /// Calories burned
        #[arg(short, long)]
        burned: String,

        /// What the day looked like
        #[arg(short = 'm', long)]
        description: String,
    },

    /// Change an entry; omitted fields keep their value
    Edit {
        /// Entry position (from `list`) or id
        target: String,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        intake: Option<String>,

        #[arg(short, long)]
        burned: Option<String>,

        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Remove an entry
    Delete {
        /// Entry position (from `list`) or id
        target: String,
    },

    /// List all entries in the order they were added
    List {
        /// Show entry ids
        #[arg(long)]
        ids: bool,
    },

    /// Show entries from the recent days, oldest first
    Week {
        /// Reference day for the window (default: today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Show all-time intake and burned totals
    Totals,

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
}
