//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood journal with weekly trend reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Time reference (e.g., today, yesterday, last monday, 2025-01-17)
    #[arg(value_name = "TIME_REF")]
    pub time_ref: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a mood entry in a day note
    Log {
        /// Mood label (sad, anxious, neutral, calm, happy, excited)
        mood: String,

        /// Entry text
        #[arg(short, long)]
        message: Option<String>,

        /// Entry category (personal, professional)
        #[arg(short, long)]
        category: Option<String>,

        /// Day to log into (defaults to today)
        #[arg(short, long, value_name = "TIME_REF")]
        date: Option<String>,

        /// Clock time for the entry heading, 24-hour HH:MM (defaults to now)
        #[arg(long, value_name = "HH:MM")]
        at: Option<String>,
    },

    /// List mood entries across day notes
    List {
        /// Start date, inclusive (DD-MM-YYYY or YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// End date, inclusive (DD-MM-YYYY or YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the weekly mood report
    Week {
        /// Reference day for the week (defaults to now)
        #[arg(value_name = "TIME_REF")]
        time_ref: Option<String>,

        /// Report the week before the reference week
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Report the week after the reference week
        #[arg(long, conflicts_with = "prev")]
        next: bool,
    },

    /// Show the mood trend for a week
    Trend {
        /// Reference day for the week (defaults to now)
        #[arg(value_name = "TIME_REF")]
        time_ref: Option<String>,

        /// Analyze the week before the reference week
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Analyze the week after the reference week
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Category to analyze (personal, professional; default: both)
        #[arg(short, long)]
        category: Option<String>,
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
}
