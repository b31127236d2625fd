//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::personality::Dimension;

#[derive(Parser)]
#[command(name = "mbti-scorer")]
#[command(about = "Score free-text personality test answers into an MBTI type")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which dimension a question index measures
    Dimension {
        /// 0-based question index
        index: usize,
    },
    /// Score a single answer against one dimension
    Answer {
        /// Dimension to score against (EI, SN, TF, JP)
        dimension: Dimension,
        /// Answer text
        text: String,
    },
    /// Score a whole session from a JSON array of answers (strings or nulls)
    Session {
        /// Resolve only the dimensions whose questions are all answered
        #[arg(long)]
        partial: bool,
        /// Path to the JSON file, or "-" for stdin
        input: String,
    },
    /// Show the description of a four-letter type
    Describe {
        /// Type label, e.g. INFP
        label: String,
    },
    /// Show current configuration
    Config,
}
