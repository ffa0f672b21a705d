use clap::{Parser, Subcommand};
use reelscout::verify::VerifyStrategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelscout")]
#[command(author, version, about = "Resolve movie titles to embed URLs and export the results")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve every row of a CSV file and export the results
    Run {
        /// CSV file with title and release-year columns
        #[arg(required = true)]
        input: PathBuf,

        /// How embed URLs are verified (overrides config)
        #[arg(long, value_enum)]
        strategy: Option<VerifyStrategy>,

        /// Directory for the exported files (overrides config)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Do not print the results table
        #[arg(long)]
        no_table: bool,
    },

    /// Print the embed URL for a known identifier
    EmbedUrl {
        /// Film-database id, with or without the "tt" prefix
        #[arg(long)]
        filmdb_id: Option<String>,

        /// Metadata API numeric id
        #[arg(long)]
        metadata_id: Option<u64>,
    },

    /// Fetch a URL and print its page title
    Title {
        /// URL to fetch
        #[arg(required = true)]
        url: String,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
