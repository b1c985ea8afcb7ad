use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wastesort")]
#[command(
    author,
    version,
    about = "Classify waste images as recyclable or non-recyclable"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI
    Serve {
        /// Configuration file path
        #[arg(short, long, default_value = "wastesort.yaml")]
        config: String,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen address
        #[arg(short, long)]
        address: Option<String>,

        #[command(flatten)]
        model: ModelArgs,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify a single image file and print the result
    Classify {
        /// Image to classify (jpg, jpeg or png)
        image: PathBuf,

        #[command(flatten)]
        model: ModelArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Overrides for the model location
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Directory containing the model (defaults to the executable's directory)
    #[arg(long, env = "WASTESORT_MODEL_DIR")]
    pub model_dir: Option<PathBuf>,

    /// Model filename inside the model directory
    #[arg(long)]
    pub model_file: Option<String>,
}
