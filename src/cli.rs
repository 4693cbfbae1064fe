use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "harsnip")]
#[command(about = "Render HTTP Archive requests as client code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a snippet for every request in a HAR file
    Convert(ConvertArgs),
    /// List available targets and clients as JSON
    Targets,
    /// Print the canonicalized requests as JSON
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// HAR archive or single request JSON
    pub input: PathBuf,

    /// Target key, e.g. `shell`; defaults to `convert.target` from config
    #[arg(short, long)]
    pub target: Option<String>,

    /// Client key within the target
    #[arg(short, long)]
    pub client: Option<String>,

    /// Indentation unit passed to the generator
    #[arg(long)]
    pub indent: Option<String>,

    /// Write one file per request into this directory instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// HAR archive or single request JSON
    pub input: PathBuf,
}
