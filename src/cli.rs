use clap::Parser;
use std::path::PathBuf;

/// Build a catalog of Kotlin Multiplatform libraries published to Maven Central
#[derive(Parser, Debug, Default)]
#[command(name = "kmp-catalog")]
#[command(version)]
#[command(
    about = "Build a catalog of Kotlin Multiplatform libraries published to Maven Central",
    long_about = None
)]
pub struct Args {
    /// Output file path, or '-' for stdout (default: output.json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: ./kmp-catalog.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog of a previous run to reuse resolved versions from
    /// (default: the output file)
    #[arg(long, value_name = "PATH")]
    pub previous: Option<PathBuf>,

    /// Number of search hits requested per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Number of most recent versions resolved per library (0 = all)
    #[arg(long, value_name = "N")]
    pub version_window: Option<usize>,

    /// Number of libraries resolved concurrently
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Resolve every version again instead of reusing the previous catalog
    #[arg(long)]
    pub no_cache: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
