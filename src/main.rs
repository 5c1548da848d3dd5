mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, EngineSettings, OutputTarget};
use kmp_catalog::prelude::*;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout may carry the catalog, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on misuse)
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = EngineSettings::resolve(&args, config);
    tracing::debug!(?settings, "resolved settings");

    let progress_reporter = StderrProgressReporter::new();
    let record_cache = load_record_cache(settings.previous.as_deref(), &progress_reporter)?;

    // Create adapters (Dependency Injection)
    let client = MavenCentralClient::with_settings(settings.client.clone())?;
    let metadata_repository = CachingMetadataRepository::new(client.clone());

    let use_case =
        BuildCatalogUseCase::new(client, metadata_repository, record_cache, progress_reporter);
    let response = use_case.execute(settings.request.clone()).await?;

    eprintln!("📝 Generating JSON catalog output...");
    let output = JsonCatalogFormatter::new().format(&response.records)?;

    let presenter: Box<dyn OutputPresenter> = match settings.output {
        OutputTarget::File(path) => Box::new(FileSystemWriter::new(path)),
        OutputTarget::Stdout => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&output)?;

    Ok(())
}

/// Loads the incremental cache from a previous catalog, if there is one
fn load_record_cache(
    previous: Option<&Path>,
    progress_reporter: &StderrProgressReporter,
) -> Result<Option<PreviousOutputCache>> {
    let Some(path) = previous else {
        return Ok(None);
    };

    let Some(records) = FileSystemReader::new().read_snapshot(path)? else {
        tracing::debug!(path = %path.display(), "no previous catalog");
        return Ok(None);
    };

    let cache = PreviousOutputCache::from_records(records);
    progress_reporter.report(&format!(
        "♻️  Reusing {} resolved version(s) from {}",
        cache.len(),
        path.display()
    ));
    Ok(Some(cache))
}
