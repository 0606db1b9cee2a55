// Class catalog REPL
//
// Lists, previews, creates and deletes classes in memory. Creating a class
// opens an Unsplash image picker; set UNSPLASH_ACCESS_KEY before running.

use anyhow::{Context, Result};
use class_catalog::cli::Session;
use class_catalog::{ClassCatalog, SearchConfig, UnsplashClient, logging};
use tokio::io::{BufReader, stdin, stdout};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = SearchConfig::from_env().context("Failed to load image search configuration")?;
    tracing::info!(
        api_base = %config.api_base(),
        per_page = config.per_page(),
        debounce_ms = config.debounce_ms(),
        "Starting class catalog"
    );

    let client = UnsplashClient::new(config.clone()).context("Failed to build HTTP client")?;
    let mut session = Session::new(ClassCatalog::with_sample_classes(), client, config);

    session.run(BufReader::new(stdin()), stdout()).await
}
