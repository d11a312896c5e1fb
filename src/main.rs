// kbeauty-analyzer - K-Beauty skin analysis client for the Gemini vision API
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use kbeauty_analyzer::analysis::AnalysisClient;
use kbeauty_analyzer::cli::Args;
use kbeauty_analyzer::config::{ApiKey, AppConfig};
use kbeauty_analyzer::gemini::GeminiTransport;
use kbeauty_analyzer::report;
use kbeauty_analyzer::utils::logging;
use kbeauty_analyzer::vision::ImageBlob;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load()?;
    if let Some(model) = args.model {
        config.gemini.model = model;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting kbeauty-analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Credentials (fatal if missing, before any request)
    let api_key = ApiKey::from_env(&config.gemini.api_key_env)?;

    // Phase 4: Build client
    let transport = GeminiTransport::new(&config.gemini, api_key)?;
    let client = AnalysisClient::new(transport, config.gemini.model.clone())
        .with_max_image_bytes(config.analysis.max_image_bytes);

    // Phase 5: Analyze
    let language = args.lang.unwrap_or(config.analysis.default_language);
    let image = ImageBlob::from_path(&args.image);
    info!(
        "Analyzing {} with {} (language: {})",
        args.image.display(),
        client.model(),
        language
    );

    let result = client.analyze(Some(&image), &language).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::render(&result, &language));
    }

    Ok(())
}
