// CLI module for kbeauty-analyzer
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// kbeauty-analyzer - K-Beauty skin analysis from a facial photo
#[derive(Parser, Debug)]
#[command(name = "kbeauty-analyzer", version, about, long_about = None)]
pub struct Args {
    /// Facial photo to analyze (jpeg, png, webp, gif, heic)
    pub image: PathBuf,

    /// Language of the analysis (e.g. en, tr). Defaults to the configured language.
    #[arg(short, long, env = "KBEAUTY_LANG")]
    pub lang: Option<String>,

    /// Print the raw analysis as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// Override the Gemini model
    #[arg(long)]
    pub model: Option<String>,
}
