use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod engine;
mod engines;
mod error;
mod lines;
mod loader;
mod output;
mod preprocessing;
mod prompts;

#[derive(Parser, Debug)]
#[command(name = "ocrpipe")]
#[command(about = "Binarize an image, recognize its text, and save the lines")]
#[command(version)]
pub struct Args {
    /// Path to the input image
    pub input_image: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::OcrConfig::default();

    if let Err(err) = app::run(&config, &args.input_image) {
        println!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
