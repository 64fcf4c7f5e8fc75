//! URL Sentinel entrypoint: loads the classifier once, then serves HTTP
//! or prints the feature vector for a single URL.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use url_sentinel::{
    config::{AppConfig, CONFIG_PATH_ENV},
    features::{self, FeatureVector},
    logging::StructuredLogger,
    model::OnnxClassifier,
    server::{self, AppState},
    verdict::UrlAnalyzer,
};

#[derive(Parser)]
#[command(name = "url-sentinel", version, about = "Classify URLs as benign, defacement, phishing or malware")]
struct Cli {
    /// JSON config file
    #[arg(long, env = CONFIG_PATH_ENV, default_value = "config.json", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the form and classification endpoints (default)
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
        /// Override the configured model path
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Print the feature vector of a URL as one JSON line
    Features { url: String },
}

#[derive(Serialize)]
struct FeatureLine<'a> {
    url: &'a str,
    features: FeatureVector,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(&cli.config);

    match cli.command.unwrap_or(Command::Serve {
        port: None,
        model: None,
    }) {
        Command::Features { url } => {
            let line = FeatureLine {
                url: &url,
                features: features::extract(&url),
            };
            StructuredLogger::emit_json(&line, &mut std::io::stdout().lock())?;
            Ok(())
        }
        Command::Serve { port, model } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(model) = model {
                config.model_path = model;
            }
            serve(config)
        }
    }
}

fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    StructuredLogger::init(config.log.json, &config.log.level);
    info!(model_path = ?config.model_path, "URL sentinel starting");

    let classifier = Arc::new(OnnxClassifier::load(&config.model_path)?);
    let state = AppState::new(UrlAnalyzer::new(classifier));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let listener = server::bind(&config.server).await?;
        server::serve(listener, state).await
    })?;

    info!("URL sentinel stopping");
    Ok(())
}
