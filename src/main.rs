use anyhow::Result;
use codemix::{config::Config, lexicon::Lexicon, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables are set by the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("codemix=info".parse()?),
        )
        .init();

    info!("Starting code-mixed language processor");

    let config = Config::from_env()?;

    // Build the lexicon once; it is shared read-only by every request
    let lexicon = match &config.lexicon_file {
        Some(path) => Lexicon::install(Lexicon::from_file(path)?)?,
        None => Lexicon::global(),
    };

    server::serve(&config, lexicon).await
}
