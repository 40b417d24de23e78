use std::{env, net::SocketAddr, sync::Arc};

use note_proxy::{router, AppState, ProxyConfig, PROCESS_NOTE_PATH};
use openai_api::{OpenAIHandler, DEFAULT_API_BASE};
use tracing::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    //A missing .env is fine, the variables may come from the environment.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(
        "Starting... CARGO_PKG_NAME={}, CARGO_PKG_VERSION={}, version={}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("version").unwrap_or("(not defined at compile)")
    );
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Could not load .env: {}", e);
        }
    }

    let config = load_config();
    if config.api_key.is_none() {
        //Not fatal: requests will answer with a configuration error.
        warn!("No OpenAI API key configured");
    }

    let api_base = read_env_var("NOTE_PROCESSOR_OPENAI_API_BASE")
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let state = AppState::new(config, Arc::new(OpenAIHandler::new(api_base)));

    let bind: SocketAddr = read_env_var("NOTE_PROCESSOR_BIND")
        .unwrap_or_else(|| DEFAULT_BIND.to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}{}", bind, PROCESS_NOTE_PATH);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _signal_err = tokio::signal::ctrl_c().await;
            info!("Received Ctrl-C, shutting down.");
        })
        .await?;

    Ok(())
}

fn load_config() -> ProxyConfig {
    let api_key = read_env_var("NOTE_PROCESSOR_OPENAI_API_KEY")
        .or_else(|| read_env_var("OPENAI_API_KEY"));
    let mut config = ProxyConfig::new(api_key);
    if let Some(model) = read_env_var("NOTE_PROCESSOR_OPENAI_MODEL") {
        config.model = model;
    }
    config
}

fn read_env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
