use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modelos_redacao::api::ApiClient;
use modelos_redacao::config::Config;
use modelos_redacao::screen::spawn_screen;
use modelos_redacao::web;

const SCREEN_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    info!("Starting modelos-redacao");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        api_base_url = %config.api_base_url,
        auth = config.api_auth_token.is_some(),
        "Configuration loaded"
    );

    let client = ApiClient::new(&config).context("Failed to build API client")?;

    let (screen, screen_task) = spawn_screen(Arc::new(client));
    screen.mount().await.context("Failed to mount screen")?;

    let web_config = config.clone();
    let web_screen = screen.clone();
    let web_handle = tokio::spawn(async move {
        if let Err(e) = web::serve(web_config, web_screen).await {
            error!("Web server error: {e:#}");
        }
    });

    shutdown_signal().await;

    info!("Shutting down...");

    web_handle.abort();
    let _ = web_handle.await;
    drop(screen);

    // Open connections may still hold a handle; don't wait on them forever.
    match tokio::time::timeout(SCREEN_SHUTDOWN_TIMEOUT, screen_task).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Screen task failed: {e}"),
        Err(_) => warn!("Screen task still running at shutdown"),
    }

    info!("Shutdown complete");

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,modelos_redacao=debug"));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
