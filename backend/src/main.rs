use anyhow::Context;
use daily_tasks_backend::{app, Config, Webhook};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;
    let webhook = Webhook::new(&config.webhook_url).context("Failed to build webhook client")?;

    let app = app(webhook, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server running on http://{}", config.bind_addr);
    info!("Webhook URL: {}", config.webhook_url);
    info!("Serving frontend from {}", config.static_dir.display());

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
