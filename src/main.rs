use anyhow::Result;
use axum::{routing::get, Router};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod network_charge;
mod openelectricity;
mod prices;
mod routes;
mod window;

#[derive(Clone)]
pub struct AppState {
    pub oe: openelectricity::Client,
    pub config: config::Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    // One client session for the whole process lifetime, shared by handlers.
    let oe = openelectricity::Client::new(config.api_key.clone(), config.api_url.clone())?;
    info!("OpenElectricity client ready for {}", config.api_url);

    let state = AppState {
        oe,
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(routes::index::handler))
        .route("/average-price", get(routes::average::handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
