//! Hotel API HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, storage, the hotel service, and HTTP routers, then serves
//! the API and metrics listeners until shutdown.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use anyhow::Context;
use hotel_api::app::{AppState, build_router};
use hotel_api::config::{HotelApiConfig, StorageBackend};
use hotel_api::observability;
use hotel_api::service::HotelService;
use hotel_api::store::{HotelRepository, memory::InMemoryStore, postgres::PostgresStore};
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HotelApiConfig::from_env_or_yaml().context("hotel api config")?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: HotelApiConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("hotel-api")?;
    let state = build_state(config.clone()).await?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, backend = state.hotels.backend_name(), "hotel api listening");
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {
            tracing::info!("shutdown requested");
        }
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

async fn build_state(config: HotelApiConfig) -> anyhow::Result<AppState> {
    let repo: Arc<dyn HotelRepository + Send + Sync> = match config.storage {
        StorageBackend::Memory => Arc::new(InMemoryStore::new()),
        StorageBackend::Postgres => {
            let pg = config
                .postgres
                .as_ref()
                .context("postgres configuration missing")?;
            Arc::new(PostgresStore::connect(pg).await?)
        }
    };

    Ok(AppState {
        api_version: "v1".to_string(),
        hotels: HotelService::new(repo),
    })
}
