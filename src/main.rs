use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wayfare_api::{
    api::{create_router, AppState},
    config::Config,
    db::{create_pool, create_redis_client, Cache, CachedStore, DataStore, PgStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wayfare_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url, config.max_db_connections).await?;
    let pg_store: Arc<dyn DataStore> = Arc::new(PgStore::new(pool));

    let (store, cache_handle): (Arc<dyn DataStore>, _) = match &config.redis_url {
        Some(redis_url) => {
            let (cache, handle) = Cache::new(create_redis_client(redis_url)?);
            tracing::info!(ttl = config.place_cache_ttl, "Place catalog caching enabled");
            let cached: Arc<dyn DataStore> =
                Arc::new(CachedStore::new(pg_store, cache, config.place_cache_ttl));
            (cached, Some(handle))
        }
        None => (pg_store, None),
    };

    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_handle {
        handle.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
