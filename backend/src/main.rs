use anyhow::Context;
use axum::{
    extract::FromRef,
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::handlers::resource;
use crate::models::{Category, Product, Resource};
use crate::store::Collection;

/// Shared application state. Cheap to clone, both collections sit behind Arc.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub products: Collection<Product>,
    pub categories: Collection<Category>,
}

impl AppState {
    /// State with the startup records loaded.
    pub fn seeded() -> Self {
        Self {
            products: store::collection(seed::products()),
            categories: store::collection(seed::categories()),
        }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            products: store::collection(Vec::new()),
            categories: store::collection(Vec::new()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,warung_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState::seeded();
    let products = state.products.read().await.len();
    let categories = state.categories.read().await.len();
    info!(products, categories, "Seeded in-memory collections");

    let app = build_router(state);
    let addr = config.addr();

    if let Err(err) = serve(&addr, app).await {
        error!(error = %err, "gagal running server");
        return Err(err);
    }

    Ok(())
}

async fn serve(addr: &str, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running di {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "Could not listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", any(handlers::health))

        // ── Produk CRUD ─────────────────────────────────────────────────────
        .merge(resource_routes::<Product>())

        // ── Categories CRUD ─────────────────────────────────────────────────
        .merge(resource_routes::<Category>())

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Collection routes plus item routes for one resource. The bare item prefix
/// is registered too so that an empty id is answered with 400, not 404.
/// HEAD is routed explicitly since `get` would otherwise answer it.
fn resource_routes<R>() -> Router<AppState>
where
    R: Resource,
    Collection<R>: FromRef<AppState>,
{
    let item = get(resource::get_record::<R>)
        .put(resource::update_record::<R>)
        .delete(resource::delete_record::<R>)
        .head(resource::item_method_not_allowed::<R>)
        .fallback(resource::item_method_not_allowed::<R>);

    Router::new()
        .route(
            R::COLLECTION_PATH,
            get(resource::list_records::<R>)
                .post(resource::create_record::<R>)
                .head(resource::method_not_allowed)
                .fallback(resource::method_not_allowed),
        )
        .route(R::ITEM_PREFIX, item.clone())
        .route(&format!("{}*rest", R::ITEM_PREFIX), item)
}
