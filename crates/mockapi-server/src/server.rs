//! Router assembly and startup.

use crate::config::ServerConfig;
use crate::cors::cors;
use crate::handler::serve_fixture;
use anyhow::Context;
use axum::{middleware, Router};
use mockapi_core::mocks::RouteRegistry;
use mockapi_core::routing::RouteDescriptorBuilder;
use mockapi_core::scan::{FixtureSource, ScanError};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Scan the fixture root and register a route for every fixture.
pub fn load_registry(config: &ServerConfig) -> Result<RouteRegistry, ScanError> {
    let source = FixtureSource::new(&config.root);
    let builder = RouteDescriptorBuilder::new(&config.mount_root);

    tracing::info!(
        root = %source.root().display(),
        mount_root = builder.mount_root(),
        "Scanning static mocks"
    );
    let registry = RouteRegistry::from_source(&source, &builder)?;

    if registry.is_empty() {
        tracing::warn!(root = %source.root().display(), "No api mocks found");
    } else {
        tracing::info!("Found {} api mocks", registry.len());
    }

    let addr = config.addr();
    for route in registry.routes() {
        let descriptor = &route.descriptor;
        let query = descriptor.query_string();
        tracing::info!(
            method = %descriptor.method,
            fixture = %route.fixture.relative,
            "Mapping listener on http://{addr}{}{}{query}",
            descriptor.url,
            if query.is_empty() { "" } else { "?" },
        );
    }

    Ok(registry)
}

/// Axum router answering every request from `registry`.
pub fn app(registry: RouteRegistry) -> Router {
    Router::new()
        .fallback(serve_fixture)
        .with_state(Arc::new(registry))
        .layer(middleware::from_fn(cors))
}

/// Load fixtures, bind the listener and serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let registry = load_registry(&config).context("Failed to load static mocks")?;

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Mock server started on http://{}", listener.local_addr()?);

    axum::serve(listener, app(registry))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Mock server stopped unexpectedly")?;

    tracing::info!("Mock server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
