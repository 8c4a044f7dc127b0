//! GraphQL Playground Server
//!
//! A small GraphQL API over an in-process message list: two read queries,
//! a server-time field and one validated mutation, served over HTTP at a
//! single endpoint (POST for operations, GET for GraphiQL).

pub mod config;
pub mod error;
pub mod graphql;
pub mod store;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::ServerConfig;
use graphql::{build_schema, PlaygroundSchema};
use store::MessageStore;

/// Build the HTTP router: GraphQL execution on POST, GraphiQL on GET,
/// plus a health probe.
pub fn app(schema: PlaygroundSchema, graphql_path: &str) -> Router {
    let endpoint = graphql_path.to_string();
    let graphiql = move || {
        let endpoint = endpoint.clone();
        async move { Html(GraphiQLSource::build().endpoint(&endpoint).finish()) }
    };

    Router::new()
        .route(graphql_path, get(graphiql).post_service(GraphQL::new(schema)))
        .route("/health", get(health_check))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

pub async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Already set, ignore
    }

    let config = ServerConfig::from_env();

    let store = Arc::new(MessageStore::new());
    info!("Message store initialized ({} seed entry)", store.snapshot().len());

    let schema = build_schema(store);
    let app = app(schema, &config.graphql_path);

    info!("=== GraphQL Playground Server ===");
    info!("Endpoint: http://{}{}", config.bind_addr, config.graphql_path);
    info!("GraphiQL available on GET at the same path");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK - GraphQL Playground Server"
}
