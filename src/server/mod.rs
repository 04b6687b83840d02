// HTTP adapter
// Exposes the plain and JSON entry points over axum

mod handlers;

pub use handlers::{create_router, health_check, RespondRequest, RespondResponse};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::pipeline::ResolutionPipeline;

/// HTTP server wrapping one shared pipeline
pub struct ReplyServer {
    pipeline: Arc<ResolutionPipeline>,
    config: ServerConfig,
}

impl ReplyServer {
    pub fn new(pipeline: ResolutionPipeline, config: ServerConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config,
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.config.bind_address))?;

        let app = create_router(self.pipeline)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        tracing::info!("Starting Heartline server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
