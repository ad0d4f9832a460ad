use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{create_router, AppState};
use crate::config::settings::AppConfig;
use crate::domain::ReleaseYearParser;
use crate::services::ingestion::IngestionService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(self) -> Result<()> {
        // Loaded once; every request reads the same dataset
        let dataset = IngestionService::new(self.config.data.clone()).run()?;

        let state = Arc::new(AppState {
            dataset,
            config: self.config,
            years: ReleaseYearParser::new()?,
        });

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Dashboard listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
