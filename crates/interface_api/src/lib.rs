//! HTTP API Layer
//!
//! This crate exposes the will generation core over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: validate, generate, batch, guidance, advisory, health
//! - **Middleware**: request logging and tracing
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! Nothing is stored: every request builds its will, renders it and forgets it.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use core_kernel::{Clock, SystemClock};
use domain_will::{AdvisoryService, AssemblyContext, KnowledgeBaseAdvisory};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{advisory, guidance, health, will};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub clock: Arc<dyn Clock>,
    pub advisory: AdvisoryService,
}

impl AppState {
    /// State with the wall clock and the built-in knowledge base
    pub fn new(config: ApiConfig) -> Self {
        let advisory = AdvisoryService::new(
            Arc::new(KnowledgeBaseAdvisory::new()),
            config.advisory_timeout(),
        );
        Self {
            config,
            clock: Arc::new(SystemClock::default()),
            advisory,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_advisory(mut self, advisory: AdvisoryService) -> Self {
        self.advisory = advisory;
        self
    }

    /// Assembly inputs for a request arriving now
    pub fn context(&self) -> AssemblyContext {
        AssemblyContext::from_clock(self.clock.as_ref())
            .with_century_policy(self.config.century_policy())
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health::health_check));

    let will_routes = Router::new()
        .route("/validate", post(will::validate_will))
        .route("/generate", post(will::generate_will))
        .route("/batch", post(will::generate_wills));

    let api_routes = Router::new()
        .nest("/wills", will_routes)
        .route("/guidance/signing", get(guidance::signing_guidance))
        .route("/advisory", post(advisory::ask))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
