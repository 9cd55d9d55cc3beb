//! # Timetabler API
//!
//! HTTP surface over the timetable generator: catalog lookups, a per-user
//! generator session (courses, constraints, ranked candidates) and the
//! selected-schedule store that an applied timetable is written to.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into generator and store calls
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Environment-driven server settings

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use timetabler_core::{
    catalog::Catalog,
    generator::{GeneratorOptions, GeneratorSession},
    store::SelectedScheduleStore,
};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// The catalog is immutable after startup. Each user owns one generator
/// session behind its own lock, so concurrent requests for the same user are
/// serialized while different users proceed independently.
pub struct ApiState {
    /// Course catalog loaded at startup
    pub catalog: Arc<Catalog>,
    /// Destination for applied timetables
    pub store: Arc<dyn SelectedScheduleStore>,
    /// Generator sessions keyed by user id
    pub sessions: Mutex<HashMap<String, Arc<Mutex<GeneratorSession>>>>,
    /// Options passed to every generation run
    pub options: GeneratorOptions,
    /// Upper bound on catalog search results
    pub search_limit: usize,
}

impl ApiState {
    pub fn new(catalog: Catalog, store: Arc<dyn SelectedScheduleStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
            sessions: Mutex::new(HashMap::new()),
            options: GeneratorOptions::default(),
            search_limit: config::DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    /// The user's session if one was ever created. Never inserts.
    pub async fn existing_session(&self, user_id: &str) -> Option<Arc<Mutex<GeneratorSession>>> {
        self.sessions.lock().await.get(user_id).cloned()
    }

    /// Returns the user's session, creating an empty one on first use.
    pub async fn session(&self, user_id: &str) -> Arc<Mutex<GeneratorSession>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(GeneratorSession::new())))
            .clone()
    }
}

/// Builds the application router with every route attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Catalog lookups
        .merge(routes::catalog::routes())
        // Generator session and ranked timetables
        .merge(routes::generator::routes())
        // Stored selected schedules
        .merge(routes::schedule::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and state
///
/// Installs the tracing subscriber, attaches CORS and timeout layers and
/// serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        "Catalog holds {} courses; generator capped at {} timetables",
        state.catalog.len(),
        state.options.max_timetables
    );

    let app = build_router(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(parse_origins(origins))
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect()
}
