/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.

use crate::{config::Config, views::ViewEngine};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use recruitlink_shared::auth::jwt;
use recruitlink_shared::models::user::User;
use recruitlink_shared::store::{
    NotificationOutbox, RecruitmentStore, TimelineStore, UserDirectory,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// The authenticated user for the current request
///
/// Inserted into request extensions by the JWT middleware after the token
/// subject has been resolved against the user directory.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning. Storage is held behind the
/// repository traits so tests can swap in the in-memory store.
#[derive(Clone)]
pub struct AppState {
    /// User lookups and key updates
    pub users: Arc<dyn UserDirectory>,

    /// Recruitment rows and aggregates
    pub recruitments: Arc<dyn RecruitmentStore>,

    /// Queued notification requests
    pub notifications: Arc<dyn NotificationOutbox>,

    /// Timeline event records
    pub timeline: Arc<dyn TimelineStore>,

    /// Compiled templates
    pub views: Arc<ViewEngine>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state over the given stores
    pub fn new(
        users: Arc<dyn UserDirectory>,
        recruitments: Arc<dyn RecruitmentStore>,
        notifications: Arc<dyn NotificationOutbox>,
        timeline: Arc<dyn TimelineStore>,
        views: ViewEngine,
        config: Config,
    ) -> Self {
        Self {
            users,
            recruitments,
            notifications,
            timeline,
            views: Arc::new(views),
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// The router is organized as follows:
/// ```text
/// /
/// ├── /health                           # Health check (public)
/// └── /recruitment/
///     ├── GET  /settings                # Own recruitment key (authenticated)
///     ├── POST /settings                # Update recruitment key (authenticated)
///     ├── GET  /list/:user_id           # A user's recruitments (authenticated, admin)
///     ├── GET  /leaderboard/:filter     # Top recruiters (authenticated, admin)
///     ├── GET  /join/:recruitment_key   # Public join page
///     └── POST /join/phone              # Public phone submission
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-route basis)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Public join flow, reached from shared referral links
    let join_routes = Router::new()
        .route("/join/:recruitment_key", get(routes::join::join_page))
        .route("/join/phone", post(routes::join::submit_phone));

    // Management pages (require JWT authentication)
    let management_routes = Router::new()
        .route("/settings", get(routes::settings::get_settings))
        .route("/settings", post(routes::settings::post_settings))
        .route("/list/:user_id", get(routes::recruitments::list_recruitments))
        .route(
            "/leaderboard/:filter",
            get(routes::recruitments::leaderboard),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let recruitment_routes = join_routes.merge(management_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.is_empty() {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/recruitment", recruitment_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// JWT authentication middleware layer
///
/// Extracts and validates the JWT from the Authorization header, resolves
/// the token subject against the user directory, and injects `CurrentUser`
/// into request extensions. Tokens for unknown users are rejected.
async fn jwt_auth_layer(
    state: axum::extract::State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            crate::error::ApiError::Unauthorized("Missing authorization header".to_string())
        })?;

    // Parse Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| crate::error::ApiError::BadRequest("Expected Bearer token".to_string()))?;

    // Validate token
    let claims = jwt::validate_token(token, state.jwt_secret())?;

    // Resolve the subject to a full user row
    let user = state
        .users
        .find_by_id(claims.sub)
        .await?
        .ok_or_else(|| crate::error::ApiError::Unauthorized("Unknown user".to_string()))?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
