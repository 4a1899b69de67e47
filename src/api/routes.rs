//! Router configuration for the API.
//!
//! This is the pipeline assembly point: every processing stage is
//! registered here in a fixed, order-sensitive sequence in front of the
//! route table.

use axum::{Extension, Router, http::HeaderValue, middleware, routing::get};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::handlers;
use crate::api::middleware::{
    access_log_stage, build_security_headers, cookie_stage, form_body_stage, guard_stage,
    json_body_stage, request_id_stage, security_headers_stage,
};
use crate::config::CorsConfig;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Stage Order
/// Axum applies layers in reverse order of declaration (last added runs
/// first), so the list below reads inside-out. Per request the stages
/// run:
///
/// 1. Request ID (correlation id for the rest of the pipeline)
/// 2. Security headers (stamped on every response, including errors)
/// 3. JSON body parsing (malformed JSON short-circuits with 400 here)
/// 4. CORS
/// 5. URL-encoded body parsing
/// 6. Cookie parsing
/// 7. Access log (only requests that reach this stage are logged)
/// 8. Request guard (sees parsed body and cookies, runs last before dispatch)
/// 9. Route dispatch
///
/// # Routes
/// - `/` - Greeting
/// - `/health` - Process health snapshot
/// - `/api` - API index
/// - `/api/auth/*` - Auth route group
/// - `/api/users/*` - User route group
pub fn create_router(state: AppState) -> Router {
    let security_headers = build_security_headers(&state.settings.security_headers);
    let cors = cors_layer(&state.settings.cors);

    let api_routes = Router::new()
        .route("/", get(handlers::meta::api_index))
        .nest("/auth", handlers::auth::auth_routes())
        .nest("/users", handlers::users::user_routes());

    Router::new()
        .route("/", get(handlers::meta::root))
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api_routes)
        // Layers in reverse: the first .layer() below is the innermost stage
        .layer(middleware::from_fn_with_state(state.clone(), guard_stage))
        .layer(middleware::from_fn(access_log_stage))
        .layer(middleware::from_fn(cookie_stage))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            form_body_stage,
        ))
        .layer(cors)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            json_body_stage,
        ))
        .layer(middleware::from_fn(security_headers_stage))
        .layer(Extension(security_headers))
        .layer(middleware::from_fn(request_id_stage))
        .with_state(state)
}

/// Build the CORS layer from configuration.
///
/// The default configuration (`allowed_origins = ["*"]`) is fully
/// permissive; listing concrete origins restricts the allow list.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin: AllowOrigin =
        if config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*") {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            tracing::info!(origins = ?config.allowed_origins, "CORS allowed origins configured");
            AllowOrigin::list(origins)
        };

    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(allow_origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_create_router_with_default_settings() {
        // Router assembly must not panic with defaults; route and layer
        // conflicts surface here at construction time
        let state = AppState::new(Settings::default());
        let _router = create_router(state);
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        let config = CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        };
        let _layer = cors_layer(&config);
    }
}
