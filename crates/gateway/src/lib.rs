//! # Roster Gateway Crate
//!
//! HTTP surface for Roster: translates requests on `/api/member` into
//! [`roster_members::MemberService`] calls and maps service outcomes onto
//! status codes and JSON bodies.
//!
//! ## Architecture
//!
//! - **REST**: member CRUD and health endpoints with OpenAPI annotations
//! - **State**: shared [`GatewayState`], generic over the member store
//! - **Middleware**: CORS, request tracing and completion logging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster_config::DatabaseConfig;
//! use roster_gateway::{create_router, GatewayState};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let state = GatewayState::from_config(&DatabaseConfig::default()).await?;
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:7070").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

pub use error::{ErrorResponse, GatewayError, GatewayResult};
pub use state::{create_test_gateway_state, GatewayState};

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Json, Router};
use roster_members::MemberRepo;
use utoipa::OpenApi;

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::member::create_member,
        rest::member::list_members,
        rest::member::get_member,
        rest::member::update_member,
        rest::member::delete_member,
        rest::health::health_check,
    ),
    components(
        schemas(
            rest::member::MemberResponse,
            rest::member::MemberRequest,
            rest::member::ListMembersQuery,
            rest::member::MessageResponse,
            rest::health::HealthResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "members", description = "Member management"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create the main application router with all routes
pub fn create_router<R>(state: GatewayState<R>) -> Router
where
    R: MemberRepo + 'static,
{
    Router::new()
        .merge(rest::create_rest_routes::<R>().with_state(Arc::new(state)))
        .route(OPENAPI_PATH, get(openapi_document))
        .layer(middleware::create_cors_middleware())
        .layer(middleware::create_trace_middleware())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
