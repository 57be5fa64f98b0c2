//! REST API endpoints for the gateway

pub mod health;
pub mod member;

use std::sync::Arc;

use axum::{routing::get, Router};
use roster_members::MemberRepo;

use crate::state::GatewayState;

/// Create all REST API routes
pub fn create_rest_routes<R>() -> Router<Arc<GatewayState<R>>>
where
    R: MemberRepo + 'static,
{
    Router::new()
        .route("/health", get(health::health_check))
        .merge(member::create_member_routes::<R>())
}

pub use health::*;
pub use member::*;
