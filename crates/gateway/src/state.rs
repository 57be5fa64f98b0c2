//! Shared application state for the gateway

use std::sync::Arc;

use roster_config::DatabaseConfig;
use roster_members::{MemberRepo, MemberRepository, MemberService, MockMemberRepository};
use sqlx::SqlitePool;

use crate::error::{GatewayError, GatewayResult};

/// Shared application state, generic over the member store
pub struct GatewayState<R = MemberRepository> {
    /// Member service
    pub member_service: Arc<MemberService<R>>,
}

impl<R> Clone for GatewayState<R> {
    fn clone(&self) -> Self {
        Self {
            member_service: Arc::clone(&self.member_service),
        }
    }
}

impl GatewayState<MemberRepository> {
    /// Create a gateway state backed by an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_repository(MemberRepository::new(pool))
    }

    /// Create gateway state from database configuration, running migrations
    pub async fn from_config(config: &DatabaseConfig) -> GatewayResult<Self> {
        let pool = roster_database::initialize_database(config)
            .await
            .map_err(|e| GatewayError::DatabaseError(format!("Failed to initialize database: {}", e)))?;

        Ok(Self::new(pool))
    }
}

impl<R: MemberRepo> GatewayState<R> {
    pub fn with_repository(repository: R) -> Self {
        Self {
            member_service: Arc::new(MemberService::new(repository)),
        }
    }

    /// Get a member service reference
    pub fn member_service(&self) -> &MemberService<R> {
        &self.member_service
    }
}

/// Create a gateway state over an empty in-memory store for testing
pub fn create_test_gateway_state() -> GatewayState<MockMemberRepository> {
    GatewayState::with_repository(MockMemberRepository::new())
}
