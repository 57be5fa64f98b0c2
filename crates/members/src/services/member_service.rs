//! Member service: the business-rule seam between the HTTP layer and storage.

use std::future::Future;

use roster_database::{Member, MemberFilter, MemberPayload, MemberRepository};
use sqlx::SqlitePool;
use tracing::debug;

use super::mock_repositories::MockMemberRepository;
use crate::types::{MemberError, MemberResult};
use crate::utils::validation::validate_payload;

/// Data-shape operations a member store must provide.
///
/// Implemented by the SQL-backed [`MemberRepository`] and by
/// [`MockMemberRepository`] for tests.
pub trait MemberRepo: Send + Sync {
    fn find_by_id(&self, id: i64) -> impl Future<Output = MemberResult<Option<Member>>> + Send;
    fn list(&self, filter: &MemberFilter) -> impl Future<Output = MemberResult<Vec<Member>>> + Send;
    fn create(&self, payload: &MemberPayload) -> impl Future<Output = MemberResult<Member>> + Send;
    fn update(
        &self,
        id: i64,
        payload: &MemberPayload,
    ) -> impl Future<Output = MemberResult<bool>> + Send;
    fn delete(&self, id: i64) -> impl Future<Output = MemberResult<bool>> + Send;
}

impl MemberRepo for MemberRepository {
    async fn find_by_id(&self, id: i64) -> MemberResult<Option<Member>> {
        Ok(MemberRepository::find_by_id(self, id).await?)
    }

    async fn list(&self, filter: &MemberFilter) -> MemberResult<Vec<Member>> {
        Ok(MemberRepository::list(self, filter).await?)
    }

    async fn create(&self, payload: &MemberPayload) -> MemberResult<Member> {
        Ok(MemberRepository::create(self, payload).await?)
    }

    async fn update(&self, id: i64, payload: &MemberPayload) -> MemberResult<bool> {
        Ok(MemberRepository::update(self, id, payload).await?)
    }

    async fn delete(&self, id: i64) -> MemberResult<bool> {
        Ok(MemberRepository::delete(self, id).await?)
    }
}

/// Service for managing member operations
pub struct MemberService<R> {
    member_repository: R,
}

impl MemberService<MemberRepository> {
    /// Create a member service backed by the SQL repository
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(MemberRepository::new(pool))
    }
}

impl MemberService<MockMemberRepository> {
    /// Create a member service over an empty in-memory store
    pub fn new_for_testing() -> Self {
        Self::new(MockMemberRepository::new())
    }
}

impl<R> MemberService<R>
where
    R: MemberRepo,
{
    pub fn new(member_repository: R) -> Self {
        Self { member_repository }
    }

    pub fn repository(&self) -> &R {
        &self.member_repository
    }

    /// Validate and store a new member
    pub async fn create(&self, payload: MemberPayload) -> MemberResult<Member> {
        let payload = validate_payload(payload)?;
        self.member_repository.create(&payload).await
    }

    /// Look up a member; absence is not an error
    pub async fn get(&self, id: i64) -> MemberResult<Option<Member>> {
        self.member_repository.find_by_id(id).await
    }

    /// List members matching the filter
    pub async fn list(&self, filter: &MemberFilter) -> MemberResult<Vec<Member>> {
        let filter = filter.normalized();
        debug!(?filter, "listing members");
        self.member_repository.list(&filter).await
    }

    /// Replace every mutable field of an existing member.
    ///
    /// Fails with [`MemberError::NotFound`] if the id is unknown, including
    /// when the row disappears between the existence check and the write.
    pub async fn update(&self, id: i64, payload: MemberPayload) -> MemberResult<Member> {
        if self.member_repository.find_by_id(id).await?.is_none() {
            return Err(MemberError::not_found(id));
        }

        let payload = validate_payload(payload)?;

        if !self.member_repository.update(id, &payload).await? {
            return Err(MemberError::not_found(id));
        }

        Ok(payload.into_member(id))
    }

    /// Delete a member
    pub async fn delete(&self, id: i64) -> MemberResult<()> {
        if !self.member_repository.delete(id).await? {
            return Err(MemberError::not_found(id));
        }

        Ok(())
    }
}
