//! In-memory repository for exercising services and handlers without SQLite

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use roster_database::{DatabaseError, Member, MemberFilter, MemberPayload};
use tokio::sync::RwLock;

use super::member_service::MemberRepo;
use crate::types::MemberResult;

/// Mock member repository for testing.
///
/// Mirrors the SQL repository: ids start at 1 and are never reused, listings
/// are ordered by id and use the same filter predicate.
pub struct MockMemberRepository {
    state: RwLock<MockState>,
    unavailable: AtomicBool,
}

struct MockState {
    members: BTreeMap<i64, Member>,
    next_id: i64,
}

impl MockMemberRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MockState {
                members: BTreeMap::new(),
                next_id: 1,
            }),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a connection error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> MemberResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::ConnectionError("mock store unavailable".to_string()).into());
        }
        Ok(())
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberRepo for MockMemberRepository {
    async fn find_by_id(&self, id: i64) -> MemberResult<Option<Member>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state.members.get(&id).cloned())
    }

    async fn list(&self, filter: &MemberFilter) -> MemberResult<Vec<Member>> {
        self.check_available()?;
        let state = self.state.read().await;
        Ok(state
            .members
            .values()
            .filter(|member| filter.matches(member))
            .cloned()
            .collect())
    }

    async fn create(&self, payload: &MemberPayload) -> MemberResult<Member> {
        self.check_available()?;
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let member = payload.clone().into_member(id);
        state.members.insert(id, member.clone());
        Ok(member)
    }

    async fn update(&self, id: i64, payload: &MemberPayload) -> MemberResult<bool> {
        self.check_available()?;
        let mut state = self.state.write().await;
        match state.members.get_mut(&id) {
            Some(member) => {
                *member = payload.clone().into_member(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> MemberResult<bool> {
        self.check_available()?;
        let mut state = self.state.write().await;
        Ok(state.members.remove(&id).is_some())
    }
}
