//! Repository for member data access operations.

use crate::entities::{Member, MemberFilter, MemberPayload};
use crate::types::DatabaseResult;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Repository for member database operations.
///
/// Holds only the driver's pool; every call checks a connection out for the
/// duration of one statement and hands it back when the future completes.
#[derive(Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    /// Create a new member repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a member by id
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, first_name, email, phone, address FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    /// List members matching the filter, oldest first
    pub async fn list(&self, filter: &MemberFilter) -> DatabaseResult<Vec<Member>> {
        let filter = filter.normalized();

        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, first_name, email, phone, address
            FROM members
            WHERE (? IS NULL OR instr(first_name, ?) > 0)
              AND (? IS NULL OR instr(address, ?) > 0)
            ORDER BY id ASC
            "#,
        )
        .bind(filter.first_name.as_deref())
        .bind(filter.first_name.as_deref())
        .bind(filter.address.as_deref())
        .bind(filter.address.as_deref())
        .fetch_all(&self.pool)
        .await?;

        debug!(count = members.len(), ?filter, "listed members");
        Ok(members)
    }

    /// Insert a new member; the store assigns the id
    pub async fn create(&self, payload: &MemberPayload) -> DatabaseResult<Member> {
        let result = sqlx::query(
            "INSERT INTO members (first_name, email, phone, address) VALUES (?, ?, ?, ?)",
        )
        .bind(&payload.first_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.address)
        .execute(&self.pool)
        .await?;

        let member_id = result.last_insert_rowid();

        info!(member_id, "created member");

        Ok(payload.clone().into_member(member_id))
    }

    /// Replace the mutable fields of an existing member.
    ///
    /// Returns `false` when no row has the id; a missing row is never inserted.
    pub async fn update(&self, id: i64, payload: &MemberPayload) -> DatabaseResult<bool> {
        let result = sqlx::query(
            "UPDATE members SET first_name = ?, email = ?, phone = ?, address = ? WHERE id = ?",
        )
        .bind(&payload.first_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.address)
        .bind(id)
        .execute(&self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!(member_id = id, "updated member");
        }

        Ok(updated)
    }

    /// Delete a member, returning whether a row was removed
    pub async fn delete(&self, id: i64) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(member_id = id, "deleted member");
        }

        Ok(deleted)
    }

    /// Count all members
    pub async fn count(&self) -> DatabaseResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Remove every member, returning how many rows were deleted
    pub async fn clear(&self) -> DatabaseResult<u64> {
        let result = sqlx::query("DELETE FROM members")
            .execute(&self.pool)
            .await?;

        info!(removed = result.rows_affected(), "cleared members");
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;
    use tempfile::TempDir;

    async fn create_test_pool() -> (SqlitePool, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test_members.db");
        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePool::connect(&db_url).await.unwrap();
        run_migrations(&pool).await.unwrap();

        (pool, temp_dir)
    }

    fn payload(first_name: &str, address: &str) -> MemberPayload {
        MemberPayload::new(
            first_name,
            format!("{}@example.com", first_name.to_lowercase()),
            "555-0100",
            address,
        )
    }

    #[tokio::test]
    async fn test_create_and_find_member() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let created = repo.create(&payload("Ada", "1 Infinite Loop")).await.unwrap();
        assert!(created.id > 0);

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_missing_member_returns_none() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        assert!(repo.find_by_id(999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let first = repo.create(&payload("Ada", "A")).await.unwrap();
        let second = repo.create(&payload("Ada", "A")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_without_filter_returns_all_in_id_order() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let ada = repo.create(&payload("Ada", "1 Infinite Loop")).await.unwrap();
        let grace = repo.create(&payload("Grace", "2 Main St")).await.unwrap();

        let members = repo.list(&MemberFilter::default()).await.unwrap();
        assert_eq!(members, vec![ada, grace]);
    }

    #[tokio::test]
    async fn test_list_empty_store_returns_empty_vec() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let members = repo.list(&MemberFilter::by_first_name("Ada")).await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_first_name_substring() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let ada = repo.create(&payload("Ada", "1 Infinite Loop")).await.unwrap();
        let adam = repo.create(&payload("Adam", "3 Side Rd")).await.unwrap();
        repo.create(&payload("Grace", "2 Main St")).await.unwrap();

        let members = repo.list(&MemberFilter::by_first_name("Ada")).await.unwrap();
        assert_eq!(members, vec![ada, adam]);

        let members = repo.list(&MemberFilter::by_first_name("ada")).await.unwrap();
        assert!(members.is_empty(), "matching is case-sensitive");
    }

    #[tokio::test]
    async fn test_list_filters_by_address() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        repo.create(&payload("Ada", "1 Infinite Loop")).await.unwrap();
        let adam = repo.create(&payload("Adam", "2 Main St")).await.unwrap();

        let filter = MemberFilter::by_first_name("Ada").with_address("Main");
        let members = repo.list(&filter).await.unwrap();
        assert_eq!(members, vec![adam]);
    }

    #[tokio::test]
    async fn test_empty_filter_values_match_everything() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        repo.create(&payload("Ada", "1 Infinite Loop")).await.unwrap();
        repo.create(&payload("Grace", "2 Main St")).await.unwrap();

        let filter = MemberFilter {
            first_name: Some(String::new()),
            address: Some(String::new()),
        };
        assert_eq!(repo.list(&filter).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let created = repo.create(&payload("Ada", "1 Infinite Loop")).await.unwrap();
        let replacement = MemberPayload::new("Augusta", "augusta@x.com", "777", "2 Main St");

        assert!(repo.update(created.id, &replacement).await.unwrap());

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, replacement.into_member(created.id));
    }

    #[tokio::test]
    async fn test_update_missing_member_does_not_insert() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let updated = repo.update(42, &payload("Ada", "Nowhere")).await.unwrap();
        assert!(!updated);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_member_twice() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        let created = repo.create(&payload("Ada", "1 Infinite Loop")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_and_count() {
        let (pool, _temp_dir) = create_test_pool().await;
        let repo = MemberRepository::new(pool);

        repo.create(&payload("Ada", "A")).await.unwrap();
        repo.create(&payload("Grace", "B")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        assert_eq!(repo.clear().await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_queries_fail_without_schema() {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite:{}?mode=rwc", temp_dir.path().join("empty.db").display());
        let pool = SqlitePool::connect(&db_url).await.unwrap();
        let repo = MemberRepository::new(pool);

        let error = repo.find_by_id(1).await.unwrap_err();
        assert!(matches!(error, crate::types::DatabaseError::QueryError(_)));
    }
}
