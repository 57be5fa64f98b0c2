//! Service-level tests against a real SQLite database

use roster_config::DatabaseConfig;
use roster_database::initialize_database;
use roster_members::{MemberError, MemberFilter, MemberPayload, MemberRepository, MemberService};
use tempfile::TempDir;

async fn create_test_service() -> (MemberService<MemberRepository>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", temp_dir.path().join("service.db").display()),
        max_connections: 2,
    };

    let pool = initialize_database(&config)
        .await
        .expect("Failed to create test database");

    (MemberService::from_pool(pool), temp_dir)
}

fn member(first_name: &str, address: &str) -> MemberPayload {
    MemberPayload::new(
        first_name,
        format!("{}@example.com", first_name.to_lowercase()),
        "555-0100",
        address,
    )
}

#[tokio::test]
async fn test_member_lifecycle() {
    let (service, _temp_dir) = create_test_service().await;

    let created = service
        .create(MemberPayload::new("Ada", "ada@x.com", "555", "1 Infinite Loop"))
        .await
        .unwrap();
    assert_eq!(
        service.get(created.id).await.unwrap(),
        Some(created.clone())
    );

    let updated = service
        .update(
            created.id,
            MemberPayload::new("Ada", "ada@x.com", "555", "2 Main St"),
        )
        .await
        .unwrap();
    assert_eq!(updated.address, "2 Main St");
    assert_eq!(service.get(created.id).await.unwrap(), Some(updated));

    service.delete(created.id).await.unwrap();
    assert!(service.get(created.id).await.unwrap().is_none());
    assert!(matches!(
        service.delete(created.id).await,
        Err(MemberError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_list_matches_created_members_exactly() {
    let (service, _temp_dir) = create_test_service().await;

    let created = vec![
        service.create(member("Ada", "1 Infinite Loop")).await.unwrap(),
        service.create(member("Grace", "2 Main St")).await.unwrap(),
        service.create(member("Alan", "3 Bletchley Park")).await.unwrap(),
    ];

    let all = service.list(&MemberFilter::default()).await.unwrap();
    assert_eq!(all, created);

    let filtered = service.list(&MemberFilter::by_first_name("Grace")).await.unwrap();
    assert_eq!(filtered, vec![created[1].clone()]);

    let by_address = service
        .list(&MemberFilter::default().with_address("Park"))
        .await
        .unwrap();
    assert_eq!(by_address, vec![created[2].clone()]);
}

#[tokio::test]
async fn test_update_missing_member_leaves_store_unchanged() {
    let (service, _temp_dir) = create_test_service().await;
    let existing = service.create(member("Ada", "1 Infinite Loop")).await.unwrap();

    let error = service
        .update(999_999, member("Mallory", "Nowhere"))
        .await
        .unwrap_err();
    assert!(error.is_not_found());

    let all = service.list(&MemberFilter::default()).await.unwrap();
    assert_eq!(all, vec![existing]);
}

#[tokio::test]
async fn test_stored_values_are_trimmed() {
    let (service, _temp_dir) = create_test_service().await;

    let created = service
        .create(MemberPayload::new(" Ada ", "ada@x.com ", " 555", "1 Infinite Loop "))
        .await
        .unwrap();

    let stored = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Ada");
    assert_eq!(stored.email, "ada@x.com");
    assert_eq!(stored.phone, "555");
    assert_eq!(stored.address, "1 Infinite Loop");
}
