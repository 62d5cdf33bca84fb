//! User service integration tests.

use chrono::Utc;

use mock_domain_service::domain::{has_permission, CreateUser, UpdateUser, UserId, UserRole};
use mock_domain_service::errors::AppError;
use mock_domain_service::infra::Latency;
use mock_domain_service::seed;
use mock_domain_service::services::{MockUserService, UserManager, UserService};

fn directory() -> UserManager {
    UserManager::new(seed::users(), Latency::users())
}

#[tokio::test(start_paused = true)]
async fn login_stamps_last_login_and_returns_the_user() {
    let directory = directory();
    let before = Utc::now();

    let user = directory
        .login("maria.santos@example.com", "any-password")
        .await
        .unwrap()
        .expect("known email should authenticate");

    assert_eq!(user.id, UserId::new(2));
    assert!(user.last_login.expect("login was stamped") >= before);

    let stored = directory.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored.last_login, user.last_login);
}

#[tokio::test(start_paused = true)]
async fn login_rejects_unknown_emails_and_empty_passwords() {
    let directory = directory();

    let unknown = directory.login("nobody@example.com", "pw").await.unwrap();
    assert!(unknown.is_none());

    let rejected = directory
        .login("ana.oliveira@example.com", "")
        .await
        .unwrap();
    assert!(rejected.is_none());

    // the rejected attempt must not stamp anything
    let ana = directory.get_user(UserId::new(4)).await.unwrap().unwrap();
    assert!(ana.last_login.is_none());
    assert_eq!(ana.last_seen(Utc::now()), "never");
}

#[tokio::test(start_paused = true)]
async fn update_changes_only_the_given_fields() {
    let directory = directory();

    let updated = directory
        .update_user(
            UserId::new(3),
            UpdateUser {
                role: Some(UserRole::Admin),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("user 3 exists in the seed");

    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.name, "Pedro Costa");
    assert_eq!(updated.email, "pedro.costa@example.com");
}

#[tokio::test(start_paused = true)]
async fn directory_assigns_sequential_ids_and_removes_idempotently() {
    let directory = directory();

    let created = directory
        .add_user(CreateUser {
            name: "New Person".to_string(),
            email: "new.person@example.com".to_string(),
            role: UserRole::User,
        })
        .await
        .unwrap();

    assert_eq!(created.id, UserId::new(5));
    assert!(created.last_login.is_none());

    assert!(directory.remove_user(created.id).await.unwrap());
    assert!(!directory.remove_user(created.id).await.unwrap());
}

#[test]
fn route_identifiers_are_validated_before_any_lookup() {
    for raw in ["abc", "0", "-1"] {
        assert_eq!(
            raw.parse::<UserId>(),
            Err(AppError::InvalidId(raw.to_string()))
        );
    }
    assert_eq!("4".parse::<UserId>().unwrap(), UserId::new(4));
}

#[tokio::test]
async fn consumers_can_mock_the_directory() {
    let mut users = MockUserService::new();
    users.expect_list_users().returning(|| Ok(seed::users()));

    let listed = users.list_users().await.unwrap();
    assert_eq!(listed.len(), 4);

    // the seeded guest sits at the bottom of the hierarchy
    assert!(!has_permission(listed.last(), UserRole::User));
}
