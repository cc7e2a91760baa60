//! Tests against a live MongoDB server.
//!
//! These are ignored by default; run them with `cargo test -- --ignored`.
//! The server is taken from `MONGODB_URI` (default `localhost:27017`) and
//! must be reachable, otherwise the tests fail. All tests share the fixed
//! `users` collection, so they hold [`LOCK`] for their whole run.

use lazy_static::lazy_static;
use mongodb::bson::{oid::ObjectId, Bson};
use tokio::sync::{Mutex, MutexGuard};

use user_store::{RepositoryError, User, UserRepository};

lazy_static! {
    static ref LOCK: Mutex<()> = Mutex::new(());
}

/// Connect, wipe the collection and hand back the lock guard.
async fn setup() -> (MutexGuard<'static, ()>, UserRepository) {
    let guard = LOCK.lock().await;
    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "localhost:27017".to_string());
    let repo = UserRepository::new(&uri)
        .await
        .expect("connection string should parse");

    assert!(
        repo.check_connection().await,
        "MongoDB is not reachable at {}",
        uri
    );

    repo.delete_all_users().await.expect("cleanup failed");
    (guard, repo)
}

async fn seed(repo: &UserRepository) -> (User, User) {
    let mut nikola = User::new("Nikola", 30)
        .with_blog("rubikscode.net")
        .with_location("Belgrade");
    let mut vanja = User::new("Vanja", 27).with_location("Belgrade");

    repo.insert_user(&mut nikola).await.unwrap();
    repo.insert_user(&mut vanja).await.unwrap();
    (nikola, vanja)
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_insert_assigns_id_and_round_trips() {
    let (_guard, repo) = setup().await;

    let (nikola, vanja) = seed(&repo).await;
    assert!(nikola.id.is_some());
    assert!(vanja.id.is_some());
    assert_ne!(nikola.id, vanja.id);

    let found = repo.get_users_by_field("name", "Nikola").await.unwrap();
    assert_eq!(found, vec![nikola]);
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_insert_keeps_caller_supplied_id() {
    let (_guard, repo) = setup().await;

    let id = ObjectId::new();
    let mut user = User {
        id: Some(id),
        ..User::new("Napoleon", 51)
    };
    repo.insert_user(&mut user).await.unwrap();
    assert_eq!(user.id, Some(id));

    // The same id cannot be stored twice.
    let mut duplicate = user.clone();
    assert!(repo.insert_user(&mut duplicate).await.is_err());
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_field_queries() {
    let (_guard, repo) = setup().await;
    seed(&repo).await;

    assert_eq!(repo.get_all_users().await.unwrap().len(), 2);
    assert_eq!(
        repo.get_users_by_field("blog", "rubikscode.net")
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(repo
        .get_users_by_field("name", "Napoleon")
        .await
        .unwrap()
        .is_empty());
    assert!(repo
        .get_users_by_field("badFieldName", "value")
        .await
        .unwrap()
        .is_empty());
    assert_eq!(repo.get_users_by_field("location", "Belgrade").await.unwrap().len(), 2);

    let thirty = repo.get_users_by_field("age", "30").await.unwrap();
    assert_eq!(thirty.len(), 1);
    assert_eq!(thirty[0].name, "Nikola");
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_empty_store() {
    let (_guard, repo) = setup().await;

    assert!(repo.get_all_users().await.unwrap().is_empty());
    assert!(repo.get_users(0, 10).await.unwrap().is_empty());
    assert_eq!(repo.delete_all_users().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_pagination() {
    let (_guard, repo) = setup().await;
    seed(&repo).await;

    assert_eq!(repo.get_users(0, 1).await.unwrap().len(), 1);
    assert_eq!(repo.get_users(1, 1).await.unwrap().len(), 1);
    assert_eq!(repo.get_users(0, 10).await.unwrap().len(), 2);
    assert!(repo.get_users(5, 10).await.unwrap().is_empty());

    let first = repo.get_users(0, 1).await.unwrap();
    let second = repo.get_users(1, 1).await.unwrap();
    assert_ne!(first[0].id, second[0].id);
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_update_existing_field() {
    let (_guard, repo) = setup().await;
    let (nikola, _) = seed(&repo).await;
    let id = nikola.id.unwrap();

    assert!(repo.update_user(&id, "location", "Novi Sad").await.unwrap());
    let found = repo.get_users_by_field("location", "Novi Sad").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, Some(id));

    // Writing the value the field already holds modifies nothing.
    assert!(!repo.update_user(&id, "location", "Novi Sad").await.unwrap());
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_update_adds_new_field() {
    let (_guard, repo) = setup().await;
    let (_, vanja) = seed(&repo).await;
    let id = vanja.id.unwrap();

    assert!(repo.update_user(&id, "address", "Bulevar 1").await.unwrap());

    let found = repo.get_users_by_field("address", "Bulevar 1").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].extra.get("address"),
        Some(&Bson::String("Bulevar 1".to_string()))
    );
    assert_eq!(found[0].name, "Vanja");
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_update_unknown_id_is_a_no_op() {
    let (_guard, repo) = setup().await;
    seed(&repo).await;

    let missing = ObjectId::new();
    assert!(!repo.update_user(&missing, "name", "Ghost").await.unwrap());
    assert!(repo.get_users_by_field("name", "Ghost").await.unwrap().is_empty());
    assert_eq!(repo.get_all_users().await.unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_delete_by_id() {
    let (_guard, repo) = setup().await;
    let (nikola, _) = seed(&repo).await;

    assert!(!repo.delete_user_by_id(&ObjectId::new()).await.unwrap());
    assert_eq!(repo.get_all_users().await.unwrap().len(), 2);

    assert!(repo.delete_user_by_id(&nikola.id.unwrap()).await.unwrap());
    let remaining = repo.get_all_users().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Vanja");

    assert!(!repo.delete_user_by_id(&nikola.id.unwrap()).await.unwrap());
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_delete_all_returns_count() {
    let (_guard, repo) = setup().await;
    seed(&repo).await;

    assert_eq!(repo.delete_all_users().await.unwrap(), 2);
    assert!(repo.get_all_users().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_find_by_id_string() {
    let (_guard, repo) = setup().await;
    let (nikola, _) = seed(&repo).await;
    let id = nikola.id.unwrap();

    let found = repo.get_users_by_field("_id", &id.to_hex()).await.unwrap();
    assert_eq!(found, vec![nikola]);
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_mistyped_update_keeps_collection_readable() {
    let (_guard, repo) = setup().await;
    let (nikola, _) = seed(&repo).await;
    let id = nikola.id.unwrap();

    let err = repo.update_user(&id, "age", "thirty").await.unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidFieldValue { .. }));

    assert!(repo.update_user(&id, "age", 31_i64).await.unwrap());
    let all = repo.get_all_users().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(repo.get_users_by_field("age", "31").await.unwrap()[0].name, "Nikola");
}

#[tokio::test]
#[ignore = "needs a running MongoDB"]
async fn test_set_field_separates_missing_from_unchanged() {
    let (_guard, repo) = setup().await;
    let (nikola, _) = seed(&repo).await;
    let id = nikola.id.unwrap();

    let outcome = repo.set_field(&id, "location", "Belgrade").await.unwrap();
    assert!(outcome.matched);
    assert!(!outcome.modified);

    let outcome = repo
        .set_field(&ObjectId::new(), "location", "Belgrade")
        .await
        .unwrap();
    assert!(!outcome.matched);
}
