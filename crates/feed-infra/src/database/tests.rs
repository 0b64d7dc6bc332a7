use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use feed_core::domain::Post;
use feed_core::ports::{PostRepository, UserRepository};

use crate::database::entity::{post, user};
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(id: Uuid, creator: Uuid, title: &str, seq: i64) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id,
        creator_id: creator,
        title: title.to_owned(),
        content: "Content here".to_owned(),
        image_url: "images/x.png".to_owned(),
        seq,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_post_by_id_maps_to_domain() {
    let post_id = Uuid::new_v4();
    let creator = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, creator, "Test Post", 1)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let found = result.unwrap();
    assert_eq!(found.id, post_id);
    assert_eq!(found.creator, creator);
    assert_eq!(found.title, "Test Post");
}

#[tokio::test]
async fn find_user_by_email_attaches_backlink() {
    let user_id = Uuid::new_v4();
    let first_post = Uuid::new_v4();
    let second_post = Uuid::new_v4();
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: user_id,
            email: "a@x.com".to_owned(),
            password_hash: "hash".to_owned(),
            name: "Ann".to_owned(),
            status: "I am new!".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .append_query_results(vec![vec![
            post_model(first_post, user_id, "First", 1),
            post_model(second_post, user_id, "Second", 2),
        ]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();

    assert_eq!(found.id, user_id);
    assert_eq!(found.posts, vec![first_post, second_post]);
}

#[tokio::test]
async fn find_page_maps_all_rows() {
    let creator = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(Uuid::new_v4(), creator, "Newest", 2),
            post_model(Uuid::new_v4(), creator, "Older", 1),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let page = repo.find_page(0, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title, "Newest");
}

#[tokio::test]
async fn delete_missing_post_reports_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![sea_orm::MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo.delete(Uuid::new_v4()).await;
    assert!(matches!(result, Err(feed_core::error::RepoError::NotFound)));
}
