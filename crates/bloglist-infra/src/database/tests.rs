use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

use super::entity::{blog, user};
use super::postgres_repo::{PostgresBlogRepository, PostgresUserRepository};

fn blog_model(title: &str, likes: i64) -> blog::Model {
    blog::Model {
        id: Uuid::new_v4(),
        user_id: Some(Uuid::new_v4()),
        title: title.to_owned(),
        author: Some("Michael Chan".to_owned()),
        url: "https://reactpatterns.com/".to_owned(),
        likes,
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_blog_by_id() {
    let model = blog_model("React patterns", 7);
    let blog_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let result: Option<Blog> = repo.find_by_id(blog_id).await.unwrap();

    let blog = result.unwrap();
    assert_eq!(blog.id, blog_id);
    assert_eq!(blog.title, "React patterns");
    assert_eq!(blog.likes, 7);
}

#[tokio::test]
async fn test_find_all_blogs() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            blog_model("React patterns", 7),
            blog_model("Type wars", 2),
        ]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let blogs = repo.find_all().await.unwrap();
    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0].title, "React patterns");
}

#[tokio::test]
async fn test_delete_missing_blog_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let result = BaseRepository::<Blog, Uuid>::delete(&repo, Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_user_by_username() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: Uuid::new_v4(),
            username: "root".to_owned(),
            name: "Superuser".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let user: User = repo.find_by_username("root").await.unwrap().unwrap();
    assert_eq!(user.name, "Superuser");
}

#[tokio::test]
async fn test_negative_likes_in_storage_are_reported_not_clamped() {
    let model = blog_model("Corrupted", -5);
    let blog_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model.clone()], vec![model]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let found: Result<Option<Blog>, RepoError> = repo.find_by_id(blog_id).await;
    assert!(matches!(found, Err(RepoError::Query(_))));
    assert!(matches!(repo.find_all().await, Err(RepoError::Query(_))));
}

#[tokio::test]
async fn test_insert_rejects_likes_outside_column_range() {
    let mut popular = Blog::new(
        None,
        "Too popular".to_owned(),
        None,
        "https://example.com".to_owned(),
        None,
    )
    .unwrap();
    popular.likes = u64::MAX;

    assert!(matches!(
        blog::ActiveModel::try_from(popular.clone()),
        Err(RepoError::Constraint(_))
    ));

    // No results queued: reaching the database would fail with a query error.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresBlogRepository::new(db);

    assert!(matches!(
        repo.insert(popular.clone()).await,
        Err(RepoError::Constraint(_))
    ));
    assert!(matches!(repo.update(popular).await, Err(RepoError::Constraint(_))));
}
