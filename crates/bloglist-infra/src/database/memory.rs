//! In-memory repositories - used for tests and when no database is configured.
//!
//! Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

/// Blogs kept in a vector, in insertion order.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|b| b.id == blog.id) {
            return Err(RepoError::Constraint(format!("blog {} already exists", blog.id)));
        }
        store.push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|b| b.id == blog.id)
            .ok_or(RepoError::NotFound)?;
        *slot = blog.clone();
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|b| b.id != id);

        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|b| b.user_id == Some(user_id))
            .cloned()
            .collect())
    }
}

/// Users kept in a vector, in registration order. Usernames are unique.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if store
            .iter()
            .any(|u| u.id == user.id || u.username == user.username)
        {
            return Err(RepoError::Constraint(format!(
                "username {} already exists",
                user.username
            )));
        }
        store.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        if store
            .iter()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(RepoError::Constraint(format!(
                "username {} already exists",
                user.username
            )));
        }
        let slot = store
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|u| u.id != id);

        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(title: &str, owner: Option<Uuid>) -> Blog {
        Blog::new(
            owner,
            title.to_string(),
            None,
            "https://example.com".to_string(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryBlogRepository::new();
        repo.insert(blog("first", None)).await.unwrap();
        repo.insert(blog("second", None)).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_not_found() {
        let repo = InMemoryBlogRepository::new();
        let saved = repo.insert(blog("gone", None)).await.unwrap();

        repo.delete(saved.id).await.unwrap();

        assert!(matches!(
            repo.delete(saved.id).await,
            Err(RepoError::NotFound)
        ));
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_all() {
        let repo = InMemoryBlogRepository::new();
        let mut saved = repo.insert(blog("liked", None)).await.unwrap();
        repo.insert(blog("other", None)).await.unwrap();

        saved.likes = 42;
        repo.update(saved.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap().unwrap().likes, 42);

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(matches!(repo.update(saved).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_by_user_id() {
        let repo = InMemoryBlogRepository::new();
        let owner = Uuid::new_v4();
        repo.insert(blog("mine", Some(owner))).await.unwrap();
        repo.insert(blog("theirs", Some(Uuid::new_v4()))).await.unwrap();
        repo.insert(blog("legacy", None)).await.unwrap();

        let owned = repo.find_by_user_id(owner).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].title, "mine");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("root".into(), "Superuser".into(), "hash".into()))
            .await
            .unwrap();

        let result = repo
            .insert(User::new("root".into(), "Impostor".into(), "hash".into()))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert_eq!(
            repo.find_by_username("root").await.unwrap().unwrap().name,
            "Superuser"
        );
    }
}
