use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Largest like count a blog can hold. Storage keeps likes in a signed
/// 64-bit column.
pub const MAX_LIKES: u64 = i64::MAX as u64;

/// Blog entity - a link to a blog post with its like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    /// Owner of the record. `None` for records created before ownership existed.
    pub user_id: Option<Uuid>,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog, rejecting a blank title or url and a like count
    /// above [`MAX_LIKES`].
    pub fn new(
        user_id: Option<Uuid>,
        title: String,
        author: Option<String>,
        url: String,
        likes: Option<u64>,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if url.trim().is_empty() {
            return Err(DomainError::Validation("url is required".to_string()));
        }
        let likes = likes.unwrap_or(0);
        check_likes(likes)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            author: author.filter(|a| !a.trim().is_empty()),
            url,
            likes,
            created_at: Utc::now(),
        })
    }

    pub fn set_likes(&mut self, likes: u64) -> Result<(), DomainError> {
        check_likes(likes)?;
        self.likes = likes;
        Ok(())
    }

    /// Whether `user_id` may delete this blog.
    ///
    /// Unowned records belong to nobody, so nobody may delete them.
    pub fn can_be_deleted_by(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }
}

fn check_likes(likes: u64) -> Result<(), DomainError> {
    if likes > MAX_LIKES {
        return Err(DomainError::Validation(format!(
            "likes must be at most {MAX_LIKES}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_likes_to_zero() {
        let blog = Blog::new(
            None,
            "Type wars".to_string(),
            Some("Robert C. Martin".to_string()),
            "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html".to_string(),
            None,
        )
        .unwrap();

        assert_eq!(blog.likes, 0);
    }

    #[test]
    fn test_new_rejects_blank_title_and_url() {
        let missing_title = Blog::new(None, "  ".to_string(), None, "http://a".to_string(), None);
        assert!(matches!(missing_title, Err(DomainError::Validation(_))));

        let missing_url = Blog::new(None, "Title".to_string(), None, String::new(), Some(3));
        assert!(matches!(missing_url, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_likes_above_storage_range_are_rejected() {
        let too_many = Blog::new(None, "T".to_string(), None, "u".to_string(), Some(MAX_LIKES + 1));
        assert!(matches!(too_many, Err(DomainError::Validation(_))));

        let mut blog =
            Blog::new(None, "T".to_string(), None, "u".to_string(), Some(MAX_LIKES)).unwrap();
        assert!(matches!(blog.set_likes(u64::MAX), Err(DomainError::Validation(_))));
        assert_eq!(blog.likes, MAX_LIKES);

        blog.set_likes(3).unwrap();
        assert_eq!(blog.likes, 3);
    }

    #[test]
    fn test_blank_author_is_dropped() {
        let blog = Blog::new(None, "T".to_string(), Some(" ".to_string()), "u".to_string(), None)
            .unwrap();
        assert_eq!(blog.author, None);
    }

    #[test]
    fn test_only_owner_can_delete() {
        let owner = Uuid::new_v4();
        let owned = Blog::new(Some(owner), "T".to_string(), None, "u".to_string(), None).unwrap();
        let unowned = Blog::new(None, "T".to_string(), None, "u".to_string(), None).unwrap();

        assert!(owned.can_be_deleted_by(owner));
        assert!(!owned.can_be_deleted_by(Uuid::new_v4()));
        assert!(!unowned.can_be_deleted_by(owner));
    }
}
