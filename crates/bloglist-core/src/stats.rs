//! Aggregations over a list of blogs.
//!
//! Every function here is pure. Ties always resolve to whichever candidate
//! was seen first, so the answer for a given slice never changes.

use serde::Serialize;

use crate::domain::Blog;

/// The author with the most blogs, and how many they wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// The author with the most likes summed over all their blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// Sum of likes over all blogs. Zero for an empty slice, `u64::MAX` at most.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |total, b| total.saturating_add(b.likes))
}

/// The blog with the most likes.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(b) if b.likes >= blog.likes => Some(b),
        _ => Some(blog),
    })
}

/// The author who wrote the most blogs.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    leader_by(blogs, |_| 1).map(|(author, blogs)| AuthorBlogs {
        author: author.to_string(),
        blogs: blogs as usize,
    })
}

/// The author whose blogs have the most likes in total.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    leader_by(blogs, |b| b.likes).map(|(author, likes)| AuthorLikes {
        author: author.to_string(),
        likes,
    })
}

/// Totals `weight` per author, keeping authors in order of first appearance,
/// and returns the first author holding the largest total.
///
/// Blogs without an author are skipped. Totals saturate at `u64::MAX`.
fn leader_by<'a>(
    blogs: &'a [Blog],
    weight: impl Fn(&Blog) -> u64,
) -> Option<(&'a str, u64)> {
    let mut totals: Vec<(&'a str, u64)> = Vec::new();

    for blog in blogs {
        let Some(author) = blog.author.as_deref() else {
            continue;
        };
        match totals.iter_mut().find(|(a, _)| *a == author) {
            Some((_, total)) => *total = total.saturating_add(weight(blog)),
            None => totals.push((author, weight(blog))),
        }
    }

    totals.into_iter().fold(None, |best, entry| match best {
        Some(b) if b.1 >= entry.1 => Some(b),
        _ => Some(entry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(title: &str, author: &str, likes: u64) -> Blog {
        Blog::new(
            None,
            title.to_string(),
            Some(author.to_string()),
            format!("https://example.com/{}", title.replace(' ', "-")),
            Some(likes),
        )
        .unwrap()
    }

    fn sample_blogs() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&[]), 0);
        assert_eq!(total_likes(&sample_blogs()[..1]), 7);
        assert_eq!(total_likes(&sample_blogs()), 36);
    }

    #[test]
    fn test_favorite_blog() {
        assert_eq!(favorite_blog(&[]), None);

        let blogs = sample_blogs();
        let favorite = favorite_blog(&blogs).unwrap();
        assert_eq!(favorite.title, "Canonical string reduction");
        assert_eq!(favorite.likes, 12);
    }

    #[test]
    fn test_favorite_blog_tie_keeps_first() {
        let blogs = vec![blog("a", "X", 4), blog("b", "Y", 9), blog("c", "Z", 9)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "b");
    }

    #[test]
    fn test_most_blogs() {
        assert_eq!(most_blogs(&[]), None);

        let blogs = vec![blog("1", "A", 0), blog("2", "B", 0), blog("3", "A", 0)];
        assert_eq!(
            most_blogs(&blogs),
            Some(AuthorBlogs {
                author: "A".to_string(),
                blogs: 2
            })
        );

        assert_eq!(
            most_blogs(&sample_blogs()),
            Some(AuthorBlogs {
                author: "Robert C. Martin".to_string(),
                blogs: 3
            })
        );
    }

    #[test]
    fn test_most_blogs_tie_keeps_first_author() {
        let blogs = vec![
            blog("1", "B", 0),
            blog("2", "A", 0),
            blog("3", "A", 0),
            blog("4", "B", 0),
        ];
        assert_eq!(most_blogs(&blogs).unwrap().author, "B");
    }

    #[test]
    fn test_most_likes_sums_likes_rather_than_counting_posts() {
        let blogs = vec![blog("1", "A", 5), blog("2", "A", 3), blog("3", "B", 10)];

        // Counting posts would pick A with 2 blogs.
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "B".to_string(),
                likes: 10
            })
        );
    }

    #[test]
    fn test_most_likes() {
        assert_eq!(most_likes(&[]), None);
        assert_eq!(
            most_likes(&sample_blogs()),
            Some(AuthorLikes {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17
            })
        );
    }

    #[test]
    fn test_huge_like_counts_saturate_instead_of_overflowing() {
        let mut big = blog("big", "A", 0);
        big.likes = u64::MAX;
        let mut other = blog("other", "B", 0);
        other.likes = u64::MAX - 1;
        let blogs = vec![big, blog("small", "A", 1), other];

        assert_eq!(total_likes(&blogs), u64::MAX);
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "A".to_string(),
                likes: u64::MAX
            })
        );
        assert_eq!(favorite_blog(&blogs).unwrap().title, "big");
    }

    #[test]
    fn test_blogs_without_author_are_not_attributed() {
        let mut anonymous = blog("anon", "nobody", 100);
        anonymous.author = None;
        let blogs = vec![anonymous.clone(), blog("1", "A", 1)];

        assert_eq!(most_likes(&blogs).unwrap().author, "A");
        assert_eq!(most_blogs(&[anonymous]), None);
    }
}
