//! Blog handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use bloglist_core::DomainError;
use bloglist_core::domain::Blog;
use bloglist_core::stats::{self, AuthorBlogs, AuthorLikes};
use bloglist_shared::dto::{BlogResponse, CreateBlogRequest, UpdateBlogRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn blog_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_string(),
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user: blog.user_id.map(|id| id.to_string()),
    }
}

fn blog_not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Blog",
        id,
    }
    .into()
}

/// GET /api/blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;

    Ok(HttpResponse::Ok().json(blogs.into_iter().map(blog_response).collect::<Vec<_>>()))
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| blog_not_found(id))?;

    Ok(HttpResponse::Ok().json(blog_response(blog)))
}

/// POST /api/blogs - the token's user becomes the owner.
pub async fn create_blog(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let blog = Blog::new(
        Some(identity.user_id),
        req.title,
        req.author,
        req.url,
        req.likes,
    )?;

    // The token may outlive its user.
    if state.users.find_by_id(identity.user_id).await?.is_none() {
        return Err(AppError::Unauthorized);
    }

    let saved = state.blogs.insert(blog).await?;
    tracing::info!(blog_id = %saved.id, user = %identity.username, "Blog created");

    Ok(HttpResponse::Created().json(blog_response(saved)))
}

/// PUT /api/blogs/{id} - any signed-in user may change the like count.
pub async fn update_blog(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| blog_not_found(id))?;

    blog.set_likes(body.likes)?;
    let saved = state.blogs.update(blog).await?;
    tracing::debug!(blog_id = %id, likes = saved.likes, user = %identity.username, "Blog likes updated");

    Ok(HttpResponse::Ok().json(blog_response(saved)))
}

/// DELETE /api/blogs/{id} - owner only.
pub async fn delete_blog(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| blog_not_found(id))?;

    if !blog.can_be_deleted_by(identity.user_id) {
        tracing::warn!(blog_id = %id, user = %identity.username, "Refused delete of blog owned by someone else");
        return Err(AppError::Forbidden);
    }

    state.blogs.delete(id).await?;
    tracing::info!(blog_id = %id, user = %identity.username, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[derive(Serialize)]
pub struct BlogStatsResponse {
    pub total_likes: u64,
    pub favorite_blog: Option<BlogResponse>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// GET /api/blogs/stats
pub async fn blog_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;

    Ok(HttpResponse::Ok().json(BlogStatsResponse {
        total_likes: stats::total_likes(&blogs),
        favorite_blog: stats::favorite_blog(&blogs).cloned().map(blog_response),
        most_blogs: stats::most_blogs(&blogs),
        most_likes: stats::most_likes(&blogs),
    }))
}
