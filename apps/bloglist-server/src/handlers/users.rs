//! User registration and listing.

use actix_web::{HttpResponse, web};

use bloglist_core::DomainError;
use bloglist_core::domain::User;
use bloglist_shared::dto::{RegisterUserRequest, UserResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn user_response(state: &AppState, user: User) -> AppResult<UserResponse> {
    let blogs = state.blogs.find_by_user_id(user.id).await?;

    Ok(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        name: user.name,
        blogs: blogs.into_iter().map(|b| b.id.to_string()).collect(),
    })
}

/// GET /api/users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let mut body = Vec::with_capacity(users.len());
    for user in users {
        body.push(user_response(&state, user).await?);
    }

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    User::validate_registration(&req.username, &req.password)?;

    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(DomainError::Duplicate(format!("username {} is taken", req.username)).into());
    }

    let password_hash = state.passwords.hash(&req.password)?;

    let user = User::new(req.username, req.name, password_hash);
    let saved = state.users.insert(user).await?;
    tracing::info!(user_id = %saved.id, username = %saved.username, "User registered");

    Ok(HttpResponse::Created().json(user_response(&state, saved).await?))
}
