//! Login handler.

use actix_web::{HttpResponse, web};

use bloglist_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !state.passwords.verify(&req.password, &user.password_hash)? {
        tracing::debug!(username = %req.username, "Login rejected");
        return Err(AppError::Unauthorized);
    }

    let token = state.tokens.generate_token(user.id, &user.username)?;
    tracing::debug!(username = %user.username, "Login succeeded");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
