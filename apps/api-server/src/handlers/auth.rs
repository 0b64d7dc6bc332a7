//! Authentication and account handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use feed_core::DomainError;
use feed_core::domain::User;
use feed_core::ports::{PasswordService, TokenService};
use feed_core::validate;
use feed_shared::dto::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse, StatusResponse,
    UpdateStatusRequest, UserResponse,
};

use crate::middleware::auth::Auth;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        status: user.status.clone(),
        posts: user.posts.iter().map(|id| id.to_string()).collect(),
        created_at: user.created_at.to_rfc3339(),
    }
}

/// PUT /auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let email = validate::normalize_email(&req.email);

    validate::signup(&email, &req.name, &req.password)?;

    let password_hash = password_service.hash(&req.password)?;

    // The repository enforces email uniqueness; a racing duplicate signup
    // surfaces as a constraint violation here.
    let user = User::new(email, req.name.trim().to_string(), password_hash);
    let created = state.users.create(user).await?;

    tracing::info!(user_id = %created.id, "User signed up");

    Ok(HttpResponse::Created().json(SignupResponse {
        user_id: created.id.to_string(),
    }))
}

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let email = validate::normalize_email(&req.email);

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    let valid = password_service.verify(&req.password, &user.password_hash)?;
    if !valid {
        return Err(AppError::Unauthenticated);
    }

    let token = token_service.issue(user.id, &user.email, token_service.default_ttl())?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user_id: user.id.to_string(),
    }))
}

/// GET /auth/status
pub async fn get_status(auth: Auth, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let caller = auth.require_authenticated()?;

    let user = state
        .users
        .find_by_id(caller)
        .await?
        .ok_or_else(|| DomainError::not_found("user", caller))?;

    Ok(HttpResponse::Ok().json(StatusResponse {
        status: user.status,
    }))
}

/// PATCH /auth/status
pub async fn set_status(
    auth: Auth,
    state: web::Data<AppState>,
    body: web::Json<UpdateStatusRequest>,
) -> AppResult<HttpResponse> {
    let caller = auth.require_authenticated()?;
    let req = body.into_inner();

    validate::status(&req.status)?;

    let mut user = state
        .users
        .find_by_id(caller)
        .await?
        .ok_or_else(|| DomainError::not_found("user", caller))?;

    user.set_status(req.status.trim().to_string());
    let saved = state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(StatusResponse {
        status: saved.status,
    }))
}

/// GET /auth/me
pub async fn me(auth: Auth, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let caller = auth.require_authenticated()?;

    let user = state
        .users
        .find_by_id(caller)
        .await?
        .ok_or_else(|| DomainError::not_found("user", caller))?;

    Ok(HttpResponse::Ok().json(to_user_response(&user)))
}
