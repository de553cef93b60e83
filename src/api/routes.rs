//! Auth and health route handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;

use super::server::SharedState;
use crate::auth::models::{non_empty, SettingsRequest};
use crate::auth::{
    hash_password, issue_token, BearerToken, CurrentUser, LoginRequest, LoginResponse,
    RegisterRequest, UserInfo,
};
use crate::error::Error;

fn token_cookie(token: &str) -> String {
    format!("token={}; HttpOnly; SameSite=Strict; Path=/", token)
}

fn clear_token_cookie() -> String {
    "token=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0".to_string()
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

// Auth routes

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, Error> {
    let (Some(username), Some(email), Some(password)) = (
        non_empty(&req.username),
        non_empty(&req.email),
        non_empty(&req.password),
    ) else {
        return Err(Error::Validation("Missing required fields".to_string()));
    };

    let state = state.read().await;
    if state.store.find_user_by_email(email).await?.is_some() {
        return Err(Error::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(password)?;
    let user = state
        .store
        .create_user(username, email, &password_hash)
        .await?;

    tracing::info!("registered user {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    )
        .into_response())
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, Error> {
    let (Some(email), Some(password)) = (non_empty(&req.email), non_empty(&req.password)) else {
        return Err(Error::Validation(
            "Missing JSON body or required fields".to_string(),
        ));
    };

    let state = state.read().await;

    // "no such user" and "wrong password" must be indistinguishable
    let Some(user) = state.store.find_user_by_email(email).await? else {
        return Err(Error::Authentication("Invalid credentials".to_string()));
    };
    if !user.verify_password(password)? {
        return Err(Error::Authentication("Invalid credentials".to_string()));
    }

    let token = issue_token(
        user.id,
        state.config.auth.secret_key.as_bytes(),
        state.config.auth.token_ttl_hours,
    )?;

    let body = LoginResponse {
        token: token.clone(),
        user: UserInfo::from(&user),
    };

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, token_cookie(&token))],
        Json(body),
    )
        .into_response())
}

pub async fn auth_check(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> impl IntoResponse {
    Json(json!({ "user": UserInfo::from(&user) }))
}

pub async fn logout(
    State(state): State<SharedState>,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> impl IntoResponse {
    let revoked = state.read().await.revoked.clone();
    revoked.revoke(token).await;

    (
        StatusCode::OK,
        [(header::SET_COOKIE, clear_token_cookie())],
        Json(json!({ "message": "Successfully logged out" })),
    )
}

pub async fn update_settings(
    State(state): State<SharedState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<SettingsRequest>,
) -> Result<Response, Error> {
    let new_email = non_empty(&req.email);
    let new_password = non_empty(&req.new_password);

    if req.current_password.is_none() && new_email.is_none() && new_password.is_none() {
        return Err(Error::Validation("No data provided".to_string()));
    }

    let current_password = non_empty(&req.current_password)
        .ok_or_else(|| Error::Validation("Current password is required".to_string()))?;

    if !user.verify_password(current_password)? {
        return Err(Error::Authentication(
            "Incorrect current password".to_string(),
        ));
    }

    if let Some(email) = new_email {
        let state = state.read().await;
        if state.store.email_taken_by_other(email, user.id).await? {
            return Err(Error::Conflict("Email already in use".to_string()));
        }
    }

    let password_hash = new_password.map(hash_password).transpose()?;

    if new_email.is_some() || password_hash.is_some() {
        let mut state = state.write().await;
        state
            .store
            .update_login_settings(user.id, new_email, password_hash.as_deref())
            .await?;
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Login settings updated successfully" })),
    )
        .into_response())
}
