//! Request guard middleware and token extraction

use crate::api::server::SharedState;
use crate::auth::jwt::validate_token;
use crate::auth::models::User;
use crate::error::{Error, Result};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Authenticated user resolved by the request guard
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Raw token string the current request authenticated with
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Pull the raw token out of a request.
///
/// Checks the `Authorization` header first (with or without the `Bearer `
/// scheme prefix), then the `token` cookie set at login.
pub fn extract_token(req: &Request) -> Result<String> {
    if let Some(auth_header) = req.headers().get("Authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
    }

    if let Some(cookie_header) = req.headers().get("Cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                if let Some(token) = cookie.trim().strip_prefix("token=") {
                    if !token.is_empty() {
                        return Ok(token.to_string());
                    }
                }
            }
        }
    }

    Err(Error::MissingToken)
}

/// Request guard for protected routes.
///
/// Rejects missing, revoked, expired and malformed tokens, resolves the
/// token's subject against the credential store and injects the resulting
/// identity into the request extensions, where handlers pick it up via
/// [`axum::Extension`]. Handlers must take the caller's identity from here,
/// never from the request body.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> std::result::Result<Response, Error> {
    let token = extract_token(&req)?;

    let (revoked, secret) = {
        let state = state.read().await;
        (state.revoked.clone(), state.config.auth.secret_key.clone())
    };

    if revoked.is_revoked(&token).await {
        return Err(Error::RevokedToken);
    }

    let claims = validate_token(&token, secret.as_bytes())?;

    let user: User = state
        .read()
        .await
        .store
        .find_user_by_id(claims.sub)
        .await?
        .ok_or_else(|| Error::NotFound("User not found!".to_string()))?;

    req.extensions_mut().insert(CurrentUser(user));
    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    fn request_with_headers(headers: &[(&str, &str)]) -> axum::extract::Request {
        let mut builder = Request::builder().method("GET").uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token_missing() {
        let req = request_with_headers(&[]);
        assert!(matches!(extract_token(&req), Err(Error::MissingToken)));
    }

    #[test]
    fn test_extract_token_bearer_header() {
        let req = request_with_headers(&[("Authorization", "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_extract_token_without_scheme_prefix() {
        let req = request_with_headers(&[("Authorization", "abc.def.ghi")]);
        assert_eq!(extract_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let req = request_with_headers(&[("Cookie", "theme=dark; token=abc.def.ghi")]);
        assert_eq!(extract_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_header_takes_precedence_over_cookie() {
        let req = request_with_headers(&[
            ("Authorization", "Bearer from-header"),
            ("Cookie", "token=from-cookie"),
        ]);
        assert_eq!(extract_token(&req).unwrap(), "from-header");
    }
}
