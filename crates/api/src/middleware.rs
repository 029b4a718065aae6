use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};

use learnhub_auth::{TokenError, TokenResolver};

use crate::app::errors;
use crate::context::ActorContext;

#[derive(Clone)]
pub struct AuthState {
    pub resolver: Arc<dyn TokenResolver>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers()).ok_or_else(unauthorized)?;

    let actor = state.resolver.resolve(token).map_err(token_error_to_response)?;

    req.extensions_mut().insert(ActorContext::new(actor));

    Ok(next.run(req).await)
}

fn token_error_to_response(e: TokenError) -> Response {
    match e {
        TokenError::DirectoryUnavailable(_) => {
            tracing::error!(error = %e, "cannot resolve bearer token");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", e.to_string())
        }
        TokenError::Malformed | TokenError::UnknownPrincipal => {
            tracing::warn!(error = %e, "rejected bearer token");
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    let mut res = errors::json_error(
        StatusCode::UNAUTHORIZED,
        "unauthorized",
        "could not validate credentials",
    );
    res.headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    res
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
