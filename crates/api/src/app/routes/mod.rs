use axum::{Router, middleware::from_fn_with_state, routing::get};

use crate::middleware::{AuthState, auth_middleware};

pub mod courses;
pub mod reviews;
pub mod system;

/// Router for every endpoint below `/`; mutations require a bearer token.
pub fn router(auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/whoami", get(system::whoami))
        .route_layer(from_fn_with_state(auth.clone(), auth_middleware));

    Router::new()
        .nest("/reviews", reviews::router(auth))
        .nest("/courses", courses::router())
        .merge(protected)
}
