//! User and ad routes. Paths keep their trailing slash; ads are created on `/ad/`
//! and addressed on `/ads/:id/`.

use crate::handlers::{create, delete, read, update};
use crate::models::{Ad, User};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/user/", post(create::<User>))
        .route(
            "/user/:id/",
            get(read::<User>).patch(update::<User>).delete(delete::<User>),
        )
        .with_state(state)
}

pub fn ad_routes(state: AppState) -> Router {
    Router::new()
        .route("/ad/", post(create::<Ad>))
        .route(
            "/ads/:id/",
            get(read::<Ad>).patch(update::<Ad>).delete(delete::<Ad>),
        )
        .with_state(state)
}
