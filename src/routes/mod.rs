use std::sync::Arc;

use axum::{Extension, Router};
use tower_cookies::CookieManagerLayer;

use crate::AppContext;

pub mod auth;
pub mod blog;
pub mod pages;

pub fn create_all_routes(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .merge(auth::auth_routes())
        .merge(blog::blog_routes())
        .merge(pages::page_routes())
        .layer(CookieManagerLayer::new())
        .layer(Extension(ctx))
}
