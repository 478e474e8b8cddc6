use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use tower_cookies::Cookies;

use crate::error::AppError;
use crate::{session, views, AppContext};

pub fn page_routes() -> Router {
    Router::new()
        .route("/about", get(about))
        .route("/contact", get(contact))
}

async fn about(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    Ok(views::about_page(viewer.as_ref()).into_response())
}

async fn contact(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    Ok(views::contact_page(viewer.as_ref()).into_response())
}
