use std::sync::Arc;

use axum::extract::Path;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use entity::user;
use tower_cookies::Cookies;

use crate::error::AppError;
use crate::flash::{self, Notice};
use crate::forms::{CommentForm, PostForm};
use crate::{repo, service, session, views, AppContext};

pub fn blog_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/post/:id", get(show_post).post(add_comment))
        .route("/new-post", get(new_post_page).post(create_post))
        .route("/edit-post/:id", get(edit_post_page).post(edit_post))
        .route("/delete/:id", get(delete_post))
}

async fn index(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    let notice = flash::take(&cookies).map(Notice::message);
    let posts = repo::all_posts_with_authors(&ctx.db).await?;
    Ok(views::index_page(viewer.as_ref(), notice, &posts).into_response())
}

async fn show_post(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    render_post_page(&ctx, viewer.as_ref(), id, None).await
}

async fn add_comment(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Path(id): Path<i32>,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    let data = match form.validate() {
        Ok(data) => data,
        Err(AppError::ValidationFailed(message)) => {
            return render_post_page(&ctx, viewer.as_ref(), id, Some(&message)).await;
        }
        Err(other) => return Err(other),
    };

    match service::add_comment(&ctx.db, viewer.as_ref(), id, data).await {
        Ok(_) => render_post_page(&ctx, viewer.as_ref(), id, None).await,
        Err(AppError::AuthenticationRequired) => {
            flash::set(&cookies, Notice::SignInToComment);
            Ok(Redirect::to("/login").into_response())
        }
        Err(other) => Err(other),
    }
}

async fn new_post_page(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    service::require_admin(viewer.as_ref())?;
    Ok(views::post_editor_page(viewer.as_ref(), None, None).into_response())
}

async fn create_post(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    service::require_admin(viewer.as_ref())?;
    let data = match form.validate() {
        Ok(data) => data,
        Err(AppError::ValidationFailed(message)) => {
            return Ok(
                views::post_editor_page(viewer.as_ref(), None, Some(&message)).into_response(),
            );
        }
        Err(other) => return Err(other),
    };
    service::create_post(&ctx.db, viewer.as_ref(), data).await?;
    Ok(Redirect::to("/").into_response())
}

async fn edit_post_page(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    service::require_admin(viewer.as_ref())?;
    let post = repo::find_post(&ctx.db, id).await?.ok_or(AppError::NotFound)?;
    Ok(views::post_editor_page(viewer.as_ref(), Some(&post), None).into_response())
}

async fn edit_post(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Path(id): Path<i32>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    service::require_admin(viewer.as_ref())?;
    let data = match form.validate() {
        Ok(data) => data,
        Err(AppError::ValidationFailed(message)) => {
            let post = repo::find_post(&ctx.db, id).await?.ok_or(AppError::NotFound)?;
            return Ok(
                views::post_editor_page(viewer.as_ref(), Some(&post), Some(&message))
                    .into_response(),
            );
        }
        Err(other) => return Err(other),
    };
    let post = service::edit_post(&ctx.db, viewer.as_ref(), id, data).await?;
    Ok(Redirect::to(&format!("/post/{}", post.id)).into_response())
}

async fn delete_post(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    service::delete_post(&ctx.db, viewer.as_ref(), id).await?;
    Ok(Redirect::to("/").into_response())
}

async fn render_post_page(
    ctx: &AppContext,
    viewer: Option<&user::Model>,
    id: i32,
    error: Option<&str>,
) -> Result<Response, AppError> {
    let post = repo::find_post(&ctx.db, id).await?.ok_or(AppError::NotFound)?;
    let comments = repo::comments_for_post(&ctx.db, post.id).await?;
    Ok(views::post_page(viewer, error, &post, &comments).into_response())
}
