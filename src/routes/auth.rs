use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Query;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use tower_cookies::Cookies;

use crate::error::AppError;
use crate::flash::{self, Notice};
use crate::forms::{LoginForm, RegisterForm};
use crate::{redirect, service, session, views, AppContext};

pub fn auth_routes() -> Router {
    Router::new()
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}

async fn register_page(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    let notice = flash::take(&cookies).map(Notice::message);
    Ok(views::register_page(viewer.as_ref(), notice, None).into_response())
}

async fn register(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Query(params): Query<HashMap<String, String>>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let data = match form.validate() {
        Ok(data) => data,
        Err(AppError::ValidationFailed(message)) => {
            return Ok(views::register_page(None, None, Some(&message)).into_response());
        }
        Err(other) => return Err(other),
    };

    match service::register(&ctx.db, data).await {
        Ok(user) => {
            session::bind(&cookies, &ctx.key, user.id);
            Ok(redirect_after_auth(params.get("next")).into_response())
        }
        Err(AppError::DuplicateAccount) => {
            flash::set(&cookies, Notice::AccountExists);
            Ok(Redirect::to("/login").into_response())
        }
        Err(other) => Err(other),
    }
}

async fn login_page(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    let viewer = session::current_user(&ctx.db, &cookies, &ctx.key).await?;
    let notice = flash::take(&cookies).map(Notice::message);
    Ok(views::login_page(viewer.as_ref(), notice, None).into_response())
}

async fn login(
    Extension(ctx): Extension<Arc<AppContext>>,
    cookies: Cookies,
    Query(params): Query<HashMap<String, String>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let data = match form.validate() {
        Ok(data) => data,
        Err(AppError::ValidationFailed(message)) => {
            return Ok(views::login_page(None, None, Some(&message)).into_response());
        }
        Err(other) => return Err(other),
    };

    match service::login(&ctx.db, data).await {
        Ok(user) => {
            session::bind(&cookies, &ctx.key, user.id);
            Ok(redirect_after_auth(params.get("next")).into_response())
        }
        Err(AppError::UnknownAccount) => Ok(views::login_page(
            None,
            None,
            Some("That email does not exist. Please try again"),
        )
        .into_response()),
        Err(AppError::BadCredentials) => {
            Ok(views::login_page(None, None, Some("Password incorrect")).into_response())
        }
        Err(other) => Err(other),
    }
}

async fn logout(Extension(ctx): Extension<Arc<AppContext>>, cookies: Cookies) -> Redirect {
    session::clear(&cookies, &ctx.key);
    Redirect::to("/login")
}

/// Post-auth destination: the `next` query parameter when it passes the
/// redirect-safety check, the post listing otherwise.
fn redirect_after_auth(next: Option<&String>) -> Redirect {
    match next {
        Some(target) if redirect::is_safe(target) => Redirect::to(target),
        _ => Redirect::to("/"),
    }
}
