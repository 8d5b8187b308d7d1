use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{LoginForm, NextQuery},
        extractors::{safe_next, CurrentUser},
        services::authenticate,
        session::SessionKeys,
        views,
    },
    error::AppResult,
    state::AppState,
};

pub const LOGIN_FAILED: &str = "Invalid email or password.";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}

#[instrument(skip_all)]
pub async fn login_page(user: Option<CurrentUser>, Query(q): Query<NextQuery>) -> Response {
    let next = safe_next(q.next.as_deref());
    if user.is_some() {
        return Redirect::to(next).into_response();
    }
    views::login_form("", next, None).into_response()
}

#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let next = safe_next(form.next.as_deref()).to_string();

    let Some(user) = authenticate(&state.db, &form.email, &form.password).await? else {
        let page = views::login_form(form.email.trim(), &next, Some(LOGIN_FAILED));
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    };

    let keys = &state.session;
    let token = keys.sign(&user)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok((jar.add(keys.cookie(token)), Redirect::to(&next)).into_response())
}

#[instrument(skip_all)]
pub async fn logout(user: Option<CurrentUser>, jar: CookieJar) -> impl IntoResponse {
    if let Some(user) = user {
        info!(user_id = user.id, "user logged out");
    }
    (
        jar.remove(SessionKeys::removal_cookie()),
        Redirect::to("/login"),
    )
}
