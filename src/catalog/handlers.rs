use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use tracing::{info, instrument, warn};

use super::{dto::ServiceForm, repo, views};
use crate::{
    auth::extractors::{AdminUser, CurrentUser},
    error::{AppError, AppResult},
    state::AppState,
};

const NOT_FOUND: &str = "Service not found";

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/services", get(list_services))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/services/new", get(new_service_page).post(create_service))
        .route("/services/:id/edit", get(edit_service_page).post(update_service))
        .route("/services/:id/delete", post(delete_service))
}

#[instrument(skip(state))]
pub async fn list_services(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    let services = repo::list_services(&state.db).await?;
    Ok(views::service_list(&user, &services))
}

#[instrument(skip_all)]
pub async fn new_service_page(AdminUser(user): AdminUser) -> Html<String> {
    views::service_form(&user, "New service", "/services/new", &ServiceForm::default(), None)
}

#[instrument(skip(state, form))]
pub async fn create_service(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Form(form): Form<ServiceForm>,
) -> AppResult<Response> {
    let new = match form.validate() {
        Ok(n) => n,
        Err(msg) => {
            warn!("service form rejected");
            let page = views::service_form(&user, "New service", "/services/new", &form, Some(msg));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let created = repo::create_service(&state.db, &new).await?;
    info!(service_id = created.id, name = %created.name, "service created");
    Ok(Redirect::to("/services").into_response())
}

#[instrument(skip(state, user))]
pub async fn edit_service_page(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let service = repo::get_service(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))?;
    Ok(views::service_form(
        &user,
        "Edit service",
        &format!("/services/{}/edit", id),
        &ServiceForm::from(&service),
        None,
    ))
}

#[instrument(skip(state, user, form))]
pub async fn update_service(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<i64>,
    Form(form): Form<ServiceForm>,
) -> AppResult<Response> {
    let new = match form.validate() {
        Ok(n) => n,
        Err(msg) => {
            let action = format!("/services/{}/edit", id);
            let page = views::service_form(&user, "Edit service", &action, &form, Some(msg));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    if !repo::update_service(&state.db, id, &new).await? {
        return Err(AppError::NotFound(NOT_FOUND));
    }
    info!(service_id = id, user_id = user.id, "service updated");
    Ok(Redirect::to("/services").into_response())
}

#[instrument(skip(state, user))]
pub async fn delete_service(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let removed = repo::delete_service(&state.db, id).await?;
    info!(service_id = id, user_id = user.id, removed, "service delete");
    Ok(Redirect::to("/services"))
}
