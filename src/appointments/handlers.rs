use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use tracing::{info, instrument, warn};

use super::{dto::AppointmentForm, repo, views};
use crate::{
    auth::extractors::CurrentUser,
    catalog::repo::list_services,
    error::{AppError, AppResult},
    state::AppState,
};

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list_appointments))
        .route("/appointments/new", get(new_appointment_page).post(create_appointment))
        .route("/appointments/:id/delete", post(delete_appointment))
}

/// Admins see every appointment, everyone else only their own.
#[instrument(skip(state))]
pub async fn list_appointments(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    let items = if user.is_admin() {
        repo::list_all(&state.db).await?
    } else {
        repo::list_for_user(&state.db, user.id).await?
    };
    Ok(views::appointment_list(&user, &items))
}

#[instrument(skip(state))]
pub async fn new_appointment_page(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Html<String>> {
    let services = list_services(&state.db).await?;
    Ok(views::appointment_form(&user, &services, &AppointmentForm::default(), None))
}

#[instrument(skip(state, form))]
pub async fn create_appointment(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<AppointmentForm>,
) -> AppResult<Response> {
    let new = match form.validate() {
        Ok(n) => n,
        Err(msg) => {
            warn!("appointment form rejected");
            let services = list_services(&state.db).await?;
            let page = views::appointment_form(&user, &services, &form, Some(msg));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let created = repo::create_appointment(&state.db, &new, user.id).await?;
    info!(appointment_id = created.id, service_id = created.service_id, "appointment booked");
    Ok(Redirect::to("/appointments").into_response())
}

/// Owners may cancel their own bookings; admins may cancel any.
#[instrument(skip(state))]
pub async fn delete_appointment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    let appointment = repo::get_appointment(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Appointment not found"))?;
    if appointment.user_id != user.id && !user.is_admin() {
        warn!(appointment_id = id, "cancel refused for non-owner");
        return Err(AppError::Forbidden);
    }

    repo::delete_appointment(&state.db, id).await?;
    info!(appointment_id = id, "appointment cancelled");
    Ok(Redirect::to("/appointments"))
}
