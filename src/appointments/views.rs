use axum::response::Html;

use super::dto::AppointmentForm;
use super::repo_types::AppointmentListItem;
use crate::auth::extractors::CurrentUser;
use crate::catalog::repo_types::Service;
use crate::views::{error_block, escape, page};

pub fn appointment_list(viewer: &CurrentUser, items: &[AppointmentListItem]) -> Html<String> {
    let mut rows = String::new();
    for a in items {
        let cancel = if a.user_id == viewer.id || viewer.is_admin() {
            format!(
                r#"<form method="post" action="/appointments/{}/delete" class="inline"><button type="submit">Cancel</button></form>"#,
                a.id
            )
        } else {
            String::new()
        };
        rows.push_str(&format!(
            "<tr><td>{when}</td><td>{patient}</td><td>{service}</td><td>{by}</td><td>{cancel}</td></tr>\n",
            when = escape(&a.scheduled_at.replacen('T', " ", 1)),
            patient = escape(&a.patient_name),
            service = escape(&a.service_name),
            by = escape(&a.booked_by),
        ));
    }

    let scope = if viewer.is_admin() {
        "All appointments."
    } else {
        "Appointments you booked."
    };
    let table = if items.is_empty() {
        "<p>No appointments.</p>".to_string()
    } else {
        format!(
            "<table>\n<thead><tr><th>When</th><th>Patient</th><th>Service</th><th>Booked by</th><th></th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };
    let body = format!(
        r#"<p>{scope} <a href="/appointments/new">Book an appointment</a></p>
{table}"#
    );
    page("Appointments", Some(viewer), &body)
}

pub fn appointment_form(
    viewer: &CurrentUser,
    services: &[Service],
    form: &AppointmentForm,
    error: Option<&str>,
) -> Html<String> {
    let mut options = String::from(r#"<option value="">Choose a service</option>"#);
    for s in services {
        let id = s.id.to_string();
        let selected = if form.service_id.trim() == id { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{id}"{selected}>{name} ({minutes} min)</option>"#,
            name = escape(&s.name),
            minutes = s.duration_minutes,
        ));
    }

    let body = format!(
        r#"{error}
<form method="post" action="/appointments/new">
<label>Patient name <input name="patient_name" value="{patient}" required></label>
<label>Date and time <input name="scheduled_at" type="datetime-local" value="{at}" required></label>
<label>Service <select name="service_id" required>{options}</select></label>
<button type="submit">Book</button>
<a href="/appointments">Cancel</a>
</form>"#,
        error = error_block(error),
        patient = escape(&form.patient_name),
        at = escape(&form.scheduled_at),
    );
    page("Book an appointment", Some(viewer), &body)
}
