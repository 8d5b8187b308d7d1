use axum::response::Html;

use super::dto::ServiceForm;
use super::repo_types::Service;
use crate::auth::extractors::CurrentUser;
use crate::views::{error_block, escape, page};

pub fn service_list(viewer: &CurrentUser, services: &[Service]) -> Html<String> {
    let admin = viewer.is_admin();
    let mut rows = String::new();
    for s in services {
        let actions = if admin {
            format!(
                r#"<td><a href="/services/{id}/edit">Edit</a>
<form method="post" action="/services/{id}/delete" class="inline"><button type="submit">Delete</button></form></td>"#,
                id = s.id
            )
        } else {
            String::new()
        };
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{} min</td><td>&pound;{:.2}</td>{}</tr>\n",
            escape(&s.name),
            s.duration_minutes,
            s.price_gbp,
            actions
        ));
    }

    let body = if services.is_empty() {
        "<p>No services yet.</p>".to_string()
    } else {
        format!(
            "<table>\n<thead><tr><th>Name</th><th>Duration</th><th>Price</th>{}</tr></thead>\n<tbody>\n{}</tbody>\n</table>",
            if admin { "<th></th>" } else { "" },
            rows
        )
    };
    page("Services", Some(viewer), &body)
}

/// `action` is the form's POST target, so one template serves create and edit.
pub fn service_form(
    viewer: &CurrentUser,
    title: &str,
    action: &str,
    form: &ServiceForm,
    error: Option<&str>,
) -> Html<String> {
    let body = format!(
        r#"{error}
<form method="post" action="{action}">
<label>Name <input name="name" value="{name}" required></label>
<label>Duration (minutes) <input name="duration_minutes" type="number" min="1" step="1" value="{duration}" required></label>
<label>Price (GBP) <input name="price_gbp" type="number" min="0" step="0.01" value="{price}" required></label>
<button type="submit">Save</button>
<a href="/services">Cancel</a>
</form>"#,
        error = error_block(error),
        action = escape(action),
        name = escape(&form.name),
        duration = escape(&form.duration_minutes),
        price = escape(&form.price_gbp),
    );
    page(title, Some(viewer), &body)
}
