use axum::response::Html;

use crate::views::{error_block, escape, page};

pub fn login_form(email: &str, next: &str, error: Option<&str>) -> Html<String> {
    let body = format!(
        r#"{error}
<form method="post" action="/login">
<input type="hidden" name="next" value="{next}">
<label>Email <input type="email" name="email" value="{email}" required autofocus></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Log in</button>
</form>"#,
        error = error_block(error),
        next = escape(next),
        email = escape(email),
    );
    page("Log in", None, &body)
}
