//! Server-rendered HTML shared by every page.

use axum::response::Html;

use crate::auth::extractors::CurrentUser;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline form error, or nothing.
pub fn error_block(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!(r#"<p class="error" role="alert">{}</p>"#, escape(msg)),
        None => String::new(),
    }
}

fn nav(viewer: Option<&CurrentUser>) -> String {
    match viewer {
        Some(user) => {
            let admin_link = if user.is_admin() {
                r#"<a href="/services/new">New service</a>"#
            } else {
                ""
            };
            format!(
                r#"<nav><a href="/">Dashboard</a> <a href="/appointments">Appointments</a> <a href="/services">Services</a> {admin_link} <span class="who">{email}</span> <a href="/logout">Log out</a></nav>"#,
                email = escape(&user.email),
            )
        }
        None => r#"<nav><a href="/">Dashboard</a> <a href="/login">Log in</a></nav>"#.to_string(),
    }
}

pub fn page(title: &str, viewer: Option<&CurrentUser>, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Clinic Admin</title>
</head>
<body>
{nav}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        nav = nav(viewer),
    ))
}

pub fn dashboard(viewer: Option<&CurrentUser>) -> Html<String> {
    let body = match viewer {
        Some(user) => format!(
            r#"<p>Signed in as {email} ({role}).</p>
<ul>
<li><a href="/appointments">View appointments</a></li>
<li><a href="/appointments/new">Book an appointment</a></li>
<li><a href="/services">Service catalog</a></li>
</ul>"#,
            email = escape(&user.email),
            role = if user.is_admin() { "admin" } else { "staff" },
        ),
        None => r#"<p><a href="/login">Log in</a> to manage appointments and services.</p>"#
            .to_string(),
    };
    page("Dashboard", viewer, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::Role;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
    }

    #[test]
    fn admin_nav_offers_new_service() {
        let admin = CurrentUser {
            id: 1,
            email: "admin@local".into(),
            role: Role::Admin,
        };
        let staff = CurrentUser {
            role: Role::Staff,
            ..admin.clone()
        };
        assert!(page("x", Some(&admin), "").0.contains("/services/new"));
        assert!(!page("x", Some(&staff), "").0.contains("/services/new"));
        assert!(page("x", None, "").0.contains("/login"));
    }
}
