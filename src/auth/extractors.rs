use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, Uri},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use super::repo_types::Role;
use super::session::{SessionKeys, SESSION_COOKIE};
use crate::error::AppError;

/// Identity carried by a valid session cookie.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A logged-in user whose role is `admin`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

pub enum AuthRejection {
    /// Send the browser to the login form, then back to `next`.
    LoginRequired { next: String },
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::LoginRequired { next } => {
                Redirect::to(&format!("/login?next={}", urlencoding::encode(&next))).into_response()
            }
            AuthRejection::Forbidden => AppError::Forbidden.into_response(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Arc<SessionKeys>: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let login_required = || AuthRejection::LoginRequired {
            next: parts.uri.path().to_string(),
        };

        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            debug!(path = %parts.uri.path(), "no session cookie");
            return Err(login_required());
        };

        let keys = Arc::<SessionKeys>::from_ref(state);
        let claims = match keys.verify(cookie.value()) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "invalid or expired session");
                return Err(login_required());
            }
        };

        Ok(CurrentUser {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<SessionKeys>: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            warn!(user_id = user.id, path = %parts.uri.path(), "admin route refused");
            return Err(AuthRejection::Forbidden);
        }
        Ok(AdminUser(user))
    }
}

/// Only same-site absolute paths are followed after login. Anything that
/// does not parse as a bare path (control characters, scheme, authority)
/// falls back to `/`, which also keeps the value usable as a header.
pub(crate) fn safe_next(next: Option<&str>) -> &str {
    let Some(n) = next else {
        return "/";
    };
    if !n.starts_with('/')
        || n.starts_with("//")
        || n.contains('\\')
        || n.chars().any(char::is_control)
    {
        return "/";
    }
    match n.parse::<Uri>() {
        Ok(uri) if uri.scheme().is_none() && uri.authority().is_none() => n,
        _ => "/",
    }
}
