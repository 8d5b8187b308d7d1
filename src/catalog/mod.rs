//! Service catalog: list for every logged-in user, edits for admins.

mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
mod views;

use crate::state::AppState;
use axum::Router;

pub use dto::INVALID_SERVICE;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
