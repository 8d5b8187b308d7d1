use serde::Serialize;
use sqlx::FromRow;

/// A bookable service in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub duration_minutes: i64,
    pub price_gbp: f64,
}

/// Validated fields for an insert or update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub duration_minutes: i64,
    pub price_gbp: f64,
}
