use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub scheduled_at: String, // YYYY-MM-DDTHH:MM
    pub service_id: i64,
    pub user_id: i64,
}

/// Appointment joined with the names a listing shows.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AppointmentListItem {
    pub id: i64,
    pub patient_name: String,
    pub scheduled_at: String,
    pub service_name: String,
    pub user_id: i64,
    pub booked_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub patient_name: String,
    pub scheduled_at: String,
    pub service_id: i64,
}
