use serde::Deserialize;
use time::{macros::format_description, PrimitiveDateTime};

use super::repo_types::NewAppointment;

pub const INVALID_APPOINTMENT: &str =
    "Enter a patient name, a valid date and time, and choose a service.";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AppointmentForm {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub scheduled_at: String,
    #[serde(default)]
    pub service_id: String,
}

/// Parses the `datetime-local` shape, with or without seconds, and returns it
/// normalized to minute precision.
pub(crate) fn normalize_scheduled_at(raw: &str) -> Option<String> {
    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let raw = raw.trim();
    let parsed = PrimitiveDateTime::parse(raw, minutes)
        .or_else(|_| PrimitiveDateTime::parse(raw, seconds))
        .ok()?;
    parsed.format(minutes).ok()
}

impl AppointmentForm {
    pub fn validate(&self) -> Result<NewAppointment, &'static str> {
        let patient_name = self.patient_name.trim();
        let scheduled_at = normalize_scheduled_at(&self.scheduled_at);
        let service_id = self.service_id.trim().parse::<i64>().ok();

        match (patient_name.is_empty(), scheduled_at, service_id) {
            (false, Some(at), Some(id)) if id > 0 => Ok(NewAppointment {
                patient_name: patient_name.to_string(),
                scheduled_at: at,
                service_id: id,
            }),
            _ => Err(INVALID_APPOINTMENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, at: &str, service: &str) -> AppointmentForm {
        AppointmentForm {
            patient_name: name.into(),
            scheduled_at: at.into(),
            service_id: service.into(),
        }
    }

    #[test]
    fn normalizes_timestamps() {
        assert_eq!(
            normalize_scheduled_at("2026-11-01T09:30").as_deref(),
            Some("2026-11-01T09:30")
        );
        assert_eq!(
            normalize_scheduled_at(" 2026-11-01T09:30:45 ").as_deref(),
            Some("2026-11-01T09:30")
        );
        assert_eq!(normalize_scheduled_at("2026-02-30T09:30"), None);
        assert_eq!(normalize_scheduled_at("tomorrow"), None);
    }

    #[test]
    fn accepts_valid_booking() {
        let new = form(" Jane Doe ", "2026-11-01T09:30", "3").validate().expect("valid");
        assert_eq!(new.patient_name, "Jane Doe");
        assert_eq!(new.service_id, 3);
    }

    #[test]
    fn rejects_bad_bookings() {
        for bad in [
            form("", "2026-11-01T09:30", "3"),
            form("Jane", "", "3"),
            form("Jane", "2026-11-01T09:30", ""),
            form("Jane", "2026-11-01T09:30", "0"),
            form("Jane", "2026-11-01T09:30", "abc"),
        ] {
            assert_eq!(bad.validate(), Err(INVALID_APPOINTMENT), "{:?}", bad);
        }
    }
}
