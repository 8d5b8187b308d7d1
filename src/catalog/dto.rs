use serde::Deserialize;

use super::repo_types::{NewService, Service};

pub const INVALID_SERVICE: &str = "Enter a name, a positive duration, and a non negative price.";

/// Raw service form. Numbers stay text until `validate` so a bad value
/// re-renders the form instead of failing extraction.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServiceForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration_minutes: String,
    #[serde(default)]
    pub price_gbp: String,
}

impl ServiceForm {
    pub fn validate(&self) -> Result<NewService, &'static str> {
        let name = self.name.trim();
        let duration_minutes = self.duration_minutes.trim().parse::<i64>().ok();
        let price_gbp = self.price_gbp.trim().parse::<f64>().ok();

        match (name.is_empty(), duration_minutes, price_gbp) {
            (false, Some(d), Some(p)) if d > 0 && p.is_finite() && p >= 0.0 => Ok(NewService {
                name: name.to_string(),
                duration_minutes: d,
                price_gbp: p,
            }),
            _ => Err(INVALID_SERVICE),
        }
    }
}

impl From<&Service> for ServiceForm {
    fn from(s: &Service) -> Self {
        Self {
            name: s.name.clone(),
            duration_minutes: s.duration_minutes.to_string(),
            price_gbp: format!("{:.2}", s.price_gbp),
        }
    }
}
