use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact and stay details typed into the booking form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub special_requests: String,
}

impl BookingRequest {
    /// The form pre-selects the day after `today` as arrival date.
    pub fn default_arrival_date(today: NaiveDate) -> NaiveDate {
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationResult {
    pub reference: Uuid,
    pub message: String,
    /// Tells the page to reset every booking field.
    pub clear_fields: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_arrival_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(
            BookingRequest::default_arrival_date(today),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let new_years_eve = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(
            BookingRequest::default_arrival_date(new_years_eve),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn missing_form_fields_deserialize_as_empty() {
        let req: BookingRequest = serde_json::from_str(r#"{"full_name":"Jane"}"#).unwrap();
        assert_eq!(req.full_name, "Jane");
        assert!(req.email.is_empty());
        assert!(req.guests.is_none());
        assert!(req.arrival_date.is_none());
    }
}
