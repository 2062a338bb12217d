use tracing::info;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{BookingRequest, ConfirmationResult, PriceQuote, find_room};

/// Checks the contact fields and builds the confirmation shown to the guest.
///
/// Nothing is stored or sent anywhere; the caller clears the form afterwards.
pub fn confirm(
    request: &BookingRequest,
    last_quote: Option<&PriceQuote>,
) -> Result<ConfirmationResult, ValidationError> {
    let full_name = request.full_name.trim();
    let email = request.email.trim();

    if full_name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    let quote = last_quote.ok_or(ValidationError::NoQuote)?;

    let room_code = if request.room.trim().is_empty() {
        quote.room_code.as_str()
    } else {
        request.room.trim()
    };
    let room_name = find_room(room_code)
        .map(|room| room.name)
        .unwrap_or(room_code);
    let guests = request.guests.unwrap_or(quote.guests).max(1);

    let message = format!(
        "Booking confirmed for {} guest(s) in {}!\nTotal: {}\nConfirmation will be sent to {}",
        guests,
        room_name,
        quote.total_display(),
        email
    );

    let reference = Uuid::new_v4();
    info!(%reference, room = room_code, guests, "booking confirmed");

    Ok(ConfirmationResult {
        reference,
        message,
        clear_fields: true,
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::PriceOrigin;

    fn quote() -> PriceQuote {
        PriceQuote {
            room_code: "deluxe".to_string(),
            room_name: "Deluxe Room".to_string(),
            guests: 2,
            base_price: Decimal::from(1000),
            service_fee: Decimal::from(20),
            total: Decimal::from(1020),
            origin: PriceOrigin::StaticTable,
            degraded: false,
            status: None,
        }
    }

    fn request(name: &str, email: &str) -> BookingRequest {
        BookingRequest {
            full_name: name.to_string(),
            email: email.to_string(),
            room: "deluxe".to_string(),
            guests: Some(2),
            ..BookingRequest::default()
        }
    }

    #[test]
    fn empty_email_is_rejected() {
        let err = confirm(&request("Jane", ""), Some(&quote())).unwrap_err();
        assert_eq!(err, ValidationError::MissingEmail);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = confirm(&request("   ", "j@x.com"), Some(&quote())).unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }

    #[test]
    fn email_format_is_not_checked() {
        assert!(confirm(&request("Jane", "not-an-email"), Some(&quote())).is_ok());
    }

    #[test]
    fn confirmation_mentions_guests_room_total_and_email() {
        let result = confirm(&request("Jane", "j@x.com"), Some(&quote())).unwrap();
        assert!(result.clear_fields);
        assert!(result.message.contains("2 guest(s)"));
        assert!(result.message.contains("Deluxe Room"));
        assert!(result.message.contains("$1020"));
        assert!(result.message.contains("j@x.com"));
    }

    #[test]
    fn confirmation_needs_a_quote() {
        let err = confirm(&request("Jane", "j@x.com"), None).unwrap_err();
        assert_eq!(err, ValidationError::NoQuote);
    }

    #[test]
    fn room_and_guests_default_to_the_quote() {
        let req = BookingRequest {
            full_name: "Jane".to_string(),
            email: "j@x.com".to_string(),
            ..BookingRequest::default()
        };
        let result = confirm(&req, Some(&quote())).unwrap();
        assert!(result.message.starts_with("Booking confirmed for 2 guest(s) in Deluxe Room!"));
    }
}
