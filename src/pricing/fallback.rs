use rust_decimal::Decimal;

use crate::models::find_room;

/// Price used when nothing better is known for a room code.
pub const DEFAULT_BASE_PRICE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Hardcoded price for a known room code (`A`..`D` or the long names).
pub fn fallback_price(room_code: &str) -> Option<Decimal> {
    find_room(room_code).and_then(|room| room.base_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_codes_map_to_table_prices() {
        assert_eq!(fallback_price("A"), Some(Decimal::from(800)));
        assert_eq!(fallback_price("B"), Some(Decimal::from(1000)));
        assert_eq!(fallback_price("c"), Some(Decimal::from(1500)));
        assert_eq!(fallback_price("D"), Some(Decimal::from(1800)));
    }

    #[test]
    fn unknown_codes_have_no_table_price() {
        assert_eq!(fallback_price("Z"), None);
        assert_eq!(fallback_price(""), None);
        assert_eq!(DEFAULT_BASE_PRICE, Decimal::from(1000));
    }
}
