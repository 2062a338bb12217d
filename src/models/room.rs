use rust_decimal::Decimal;
use serde::Serialize;

/// A bookable room category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoomType {
    pub code: &'static str,
    /// One-letter code used as the row key in the price sheet.
    pub short_code: &'static str,
    pub name: &'static str,
    pub base_price: Option<Decimal>,
}

pub const ROOM_CATALOG: [RoomType; 4] = [
    RoomType {
        code: "standard",
        short_code: "A",
        name: "Standard Room",
        base_price: Some(Decimal::from_parts(800, 0, 0, false, 0)),
    },
    RoomType {
        code: "deluxe",
        short_code: "B",
        name: "Deluxe Room",
        base_price: Some(Decimal::from_parts(1000, 0, 0, false, 0)),
    },
    RoomType {
        code: "suite",
        short_code: "C",
        name: "Executive Suite",
        base_price: Some(Decimal::from_parts(1500, 0, 0, false, 0)),
    },
    RoomType {
        code: "family",
        short_code: "D",
        name: "Family Suite",
        base_price: Some(Decimal::from_parts(1800, 0, 0, false, 0)),
    },
];

/// Looks a room up by its long or short code, ignoring case and surrounding
/// whitespace.
pub fn find_room(code: &str) -> Option<&'static RoomType> {
    let code = code.trim();
    ROOM_CATALOG
        .iter()
        .find(|room| room.code.eq_ignore_ascii_case(code) || room.short_code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_rooms_by_either_code() {
        assert_eq!(find_room("deluxe").map(|r| r.name), Some("Deluxe Room"));
        assert_eq!(find_room(" b ").map(|r| r.name), Some("Deluxe Room"));
        assert_eq!(find_room("FAMILY").map(|r| r.short_code), Some("D"));
        assert!(find_room("penthouse").is_none());
    }

    #[test]
    fn catalog_prices_are_whole_dollars() {
        let prices: Vec<Decimal> = ROOM_CATALOG.iter().filter_map(|r| r.base_price).collect();
        assert_eq!(
            prices,
            vec![Decimal::from(800), Decimal::from(1000), Decimal::from(1500), Decimal::from(1800)]
        );
    }
}
