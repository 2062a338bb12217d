use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::find_room;
use crate::pricing::calculator::SERVICE_FEE;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid number regex"));

/// Finds the price for `room_code` in sheet rows.
///
/// A catalog room matches rows keyed by either its long or its short code.
/// The first row whose first cell equals one of those keys (trimmed,
/// case-insensitive) is the only one considered; its remaining cells are
/// scanned left to right and the first number-looking substring wins.
pub fn price_from_rows(rows: &[Vec<String>], room_code: &str) -> Option<Decimal> {
    let wanted = room_code.trim();
    let room = find_room(wanted);
    let matches_key = |key: &str| {
        let key = key.trim();
        key.eq_ignore_ascii_case(wanted)
            || room.is_some_and(|room| {
                key.eq_ignore_ascii_case(room.code) || key.eq_ignore_ascii_case(room.short_code)
            })
    };

    let row = rows
        .iter()
        .find(|row| row.first().is_some_and(|key| matches_key(key)))?;

    row.iter().skip(1).find_map(|cell| first_number(cell))
}

/// Numbers too large to carry the service fee count as unreadable.
fn first_number(cell: &str) -> Option<Decimal> {
    NUMBER_RE
        .find(cell)
        .and_then(|m| m.as_str().parse::<Decimal>().ok())
        .filter(|amount| amount.checked_add(SERVICE_FEE).is_some())
}
