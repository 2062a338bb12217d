use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::display::PriceDisplay;
use crate::models::{PriceOrigin, PriceQuote, SheetConfig, find_room, format_currency};
use crate::pricing::fallback::{DEFAULT_BASE_PRICE, fallback_price};
use crate::pricing::resolver::{PriceResolution, PriceResolver};

/// Fixed surcharge added to every quote.
pub const SERVICE_FEE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

pub struct PriceCalculator {
    resolver: Arc<PriceResolver>,
    display: Arc<dyn PriceDisplay>,
    latest: AtomicU64,
}

impl PriceCalculator {
    pub fn new(resolver: Arc<PriceResolver>, display: Arc<dyn PriceDisplay>) -> Self {
        Self {
            resolver,
            display,
            latest: AtomicU64::new(0),
        }
    }

    pub fn resolver(&self) -> &PriceResolver {
        &self.resolver
    }

    /// Resolves the base price and builds a quote.
    ///
    /// Every call gets a sequence number. Only the most recently issued call
    /// updates the display; results of superseded calls are returned but not
    /// shown.
    pub async fn calculate(&self, room_code: &str, guests: u32, sheet: &SheetConfig) -> PriceQuote {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.display.set_busy(true);
        let _busy = BusyGuard { calculator: self, seq };

        let resolution = self.resolver.resolve_base_price(room_code, sheet).await;
        let quote = build_quote(room_code, guests, resolution);

        info!(
            "Price calculated: Base {} + Service {} = Total {}",
            quote.base_price_display(),
            quote.service_fee_display(),
            quote.total_display()
        );

        if self.is_latest(seq) {
            self.display.show_quote(&quote);
        } else {
            debug!(seq, room = room_code, "discarding superseded quote");
        }

        quote
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }
}

/// Clears the busy indicator when the latest calculation ends, including when
/// its future is dropped before completing.
struct BusyGuard<'a> {
    calculator: &'a PriceCalculator,
    seq: u64,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.calculator.is_latest(self.seq) {
            self.calculator.display.set_busy(false);
        }
    }
}

/// Turns a resolution into a full quote. Guest counts below one count as one.
pub fn build_quote(room_code: &str, guests: u32, resolution: PriceResolution) -> PriceQuote {
    let room_code = room_code.trim();
    let room_name = find_room(room_code)
        .map(|room| room.name.to_string())
        .unwrap_or_else(|| room_code.to_string());

    let (base_price, total, origin, out_of_range) = match resolution.price.amount.checked_add(SERVICE_FEE) {
        Some(total) => (resolution.price.amount, total, resolution.price.origin, false),
        None => {
            let (base, origin) = match fallback_price(room_code) {
                Some(price) => (price, PriceOrigin::FallbackTable),
                None => (DEFAULT_BASE_PRICE, PriceOrigin::Default),
            };
            warn!(room = room_code, amount = %resolution.price.amount, "base price out of range");
            (base, base + SERVICE_FEE, origin, true)
        }
    };

    let degraded = resolution.error.is_some() || out_of_range;
    let status = match &resolution.error {
        None if out_of_range => Some(format!(
            "Listed price for '{}' is out of range. Using fallback price {}",
            room_code,
            format_currency(base_price)
        )),
        Some(e) => Some(format!(
            "{}. Using fallback price {}",
            e,
            format_currency(base_price)
        )),
        None if origin.is_fallback() => Some(format!(
            "No listed price for '{}'. Using default price {}",
            room_code,
            format_currency(base_price)
        )),
        None => None,
    };

    PriceQuote {
        room_code: room_code.to_string(),
        room_name,
        guests: guests.max(1),
        base_price,
        service_fee: SERVICE_FEE,
        total,
        origin,
        degraded,
        status,
    }
}
