use rust_decimal::Decimal;
use serde::Serialize;

/// Which resolution step produced a base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceOrigin {
    StaticTable,
    SheetCache,
    Sheet,
    FallbackTable,
    Default,
}

impl PriceOrigin {
    /// True when the price was not read from the configured source.
    pub fn is_fallback(self) -> bool {
        matches!(self, PriceOrigin::FallbackTable | PriceOrigin::Default)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedPrice {
    pub amount: Decimal,
    pub origin: PriceOrigin,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    pub room_code: String,
    pub room_name: String,
    pub guests: u32,
    pub base_price: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
    pub origin: PriceOrigin,
    pub degraded: bool,
    pub status: Option<String>,
}

impl PriceQuote {
    pub fn base_price_display(&self) -> String {
        format_currency(self.base_price)
    }

    pub fn service_fee_display(&self) -> String {
        format_currency(self.service_fee)
    }

    pub fn total_display(&self) -> String {
        format_currency(self.total)
    }
}

/// `$800` for whole amounts, `$812.50` otherwise.
pub fn format_currency(amount: Decimal) -> String {
    if amount.fract().is_zero() {
        format!("${}", amount.trunc().normalize())
    } else {
        format!("${:.2}", amount)
    }
}
