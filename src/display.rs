use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::models::PriceQuote;

/// Output side of the booking page.
pub trait PriceDisplay: Send + Sync {
    fn set_busy(&self, busy: bool);
    fn show_quote(&self, quote: &PriceQuote);
}

/// What the page currently shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplaySnapshot {
    pub busy: bool,
    pub panel_visible: bool,
    pub room_price: String,
    pub service_fee: String,
    pub total_price: String,
    pub final_price: String,
    pub status: Option<String>,
    pub arrival_time: Option<String>,
    pub quote: Option<PriceQuote>,
}

#[derive(Debug, Default)]
pub struct DisplayState {
    inner: RwLock<DisplaySnapshot>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.read().clone()
    }

    pub fn last_quote(&self) -> Option<PriceQuote> {
        self.read().quote.clone()
    }

    pub fn set_arrival_time(&self, arrival_time: &str) {
        self.write().arrival_time = Some(arrival_time.to_string());
    }

    fn read(&self) -> RwLockReadGuard<'_, DisplaySnapshot> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, DisplaySnapshot> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PriceDisplay for DisplayState {
    fn set_busy(&self, busy: bool) {
        self.write().busy = busy;
    }

    fn show_quote(&self, quote: &PriceQuote) {
        let mut view = self.write();
        view.room_price = quote.base_price_display();
        view.service_fee = quote.service_fee_display();
        view.total_price = quote.total_display();
        view.final_price = quote.total_display();
        view.status = quote.status.clone();
        view.panel_visible = true;
        view.quote = Some(quote.clone());
    }
}
