use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::PriceError;
use crate::models::{PriceOrigin, ResolvedPrice, SheetConfig};
use crate::pricing::cache::PriceCache;
use crate::pricing::fallback::DEFAULT_BASE_PRICE;
use crate::pricing::strategy::{
    CachedRows, FallbackTable, GenericDefault, PriceStrategy, ResolveContext, SheetFetch,
    StaticTable, lock_cache,
};
use crate::sheets::SheetsClient;

/// A usable base price, plus the error that forced a fallback if there was one.
#[derive(Debug)]
pub struct PriceResolution {
    pub price: ResolvedPrice,
    pub error: Option<PriceError>,
}

/// Resolves room codes to base prices by walking an ordered strategy list.
///
/// Owns the sheet row cache; build one per process and share it.
pub struct PriceResolver {
    strategies: Vec<Box<dyn PriceStrategy>>,
    cache: Arc<Mutex<PriceCache>>,
}

impl PriceResolver {
    /// Catalog prices after `delay`, generic default for unknown rooms.
    pub fn static_table(delay: Duration) -> Self {
        Self {
            strategies: vec![Box::new(StaticTable::new(delay)), Box::new(GenericDefault)],
            cache: Arc::new(Mutex::new(PriceCache::default())),
        }
    }

    /// Cached rows, then a fresh fetch, then the fallback table, then the default.
    pub fn sheet(client: Arc<dyn SheetsClient>) -> Self {
        Self::sheet_with_cache(client, PriceCache::default())
    }

    pub fn sheet_with_cache(client: Arc<dyn SheetsClient>, cache: PriceCache) -> Self {
        let cache = Arc::new(Mutex::new(cache));
        Self {
            strategies: vec![
                Box::new(CachedRows::new(cache.clone())),
                Box::new(SheetFetch::new(client, cache.clone())),
                Box::new(FallbackTable),
                Box::new(GenericDefault),
            ],
            cache,
        }
    }

    pub fn from_strategies(strategies: Vec<Box<dyn PriceStrategy>>) -> Self {
        Self {
            strategies,
            cache: Arc::new(Mutex::new(PriceCache::default())),
        }
    }

    pub async fn resolve_base_price(&self, room_code: &str, sheet: &SheetConfig) -> PriceResolution {
        let mut ctx = ResolveContext::new(room_code, sheet);
        let mut error = None;

        for strategy in &self.strategies {
            match strategy.attempt(&mut ctx).await {
                Ok(Some(price)) => {
                    debug!(
                        room = room_code,
                        strategy = strategy.name(),
                        amount = %price.amount,
                        "base price resolved"
                    );
                    return PriceResolution { price, error };
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(room = room_code, strategy = strategy.name(), "price lookup failed: {}", e);
                    error.get_or_insert(e);
                }
            }
        }

        PriceResolution {
            price: ResolvedPrice {
                amount: DEFAULT_BASE_PRICE,
                origin: PriceOrigin::Default,
            },
            error,
        }
    }

    /// Drops cached rows, e.g. after the sheet settings changed.
    pub fn clear_cache(&self) {
        lock_cache(&self.cache).clear();
    }
}
