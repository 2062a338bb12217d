use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::debug;

use crate::error::PriceError;
use crate::models::{PriceOrigin, ResolvedPrice, SheetConfig, find_room};
use crate::pricing::cache::{CacheKey, PriceCache};
use crate::pricing::fallback::{DEFAULT_BASE_PRICE, fallback_price};
use crate::pricing::parse::price_from_rows;
use crate::sheets::SheetsClient;

/// State shared by the strategies of one resolution.
pub struct ResolveContext<'a> {
    pub room_code: &'a str,
    pub sheet: &'a SheetConfig,
    /// Set once sheet rows were read, so later strategies do not fetch again.
    pub rows_consulted: bool,
}

impl<'a> ResolveContext<'a> {
    pub fn new(room_code: &'a str, sheet: &'a SheetConfig) -> Self {
        Self {
            room_code,
            sheet,
            rows_consulted: false,
        }
    }
}

/// One step of the base price resolution chain.
///
/// `Ok(None)` hands over to the next step; an error is recorded and the chain
/// carries on as well.
#[async_trait]
pub trait PriceStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, ctx: &mut ResolveContext<'_>) -> Result<Option<ResolvedPrice>, PriceError>;
}

pub(crate) fn lock_cache(cache: &Mutex<PriceCache>) -> MutexGuard<'_, PriceCache> {
    cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Room catalog prices, served after a simulated network delay.
pub struct StaticTable {
    delay: Duration,
}

impl StaticTable {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PriceStrategy for StaticTable {
    fn name(&self) -> &'static str {
        "static_table"
    }

    async fn attempt(&self, ctx: &mut ResolveContext<'_>) -> Result<Option<ResolvedPrice>, PriceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(find_room(ctx.room_code)
            .and_then(|room| room.base_price)
            .map(|amount| ResolvedPrice {
                amount,
                origin: PriceOrigin::StaticTable,
            }))
    }
}

/// Reads the price from rows fetched less than a freshness window ago.
pub struct CachedRows {
    cache: Arc<Mutex<PriceCache>>,
}

impl CachedRows {
    pub fn new(cache: Arc<Mutex<PriceCache>>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl PriceStrategy for CachedRows {
    fn name(&self) -> &'static str {
        "sheet_cache"
    }

    async fn attempt(&self, ctx: &mut ResolveContext<'_>) -> Result<Option<ResolvedPrice>, PriceError> {
        if ctx.sheet.missing_field().is_some() {
            return Ok(None);
        }

        let key = CacheKey::for_config(ctx.sheet);
        let Some(rows) = lock_cache(&self.cache).fresh_rows(&key, Instant::now()) else {
            return Ok(None);
        };

        debug!(room = ctx.room_code, "using cached sheet rows");
        ctx.rows_consulted = true;
        Ok(price_from_rows(&rows, ctx.room_code).map(|amount| ResolvedPrice {
            amount,
            origin: PriceOrigin::SheetCache,
        }))
    }
}

/// Fetches the configured range, caches it and reads the price from it.
pub struct SheetFetch {
    client: Arc<dyn SheetsClient>,
    cache: Arc<Mutex<PriceCache>>,
}

impl SheetFetch {
    pub fn new(client: Arc<dyn SheetsClient>, cache: Arc<Mutex<PriceCache>>) -> Self {
        Self { client, cache }
    }
}

#[async_trait]
impl PriceStrategy for SheetFetch {
    fn name(&self) -> &'static str {
        "sheet"
    }

    async fn attempt(&self, ctx: &mut ResolveContext<'_>) -> Result<Option<ResolvedPrice>, PriceError> {
        if ctx.rows_consulted {
            return Ok(None);
        }
        if let Some(field) = ctx.sheet.missing_field() {
            return Err(PriceError::Configuration { field });
        }

        // The cache lock is not held across the fetch; overlapping calls may both fetch.
        let rows = self.client.fetch_values(ctx.sheet).await?;
        let price = price_from_rows(&rows, ctx.room_code);
        lock_cache(&self.cache).store(CacheKey::for_config(ctx.sheet), rows, Instant::now());
        ctx.rows_consulted = true;

        Ok(price.map(|amount| ResolvedPrice {
            amount,
            origin: PriceOrigin::Sheet,
        }))
    }
}

/// Hardcoded prices for the known room codes.
pub struct FallbackTable;

#[async_trait]
impl PriceStrategy for FallbackTable {
    fn name(&self) -> &'static str {
        "fallback_table"
    }

    async fn attempt(&self, ctx: &mut ResolveContext<'_>) -> Result<Option<ResolvedPrice>, PriceError> {
        Ok(fallback_price(ctx.room_code).map(|amount| ResolvedPrice {
            amount,
            origin: PriceOrigin::FallbackTable,
        }))
    }
}

/// Always answers with the general default price.
pub struct GenericDefault;

#[async_trait]
impl PriceStrategy for GenericDefault {
    fn name(&self) -> &'static str {
        "default"
    }

    async fn attempt(&self, _ctx: &mut ResolveContext<'_>) -> Result<Option<ResolvedPrice>, PriceError> {
        Ok(Some(ResolvedPrice {
            amount: DEFAULT_BASE_PRICE,
            origin: PriceOrigin::Default,
        }))
    }
}
