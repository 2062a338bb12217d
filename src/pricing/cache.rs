use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::models::SheetConfig;
use crate::sheets::SheetRows;

/// How long fetched sheet rows stay usable.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// One fetch returns every room, so entries are keyed by sheet and range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub sheet_id: String,
    pub range: String,
}

impl CacheKey {
    pub fn for_config(config: &SheetConfig) -> Self {
        Self {
            sheet_id: config.sheet_id.trim().to_string(),
            range: config.range.trim().to_string(),
        }
    }
}

/// Last fetched rows per sheet range plus the instant of the most recent fetch.
#[derive(Debug)]
pub struct PriceCache {
    rows: HashMap<CacheKey, SheetRows>,
    last_fetch: Option<Instant>,
    window: Duration,
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(FRESHNESS_WINDOW)
    }
}

impl PriceCache {
    pub fn new(window: Duration) -> Self {
        Self {
            rows: HashMap::new(),
            last_fetch: None,
            window,
        }
    }

    pub fn is_fresh(&self, now: Instant) -> bool {
        self.last_fetch
            .is_some_and(|fetched| now.saturating_duration_since(fetched) < self.window)
    }

    /// Cached rows for `key`, if the last fetch is still inside the window.
    pub fn fresh_rows(&self, key: &CacheKey, now: Instant) -> Option<SheetRows> {
        if !self.is_fresh(now) {
            return None;
        }
        self.rows.get(key).cloned()
    }

    pub fn store(&mut self, key: CacheKey, rows: SheetRows, now: Instant) {
        self.rows.insert(key, rows);
        self.last_fetch = Some(now);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.last_fetch = None;
    }

    pub fn last_fetch(&self) -> Option<Instant> {
        self.last_fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(range: &str) -> CacheKey {
        CacheKey {
            sheet_id: "sheet".to_string(),
            range: range.to_string(),
        }
    }

    fn rows() -> SheetRows {
        vec![vec!["A".to_string(), "800".to_string()]]
    }

    #[test]
    fn rows_expire_after_window() {
        let start = Instant::now();
        let mut cache = PriceCache::default();
        cache.store(key("A1:C5"), rows(), start);

        let almost = start + FRESHNESS_WINDOW - Duration::from_secs(1);
        assert_eq!(cache.fresh_rows(&key("A1:C5"), almost), Some(rows()));

        let expired = start + FRESHNESS_WINDOW;
        assert_eq!(cache.fresh_rows(&key("A1:C5"), expired), None);
    }

    #[test]
    fn other_ranges_miss() {
        let start = Instant::now();
        let mut cache = PriceCache::default();
        cache.store(key("A1:C5"), rows(), start);
        assert_eq!(cache.fresh_rows(&key("A1:C9"), start), None);
    }

    #[test]
    fn clear_forgets_rows_and_timestamp() {
        let start = Instant::now();
        let mut cache = PriceCache::default();
        cache.store(key("A1:C5"), rows(), start);
        cache.clear();
        assert!(cache.last_fetch().is_none());
        assert!(!cache.is_fresh(start));
    }

    #[test]
    fn key_ignores_surrounding_whitespace() {
        let config = SheetConfig {
            sheet_id: " sheet ".to_string(),
            access_key: "k".to_string(),
            range: "A1:C5 ".to_string(),
        };
        assert_eq!(CacheKey::for_config(&config), key("A1:C5"));
    }
}
