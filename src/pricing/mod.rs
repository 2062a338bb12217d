pub mod cache;
pub mod calculator;
pub mod fallback;
pub mod parse;
pub mod resolver;
pub mod strategy;

pub use cache::{CacheKey, FRESHNESS_WINDOW, PriceCache};
pub use calculator::{PriceCalculator, SERVICE_FEE, build_quote};
pub use fallback::{DEFAULT_BASE_PRICE, fallback_price};
pub use parse::price_from_rows;
pub use resolver::{PriceResolution, PriceResolver};
pub use strategy::{PriceStrategy, ResolveContext};
