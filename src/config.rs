use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;
use crate::models::SheetConfig;

pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1!A1:C20";

/// Where base prices come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceSourceKind {
    Static,
    Sheet,
}

impl PriceSourceKind {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "sheet" | "sheets" | "remote" => Ok(Self::Sheet),
            other => Err(AppError::Config(format!(
                "PRICE_SOURCE must be 'static' or 'sheet', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub price_source: PriceSourceKind,
    pub static_price_delay: Duration,
    pub sheets_api_base: String,
    /// Seed values for the configuration store when nothing was saved yet.
    pub sheet_defaults: SheetConfig,
    pub arrival_rotate_interval: Duration,
    pub default_room: String,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is not a socket address: {}", e)))?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://hotel_quote.db".to_string());

        let price_source = match env::var("PRICE_SOURCE") {
            Ok(value) => PriceSourceKind::parse(&value)?,
            Err(_) => PriceSourceKind::Static,
        };

        let static_price_delay = Duration::from_millis(parse_u64("STATIC_PRICE_DELAY_MS", 300)?);

        let sheets_api_base = env::var("SHEETS_API_BASE")
            .unwrap_or_else(|_| DEFAULT_SHEETS_API_BASE.to_string());

        let sheet_defaults = SheetConfig {
            sheet_id: env::var("SHEET_ID").unwrap_or_default(),
            access_key: env::var("SHEET_ACCESS_KEY").unwrap_or_default(),
            range: env::var("SHEET_RANGE").unwrap_or_else(|_| DEFAULT_SHEET_RANGE.to_string()),
        };

        let arrival_rotate_interval = Duration::from_secs(parse_u64("ARRIVAL_ROTATE_SECS", 30)?);
        if arrival_rotate_interval.is_zero() {
            return Err(AppError::Config("ARRIVAL_ROTATE_SECS must be positive".to_string()));
        }

        let default_room = env::var("DEFAULT_ROOM").unwrap_or_else(|_| "standard".to_string());

        Ok(Self {
            bind_addr,
            database_url,
            price_source,
            static_price_delay,
            sheets_api_base,
            sheet_defaults,
            arrival_rotate_interval,
            default_room,
        })
    }
}

fn parse_u64(key: &str, default: u64) -> Result<u64, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("{} must be a non-negative integer: {}", key, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_source_accepts_known_names() {
        assert_eq!(PriceSourceKind::parse("static").unwrap(), PriceSourceKind::Static);
        assert_eq!(PriceSourceKind::parse(" Sheet ").unwrap(), PriceSourceKind::Sheet);
        assert_eq!(PriceSourceKind::parse("remote").unwrap(), PriceSourceKind::Sheet);
    }

    #[test]
    fn price_source_rejects_unknown_names() {
        let err = PriceSourceKind::parse("excel").unwrap_err();
        assert!(err.to_string().contains("PRICE_SOURCE"));
    }
}
