use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotel_quote::api::router;
use hotel_quote::config::{AppConfig, PriceSourceKind};
use hotel_quote::db::{ConfigStore, SqliteConfigStore};
use hotel_quote::display::DisplayState;
use hotel_quote::pricing::{PriceCalculator, PriceResolver};
use hotel_quote::services::ArrivalTimeTicker;
use hotel_quote::sheets::SheetsHttpClient;
use hotel_quote::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "hotel_quote=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    info!("loaded configuration: {:?}", config);

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let resolver = match config.price_source {
        PriceSourceKind::Static => PriceResolver::static_table(config.static_price_delay),
        PriceSourceKind::Sheet => {
            let client = SheetsHttpClient::with_base_url(&config.sheets_api_base)?;
            PriceResolver::sheet(Arc::new(client))
        }
    };
    info!("pricing from {:?} source", config.price_source);

    let display = Arc::new(DisplayState::new());
    let calculator = Arc::new(PriceCalculator::new(Arc::new(resolver), display.clone()));
    let config_store = Arc::new(SqliteConfigStore::new(pool.clone(), config.sheet_defaults.clone()));

    let ticker = ArrivalTimeTicker::new(display.clone(), config.arrival_rotate_interval);
    tokio::spawn(ticker.start());

    // The page shows a price for the default room as soon as it opens.
    let sheet = config_store.load().await?;
    calculator.calculate(&config.default_room, 1, &sheet).await;

    let state = AppState {
        db: pool.clone(),
        calculator,
        config_store,
        display,
    };

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
