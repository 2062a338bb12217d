use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::ConfigStore;
use crate::display::DisplayState;
use crate::pricing::PriceCalculator;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub calculator: Arc<PriceCalculator>,
    pub config_store: Arc<dyn ConfigStore>,
    pub display: Arc<DisplayState>,
}
