use axum::Json;
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::ConfigStore;
use crate::display::DisplaySnapshot;
use crate::error::AppError;
use crate::models::*;
use crate::services;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub room: String,
    #[serde(default)]
    pub guests: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct BookingDefaults {
    pub arrival_date: NaiveDate,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rooms", get(list_rooms))
        .route("/quote", post(create_quote))
        .route("/quote/current", get(current_quote))
        .route("/config/sheet", get(get_sheet_config).put(save_sheet_config))
        .route("/bookings/confirm", post(confirm_booking))
        .route("/bookings/defaults", get(booking_defaults))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_rooms() -> Json<Vec<RoomType>> {
    Json(ROOM_CATALOG.to_vec())
}

async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>
) -> Result<Json<PriceQuote>, AppError> {
    if req.room.trim().is_empty() {
        return Err(AppError::BadRequest("room is required".to_string()));
    }
    let sheet = state.config_store.load().await?;
    let quote = state
        .calculator
        .calculate(&req.room, req.guests.unwrap_or(1), &sheet)
        .await;
    Ok(Json(quote))
}

async fn current_quote(State(state): State<AppState>) -> Json<DisplaySnapshot> {
    Json(state.display.snapshot())
}

async fn get_sheet_config(State(state): State<AppState>) -> Result<Json<SheetConfig>, AppError> {
    let config = state.config_store.load().await?;
    Ok(Json(config.redacted()))
}

async fn save_sheet_config(
    State(state): State<AppState>,
    Json(req): Json<SheetConfig>
) -> Result<Json<SheetConfig>, AppError> {
    state.config_store.save(&req).await?;
    state.calculator.resolver().clear_cache();
    tracing::info!("sheet settings updated: {:?}", req);
    Ok(Json(req.redacted()))
}

async fn confirm_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>
) -> Result<Json<ConfirmationResult>, AppError> {
    let last_quote = state.display.last_quote();
    let result = services::confirm(&req, last_quote.as_ref())?;
    Ok(Json(result))
}

async fn booking_defaults() -> Json<BookingDefaults> {
    let today = chrono::Local::now().date_naive();
    Json(BookingDefaults {
        arrival_date: BookingRequest::default_arrival_date(today),
    })
}
