pub mod api;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod pricing;
pub mod services;
pub mod sheets;
pub mod state;
