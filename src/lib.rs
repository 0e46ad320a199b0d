//! LabStock laboratory inventory server
//!
//! Session-authenticated web application for tracking chemicals, equipment,
//! resource bookings and purchase orders, with AI-assisted chemical lookup,
//! storage hazard scans and semantic inventory search.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
