//! Equipment tracker
//!
//! Keeps a catalog of physical items identified by a scannable code and
//! moves them through check-out, check-in, breakage and repair, singly or as
//! color-coded systems. Served as a REST JSON API.

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

impl AppState {
    /// Build a fresh in-memory registry and the services around it
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new(&config.tracker.systems);
        let services = services::Services::new(repository, &config.tracker);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
