//! Configuration DTOs.

pub mod app_config;

pub use app_config::{AppConfig, HttpConfig, StoreConfig};
