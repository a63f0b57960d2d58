//! Configuration management for calloutx
//!
//! - **app**: `AppConfig`, the tool's own JSON settings (vault location, layout, logging, window)
//!
//! Callout data itself lives in the vault and is owned by `store`.

pub mod app;

pub use app::AppConfig;
