//! Settings window
//!
//! - **manager**: the eframe app and `run_gui`
//! - **components**: list, add/edit dialog and the browse picker

mod components;
mod constants;
mod manager;

pub use manager::run_gui;
