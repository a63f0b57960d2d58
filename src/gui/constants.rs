//! GUI-specific constants for layout, status colors and intervals

use egui;

/// Settings window minimum dimensions
pub const WINDOW_MIN_WIDTH: f32 = 480.0;
pub const WINDOW_MIN_HEIGHT: f32 = 400.0;

/// Layout spacing
pub const PADDING: f32 = 8.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Icon preview swatch edge length
pub const SWATCH_SIZE: f32 = 16.0;

/// Browse window tile width
pub const BROWSE_TILE_WIDTH: f32 = 110.0;

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// How long a notice stays in the status line
pub const NOTICE_DURATION_MS: u64 = 4000;

/// Repaint cadence so queued notices show up without input
pub const NOTICE_POLL_INTERVAL_MS: u64 = 250;
