//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

/// Width of the entry form column
pub const ENTRY_FORM_WIDTH: f32 = 340.0;
