//! maplaser Settings Crate
//!
//! Handles theme-driven output options: which feature categories to draw
//! and the colors that identify them.

pub mod error;
pub mod theme;

pub use error::{SettingsError, SettingsResult};
pub use theme::{LaserThemeOptions, FALLBACK_ROAD_COLOR};
