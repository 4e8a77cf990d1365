//! Threshold-based fill colors for a battery level indicator.
//!
//! [`ColorBoundaryResolver`] maps a percentage onto the color of the smallest
//! ceiling covering it. [`BatteryIndicator`] wraps it together with a clamped
//! percentage for use by a rendering adapter.

pub mod color;
pub mod colormap;
pub mod config;
pub mod error;
pub mod indicator;
pub mod percentage;

pub use color::Color;
pub use colormap::{ColorBoundary, ColorBoundaryResolver, ThresholdPreset};
pub use config::IndicatorConfig;
pub use error::{BoundaryError, ColorParseError, ConfigError};
pub use indicator::BatteryIndicator;
pub use percentage::{Direction, Percentage};
