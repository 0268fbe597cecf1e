//! Popup placement for the notification daemon.
//!
//! Computes non-overlapping screen positions for an ordered stack of
//! popup windows anchored to a screen corner, plus the configuration
//! types (margins, anchor, stacking direction) and their validation.

pub mod config;
pub mod engine;
pub mod geometry;

pub use config::{Anchor, ConfigError, Direction, LayoutConfig, Margins};
pub use engine::compute_positions;
pub use geometry::{Point, Rect, Size};
