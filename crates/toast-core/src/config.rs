//! Daemon configuration with guarded setters.
//!
//! A rejected assignment never mutates the stored value and never fails
//! the daemon; it is logged and ignored. Each setter validates the full
//! new value before committing it, so a partially-parsed assignment
//! cannot leave mixed state behind.

use std::time::Duration;

use serde_json::Value;
use toast_layout::{Anchor, Direction, LayoutConfig, Margins};

/// Default ceiling for notification display time.
pub const DEFAULT_MAX_EXPIRE_TIMEOUT_MS: u32 = 10_000;

/// Process-wide daemon configuration, owned by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    max_expire_timeout_ms: u32,
    layout: LayoutConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            max_expire_timeout_ms: DEFAULT_MAX_EXPIRE_TIMEOUT_MS,
            layout: LayoutConfig::default(),
        }
    }
}

impl DaemonConfig {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn max_expire_timeout_ms(&self) -> u32 {
        self.max_expire_timeout_ms
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Set the display-time ceiling. Must be a positive integer number of
    /// milliseconds; anything else is ignored.
    pub fn set_max_expire_timeout_ms(&mut self, millis: i64) -> bool {
        match u32::try_from(millis) {
            Ok(value) if value >= 1 => {
                self.max_expire_timeout_ms = value;
                true
            }
            _ => {
                tracing::warn!(millis, "ignoring max expire timeout: not a positive integer");
                false
            }
        }
    }

    /// Assign margins from a loosely-typed value. Retains the previous
    /// margins on any parse failure.
    pub fn set_margins(&mut self, value: &Value) -> bool {
        match Margins::parse(value) {
            Ok(margins) => {
                self.layout.margins = margins;
                true
            }
            Err(err) => {
                tracing::warn!("ignoring margins assignment: {err}");
                false
            }
        }
    }

    /// Assign the anchor corner by name. Retains the previous anchor on an
    /// unknown name.
    pub fn set_anchor(&mut self, value: &str) -> bool {
        match Anchor::parse(value) {
            Ok(anchor) => {
                self.layout.anchor = anchor;
                true
            }
            Err(err) => {
                tracing::warn!("ignoring anchor assignment: {err}");
                false
            }
        }
    }

    /// Assign the stacking direction by name. Retains the previous
    /// direction on an unknown name.
    pub fn set_direction(&mut self, value: &str) -> bool {
        match Direction::parse(value) {
            Ok(direction) => {
                self.layout.direction = direction;
                true
            }
            Err(err) => {
                tracing::warn!("ignoring direction assignment: {err}");
                false
            }
        }
    }

    /// Resolve a caller-requested timeout to the effective display time.
    ///
    /// `0` means never expire. `-1` means unspecified, which resolves to
    /// the configured maximum; other negative values are treated the same
    /// way. Positive requests are capped at the configured maximum.
    pub fn resolve_timeout(&self, requested_ms: i32) -> Option<Duration> {
        let max = u64::from(self.max_expire_timeout_ms);
        match requested_ms {
            0 => None,
            ms if ms < 0 => Some(Duration::from_millis(max)),
            ms => Some(Duration::from_millis((ms as u64).min(max))),
        }
    }
}
