//! Transport-facing protocol types.
//!
//! The bus transport that exposes the daemon to remote callers lives
//! outside this crate; these are the request, signal and metadata shapes
//! it exchanges with the service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Capability strings advertised to callers.
pub const CAPABILITIES: &[&str] = &["body", "body-markup", "persistence"];

/// An incoming notification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyRequest {
    pub app_name: String,
    /// Id of a notification this one should replace. Accepted but not
    /// honored; a fresh id is always allocated.
    pub replaces_id: u32,
    pub app_icon: String,
    pub summary: String,
    /// May contain a restricted markup subset (bold/italic/links);
    /// rendered even when empty.
    pub body: String,
    /// Alternating action key / localized label pairs.
    pub actions: Vec<String>,
    pub hints: HashMap<String, Value>,
    /// Requested timeout in milliseconds: `0` never expires, `-1` uses
    /// the daemon's configured maximum.
    pub expire_timeout_ms: i32,
}

impl NotifyRequest {
    pub fn new(summary: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            body: body.into(),
            ..Self::default()
        }
    }
}

impl Default for NotifyRequest {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            replaces_id: 0,
            app_icon: String::new(),
            summary: String::new(),
            body: String::new(),
            actions: Vec::new(),
            hints: HashMap::new(),
            expire_timeout_ms: -1,
        }
    }
}

/// Why a notification was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    Expired = 1,
    Dismissed = 2,
    Requested = 3,
    Reserved = 4,
}

impl CloseReason {
    /// Wire code for the closed signal.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Outbound signal emitted by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Signal {
    NotificationClosed {
        id: u32,
        reason: CloseReason,
    },
    /// Declared by the protocol; nothing emits it yet.
    ActionInvoked {
        id: u32,
        action_key: String,
    },
}

/// Server identity reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub name: &'static str,
    pub vendor: &'static str,
    pub version: &'static str,
    pub spec_version: &'static str,
}

/// Identity of this daemon.
pub const fn server_information() -> ServerInfo {
    ServerInfo {
        name: "toastd",
        vendor: "toastd",
        version: env!("CARGO_PKG_VERSION"),
        spec_version: "0.7.1",
    }
}
