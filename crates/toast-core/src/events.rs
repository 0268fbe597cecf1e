//! Typed events feeding the daemon loop.
//!
//! Every external stimulus (incoming request, fired expiry timer, window
//! click) becomes one of these, queued to the single event loop and
//! processed to completion one at a time.

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::protocol::NotifyRequest;

pub enum Event {
    Notify {
        request: NotifyRequest,
        respond_to: oneshot::Sender<u32>,
    },
    CloseRequest {
        id: u32,
    },
    Clicked {
        id: u32,
    },
    Expired {
        id: u32,
    },
    SetMaxExpireTimeout {
        millis: i64,
    },
    SetMargins {
        value: Value,
    },
    SetAnchor {
        value: String,
    },
    SetDirection {
        value: String,
    },
    Shutdown,
}

/// Per-window click reporter handed to the renderer.
///
/// Invoking it enqueues a dismissal event for the owning notification;
/// if that notification is already gone the event is a no-op.
#[derive(Debug, Clone)]
pub struct ClickHandle {
    id: u32,
    events: mpsc::Sender<Event>,
}

impl ClickHandle {
    pub(crate) fn new(id: u32, events: mpsc::Sender<Event>) -> Self {
        Self { id, events }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Report a user click on the window. Non-blocking.
    pub fn clicked(&self) {
        if self.events.try_send(Event::Clicked { id: self.id }).is_err() {
            tracing::debug!(id = self.id, "click dropped: event queue full or closed");
        }
    }
}
