//! Clonable handle to the daemon event loop.
//!
//! The transport layer talks to the service exclusively through this
//! handle: requests go in as typed events, closure signals come back on a
//! broadcast subscription.

use serde_json::Value;
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::events::Event;
use crate::protocol::{self, NotifyRequest, ServerInfo, Signal};

/// Failure to reach the daemon task.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("event channel closed: daemon has stopped")]
    SendFailed,

    #[error("daemon dropped the reply channel")]
    ReceiveFailed,
}

/// Handle for submitting requests to the daemon. Cheap to clone.
#[derive(Clone)]
pub struct DaemonHandle {
    events: mpsc::Sender<Event>,
    signals: broadcast::Sender<Signal>,
}

impl DaemonHandle {
    pub(crate) fn new(events: mpsc::Sender<Event>, signals: broadcast::Sender<Signal>) -> Self {
        Self { events, signals }
    }

    async fn send(&self, event: Event) -> Result<(), ServiceError> {
        self.events
            .send(event)
            .await
            .map_err(|_| ServiceError::SendFailed)
    }

    /// Submit a notification and return its freshly assigned id.
    ///
    /// The id is final when this returns; rendering and placement have
    /// already happened on the event loop by then.
    pub async fn notify(&self, request: NotifyRequest) -> Result<u32, ServiceError> {
        let (respond_to, reply) = oneshot::channel();
        self.send(Event::Notify {
            request,
            respond_to,
        })
        .await?;
        reply.await.map_err(|_| ServiceError::ReceiveFailed)
    }

    /// Ask for a notification to be closed. Unknown ids are acknowledged
    /// silently.
    pub async fn close_notification(&self, id: u32) -> Result<(), ServiceError> {
        self.send(Event::CloseRequest { id }).await
    }

    pub fn capabilities(&self) -> &'static [&'static str] {
        protocol::CAPABILITIES
    }

    pub fn server_information(&self) -> ServerInfo {
        protocol::server_information()
    }

    /// Subscribe to outbound signals (notification closures).
    pub fn subscribe(&self) -> broadcast::Receiver<Signal> {
        self.signals.subscribe()
    }

    pub async fn set_max_expire_timeout(&self, millis: i64) -> Result<(), ServiceError> {
        self.send(Event::SetMaxExpireTimeout { millis }).await
    }

    pub async fn set_margins(&self, value: Value) -> Result<(), ServiceError> {
        self.send(Event::SetMargins { value }).await
    }

    pub async fn set_anchor(&self, value: impl Into<String>) -> Result<(), ServiceError> {
        self.send(Event::SetAnchor {
            value: value.into(),
        })
        .await
    }

    pub async fn set_direction(&self, value: impl Into<String>) -> Result<(), ServiceError> {
        self.send(Event::SetDirection {
            value: value.into(),
        })
        .await
    }

    /// Stop the event loop, destroying any remaining windows.
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        self.send(Event::Shutdown).await
    }
}
