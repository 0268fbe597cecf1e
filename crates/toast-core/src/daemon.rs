//! Notification service event loop.
//!
//! One task owns the registry, the configuration and the renderer. Every
//! state transition arrives as a typed event and runs to completion
//! before the next one, so the registry is never mutated concurrently.

use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use toast_layout::Size;

use crate::config::DaemonConfig;
use crate::events::{ClickHandle, Event};
use crate::handle::DaemonHandle;
use crate::protocol::{CloseReason, NotifyRequest, Signal};
use crate::registry::{Notification, Registry};
use crate::render::{RenderWindow, Renderer};

const EVENT_QUEUE_CAPACITY: usize = 100;
const SIGNAL_CAPACITY: usize = 64;

/// The notification service state machine.
pub struct Daemon<R: Renderer> {
    config: DaemonConfig,
    registry: Registry<R::Window>,
    renderer: R,
    /// Cloned into expiry timers and click handles so their events feed
    /// back into this loop.
    events: mpsc::Sender<Event>,
    signals: broadcast::Sender<Signal>,
}

impl<R: Renderer> Daemon<R> {
    /// Start the daemon task and return a handle to it.
    pub fn spawn(config: DaemonConfig, renderer: R) -> DaemonHandle {
        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        let (signals_tx, _) = broadcast::channel(SIGNAL_CAPACITY);

        let daemon = Self {
            config,
            registry: Registry::new(),
            renderer,
            events: events_tx.clone(),
            signals: signals_tx.clone(),
        };
        tokio::spawn(daemon.run(events_rx));

        DaemonHandle::new(events_tx, signals_tx)
    }

    async fn run(mut self, mut events: mpsc::Receiver<Event>) {
        tracing::info!("notification daemon started");

        while let Some(event) = events.recv().await {
            match event {
                Event::Notify {
                    request,
                    respond_to,
                } => {
                    let id = self.handle_notify(request);
                    let _ = respond_to.send(id);
                }
                Event::CloseRequest { id } => self.close(id, CloseReason::Requested),
                Event::Clicked { id } => self.close(id, CloseReason::Dismissed),
                Event::Expired { id } => self.close(id, CloseReason::Expired),
                Event::SetMaxExpireTimeout { millis } => {
                    self.config.set_max_expire_timeout_ms(millis);
                }
                Event::SetMargins { value } => {
                    if self.config.set_margins(&value) {
                        self.relayout();
                    }
                }
                Event::SetAnchor { value } => {
                    if self.config.set_anchor(&value) {
                        self.relayout();
                    }
                }
                Event::SetDirection { value } => {
                    if self.config.set_direction(&value) {
                        self.relayout();
                    }
                }
                Event::Shutdown => break,
            }
        }

        self.teardown();
        tracing::info!("notification daemon stopped");
    }

    /// Create, register and place a new notification. The returned id is
    /// valid even when window creation fails; the notification is then
    /// inert and never appears.
    fn handle_notify(&mut self, request: NotifyRequest) -> u32 {
        let id = self.registry.allocate_id();

        if request.replaces_id != 0 {
            // TODO: honor replaces_id instead of always allocating a fresh id.
            tracing::debug!(
                id,
                replaces_id = request.replaces_id,
                "replacement requested but unsupported, allocating fresh id"
            );
        }
        tracing::debug!(id, app = %request.app_name, summary = %request.summary, "notify");

        let click = ClickHandle::new(id, self.events.clone());
        let window = match self
            .renderer
            .create(id, &request.summary, &request.body, click)
        {
            Ok(window) => window,
            Err(err) => {
                tracing::error!(id, "window creation failed, notification will not appear: {err}");
                return id;
            }
        };

        let expiry = self.schedule_expiry(id, request.expire_timeout_ms);
        self.registry.insert(Notification {
            id,
            summary: request.summary,
            body: request.body,
            window,
            expiry,
            created_at: Utc::now(),
        });

        self.relayout();
        if let Some(entry) = self.registry.get_mut(id) {
            entry.window.show();
        }

        id
    }

    /// Race a one-shot timer against its cancellation token. The loop
    /// double-checks the id on arrival, so a timer that loses the race
    /// anyway is harmless.
    fn schedule_expiry(&self, id: u32, requested_ms: i32) -> Option<CancellationToken> {
        let timeout = self.config.resolve_timeout(requested_ms)?;
        tracing::debug!(id, timeout_ms = timeout.as_millis() as u64, "scheduling expiry");

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = sleep(timeout) => {
                    let _ = events.send(Event::Expired { id }).await;
                }
            }
        });

        Some(token)
    }

    /// Close a notification by any path. Idempotent per id: a second
    /// closure attempt finds the registry entry gone and does nothing, so
    /// exactly one closed signal is emitted per notification.
    fn close(&mut self, id: u32, reason: CloseReason) {
        let Some(mut entry) = self.registry.remove(id) else {
            // Expected whenever an expiry timer fires for a notification
            // the user already clicked away, or a caller closes an
            // unknown id.
            tracing::debug!(id, "close for absent notification, ignoring");
            return;
        };

        if let Some(token) = entry.expiry.take() {
            token.cancel();
        }
        entry.window.destroy();
        self.relayout();

        let _ = self.signals.send(Signal::NotificationClosed { id, reason });
        tracing::info!(id, reason = reason.code(), "notification closed");
    }

    /// Recompute positions for every visible window and move them.
    fn relayout(&mut self) {
        let screen = self.renderer.screen_size();
        let sizes: Vec<Size> = self.registry.iter().map(|entry| entry.window.size()).collect();
        let positions = toast_layout::compute_positions(self.config.layout(), screen, &sizes);

        for (entry, position) in self.registry.iter_mut().zip(positions) {
            entry.window.move_to(position);
        }
    }

    fn teardown(&mut self) {
        for mut entry in self.registry.drain() {
            if let Some(token) = entry.expiry.take() {
                token.cancel();
            }
            entry.window.destroy();
        }
    }
}
