//! Identifier allocation, closure paths and signal emission.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::timeout;

use toast_layout::Point;

use super::mock::spawn_daemon;
use crate::handle::DaemonHandle;
use crate::protocol::{CloseReason, NotifyRequest, Signal};

fn sticky(summary: &str, body: &str) -> NotifyRequest {
    NotifyRequest {
        expire_timeout_ms: 0,
        ..NotifyRequest::new(summary, body)
    }
}

async fn recv_signal(signals: &mut broadcast::Receiver<Signal>) -> Signal {
    timeout(Duration::from_secs(5), signals.recv())
        .await
        .expect("timed out waiting for signal")
        .expect("signal channel closed")
}

/// Round-trip through the event loop, flushing queued fire-and-forget
/// events. Events are processed in FIFO order, so once this returns every
/// previously sent event has been handled.
async fn barrier(handle: &DaemonHandle) {
    handle.notify(sticky("barrier", "")).await.unwrap();
}

#[tokio::test]
async fn ids_are_monotonic_from_one() {
    let (handle, _log) = spawn_daemon();
    for expected in 1..=5 {
        let id = handle.notify(sticky("summary", "body")).await.unwrap();
        assert_eq!(id, expected);
    }
}

#[tokio::test]
async fn ids_are_never_reused_after_closure() {
    let (handle, _log) = spawn_daemon();
    let first = handle.notify(sticky("a", "b")).await.unwrap();
    handle.close_notification(first).await.unwrap();
    let second = handle.notify(sticky("c", "d")).await.unwrap();
    assert_eq!(second, first + 1);
}

#[tokio::test]
async fn duplicate_close_emits_exactly_one_signal() {
    let (handle, log) = spawn_daemon();
    let mut signals = handle.subscribe();
    let id = handle.notify(sticky("a", "b")).await.unwrap();

    // Click first, then an explicit close racing behind it.
    log.click(id);
    handle.close_notification(id).await.unwrap();

    let signal = recv_signal(&mut signals).await;
    assert_eq!(
        signal,
        Signal::NotificationClosed {
            id,
            reason: CloseReason::Dismissed,
        }
    );

    barrier(&handle).await;
    assert!(signals.try_recv().is_err(), "second closed signal emitted");
    assert_eq!(log.destroyed(), vec![id]);
}

#[tokio::test]
async fn unknown_close_is_silently_acknowledged() {
    let (handle, log) = spawn_daemon();
    let mut signals = handle.subscribe();

    handle.close_notification(42).await.unwrap();
    barrier(&handle).await;

    assert!(signals.try_recv().is_err());
    assert!(log.destroyed().is_empty());
}

#[tokio::test]
async fn click_dismisses_notification() {
    let (handle, log) = spawn_daemon();
    let mut signals = handle.subscribe();
    let id = handle.notify(sticky("a", "b")).await.unwrap();

    log.click(id);

    let signal = recv_signal(&mut signals).await;
    assert_eq!(
        signal,
        Signal::NotificationClosed {
            id,
            reason: CloseReason::Dismissed,
        }
    );
    assert_eq!(log.destroyed(), vec![id]);
}

#[tokio::test]
async fn close_restacks_remaining_notifications() {
    let (handle, log) = spawn_daemon();
    let mut signals = handle.subscribe();

    let first = handle.notify(sticky("a", "b")).await.unwrap();
    let second = handle.notify(sticky("c", "d")).await.unwrap();

    // Default config: north-west anchor, vertical stacking, no margins;
    // mock windows are 300x100.
    assert_eq!(log.last_position(first), Some(Point::new(0, 0)));
    assert_eq!(log.last_position(second), Some(Point::new(0, 100)));

    handle.close_notification(first).await.unwrap();

    let signal = recv_signal(&mut signals).await;
    assert_eq!(
        signal,
        Signal::NotificationClosed {
            id: first,
            reason: CloseReason::Requested,
        }
    );

    // The survivor takes over the anchor slot.
    assert_eq!(log.destroyed(), vec![first]);
    assert_eq!(log.last_position(second), Some(Point::new(0, 0)));
}

#[tokio::test]
async fn render_failure_still_allocates_and_returns_id() {
    let (handle, log) = spawn_daemon();
    let mut signals = handle.subscribe();

    log.fail_next_create();
    let inert = handle.notify(sticky("a", "b")).await.unwrap();
    assert_eq!(inert, 1);
    assert!(log.created().is_empty());

    // Closing the inert id is a no-op: nothing was registered.
    handle.close_notification(inert).await.unwrap();

    let next = handle.notify(sticky("c", "d")).await.unwrap();
    assert_eq!(next, 2);
    assert_eq!(log.created(), vec![next]);
    assert_eq!(log.shown(), vec![next]);
    assert!(signals.try_recv().is_err());
}

#[tokio::test]
async fn shutdown_destroys_remaining_windows_without_signals() {
    let (handle, log) = spawn_daemon();
    let mut signals = handle.subscribe();
    let id = handle.notify(sticky("a", "b")).await.unwrap();

    handle.shutdown().await.unwrap();

    // The loop drains asynchronously; wait for teardown to land.
    for _ in 0..100 {
        if log.destroyed().contains(&id) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(log.destroyed(), vec![id]);
    assert!(signals.try_recv().is_err());

    // The daemon is gone; further requests fail instead of hanging.
    assert!(handle.notify(sticky("c", "d")).await.is_err());
}
