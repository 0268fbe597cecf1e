//! Notification lifecycle core.
//!
//! Owns active notification state, assigns ids, schedules expiry,
//! delegates placement to `toast-layout` and reports closures back to the
//! transport. The bus transport and the popup renderer are external
//! collaborators reached through the [`DaemonHandle`] and [`Renderer`]
//! seams.

pub mod config;
pub mod daemon;
pub mod events;
pub mod handle;
pub mod protocol;
pub mod registry;
pub mod render;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_MAX_EXPIRE_TIMEOUT_MS, DaemonConfig};
pub use daemon::Daemon;
pub use events::ClickHandle;
pub use handle::{DaemonHandle, ServiceError};
pub use protocol::{CAPABILITIES, CloseReason, NotifyRequest, ServerInfo, Signal};
pub use registry::{Notification, Registry};
pub use render::{RenderError, RenderWindow, Renderer};
