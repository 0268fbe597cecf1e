//! Renderer collaborator seam.
//!
//! The widget toolkit that actually paints popups lives outside this
//! crate. The daemon drives it through these traits: `create` realizes a
//! window for the given content (sizes depend on text layout, so they are
//! only known after realization), the daemon then positions and shows it,
//! and finally destroys it on closure.

use toast_layout::{Point, Size};

use crate::events::ClickHandle;

/// Window creation failure. Caught at the call site; the notification id
/// is still returned to the caller but nothing is registered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("window creation failed: {0}")]
    Create(String),
}

/// A realized popup window, exclusively owned by its registry entry.
pub trait RenderWindow: Send + 'static {
    /// Final rendered extent. Stable once the window is realized.
    fn size(&self) -> Size;

    fn move_to(&mut self, position: Point);

    fn show(&mut self);

    fn destroy(&mut self);
}

/// Factory for popup windows, plus the screen geometry they are placed on.
pub trait Renderer: Send + 'static {
    type Window: RenderWindow;

    fn screen_size(&self) -> Size;

    /// Realize a window for the given content. The window is created
    /// hidden; `click` must be invoked when the user clicks it.
    fn create(
        &mut self,
        id: u32,
        summary: &str,
        body: &str,
        click: ClickHandle,
    ) -> Result<Self::Window, RenderError>;
}
