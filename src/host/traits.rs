//! Collaborator interfaces implemented by host platform code.
//!
//! The core only issues draw commands and drains input events through these
//! traits; it never reads pixels back and consumes no other input.

use crate::utils::Color;
use anyhow::Result;

/// Input events the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Terminate the host loop
    Quit,
    /// Fire the start trigger; generations stay frozen until the first one
    ToggleStart,
}

/// Handle to a sprite resolved by the renderer at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteHandle(pub usize);

/// Drawing collaborator
pub trait Renderer {
    /// Resolve a sprite asset identifier to a handle. Failure here is fatal
    /// at startup; there is no recovery path.
    fn load_sprite(&mut self, id: &str) -> Result<SpriteHandle>;

    /// Reset the frame to the given background color
    fn clear(&mut self, color: Color);

    /// Draw a sprite at cell coordinates (column, row)
    fn draw_sprite(&mut self, sprite: SpriteHandle, col: usize, row: usize);

    /// Flush the finished frame to the screen
    fn present(&mut self) -> Result<()>;
}

/// Input collaborator
pub trait InputSource {
    /// Drain pending events without blocking
    fn poll_events(&mut self) -> Vec<Event>;
}
