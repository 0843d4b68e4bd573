//! Renderer trait: the seam between the shell and whatever draws
//!
//! The shell depends on this capability set rather than a concrete type, so
//! the renderer implementation can be swapped without touching the event
//! loop. A renderer must only be constructed once a context is current; the
//! usual way to guarantee that is to build it from
//! [`Shell::get_proc_address`](crate::Shell::get_proc_address) output.

use crate::events::{MouseButtonEvent, MouseMotion, WheelEvent};

/// Rasterization mode for polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    /// Filled rasterization (the default).
    Fill,
    /// Outline-only (wireframe) rasterization.
    Line,
}

/// Drawing collaborator owned by the caller of [`Shell::run`](crate::Shell::run).
///
/// The shell calls `draw` once per loop iteration after draining the event
/// queue, and forwards window and pointer events as they arrive. All
/// drawing state belongs to the implementation; the shell keeps none.
pub trait Renderer {
    /// Draw one frame. Called after all pending events are dispatched.
    fn draw(&mut self);

    /// The drawable surface changed size. Dimensions are in pixels; on
    /// high-density displays they are already scaled from window
    /// coordinates.
    fn resize(&mut self, width: u32, height: u32);

    /// The pointer moved.
    fn mouse_move(&mut self, event: &MouseMotion);

    /// A pointer button was pressed.
    fn mouse_press(&mut self, event: &MouseButtonEvent);

    /// A pointer button was released.
    fn mouse_release(&mut self, event: &MouseButtonEvent);

    /// The scroll wheel moved.
    fn wheel(&mut self, event: &WheelEvent);

    /// The shell's wireframe/fill keys were pressed. Renderers that do not
    /// distinguish polygon modes can ignore this.
    fn set_polygon_mode(&mut self, _mode: PolygonMode) {}
}
