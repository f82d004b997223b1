//! Scroll surface abstraction over the host viewport.

use crate::GalleryLayout;

/// The viewport the carousel scrolls inside.
///
/// Geometry reads are synchronous snapshots; scroll writes are
/// fire-and-forget (the controller never waits for a smooth scroll to
/// finish before accepting further input).
pub trait ScrollSurface {
    /// Current layout of the strip: viewport width and per-card metrics.
    fn layout(&self) -> GalleryLayout;

    /// Current horizontal scroll offset.
    fn scroll_position(&self) -> f64;

    /// Smoothly scroll to an absolute horizontal offset.
    fn scroll_to(&mut self, offset: f64);

    /// Scroll by a relative delta immediately (no smoothing).
    fn scroll_by(&mut self, delta: f64);
}

/// In-memory [`ScrollSurface`] with no rendering behind it.
///
/// Scroll requests land instantly and are clamped to the layout's valid
/// range, the way a real viewport clamps. Useful for hosts that keep their
/// own draw loop and only need the controller's state, and for tests.
#[derive(Clone, Debug)]
pub struct VirtualSurface {
    layout: GalleryLayout,
    scroll_x: f64,
}

impl VirtualSurface {
    /// Create a surface over the given layout, scrolled to the start.
    pub fn new(layout: GalleryLayout) -> Self {
        Self {
            layout,
            scroll_x: 0.0,
        }
    }

    /// Replace the layout snapshot (e.g. after a host resize), keeping the
    /// scroll position clamped to the new range.
    pub fn set_layout(&mut self, layout: GalleryLayout) {
        self.layout = layout;
        self.scroll_x = self.scroll_x.clamp(0.0, self.layout.max_scroll());
    }
}

impl ScrollSurface for VirtualSurface {
    fn layout(&self) -> GalleryLayout {
        self.layout.clone()
    }

    fn scroll_position(&self) -> f64 {
        self.scroll_x
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll_x = offset.clamp(0.0, self.layout.max_scroll());
    }

    fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_x + delta);
    }
}
