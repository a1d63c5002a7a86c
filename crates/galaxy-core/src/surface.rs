//! Drawing capabilities the scene paints through.
//!
//! Coordinates are CSS pixels with the origin at the surface's top-left.
//! Implementations own any device-pixel scaling.

use crate::config::Stroke;
use glam::Vec2;

pub trait Surface {
    /// Current size in CSS pixels.
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);
    /// Filled and outlined axis-aligned rectangle with top-left `origin`.
    fn draw_rect(&mut self, origin: Vec2, size: Vec2, fill: &str, stroke: &Stroke);
    /// Node color from the host's styling, if it defines one.
    fn theme_color(&self) -> Option<String>;
}

/// Floating text anchored at a surface position.
pub trait Overlay {
    fn show(&mut self, at: Vec2, text: &str);
    fn hide(&mut self);
}
