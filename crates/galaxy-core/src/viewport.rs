//! Surface geometry: CSS size, device pixel ratio and derived values.

use crate::constants::MAX_RADIUS_VIEWPORT_FRACTION;
use glam::Vec2;

/// Size of the drawing surface in CSS pixels plus its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width: sane(width),
            height: sane(height),
            pixel_ratio,
        }
    }

    /// Screen-space origin of the galaxy.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Largest shell radius that keeps a margin to the nearer edge.
    #[inline]
    pub fn max_radius(&self) -> f32 {
        let c = self.center();
        c.x.min(c.y) * MAX_RADIUS_VIEWPORT_FRACTION
    }

    /// Backing store size in device pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio) as u32;
        let h = (self.height * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}
