//! Two-axis rotation and perspective projection.
//!
//! All functions are pure. Per frame a node goes through
//! [`rotate_y`], then [`rotate_x`], then [`project`]; the rotations do not
//! commute, so [`view_transform`] is the only place that order is spelled out.

use crate::constants::MIN_PERSPECTIVE_DENOMINATOR;
use glam::{Vec2, Vec3};

/// Result of projecting one rotated point onto the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub screen: Vec2,
    /// Perspective foreshortening factor; larger means nearer.
    pub scale: f32,
}

/// Rotate about the vertical axis.
#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Rotate about the horizontal axis.
#[inline]
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Perspective divide around `center`.
///
/// `perspective + z` is kept at least [`MIN_PERSPECTIVE_DENOMINATOR`] away
/// from zero, keeping its sign, so a point on the eye plane yields a very
/// large but finite scale.
#[inline]
pub fn project(p: Vec3, perspective: f32, center: Vec2) -> Projection {
    let mut denom = perspective + p.z;
    if denom.abs() < MIN_PERSPECTIVE_DENOMINATOR {
        denom = MIN_PERSPECTIVE_DENOMINATOR.copysign(denom);
    }
    let scale = perspective / denom;
    Projection {
        screen: center + Vec2::new(p.x, p.y) * scale,
        scale,
    }
}

/// Rotate a world-space point by the current view angles.
#[inline]
pub fn view_transform(p: Vec3, angle_y: f32, angle_x: f32) -> Vec3 {
    rotate_x(rotate_y(p, angle_y), angle_x)
}
