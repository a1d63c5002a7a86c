//! Node placement on a randomized spherical shell.

use crate::catalog::{self, Feature};
use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::rc::Rc;

/// One visualized point: a feature placed in world space.
#[derive(Clone, Debug)]
pub struct Node {
    pub position: Vec3,
    pub feature: Rc<Feature>,
    /// Fraction of the center-to-node distance covered by the radial line.
    pub line_scale: f32,
}

/// Build `count` nodes from `catalog`, cycling through it as needed.
///
/// Radii are `max_radius * (0.5 + 0.8 * u)` with `u ~ U(0, 1)`, so every node
/// ends up in `[0.5, 1.3) * max_radius`. The angles are drawn uniformly
/// (not area-uniform), which clusters nodes slightly towards the poles.
pub fn generate<R: Rng + ?Sized>(
    catalog: &[Feature],
    count: usize,
    max_radius: f32,
    rng: &mut R,
) -> Vec<Node> {
    catalog::expand(catalog, count)
        .into_iter()
        .map(|feature| {
            let phi = rng.gen::<f32>() * TAU;
            let theta = rng.gen::<f32>() * PI;
            let r = max_radius * (RADIUS_MIN_FACTOR + RADIUS_SPAN_FACTOR * rng.gen::<f32>());
            let position = Vec3::new(
                r * theta.sin() * phi.cos(),
                r * theta.sin() * phi.sin(),
                r * theta.cos(),
            );
            let line_scale = LINE_SCALE_MIN + LINE_SCALE_SPAN * rng.gen::<f32>();
            Node {
                position,
                feature,
                line_scale,
            }
        })
        .collect()
}

/// Radius bounds `[min, max)` that [`generate`] guarantees for `max_radius`.
pub fn radius_bounds(max_radius: f32) -> (f32, f32) {
    (
        max_radius * RADIUS_MIN_FACTOR,
        max_radius * (RADIUS_MIN_FACTOR + RADIUS_SPAN_FACTOR),
    )
}
