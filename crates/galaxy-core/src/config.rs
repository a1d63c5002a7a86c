//! Runtime configuration for a galaxy scene.
//!
//! Defaults come from [`crate::constants`]; front-ends may override
//! individual values and must call [`GalaxyConfig::validate`] before use.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("node count {0} exceeds the limit of {1}")]
    NodeCount(usize, usize),
    #[error("perspective must be positive and finite, got {0}")]
    Perspective(f32),
    #[error("hit radius must be positive and finite, got {0}")]
    HitRadius(f32),
    #[error("drag sensitivity must be finite, got {0}")]
    DragSensitivity(f32),
    #[error("auto-rotation step must be finite, got ({0}, {1})")]
    AutoRotation(f32, f32),
    #[error("initial angles must be finite, got ({0}, {1})")]
    InitialAngles(f32, f32),
}

/// Stroke color and width used for lines and marker outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub line: Stroke,
    pub outline: Stroke,
    pub hover_fill: String,
    /// Used when the surface reports no theme color.
    pub fallback_fill: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            line: Stroke::new(LINE_COLOR, LINE_WIDTH),
            outline: Stroke::new(OUTLINE_COLOR, OUTLINE_WIDTH),
            hover_fill: HOVER_COLOR.to_string(),
            fallback_fill: FALLBACK_NODE_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyConfig {
    pub node_count: usize,
    pub perspective: f32,
    pub hit_radius_px: f32,
    pub drag_radians_per_px: f32,
    /// Per-frame idle increment as (angle_y, angle_x).
    pub auto_rotate: (f32, f32),
    /// Starting (angle_y, angle_x).
    pub initial_angles: (f32, f32),
    /// Seed for node placement; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub theme: Theme,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            perspective: PERSPECTIVE,
            hit_radius_px: HIT_RADIUS_PX,
            drag_radians_per_px: DRAG_RADIANS_PER_PX,
            auto_rotate: (AUTO_ROTATE_Y, AUTO_ROTATE_X),
            initial_angles: (INITIAL_ANGLE_Y, INITIAL_ANGLE_X),
            seed: None,
            theme: Theme::default(),
        }
    }
}

impl GalaxyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count > MAX_NODE_COUNT {
            return Err(ConfigError::NodeCount(self.node_count, MAX_NODE_COUNT));
        }
        if !(self.perspective.is_finite() && self.perspective > 0.0) {
            return Err(ConfigError::Perspective(self.perspective));
        }
        if !(self.hit_radius_px.is_finite() && self.hit_radius_px > 0.0) {
            return Err(ConfigError::HitRadius(self.hit_radius_px));
        }
        if !self.drag_radians_per_px.is_finite() {
            return Err(ConfigError::DragSensitivity(self.drag_radians_per_px));
        }
        let (ay, ax) = self.auto_rotate;
        if !(ay.is_finite() && ax.is_finite()) {
            return Err(ConfigError::AutoRotation(ay, ax));
        }
        let (iy, ix) = self.initial_angles;
        if !(iy.is_finite() && ix.is_finite()) {
            return Err(ConfigError::InitialAngles(iy, ix));
        }
        Ok(())
    }
}
