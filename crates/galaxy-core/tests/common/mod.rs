// Recording doubles for the drawing capabilities.

#![allow(dead_code)]
use galaxy_core::{Overlay, Stroke, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Line { from: Vec2, to: Vec2, color: String },
    Rect { origin: Vec2, size: Vec2, fill: String, outline: String },
}

pub struct RecordingSurface {
    pub size: Vec2,
    pub theme: Option<String>,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            theme: None,
            ops: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Vec2, Vec2, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect {
                    origin, size, fill, ..
                } => Some((*origin, *size, fill.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.ops.push(Op::Line {
            from,
            to,
            color: stroke.color.clone(),
        });
    }

    fn draw_rect(&mut self, origin: Vec2, size: Vec2, fill: &str, stroke: &Stroke) {
        self.ops.push(Op::Rect {
            origin,
            size,
            fill: fill.to_string(),
            outline: stroke.color.clone(),
        });
    }

    fn theme_color(&self) -> Option<String> {
        self.theme.clone()
    }
}

#[derive(Default)]
pub struct RecordingOverlay {
    pub shown: Option<(Vec2, String)>,
    pub visible: bool,
}

impl Overlay for RecordingOverlay {
    fn show(&mut self, at: Vec2, text: &str) {
        self.shown = Some((at, text.to_string()));
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}
