//! Pointer tracking, drag rotation and idle auto-rotation.

use glam::Vec2;

/// Camera angles and the screen-space origin they rotate around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub angle_y: f32,
    pub angle_x: f32,
    pub center: Vec2,
}

impl ViewState {
    pub fn new(angle_y: f32, angle_x: f32, center: Vec2) -> Self {
        Self {
            angle_y,
            angle_x,
            center,
        }
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Vec2,
    pub inside: bool,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Hover,
    Dragging,
}

/// Turns pointer events into view-angle changes.
#[derive(Clone, Debug)]
pub struct Interaction {
    pub pointer: PointerState,
    pub drag: DragState,
    drag_radians_per_px: f32,
    auto_rotate: (f32, f32),
}

impl Interaction {
    pub fn new(drag_radians_per_px: f32, auto_rotate: (f32, f32)) -> Self {
        Self {
            pointer: PointerState::default(),
            drag: DragState::default(),
            drag_radians_per_px,
            auto_rotate,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        if self.drag.active {
            InteractionMode::Dragging
        } else if self.pointer.inside {
            InteractionMode::Hover
        } else {
            InteractionMode::Idle
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pointer.position = pos;
        self.pointer.inside = true;
        self.drag.active = true;
        self.drag.last = pos;
    }

    /// Deltas are taken against the previous sample, not the drag anchor.
    pub fn pointer_move(&mut self, pos: Vec2, view: &mut ViewState) {
        self.pointer.position = pos;
        self.pointer.inside = true;
        if self.drag.active {
            let d = pos - self.drag.last;
            view.angle_y += d.x * self.drag_radians_per_px;
            view.angle_x += d.y * self.drag_radians_per_px;
        }
        self.drag.last = pos;
    }

    pub fn pointer_up(&mut self) {
        self.drag.active = false;
    }

    pub fn pointer_leave(&mut self) {
        self.drag.active = false;
        self.pointer.inside = false;
    }

    /// Idle spin; returns whether anything was applied.
    pub fn auto_rotate(&self, view: &mut ViewState) -> bool {
        if self.drag.active {
            return false;
        }
        view.angle_y += self.auto_rotate.0;
        view.angle_x += self.auto_rotate.1;
        true
    }
}
