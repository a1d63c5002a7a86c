use crate::constants::NODE_COLOR_PROPERTY;
use crate::dom;
use galaxy_core::{Stroke, Surface};
use glam::Vec2;
use web_sys as web;

/// [`Surface`] over a 2D canvas context whose transform is already scaled to
/// the device pixel ratio (see [`dom::sync_canvas_backing_size`]).
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    document: web::Document,
}

impl CanvasSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        document: web::Document,
    ) -> Self {
        Self {
            canvas,
            ctx,
            document,
        }
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color);
        self.ctx.set_line_width(stroke.width as f64);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        Vec2::new(rect.width() as f32, rect.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn draw_rect(&mut self, origin: Vec2, size: Vec2, fill: &str, stroke: &Stroke) {
        self.ctx.set_fill_style_str(fill);
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx
            .rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        self.ctx.fill();
        self.ctx.stroke();
    }

    fn theme_color(&self) -> Option<String> {
        dom::root_css_property(&self.document, NODE_COLOR_PROPERTY)
    }
}
