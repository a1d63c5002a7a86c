use galaxy_core::Overlay;
use glam::Vec2;
use web_sys as web;

/// Tooltip element positioned over the canvas via inline `left`/`top`.
pub struct TooltipOverlay {
    el: web::HtmlElement,
    text: String,
    visible: bool,
}

impl TooltipOverlay {
    pub fn new(el: web::HtmlElement) -> Self {
        let mut overlay = Self {
            el,
            text: String::new(),
            visible: true,
        };
        overlay.hide();
        overlay
    }
}

impl Overlay for TooltipOverlay {
    fn show(&mut self, at: Vec2, text: &str) {
        if self.text != text {
            self.el.set_text_content(Some(text));
            self.text = text.to_string();
        }
        let style = self.el.style();
        _ = style.set_property("left", &format!("{}px", at.x));
        _ = style.set_property("top", &format!("{}px", at.y));
        if !self.visible {
            _ = style.set_property("opacity", "1");
            self.visible = true;
        }
    }

    #[inline]
    fn hide(&mut self) {
        if self.visible {
            _ = self.el.style().set_property("opacity", "0");
            self.visible = false;
        }
    }
}
