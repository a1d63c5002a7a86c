use galaxy_core::Viewport;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it, `None` if absent or of another type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<Option<web::CanvasRenderingContext2d>> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(ctx.and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok()))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// CSS size of the canvas plus the current device pixel ratio.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(
        rect.width() as f32,
        rect.height() as f32,
        device_pixel_ratio() as f32,
    )
}

/// Match the backing store to CSS size * devicePixelRatio and scale the
/// context so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Viewport {
    let viewport = canvas_viewport(canvas);
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    // resizing the backing store resets the transform
    let dpr = viewport.pixel_ratio as f64;
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    viewport
}

/// Computed value of a CSS custom property on the root element.
pub fn root_css_property(document: &web::Document, name: &str) -> Option<String> {
    let root = document.document_element()?;
    let style = web::window()?.get_computed_style(&root).ok()??;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Pointer position relative to the canvas' top-left, in CSS pixels.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
