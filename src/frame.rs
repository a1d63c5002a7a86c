use crate::canvas::CanvasSurface;
use crate::constants::FPS_LOG_INTERVAL_SECS;
use crate::overlay::TooltipOverlay;
use galaxy_core::{FrameStats, LoopHandle, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
    pub overlay: TooltipOverlay,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        surface: CanvasSurface,
        overlay: TooltipOverlay,
    ) -> Self {
        Self {
            scene,
            surface,
            overlay,
            stats: FrameStats::new(Duration::from_secs(FPS_LOG_INTERVAL_SECS)),
        }
    }

    pub fn frame(&mut self) {
        // an event handler still holding the scene only costs this frame
        let Ok(mut scene) = self.scene.try_borrow_mut() else {
            log::warn!("[frame] scene busy, skipping frame");
            return;
        };
        let report = scene.render_frame(&mut self.surface, &mut self.overlay);
        drop(scene);

        if let Some(fps) = self.stats.record() {
            log::debug!(
                "[frame] {:.1} fps, {} nodes drawn, {} skipped, total frames {}",
                fps,
                report.drawn,
                report.skipped,
                self.stats.total_frames()
            );
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until the returned handle
/// is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle::new();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let loop_handle = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if loop_handle.is_cancelled() {
            log::info!(
                "[frame] loop stopped after {} frames",
                frame_ctx.borrow().stats.total_frames()
            );
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
    handle
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
