#![cfg(target_arch = "wasm32")]
use galaxy_core::{default_catalog, GalaxyConfig, LoopHandle, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod attrs;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;

static STARTED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static RUNNING: RefCell<Option<LoopHandle>> = const { RefCell::new(None) };
}

// Keep the backing store and scene center in step with the canvas' CSS size
fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    scene: &Rc<RefCell<Scene>>,
) {
    let canvas_resize = canvas.clone();
    let ctx_resize = ctx.clone();
    let scene_resize = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_backing_size(&canvas_resize, &ctx_resize);
        scene_resize.borrow_mut().resize(viewport);
        log::debug!(
            "[resize] {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the frame loop; the last drawn frame stays on the canvas.
#[wasm_bindgen]
pub fn stop() {
    RUNNING.with(|running| {
        if let Some(handle) = running.borrow_mut().take() {
            handle.cancel();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Pages without the galaxy markup simply don't get one
    let Some(canvas) =
        dom::element_by_id::<web::HtmlCanvasElement>(&document, constants::CANVAS_ID)
    else {
        log::warn!("missing #{}; galaxy disabled", constants::CANVAS_ID);
        return Ok(());
    };
    let Some(tooltip) = dom::element_by_id::<web::HtmlElement>(&document, constants::TOOLTIP_ID)
    else {
        log::warn!("missing #{}; galaxy disabled", constants::TOOLTIP_ID);
        return Ok(());
    };
    let Some(ctx) = dom::context_2d(&canvas)? else {
        log::warn!("2D context not supported");
        return Ok(());
    };

    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("galaxy already running");
        return Ok(());
    }

    let config = attrs::config_from_attributes(GalaxyConfig::default(), |name| {
        canvas.get_attribute(name)
    });
    let viewport = dom::sync_canvas_backing_size(&canvas, &ctx);
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = StdRng::seed_from_u64(seed);
    let scene = Scene::new(config, default_catalog(), viewport, &mut rng);
    log::info!(
        "[init] canvas {}x{} @{}x, {} nodes, seed {}",
        viewport.width,
        viewport.height,
        viewport.pixel_ratio,
        scene.nodes().len(),
        seed
    );
    let scene = Rc::new(RefCell::new(scene));

    wire_canvas_resize(&canvas, &ctx, &scene);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    events::wire_regenerate_key(scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        canvas::CanvasSurface::new(canvas, ctx, document),
        overlay::TooltipOverlay::new(tooltip),
    )));
    let handle = frame::start_loop(frame_ctx);
    RUNNING.with(|running| *running.borrow_mut() = Some(handle));

    Ok(())
}
