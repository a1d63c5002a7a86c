use crate::constants::REGENERATE_KEYS;
use galaxy_core::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_regenerate_key(key: &str) -> bool {
    REGENERATE_KEYS.contains(&key)
}

fn typing_into_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            el.is_content_editable()
                || matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        })
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<Scene>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() || typing_into_field(ev) {
        return;
    }
    if is_regenerate_key(&ev.key()) {
        let seed: u64 = rand::random();
        scene
            .borrow_mut()
            .regenerate(&mut StdRng::seed_from_u64(seed));
        log::info!("[keys] regenerated layout with seed {}", seed);
    }
}

// Re-sample the layout on 'r' without touching the current view angles
pub fn wire_regenerate_key(scene: Rc<RefCell<Scene>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
