use crate::constants::{SECTION_SELECTOR, ZOOM_IMAGE_SELECTOR};
use crate::core::{FrameGate, ScrollEffects, ScrollParams};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedEffects = Rc<RefCell<ScrollEffects<web::HtmlElement>>>;

/// Selects sections and zoom images, applies the initial state, then keeps
/// it current on scroll (one pass per animation frame) and resize.
pub fn install(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    let images = dom::query_all(document, ZOOM_IMAGE_SELECTOR)?;
    log::info!("[scroll] sections={} images={}", sections.len(), images.len());

    let effects = Rc::new(RefCell::new(ScrollEffects::new(
        sections,
        images,
        ScrollParams::default(),
    )));
    run_frame(window, &effects);
    wire_scroll(window, effects.clone());
    wire_resize(window, effects);
    Ok(())
}

fn run_frame(window: &web::Window, effects: &SharedEffects) {
    let vh = dom::viewport_height(window);
    let report = effects.borrow_mut().handle_frame(vh);
    if report.changed_sections() {
        log::debug!(
            "[scroll] vh={:.0} revealed={} hidden={} zoomed={}",
            vh,
            report.revealed,
            report.hidden,
            report.zoomed
        );
    }
}

fn wire_scroll(window: &web::Window, effects: SharedEffects) {
    let gate = Rc::new(RefCell::new(FrameGate::default()));

    let window_frame = window.clone();
    let gate_frame = gate.clone();
    let on_frame = Rc::new(Closure::wrap(Box::new(move || {
        let folded = gate_frame.borrow_mut().begin_frame();
        if folded > 0 {
            log::debug!("[scroll] coalesced {} scroll events", folded);
        }
        run_frame(&window_frame, &effects);
    }) as Box<dyn FnMut()>));

    let window_scroll = window.clone();
    dom::add_listener(window, "scroll", move || {
        if !gate.borrow_mut().request() {
            return;
        }
        if let Err(e) = window_scroll.request_animation_frame((*on_frame).as_ref().unchecked_ref())
        {
            log::warn!("[scroll] requestAnimationFrame failed: {:?}", e);
            gate.borrow_mut().cancel();
        }
    });
}

fn wire_resize(window: &web::Window, effects: SharedEffects) {
    let window_resize = window.clone();
    dom::add_listener(window, "resize", move || {
        run_frame(&window_resize, &effects);
    });
}
