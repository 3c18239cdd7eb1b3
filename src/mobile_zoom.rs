use crate::constants::MOBILE_ZOOM_IMAGE_ID;
use crate::core::{apply_transition, TouchGuard, ZoomToggle, ZoomTransition};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TouchClosure = Closure<dyn FnMut(web::TouchEvent)>;

/// Blocks horizontal single-finger drags on the image while zoomed.
/// Owns its listeners so they can be removed on collapse.
struct TouchSuppressor {
    on_start: TouchClosure,
    on_move: TouchClosure,
}

impl TouchSuppressor {
    fn attach(image: &web::HtmlElement) -> Self {
        let guard = Rc::new(RefCell::new(TouchGuard::default()));

        let guard_start = guard.clone();
        let on_start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let (n, x, y) = first_touch(&ev);
            guard_start.borrow_mut().begin(n, x, y);
        }) as Box<dyn FnMut(_)>);

        let on_move = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let (n, x, y) = first_touch(&ev);
            if guard.borrow().should_block(n, x, y) {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);

        _ = image.add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref());
        // preventDefault is ignored on passive listeners
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = image.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            on_move.as_ref().unchecked_ref(),
            &opts,
        );

        Self { on_start, on_move }
    }

    fn detach(self, image: &web::HtmlElement) {
        _ = image
            .remove_event_listener_with_callback("touchstart", self.on_start.as_ref().unchecked_ref());
        _ = image
            .remove_event_listener_with_callback("touchmove", self.on_move.as_ref().unchecked_ref());
    }
}

fn first_touch(ev: &web::TouchEvent) -> (u32, f64, f64) {
    let touches = ev.touches();
    let n = touches.length();
    match touches.get(0) {
        Some(t) => (n, t.client_x() as f64, t.client_y() as f64),
        None => (n, 0.0, 0.0),
    }
}

struct MobileZoom {
    image: web::HtmlElement,
    toggle: ZoomToggle,
    suppressor: Option<TouchSuppressor>,
}

impl MobileZoom {
    fn on_click(&mut self, viewport_width: f64) {
        let transition = self.toggle.click(viewport_width);
        apply_transition(&self.image, transition);
        match transition {
            ZoomTransition::Zoom => {
                self.suppressor = Some(TouchSuppressor::attach(&self.image));
            }
            ZoomTransition::Collapse => {
                if let Some(s) = self.suppressor.take() {
                    s.detach(&self.image);
                }
            }
            ZoomTransition::Ignored => return,
        }
        log::debug!("[zoom] {:?} at width {:.0}", transition, viewport_width);
    }
}

/// Wires tap-to-zoom on the map image. Missing image disables the feature.
pub fn install(window: &web::Window, document: &web::Document) {
    let Some(image) = dom::html_element_by_id(document, MOBILE_ZOOM_IMAGE_ID) else {
        log::warn!("[zoom] #{} not found; mobile zoom disabled", MOBILE_ZOOM_IMAGE_ID);
        return;
    };

    let zoom = Rc::new(RefCell::new(MobileZoom {
        image: image.clone(),
        toggle: ZoomToggle::default(),
        suppressor: None,
    }));
    let window = window.clone();
    dom::add_listener(&image, "click", move || {
        let width = dom::viewport_width(&window);
        zoom.borrow_mut().on_click(width);
    });
    log::info!("[zoom] tap-to-zoom wired on #{}", MOBILE_ZOOM_IMAGE_ID);
}
