use crate::core::{Rect, ViewportNode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `innerHeight`, falling back to the root element's client height.
pub fn viewport_height(window: &web::Window) -> f64 {
    let inner = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if inner > 0.0 {
        return inner;
    }
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.client_height() as f64)
        .unwrap_or(0.0)
}

/// `innerWidth`, falling back to the root element's client width.
pub fn viewport_width(window: &web::Window) -> f64 {
    let inner = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if inner > 0.0 {
        return inner;
    }
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.client_width() as f64)
        .unwrap_or(0.0)
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("querySelectorAll({}): {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Page-lifetime listener on `target`; the closure is leaked.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

impl ViewportNode for web::HtmlElement {
    fn rect(&self) -> Rect {
        let r = self.get_bounding_client_rect();
        Rect {
            top: r.top(),
            bottom: r.bottom(),
        }
    }

    fn add_class(&self, class: &str) {
        _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_transform(&self, value: &str) {
        _ = self.style().set_property("transform", value);
    }

    fn set_z_index(&self, z: Option<i32>) {
        let style = self.style();
        match z {
            Some(z) => {
                _ = style.set_property("z-index", &z.to_string());
            }
            None => {
                _ = style.remove_property("z-index");
            }
        }
    }

    fn closest_ancestor(&self, selector: &str) -> Option<Self> {
        web::Element::closest(self, selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}
