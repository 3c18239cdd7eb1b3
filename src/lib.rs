#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod mobile_zoom;
mod scroll;

#[cfg(feature = "debug-log")]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(feature = "debug-log"))]
const LOG_LEVEL: log::Level = log::Level::Info;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("scroll-effects starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(move || run_init());
        document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())?;
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Zoom first: a scroll setup error returns early
    mobile_zoom::install(&window, &document);
    scroll::install(&window, &document)?;
    Ok(())
}
