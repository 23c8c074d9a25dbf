#![cfg(target_arch = "wasm32")]
use coinpulse_core::market::{ApiConfig, MarketClient, MockCatalog};
use coinpulse_core::{
    flashlight_mask, SharedStore, VaultState, VaultStore, HERO_ELEMENT_ID, HERO_TRACK_ELEMENT_ID,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod ui;

use events::{EventListener, PointerTracker, RevealTracker, ScrollTracker};

const CANVAS_ELEMENT_ID: &str = "vault-canvas";
const FLASHLIGHT_ELEMENT_ID: &str = "vault-flashlight";

/// Handles that must outlive `init`; dropping them detaches the listeners.
struct Mounted {
    _pointer: Option<PointerTracker>,
    _scroll: Option<ScrollTracker>,
    _reveal: Option<RevealTracker>,
    _resize: Option<EventListener>,
    _frame: frame::FrameLoop,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("coinpulse-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mirrors the flashlight mask onto the overlay element whenever the pointer
/// or flashlight settings change.
fn mount_flashlight(document: &web::Document, store: &SharedStore) {
    let Some(el) = dom::element_by_id(document, FLASHLIGHT_ELEMENT_ID) else {
        log::warn!("[flashlight] #{FLASHLIGHT_ELEMENT_ID} not found; mask disabled");
        return;
    };
    let mut last = String::new();
    let mut apply = move |state: &VaultState| {
        let mask = flashlight_mask(state.pointer, &state.flashlight);
        if mask == last {
            return;
        }
        let style = el.style();
        for prop in ["mask-image", "-webkit-mask-image"] {
            if let Err(e) = style.set_property(prop, &mask) {
                log::warn!("[flashlight] failed to set {prop}: {:?}", e);
            }
        }
        last = mask;
    };
    let mut store = store.borrow_mut();
    apply(store.state());
    store.subscribe(apply);
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    overlay::show(&document);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ELEMENT_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas);
    let resize = {
        let canvas = canvas.clone();
        EventListener::passive(&window, "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&canvas)
        })
    };

    let store = VaultStore::shared();
    mount_flashlight(&document, &store);
    let pointer = PointerTracker::mount(&document, HERO_ELEMENT_ID, store.clone());
    let scroll = ScrollTracker::mount(&window, &document, HERO_TRACK_ELEMENT_ID, store.clone());
    let reveal = RevealTracker::mount(&window, &document);

    let config = ApiConfig::from_build_env();
    if config.is_mock_mode() {
        log::info!("[market] mock mode; no network requests");
    }
    let client = Rc::new(MarketClient::with_reqwest(
        config,
        MockCatalog::new(js_sys::Date::now() as i64),
    ));
    ui::load_sections(&document, client);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[gpu] unavailable; hero renders without the 3D scene");
    }
    overlay::hide(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(store, canvas, gpu)));
    let mounted = Mounted {
        _pointer: pointer,
        _scroll: scroll,
        _reveal: reveal,
        _resize: resize,
        _frame: frame::start_loop(frame_ctx),
    };
    MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
    Ok(())
}
