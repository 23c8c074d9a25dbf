use super::EventListener;
use crate::dom;
use coinpulse_core::{normalize_pointer, SharedStore};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes the normalized pointer position over the hero into the store.
pub struct PointerTracker {
    _listeners: Vec<EventListener>,
}

impl PointerTracker {
    /// Returns `None` (and logs) when the hero element is missing.
    pub fn mount(document: &web::Document, region_id: &str, store: SharedStore) -> Option<Self> {
        let Some(region) = document.get_element_by_id(region_id) else {
            log::warn!("[pointer] #{region_id} not found; pointer tracking disabled");
            return None;
        };

        let move_region = region.clone();
        let move_store = store.clone();
        let on_move = EventListener::passive(&region, "pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = dom::client_rect(&move_region);
            let p = normalize_pointer(ev.client_x() as f32, ev.client_y() as f32, &rect);
            move_store.borrow_mut().set_pointer(p.x, p.y);
        });

        let on_leave = EventListener::passive(&region, "pointerleave", move |_ev: web::Event| {
            store.borrow_mut().set_pointer(0.0, 0.0);
        });

        let listeners: Vec<EventListener> = on_move.into_iter().chain(on_leave).collect();
        log::debug!("[pointer] tracking #{region_id} ({} listeners)", listeners.len());
        Some(Self {
            _listeners: listeners,
        })
    }
}
