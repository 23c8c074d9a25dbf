use super::EventListener;
use crate::dom;
use coinpulse_core::{track_scroll_progress, SharedStore};
use std::rc::Rc;
use web_sys as web;

/// Maps page scroll through the hero track element to store progress.
pub struct ScrollTracker {
    _listeners: Vec<EventListener>,
}

fn update(track: &web::Element, store: &SharedStore) {
    let rect = dom::client_rect(track);
    if let Some(p) = track_scroll_progress(rect.top, rect.height, dom::viewport_height()) {
        store.borrow_mut().set_scroll_progress(p);
    }
}

impl ScrollTracker {
    /// Recomputes on scroll and resize, and once immediately.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        track_id: &str,
        store: SharedStore,
    ) -> Option<Self> {
        let Some(track) = document.get_element_by_id(track_id) else {
            log::warn!("[scroll] #{track_id} not found; scroll tracking disabled");
            return None;
        };

        let recompute: Rc<dyn Fn()> = Rc::new(move || update(&track, &store));
        recompute();

        let listeners: Vec<EventListener> = ["scroll", "resize"]
            .into_iter()
            .filter_map(|kind| {
                let f = recompute.clone();
                EventListener::passive(window, kind, move |_ev: web::Event| f())
            })
            .collect();
        Some(Self {
            _listeners: listeners,
        })
    }
}
