//! DOM event wiring for the hero: pointer, scroll and reveal trackers.
//!
//! Every tracker owns its listeners through [`EventListener`] handles, so
//! dropping the tracker detaches exactly the listeners it added.

pub mod pointer;
pub mod reveal;
pub mod scroll;

pub use pointer::PointerTracker;
pub use reveal::RevealTracker;
pub use scroll::ScrollTracker;

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A passive listener that is removed from its target on drop.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = dom::passive_options();
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &opts,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                callback,
            }),
            Err(e) => {
                log::warn!("[events] failed to add {kind} listener: {:?}", e);
                None
            }
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
