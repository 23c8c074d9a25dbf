use super::EventListener;
use crate::dom;
use coinpulse_core::{RevealChange, RevealState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEALED_CLASS: &str = "is-revealed";

type Sections = Rc<RefCell<Vec<(web::Element, RevealState)>>>;

/// Toggles `is-revealed` on `[data-reveal]` sections as they cross the
/// trigger line; the CSS transition does the animation.
pub struct RevealTracker {
    _listeners: Vec<EventListener>,
}

fn sweep(sections: &Sections) {
    let vh = dom::viewport_height();
    for (el, state) in sections.borrow_mut().iter_mut() {
        let top = el.get_bounding_client_rect().top() as f32;
        let classes = el.class_list();
        match state.update(top, vh) {
            Some(RevealChange::Enter) => {
                let _ = classes.add_1(REVEALED_CLASS);
            }
            Some(RevealChange::Reverse) => {
                let _ = classes.remove_1(REVEALED_CLASS);
            }
            None => {}
        }
    }
}

impl RevealTracker {
    pub fn mount(window: &web::Window, document: &web::Document) -> Option<Self> {
        let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
        let found: Vec<(web::Element, RevealState)> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .map(|el| (el, RevealState::default()))
            .collect();
        if found.is_empty() {
            log::debug!("[reveal] no {REVEAL_SELECTOR} sections");
            return None;
        }
        let sections: Sections = Rc::new(RefCell::new(found));
        sweep(&sections);

        let listeners = ["scroll", "resize"]
            .into_iter()
            .filter_map(|kind| {
                let s = sections.clone();
                EventListener::passive(window, kind, move |_ev: web::Event| sweep(&s))
            })
            .collect();
        Some(Self {
            _listeners: listeners,
        })
    }
}
