//! Reveal-on-scroll state for content sections.
//!
//! A section enters once its top edge crosses the trigger line
//! (85% of the viewport height) and reverses when the page is scrolled back
//! so the top edge sits below the line again. The CSS side owns the tween.

use crate::constants::REVEAL_TRIGGER;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    Enter,
    Reverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the element's current top edge (viewport-relative). Returns the
    /// transition, if any.
    pub fn update(&mut self, element_top: f32, viewport_height: f32) -> Option<RevealChange> {
        if !element_top.is_finite() || !(viewport_height > 0.0) {
            return None;
        }
        let inside = element_top < viewport_height * REVEAL_TRIGGER;
        match (self.revealed, inside) {
            (false, true) => {
                self.revealed = true;
                Some(RevealChange::Enter)
            }
            (true, false) => {
                self.revealed = false;
                Some(RevealChange::Reverse)
            }
            _ => None,
        }
    }
}
