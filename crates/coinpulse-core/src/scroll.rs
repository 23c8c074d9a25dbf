/// Scroll progress through a tall "track" element behind a pinned hero.
///
/// - `track_top`: the track's top edge relative to the viewport top
///   (negative once the page has scrolled past it)
/// - `track_height`: total height of the track element
/// - `viewport_height`: current window inner height
///
/// Returns `None` when the track is not taller than the viewport; callers
/// must leave the stored progress untouched in that case.
#[inline]
pub fn track_scroll_progress(track_top: f32, track_height: f32, viewport_height: f32) -> Option<f32> {
    let scrollable = track_height - viewport_height;
    if !(scrollable > 0.0) || !track_top.is_finite() {
        return None;
    }
    Some((-track_top / scrollable).clamp(0.0, 1.0))
}

/// Progress measured as one viewport height of page scroll.
///
/// Used by layouts without a dedicated track element.
#[inline]
pub fn viewport_scroll_progress(scroll_y: f32, viewport_height: f32) -> f32 {
    if !(viewport_height > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / viewport_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_shorter_than_viewport_is_not_scrollable() {
        assert_eq!(track_scroll_progress(0.0, 800.0, 1000.0), None);
        assert_eq!(track_scroll_progress(0.0, 1000.0, 1000.0), None);
    }

    #[test]
    fn nan_geometry_is_ignored() {
        assert_eq!(track_scroll_progress(f32::NAN, 2000.0, 1000.0), None);
        assert_eq!(track_scroll_progress(0.0, f32::NAN, 1000.0), None);
    }

    #[test]
    fn viewport_progress_guards_zero_height() {
        assert_eq!(viewport_scroll_progress(500.0, 0.0), 0.0);
        assert_eq!(viewport_scroll_progress(500.0, 1000.0), 0.5);
    }
}
