//! Navigation State
//!
//! The two flags behind the navbar: whether the page has scrolled past the
//! hero and whether the mobile menu overlay is open. Plain values so the
//! transitions can be exercised without a DOM.

/// Scroll offset (px) above which the navbar switches to its opaque theme.
/// The comparison is strict: exactly 50px is still "not scrolled".
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Viewport width (px) at which the desktop menu replaces the mobile overlay
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Recompute `scrolled` from the current vertical offset
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = is_scrolled(offset_y);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Close the overlay once the viewport is wide enough to hide it
    pub fn on_resize(&mut self, viewport_width: f64) {
        if viewport_width >= DESKTOP_BREAKPOINT_PX {
            self.menu_open = false;
        }
    }
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        for offset in [0.0, 1.0, 25.5, 49.9, 50.0] {
            assert!(!is_scrolled(offset), "offset {offset}");
        }
        for offset in [50.01, 51.0, 400.0, 10_000.0] {
            assert!(is_scrolled(offset), "offset {offset}");
        }
    }

    #[test]
    fn test_scroll_back_up_clears_flag() {
        let mut state = NavState::default();
        state.on_scroll(120.0);
        assert!(state.scrolled);
        state.on_scroll(50.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_toggle_pairs_restore_menu() {
        for start in [false, true] {
            let mut state = NavState { scrolled: false, menu_open: start };
            for _ in 0..3 {
                state.toggle_menu();
                assert_ne!(state.menu_open, start);
                state.toggle_menu();
                assert_eq!(state.menu_open, start);
            }
        }
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut state = NavState { scrolled: false, menu_open: true };
        state.on_scroll(300.0);
        assert!(state.menu_open);
    }

    #[test]
    fn test_resize_to_desktop_closes_menu() {
        let mut state = NavState { scrolled: false, menu_open: true };
        state.on_resize(767.0);
        assert!(state.menu_open);
        state.on_resize(768.0);
        assert!(!state.menu_open);

        state.on_resize(1280.0);
        assert!(!state.menu_open);
    }
}
