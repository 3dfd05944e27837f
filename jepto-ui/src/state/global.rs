//! View State
//!
//! Reactive state shared by the navbar, the landing sections and the toast,
//! provided through Leptos context.

use gloo_timers::callback::Timeout;
use leptos::*;

use super::nav::NavState;

/// How long an error toast stays on screen
const ERROR_TOAST_MS: u32 = 5000;

/// View state provided to all components
#[derive(Clone, Copy)]
pub struct ViewState {
    nav: RwSignal<NavState>,
    /// Page has scrolled past the hero threshold
    pub scrolled: Memo<bool>,
    /// Mobile menu overlay is visible
    pub menu_open: Memo<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Pending auto-clear for `error`; dropping it cancels the timer
    error_timeout: StoredValue<Option<Timeout>>,
}

/// Provide view state to the component tree
pub fn provide_view_state() -> ViewState {
    let nav = create_rw_signal(NavState::default());
    let state = ViewState {
        nav,
        scrolled: create_memo(move |_| nav.with(|n| n.scrolled)),
        menu_open: create_memo(move |_| nav.with(|n| n.menu_open)),
        error: create_rw_signal(None),
        error_timeout: store_value(None),
    };

    provide_context(state);
    state
}

/// Fetch the view state from context
pub fn use_view_state() -> ViewState {
    use_context::<ViewState>().expect("ViewState not found")
}

impl ViewState {
    pub fn set_scroll_offset(&self, offset_y: f64) {
        self.nav.update(|n| n.on_scroll(offset_y));
    }

    pub fn toggle_menu(&self) {
        self.nav.update(NavState::toggle_menu);
    }

    pub fn close_menu(&self) {
        self.nav.update(NavState::close_menu);
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.nav.update(|n| n.on_resize(width));
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        let timeout = Timeout::new(ERROR_TOAST_MS, move || {
            error_signal.set(None);
        });
        // replaces (and cancels) the timer of any earlier message
        self.error_timeout.set_value(Some(timeout));
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error_timeout.set_value(None);
        self.error.set(None);
    }
}
