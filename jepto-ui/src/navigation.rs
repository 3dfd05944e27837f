//! Smooth-Scroll Navigation
//!
//! In-page anchor clicks are intercepted and turned into an animated scroll
//! that leaves room for the fixed navbar. External links are left alone.
//!
//! The target offset is measured once, at click time. Anything that shifts
//! layout during the animation (late-loading images) is not compensated for.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::state::ViewState;

/// Space kept between the top of the viewport and the scroll target, so the
/// fixed navbar does not cover it. Fixed rather than measured from the navbar.
pub const HEADER_CLEARANCE_PX: f64 = 100.0;

/// Where a navigation link points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Absolute http(s) URL, handled by the browser
    External,
    /// Element id on this page, without the leading `#`
    Fragment(&'a str),
}

impl<'a> LinkTarget<'a> {
    pub fn parse(href: &'a str) -> Self {
        if href.starts_with("http") {
            LinkTarget::External
        } else {
            LinkTarget::Fragment(href.trim_start_matches('#'))
        }
    }
}

/// What a click on a navigation link should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationPlan {
    /// Suppress the browser's default navigation
    pub handled: bool,
    /// Only set once a target was found
    pub close_menu: bool,
    /// Window scroll position to animate to; `None` when nothing matched
    pub scroll_to: Option<f64>,
}

impl NavigationPlan {
    pub const PASS_THROUGH: Self = Self {
        handled: false,
        close_menu: false,
        scroll_to: None,
    };
}

/// Document offset for a target whose viewport-relative top is `element_top`
pub fn scroll_destination(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - HEADER_CLEARANCE_PX).max(0.0)
}

/// Decide how to handle a click on `href`.
///
/// `measure` is only consulted for in-page fragments and returns the
/// element's viewport-relative top, or `None` if no element has that id.
pub fn plan_navigation(
    href: &str,
    scroll_y: f64,
    measure: impl FnOnce(&str) -> Option<f64>,
) -> NavigationPlan {
    match LinkTarget::parse(href) {
        LinkTarget::External => NavigationPlan::PASS_THROUGH,
        LinkTarget::Fragment(id) => {
            let scroll_to = measure(id).map(|top| scroll_destination(top, scroll_y));
            NavigationPlan {
                handled: true,
                close_menu: scroll_to.is_some(),
                scroll_to,
            }
        }
    }
}

/// Viewport-relative top of the element with the given id
pub fn measure_fragment(id: &str) -> Option<f64> {
    document()
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top())
}

/// Click handler for every in-page navigation link
pub fn handle_nav_click(ev: MouseEvent, href: &str, state: ViewState) {
    let scroll_y = window().scroll_y().unwrap_or(0.0);
    let plan = plan_navigation(href, scroll_y, measure_fragment);

    if !plan.handled {
        return;
    }
    ev.prevent_default();

    if plan.close_menu {
        state.close_menu();
    }

    if let Some(top) = plan.scroll_to {
        smooth_scroll_to(top);
    }
}

fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Scroll and resize listeners feeding the navbar flags
pub struct WindowListeners {
    scroll: WindowListenerHandle,
    resize: WindowListenerHandle,
}

impl WindowListeners {
    pub fn attach(state: ViewState) -> Self {
        let scroll = window_event_listener(ev::scroll, move |_| {
            state.set_scroll_offset(window().scroll_y().unwrap_or(0.0));
        });

        let resize = window_event_listener(ev::resize, move |_| {
            if let Some(width) = window().inner_width().ok().and_then(|w| w.as_f64()) {
                state.set_viewport_width(width);
            }
        });

        Self { scroll, resize }
    }

    pub fn remove(self) {
        self.scroll.remove();
        self.resize.remove();
    }
}

/// Keep the navbar flags in sync with the window for the lifetime of the
/// calling component. Both listeners are removed when it unmounts.
pub fn use_window_listeners(state: ViewState) {
    let listeners = WindowListeners::attach(state);
    on_cleanup(move || listeners.remove());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::nav::NavState;
    use std::cell::Cell;

    #[test]
    fn test_link_target_parse() {
        assert_eq!(LinkTarget::parse("#about"), LinkTarget::Fragment("about"));
        assert_eq!(LinkTarget::parse("#page-top"), LinkTarget::Fragment("page-top"));
        assert_eq!(
            LinkTarget::parse("https://blog.jeptoent.com.ng/"),
            LinkTarget::External
        );
        assert_eq!(LinkTarget::parse("http://www.gtc.com.ng"), LinkTarget::External);
    }

    #[test]
    fn test_destination_subtracts_header_clearance() {
        assert_eq!(scroll_destination(640.0, 0.0), 540.0);
        assert_eq!(scroll_destination(250.0, 1200.0), 1350.0);
        // target above the viewport
        assert_eq!(scroll_destination(-300.0, 900.0), 500.0);
    }

    #[test]
    fn test_destination_clamps_at_zero() {
        assert_eq!(scroll_destination(40.0, 0.0), 0.0);
        assert_eq!(scroll_destination(0.0, 99.0), 0.0);
        assert_eq!(scroll_destination(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_fragment_click_is_handled_and_scrolls() {
        let plan = plan_navigation("#contact", 350.0, |id| {
            assert_eq!(id, "contact");
            Some(1000.0)
        });

        assert!(plan.handled);
        assert!(plan.close_menu);
        assert_eq!(plan.scroll_to, Some(1250.0));
    }

    #[test]
    fn test_missing_fragment_is_silent_no_op() {
        let plan = plan_navigation("#nowhere", 0.0, |_| None);

        // default navigation is still suppressed, but the menu stays as it was
        assert!(plan.handled);
        assert!(!plan.close_menu);
        assert_eq!(plan.scroll_to, None);
    }

    #[test]
    fn test_missing_fragment_leaves_open_menu_open() {
        let mut nav = NavState { scrolled: false, menu_open: true };
        let plan = plan_navigation("#nowhere", 0.0, |_| None);
        if plan.close_menu {
            nav.close_menu();
        }
        assert!(nav.menu_open);
    }

    #[test]
    fn test_external_link_is_never_measured() {
        let measured = Cell::new(false);
        let plan = plan_navigation("https://blog.jeptoent.com.ng/", 500.0, |_| {
            measured.set(true);
            Some(0.0)
        });

        assert_eq!(plan, NavigationPlan::PASS_THROUGH);
        assert!(!measured.get());
    }

    #[test]
    fn test_internal_links_always_close_menu() {
        use crate::content::NAV_LINKS;

        // every internal link points at a rendered section
        for link in NAV_LINKS.iter().filter(|l| !l.external) {
            for open in [false, true] {
                let mut nav = NavState { scrolled: true, menu_open: open };
                let plan = plan_navigation(link.href, 0.0, |_| Some(800.0));
                if plan.close_menu {
                    nav.close_menu();
                }
                assert!(!nav.menu_open, "{}", link.name);
            }
        }
    }

    #[test]
    fn test_external_links_leave_menu_alone() {
        use crate::content::NAV_LINKS;

        for link in NAV_LINKS.iter().filter(|l| l.external) {
            let plan = plan_navigation(link.href, 0.0, |_| None);
            assert!(!plan.handled);
            assert!(!plan.close_menu);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_measure_missing_element() {
        assert!(measure_fragment("no-such-section").is_none());
        assert!(measure_fragment("").is_none());
    }

    #[wasm_bindgen_test]
    fn test_measure_existing_element() {
        let doc = document();
        let el = doc.create_element("section").unwrap();
        el.set_id("measure-me");
        doc.body().unwrap().append_child(&el).unwrap();

        assert!(measure_fragment("measure-me").is_some());

        el.remove();
    }

    fn tall_page() -> web_sys::Element {
        let spacer = document().create_element("div").unwrap();
        spacer.set_attribute("style", "height: 5000px").unwrap();
        document().body().unwrap().append_child(&spacer).unwrap();
        spacer
    }

    fn click_event() -> MouseEvent {
        let init = web_sys::MouseEventInit::new();
        init.set_cancelable(true);
        MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
    }

    fn dispatch_scroll() {
        let ev = web_sys::Event::new("scroll").unwrap();
        window().dispatch_event(&ev).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_listeners_stop_after_remove() {
        let runtime = create_runtime();
        let state = crate::state::provide_view_state();
        let spacer = tall_page();

        let listeners = WindowListeners::attach(state);
        window().scroll_to_with_x_and_y(0.0, 400.0);
        dispatch_scroll();
        assert!(state.scrolled.get_untracked());

        listeners.remove();
        window().scroll_to_with_x_and_y(0.0, 0.0);
        dispatch_scroll();
        assert!(state.scrolled.get_untracked());

        spacer.remove();
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_fragment_click_prevents_default() {
        let runtime = create_runtime();
        let state = crate::state::provide_view_state();

        state.toggle_menu();
        let ev = click_event();
        handle_nav_click(ev.clone(), "#x", state);
        assert!(ev.default_prevented());
        assert!(state.menu_open.get_untracked());

        let target = document().create_element("section").unwrap();
        target.set_id("click-target");
        document().body().unwrap().append_child(&target).unwrap();

        let ev = click_event();
        handle_nav_click(ev.clone(), "#click-target", state);
        assert!(ev.default_prevented());
        assert!(!state.menu_open.get_untracked());

        target.remove();
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_external_click_keeps_default() {
        let runtime = create_runtime();
        let state = crate::state::provide_view_state();

        state.toggle_menu();
        let ev = click_event();
        handle_nav_click(ev.clone(), "https://blog.jeptoent.com.ng/", state);
        assert!(!ev.default_prevented());
        assert!(state.menu_open.get_untracked());

        runtime.dispose();
    }
}
