//! Navigation Component
//!
//! Fixed navbar with logo, desktop links, call-to-action phone number and the
//! mobile menu overlay. Transparent over the hero, opaque once scrolled.

use leptos::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{self, NavLink, NAV_LINKS};
use crate::navigation::{handle_nav_click, use_window_listeners};
use crate::state::use_view_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_view_state();
    use_window_listeners(state);

    let scrolled = state.scrolled;

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed w-full z-50 transition-all duration-500 bg-white/95 backdrop-blur-md shadow-sm py-3"
            } else {
                "fixed w-full z-50 transition-all duration-500 bg-transparent py-6"
            }
        }>
            <div class="container mx-auto px-6 flex justify-between items-center">
                // Logo and brand
                <a
                    href="#page-top"
                    on:click=move |ev| handle_nav_click(ev, "#page-top", state)
                    class="flex items-center gap-3 group"
                >
                    <div class="relative overflow-hidden rounded-lg shadow-md border border-white/20">
                        <img
                            src=content::LOGO_URL
                            alt="Jepto Logo"
                            class="w-12 h-12 object-cover transform group-hover:scale-110 transition-transform duration-500"
                        />
                    </div>
                    <div>
                        <h4 class=move || format!(
                            "font-serif text-2xl font-bold leading-none drop-shadow-md {}",
                            if scrolled.get() { "text-slate-900" } else { "text-white" }
                        )>
                            {content::COMPANY_NAME}
                        </h4>
                        <span class=move || format!(
                            "text-[10px] tracking-[0.2em] uppercase font-semibold {}",
                            if scrolled.get() { "text-slate-500" } else { "text-slate-200" }
                        )>
                            {content::COMPANY_SUFFIX}
                        </span>
                    </div>
                </a>

                // Desktop links
                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.iter().map(|link| view! { <DesktopLink link=*link /> }).collect_view()}

                    <div class="hidden lg:flex flex-col items-end text-right border-l pl-6 border-amber-500/30">
                        <span class=move || format!(
                            "text-xs uppercase tracking-wider {}",
                            if scrolled.get() { "text-slate-400" } else { "text-slate-300" }
                        )>
                            "Call Today"
                        </span>
                        <a
                            href=content::PHONE_URI
                            class=move || format!(
                                "font-bold font-mono {}",
                                if scrolled.get() { "text-slate-900" } else { "text-amber-400" }
                            )
                        >
                            {content::PHONE_DISPLAY}
                        </a>
                    </div>
                </div>

                // Mobile toggle
                <button
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || state.menu_open.get().to_string()
                    on:click=move |_| state.toggle_menu()
                    class=move || format!(
                        "md:hidden p-2 rounded-lg backdrop-blur-sm {}",
                        if scrolled.get() { "text-slate-900 bg-slate-100" } else { "text-white bg-white/10" }
                    )
                >
                    {move || {
                        if state.menu_open.get() {
                            view! { <Icon kind=IconKind::Close /> }.into_view()
                        } else {
                            view! { <Icon kind=IconKind::Menu /> }.into_view()
                        }
                    }}
                </button>
            </div>

            // Mobile menu overlay
            <Show when=move || state.menu_open.get()>
                <div class="absolute top-full left-0 w-full bg-white shadow-2xl border-t border-slate-100 p-6 flex flex-col gap-2 md:hidden animate-slide-down">
                    {NAV_LINKS.iter().map(|link| view! { <MobileLink link=*link /> }).collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Desktop navigation link, restyled with the navbar theme
#[component]
fn DesktopLink(link: NavLink) -> impl IntoView {
    let state = use_view_state();
    let scrolled = state.scrolled;

    view! {
        <a
            href=link.href
            target=link.target()
            rel=link.external.then_some("noreferrer")
            on:click=move |ev| {
                if !link.external {
                    handle_nav_click(ev, link.href, state);
                }
            }
            class=move || format!(
                "text-sm font-medium tracking-wide uppercase transition-colors hover:text-amber-500 {}",
                if scrolled.get() { "text-slate-700" } else { "text-white/90" }
            )
        >
            {link.name}
        </a>
    }
}

/// Entry in the mobile overlay
#[component]
fn MobileLink(link: NavLink) -> impl IntoView {
    let state = use_view_state();

    view! {
        <a
            href=link.href
            target=link.target()
            rel=link.external.then_some("noreferrer")
            on:click=move |ev| {
                if !link.external {
                    handle_nav_click(ev, link.href, state);
                }
            }
            class="text-lg font-medium text-slate-800 hover:text-amber-600 hover:bg-slate-50 px-4 py-3 rounded-lg transition-all"
        >
            {link.name}
        </a>
    }
}
