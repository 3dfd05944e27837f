//! Toast Notification Component
//!
//! Shows the contact form's validation message.

use leptos::*;

use crate::state::use_view_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_view_state();

    view! {
        <div class="fixed bottom-28 right-6 z-50 space-y-2">
            {move || {
                state.error.get().map(|msg| view! {
                    <div
                        role="alert"
                        on:click=move |_| state.clear_error()
                        class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg \
                               cursor-pointer transform transition-all duration-300 ease-out animate-slide-in"
                    >
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
