//! App Root Component
//!
//! Main application component with routing and the view-state provider.

use leptos::*;
use leptos_router::*;

use crate::pages::Landing;
use crate::state::provide_view_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_view_state();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-900 text-white flex flex-col items-center justify-center text-center px-6">
            <div class="text-6xl font-serif font-bold text-amber-500 mb-4">"404"</div>
            <h1 class="text-3xl font-serif font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-10 py-4 bg-amber-600 hover:bg-amber-700 font-semibold transition-colors"
            >
                "Back to Jepto"
            </A>
        </div>
    }
}
