//! Hero banner and the call-to-action strip beneath it.

use leptos::*;

use crate::components::{Icon, IconKind};
use crate::content;
use crate::navigation::handle_nav_click;
use crate::state::use_view_state;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_view_state();

    view! {
        <header id="page-top" class="relative h-screen min-h-[600px] flex items-center justify-center overflow-hidden">
            // Background image with cinematic overlay
            <div class="absolute inset-0 z-0">
                <img
                    src=content::HERO_IMAGE_URL
                    alt="Luxury Architecture"
                    class="w-full h-full object-cover scale-105 animate-ken-burns"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-slate-950/90 via-slate-900/60 to-transparent"></div>
            </div>

            <div class="container relative z-10 px-6 pt-20">
                <div class="max-w-4xl">
                    <h1 class="font-serif text-5xl md:text-7xl lg:text-8xl text-white font-bold leading-[1.1] mb-8">
                        "Real Estate, " <br/>
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-amber-200 to-amber-600">
                            "Redefined."
                        </span>
                    </h1>
                    <p class="text-lg md:text-xl text-slate-300 mb-10 font-light max-w-2xl leading-relaxed border-l-4 border-amber-600 pl-6">
                        "We offer expert services in real estate buying & selling, property development, management, \
                         and general contracts. Let us bring your vision to life."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href="#about"
                            on:click=move |ev| handle_nav_click(ev, "#about", state)
                            class="px-10 py-4 bg-amber-600 text-white rounded-none font-semibold text-lg hover:bg-amber-700 transition-all hover:shadow-[0_10px_20px_rgba(217,119,6,0.3)] flex items-center justify-center gap-2 group cursor-pointer"
                        >
                            "Learn More"
                            <Icon kind=IconKind::ArrowRight size=20 class="group-hover:translate-x-1 transition-transform" />
                        </a>
                        <a
                            href="#contact"
                            on:click=move |ev| handle_nav_click(ev, "#contact", state)
                            class="px-10 py-4 bg-transparent border border-white/30 text-white rounded-none font-semibold text-lg hover:bg-white hover:text-slate-900 transition-all flex items-center justify-center backdrop-blur-sm cursor-pointer"
                        >
                            "Contact Us"
                        </a>
                    </div>
                </div>
            </div>

            // Scroll indicator
            <a
                href="#get-touch"
                aria-label="Scroll down"
                on:click=move |ev| handle_nav_click(ev, "#get-touch", state)
                class="absolute bottom-10 left-1/2 -translate-x-1/2 text-white/50 hover:text-white transition-colors animate-bounce cursor-pointer"
            >
                <Icon kind=IconKind::ChevronDown size=32 />
            </a>
        </header>
    }
}

#[component]
pub fn CtaStrip() -> impl IntoView {
    let state = use_view_state();

    view! {
        <div id="get-touch" class="bg-slate-50 relative z-20 py-20">
            <div class="container mx-auto px-6">
                <div class="bg-slate-900 rounded-[2rem] p-10 md:p-16 flex flex-col md:flex-row items-center justify-between gap-10 shadow-2xl relative overflow-hidden">
                    <div class="absolute top-0 right-0 w-64 h-64 bg-amber-600/20 rounded-full blur-3xl -mr-16 -mt-16"></div>

                    <div class="relative z-10">
                        <h3 class="text-3xl md:text-4xl font-serif font-bold text-white mb-4">
                            "Cost for your home renovation?"
                        </h3>
                        <p class="text-slate-400 text-lg max-w-xl">
                            "Get started today and complete our form to request your free estimate."
                        </p>
                    </div>
                    <div class="relative z-10">
                        <a
                            href="#contact"
                            on:click=move |ev| handle_nav_click(ev, "#contact", state)
                            class="inline-flex h-14 animate-shimmer items-center justify-center rounded-full border border-amber-600 bg-[linear-gradient(110deg,#000103,45%,#d97706,55%,#000103)] bg-[length:200%_100%] px-8 font-medium text-amber-500 transition-colors focus:outline-none focus:ring-2 focus:ring-amber-400 focus:ring-offset-2 focus:ring-offset-slate-50 cursor-pointer"
                        >
                            "Contact Us Now"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
