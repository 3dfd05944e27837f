//! Landing Page
//!
//! The whole site: every section stacked under the fixed navbar.

use leptos::*;

use crate::components::{Nav, Toast};
use crate::sections::{
    About, Contact, CtaStrip, Footer, Hero, Portfolio, Services, Testimonials, WhatsAppButton,
};

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="font-sans text-slate-800 bg-slate-50 overflow-x-hidden selection:bg-amber-500 selection:text-white">
            <Nav />

            <Hero />
            <CtaStrip />
            <About />
            <Services />
            <Portfolio />
            <Testimonials />
            <Contact />
            <Footer />

            <WhatsAppButton />
            <Toast />
        </div>
    }
}
