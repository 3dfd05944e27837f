//! Services, portfolio and testimonial grids.

use leptos::*;

use crate::components::{ProjectTile, ServiceCard, TestimonialCard};
use crate::content::{PROJECTS, SERVICES, TESTIMONIALS};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-24 bg-slate-900 text-white">
            <div class="container mx-auto px-6">
                <div class="text-center max-w-3xl mx-auto mb-20">
                    <h2 class="text-amber-500 font-bold uppercase tracking-widest text-sm mb-3">"Our Services"</h2>
                    <h2 class="text-4xl md:text-5xl font-serif font-bold text-white">"We Build & Manage Your Dreams"</h2>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| view! { <ServiceCard service=*service index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="py-24 bg-slate-50">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-end mb-16">
                    <div class="max-w-2xl">
                        <span class="text-amber-600 font-bold uppercase tracking-widest text-sm">"Our Works"</span>
                        <h2 class="text-4xl font-serif font-bold text-slate-900 mt-2">"Latest Projects"</h2>
                        <p class="text-slate-500 mt-4">
                            "A glimpse into the properties we have transformed and developed."
                        </p>
                    </div>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                    {PROJECTS.iter().map(|project| view! { <ProjectTile project=*project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-24 bg-white relative overflow-hidden">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-serif font-bold text-slate-900">"What Our Clients Say"</h2>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
