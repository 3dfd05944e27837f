//! About section: company description and the "why choose us" list.

use leptos::*;

use crate::components::ReasonItem;
use crate::content::{self, REASONS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 md:py-32 bg-white">
            <div class="container mx-auto px-6">
                <div class="flex flex-col lg:flex-row gap-20 items-start">
                    // Image column
                    <div class="w-full lg:w-1/2 relative">
                        <div class="absolute -top-4 -left-4 w-24 h-24 border-t-4 border-l-4 border-amber-600 hidden md:block"></div>
                        <div class="absolute -bottom-4 -right-4 w-24 h-24 border-b-4 border-r-4 border-amber-600 hidden md:block"></div>

                        <img
                            src=content::ABOUT_IMAGE_URL
                            alt="About Jepto"
                            class="w-full h-auto object-cover rounded-xl shadow-2xl z-10 relative grayscale hover:grayscale-0 transition-all duration-700"
                        />

                        <div class="absolute -bottom-10 -left-6 md:left-10 bg-white p-6 rounded-lg shadow-xl max-w-xs z-20 hidden md:block border border-slate-100">
                            <p class="font-serif font-bold text-slate-900 text-xl">
                                "Integrity. Innovation. Satisfaction."
                            </p>
                        </div>
                    </div>

                    // Content column
                    <div class="w-full lg:w-1/2">
                        <div class="mb-8">
                            <h4 class="text-amber-600 font-bold uppercase tracking-widest text-sm mb-2">"Who We Are"</h4>
                            <h2 class="text-4xl md:text-5xl font-serif font-bold text-slate-900 mb-6">
                                "Expertise Meets " <br/> "Dedication."
                            </h2>
                            <p class="text-slate-600 leading-relaxed mb-6 text-lg">
                                "At Jepto, we specialize in real estate buying and selling, land & property development, \
                                 management, and general contracts & merchandise. Our goal is to provide tailored solutions \
                                 that meet the unique needs of our clients."
                            </p>
                            <p class="text-slate-500 leading-relaxed">
                                "With a strong focus on integrity, innovation, and client satisfaction, we bring expertise \
                                 and dedication to every project. From consultation to execution, we strive to exceed expectations."
                            </p>
                        </div>

                        <div class="bg-slate-50 p-8 rounded-2xl border border-slate-100 mt-8">
                            <h3 class="font-serif font-bold text-2xl mb-4">"Why Choose Us?"</h3>
                            <ul class="space-y-4">
                                {REASONS.iter().map(|reason| view! { <ReasonItem reason=*reason /> }).collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
