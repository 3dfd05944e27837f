//! Content Cards
//!
//! Presentational cards for the services, portfolio and testimonial grids.

use leptos::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{Project, Reason, Service, Testimonial, TESTIMONIAL_STARS};

/// Numbered service card. The first card is highlighted permanently, the
/// others only on hover.
#[component]
pub fn ServiceCard(service: Service, index: usize) -> impl IntoView {
    let featured = index == 0;
    let badge_class = if featured {
        "absolute -top-8 right-8 w-16 h-16 bg-amber-600 rounded-2xl flex items-center justify-center \
         text-white text-2xl font-bold shadow-lg group-hover:rotate-12 transition-transform"
    } else {
        "absolute -top-8 right-8 w-16 h-16 bg-slate-700 group-hover:bg-amber-600 rounded-2xl flex items-center \
         justify-center text-white text-2xl font-bold shadow-lg transition-colors"
    };
    let tagline_class = if featured {
        "inline-block border-b border-amber-600 text-amber-500 pb-1 text-sm font-semibold uppercase tracking-wider"
    } else {
        "inline-block border-b border-slate-600 group-hover:border-amber-600 text-slate-400 group-hover:text-amber-500 \
         pb-1 text-sm font-semibold uppercase tracking-wider transition-colors"
    };

    view! {
        <div class="group relative overflow-hidden rounded-3xl bg-slate-800 border border-slate-700 hover:border-amber-600/50 transition-all duration-500">
            <div class="h-64 overflow-hidden">
                <img
                    src=service.image
                    alt=service.image_alt
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                />
            </div>
            <div class="p-8 relative">
                <div class=badge_class>{format!("{:02}", index + 1)}</div>
                <h3 class="text-2xl font-bold mb-4 font-serif">{service.title}</h3>
                <p class="text-slate-400 leading-relaxed mb-6">{service.description}</p>
                <span class=tagline_class>{service.tagline}</span>
            </div>
        </div>
    }
}

/// Gallery tile with a hover caption
#[component]
pub fn ProjectTile(project: Project) -> impl IntoView {
    view! {
        <a href="#" class="group relative overflow-hidden rounded-xl cursor-pointer block h-80 shadow-md">
            <img
                src=project.image
                alt=project.title
                class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex flex-col justify-end p-6">
                <h4 class="text-white text-xl font-bold transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300">
                    {project.title}
                </h4>
                <p class="text-amber-400 text-sm transform translate-y-4 group-hover:translate-y-0 transition-transform duration-300 delay-75">
                    "View Details"
                </p>
            </div>
        </a>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="bg-slate-50 p-8 rounded-2xl border border-slate-100 hover:shadow-xl hover:-translate-y-2 transition-all duration-300">
            <div class="flex items-center gap-4 mb-6">
                <img
                    src=testimonial.avatar
                    alt=testimonial.name
                    class="w-14 h-14 rounded-full object-cover border-2 border-amber-500"
                />
                <div>
                    <h5 class="font-bold text-slate-900">{testimonial.name}</h5>
                    <p class="text-xs text-amber-600 font-semibold uppercase">{testimonial.role}</p>
                </div>
            </div>
            <div class="flex gap-1 text-amber-500 mb-4 text-xs">
                {(0..TESTIMONIAL_STARS)
                    .map(|_| view! { <Icon kind=IconKind::Star size=14 filled=true /> })
                    .collect_view()}
            </div>
            <p class="text-slate-600 italic leading-relaxed text-sm">
                {format!("\"{}\"", testimonial.quote)}
            </p>
        </div>
    }
}

/// "Why choose us" bullet
#[component]
pub fn ReasonItem(reason: Reason) -> impl IntoView {
    view! {
        <li class="flex gap-4 items-start">
            <div class="min-w-[24px] pt-1">
                <Icon kind=IconKind::CheckCircle class="text-amber-600" />
            </div>
            <div>
                <strong class="block text-slate-900">{reason.title}</strong>
                <span class="text-slate-500 text-sm">{reason.text}</span>
            </div>
        </li>
    }
}
