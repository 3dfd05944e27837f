//! Icons
//!
//! Inline stroke icons (Lucide outlines).

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    Phone,
    Mail,
    MapPin,
    ArrowRight,
    Instagram,
    MessageCircle,
    CheckCircle,
    Star,
    ChevronDown,
}

/// Stroke icon sized in CSS pixels
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 24)]
    size: u32,
    #[prop(optional, into)]
    class: String,
    /// Fill the shape with the current text color (used for stars)
    #[prop(optional)]
    filled: bool,
) -> impl IntoView {
    let fill = if filled { "currentColor" } else { "none" };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {shapes(kind)}
        </svg>
    }
}

fn shapes(kind: IconKind) -> View {
    match kind {
        IconKind::Menu => view! {
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        }
        .into_view(),
        IconKind::Close => view! {
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        }
        .into_view(),
        IconKind::Phone => view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        }
        .into_view(),
        IconKind::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }
        .into_view(),
        IconKind::MapPin => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        }
        .into_view(),
        IconKind::ArrowRight => view! {
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        }
        .into_view(),
        IconKind::Instagram => view! {
            <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
        }
        .into_view(),
        IconKind::MessageCircle => view! {
            <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" />
        }
        .into_view(),
        IconKind::CheckCircle => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_view(),
        IconKind::Star => view! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        }
        .into_view(),
        IconKind::ChevronDown => view! {
            <path d="m6 9 6 6 6-6" />
        }
        .into_view(),
    }
}
