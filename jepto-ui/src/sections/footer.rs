//! Footer and the floating WhatsApp button.

use leptos::*;

use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-950 py-12 border-t border-slate-900">
            <div class="container mx-auto px-6 text-center">
                <div class="mb-6 flex flex-col items-center justify-center gap-2">
                    <img src=content::LOGO_URL alt="Jepto Logo" class="w-16 h-16 rounded-lg opacity-80" />
                    <span class="text-white font-serif text-2xl font-bold">{content::COMPANY_FULL_NAME}</span>
                </div>
                <p class="text-slate-500 text-sm">
                    {format!("© {} | Developed by ", content::COPYRIGHT_YEAR)}
                    <a href=content::DEVELOPER_URL class="text-amber-600 hover:text-amber-500 transition-colors">
                        {content::DEVELOPER_NAME}
                    </a>
                </p>
            </div>
        </footer>
    }
}

/// Fixed bottom-right chat shortcut
#[component]
pub fn WhatsAppButton() -> impl IntoView {
    view! {
        <a
            href=content::WHATSAPP_URL
            target="_blank"
            rel="noreferrer"
            class="fixed bottom-6 right-6 z-50 w-16 h-16 rounded-full shadow-2xl hover:scale-110 transition-transform duration-300"
        >
            <img src=content::WHATSAPP_ICON_URL alt="WhatsApp" class="w-full h-full object-cover" />
        </a>
    }
}
