//! Contact section: enquiry form posted to the form relay, plus address,
//! phone, email and social buttons.

use leptos::*;

use crate::api::{ContactCategory, ContactSubmission, FORM_ENDPOINT};
use crate::components::{Icon, IconKind};
use crate::content::{self, SocialKind, SOCIAL_LINKS};
use crate::state::use_view_state;

const FIELD_CLASS: &str = "w-full bg-slate-50 border-b-2 border-slate-200 px-4 py-3 text-slate-900 \
                           focus:border-amber-600 focus:bg-white outline-none transition-colors";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 bg-slate-900">
            <div class="container mx-auto px-6">
                <div class="flex flex-col lg:flex-row bg-white rounded-3xl shadow-2xl overflow-hidden">
                    <div class="w-full lg:w-2/3 p-8 md:p-16">
                        <h2 class="text-3xl font-serif font-bold text-slate-900 mb-2">"Get In Touch"</h2>
                        <p class="text-slate-500 mb-8">
                            "Send us an email and we will get back to you as soon as possible."
                        </p>
                        <ContactForm />
                    </div>
                    <ContactInfo />
                </div>
            </div>
        </section>
    }
}

/// Enquiry form. Submission is a native POST to the relay; it is only
/// cancelled when the fields fail the same checks the browser applies.
#[component]
fn ContactForm() -> impl IntoView {
    let state = use_view_state();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let submission = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            category: category.get_untracked(),
            message: message.get_untracked(),
        };

        if let Err(e) = submission.validate() {
            ev.prevent_default();
            state.show_error(&e.to_string());
        }
    };

    view! {
        <form action=FORM_ENDPOINT method="POST" on:submit=on_submit class="space-y-6">
            <div class="grid md:grid-cols-2 gap-6">
                <div class="group">
                    <input
                        type="text"
                        name="name"
                        required
                        placeholder="Name"
                        class=FIELD_CLASS
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="group">
                    <input
                        type="email"
                        name="email"
                        required
                        placeholder="Email"
                        class=FIELD_CLASS
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <div class="group">
                    <input
                        type="text"
                        name="phone"
                        required
                        placeholder="Phone Number"
                        class=FIELD_CLASS
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </div>
                <div class="group">
                    <select
                        name="category"
                        id="category"
                        required
                        class=FIELD_CLASS
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="" disabled selected>"Select a Category"</option>
                        {ContactCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="group">
                <textarea
                    name="message"
                    id="message"
                    rows="4"
                    required
                    placeholder="Message"
                    class=FIELD_CLASS
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button
                type="submit"
                class="px-10 py-4 bg-amber-600 hover:bg-amber-700 text-white font-bold rounded-lg transition-colors shadow-lg w-full md:w-auto"
            >
                "Send Message"
            </button>
        </form>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="w-full lg:w-1/3 bg-slate-950 p-10 md:p-16 text-white flex flex-col justify-between relative overflow-hidden">
            <div
                class="absolute inset-0 opacity-10"
                style="background-image: radial-gradient(circle, #ffffff 1px, transparent 1px); background-size: 20px 20px;"
            ></div>

            <div class="relative z-10">
                <h3 class="text-xl font-bold mb-8 border-b border-slate-800 pb-4">"Contact Info"</h3>
                <div class="space-y-8">
                    <InfoRow icon=IconKind::MapPin label="Address" value=content::ADDRESS />
                    <InfoRow icon=IconKind::Phone label="Phone" value=content::PHONE_DISPLAY />
                    <InfoRow icon=IconKind::Mail label="Email" value=content::EMAIL />
                </div>
            </div>

            <div class="relative z-10 mt-12">
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            let icon = match link.kind {
                                SocialKind::Instagram => IconKind::Instagram,
                                SocialKind::Mail => IconKind::Mail,
                                SocialKind::WhatsApp => IconKind::MessageCircle,
                                SocialKind::Phone => IconKind::Phone,
                            };
                            view! {
                                <a
                                    href=link.href
                                    target=link.new_tab.then_some("_blank")
                                    rel=link.new_tab.then_some("noreferrer")
                                    aria-label=format!("{:?}", link.kind)
                                    class="w-12 h-12 rounded-full border border-slate-700 hover:bg-amber-600 hover:border-amber-600 flex items-center justify-center transition-all"
                                >
                                    <Icon kind=icon size=20 />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn InfoRow(icon: IconKind, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="w-10 h-10 rounded-full bg-slate-800 flex items-center justify-center flex-shrink-0 text-amber-500">
                <Icon kind=icon size=20 />
            </div>
            <div>
                <span class="block text-slate-400 text-xs uppercase tracking-wider mb-1">{label}</span>
                <p class="text-white text-sm leading-relaxed">{value}</p>
            </div>
        </div>
    }
}
