use leptos::{ev, html, prelude::*};

use super::hooks::use_reveal_once;
use crate::{
    contact::{submit_contact, ContactDraft, Field},
    content::profile,
    motion::{ITEM, SECTION_STAGGER},
    notify::{NotificationQueue, NOTIFICATION_TTL},
    sections::Section,
};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md bg-slate-800/50 border border-purple-500/30 text-white placeholder-gray-400 focus:border-purple-400 focus:outline-none focus:ring-1 focus:ring-purple-400";

#[component]
pub fn Contact() -> impl IntoView {
    let profile = profile();
    let header_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(header_ref, Section::Contact.id());
    let item = move |i: usize| move || SECTION_STAGGER.style(&ITEM, revealed(), i);

    view! {
        <section
            id=Section::Contact.id()
            class="py-20 px-4 bg-gradient-to-r from-slate-900/50 to-purple-900/20"
        >
            <div class="max-w-4xl mx-auto">
                <div node_ref=header_ref class="text-center mb-16">
                    <h2
                        class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent"
                        style=item(0)
                    >
                        "Get In Touch"
                    </h2>
                    <div
                        class="w-24 h-1 bg-gradient-to-r from-blue-400 to-purple-400 mx-auto rounded-full mb-6"
                        style=item(1)
                    />
                    <p class="text-gray-400 text-lg max-w-2xl mx-auto" style=item(2)>
                        "I'm always interested in new opportunities and exciting projects. Let's connect and create something amazing together!"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div style=item(0)>
                        <ContactForm />
                    </div>

                    <div class="space-y-8">
                        <div
                            class="bg-gradient-to-br from-slate-800/40 to-purple-900/20 backdrop-blur-sm rounded-2xl p-8 border border-purple-500/20"
                            style=item(0)
                        >
                            <h3 class="text-xl font-semibold text-blue-400 mb-4">"Let's Connect"</h3>
                            <p class="text-gray-400 mb-6">
                                "Feel free to reach out through any of these platforms. I'm always open to discussing new opportunities, collaborations, or just having a chat about technology!"
                            </p>
                            <div class="flex flex-wrap gap-4">
                                {profile
                                    .socials
                                    .iter()
                                    .enumerate()
                                    .map(|(i, link)| {
                                        view! {
                                            <a
                                                href=link.href.as_str()
                                                aria-label=link.label.as_str()
                                                title=link.label.as_str()
                                                style=item(i)
                                                class="w-12 h-12 bg-gradient-to-r from-purple-500/20 to-blue-500/20 backdrop-blur-sm rounded-full border border-purple-500/30 hover:border-purple-400/60 hover:scale-110 hover:rotate-6 active:scale-90 flex items-center justify-center transition-all duration-300 group"
                                            >
                                                <i class=format!(
                                                    "{} text-xl text-gray-400 group-hover:text-white transition-colors",
                                                    link.icon,
                                                ) />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div
                            class="bg-gradient-to-br from-slate-800/40 to-purple-900/20 backdrop-blur-sm rounded-2xl p-8 border border-purple-500/20"
                            style=item(1)
                        >
                            <h3 class="text-xl font-semibold text-blue-400 mb-4">"Quick Info"</h3>
                            <div class="space-y-3 text-gray-400">
                                {profile
                                    .quick_info
                                    .iter()
                                    .map(|line| view! { <p>{line.as_str()}</p> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Three required fields; submitting only simulates delivery.
#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let toasts = expect_context::<RwSignal<NotificationQueue>>();

    let value = move |field: Field| move || draft.with(|d| d.get(field).to_string());
    let on_input =
        move |field: Field| move |ev: ev::Event| draft.update(|d| d.set(field, event_target_value(&ev)));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let id = toasts
            .try_update(|queue| draft.try_update(|d| submit_contact(d, queue)))
            .flatten();
        if let Some(id) = id {
            set_timeout(
                move || {
                    toasts.update(|queue| {
                        queue.dismiss(id);
                    });
                },
                NOTIFICATION_TTL,
            );
        }
    };

    view! {
        <div class="bg-gradient-to-br from-slate-800/40 to-purple-900/20 backdrop-blur-sm border border-purple-500/20 rounded-2xl p-8">
            <form on:submit=on_submit class="space-y-6">
                <div>
                    <input
                        type="text"
                        name=Field::Name.name()
                        placeholder=Field::Name.placeholder()
                        required
                        class=INPUT_CLASS
                        prop:value=value(Field::Name)
                        on:input=on_input(Field::Name)
                    />
                </div>
                <div>
                    <input
                        type="email"
                        name=Field::Email.name()
                        placeholder=Field::Email.placeholder()
                        required
                        class=INPUT_CLASS
                        prop:value=value(Field::Email)
                        on:input=on_input(Field::Email)
                    />
                </div>
                <div>
                    <textarea
                        name=Field::Message.name()
                        rows=5
                        placeholder=Field::Message.placeholder()
                        required
                        class=format!("{INPUT_CLASS} resize-none")
                        prop:value=value(Field::Message)
                        on:input=on_input(Field::Message)
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white py-3 rounded-full font-medium transition-all duration-300 hover:scale-105"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
