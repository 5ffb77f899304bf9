use leptos::prelude::*;

use super::hooks::{scroll_to_section, use_active_section, use_mounted};
use crate::{
    motion::{FADE, NAV_BAR, NAV_ENTRY, NAV_STAGGER},
    sections::{NavMenu, Section},
};

#[component]
pub fn Navigation() -> impl IntoView {
    let active = use_active_section();
    let mounted = use_mounted();
    let menu = RwSignal::new(NavMenu::default());

    let go = move |section: Section| {
        let target = menu.try_update(|m| m.select(section)).unwrap_or(section);
        scroll_to_section(target);
    };

    view! {
        <nav
            class="fixed top-0 w-full z-50 backdrop-blur-md bg-slate-900/80 border-b border-purple-500/20"
            style=move || NAV_BAR.style(mounted(), 0)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div
                        class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent"
                        style=move || FADE.style(mounted(), 200)
                    >
                        "Portfolio"
                    </div>

                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .enumerate()
                            .map(|(i, section)| {
                                view! {
                                    <button
                                        class=move || {
                                            if active() == section {
                                                "px-3 py-2 text-sm font-medium transition-colors text-blue-400"
                                            } else {
                                                "px-3 py-2 text-sm font-medium transition-colors text-gray-300 hover:text-white"
                                            }
                                        }
                                        style=move || NAV_STAGGER.style(&NAV_ENTRY, mounted(), i)
                                        on:click=move |_| go(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="md:hidden">
                        <button
                            class="text-gray-300 hover:text-white p-2 text-2xl leading-none"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| menu.update(NavMenu::toggle)
                        >
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-slate-900/95 backdrop-blur-md animate-fade-in">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="block px-3 py-2 text-base font-medium text-gray-300 hover:text-white w-full text-left"
                                        on:click=move |_| go(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
