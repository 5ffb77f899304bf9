use leptos::prelude::*;

use super::hooks::{scroll_to_section, use_mounted};
use crate::{
    content::profile,
    motion::{FADE, HERO_ITEM, HERO_STAGGER, SCROLL_HINT_DELAY_MS},
    sections::Section,
};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profile();
    // the hero is on screen at load, so it plays on mount instead of on intersection
    let shown = use_mounted();
    let item = move |i: usize| move || HERO_STAGGER.style(&HERO_ITEM, shown(), i);

    view! {
        <section
            id=Section::Hero.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-gradient-to-r from-blue-500/30 to-purple-500/30 rounded-full blur-3xl animate-orbit" />
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-gradient-to-r from-purple-500/20 to-pink-500/20 rounded-full blur-3xl animate-orbit-reverse" />
            </div>

            <div class="max-w-4xl mx-auto text-center px-4 relative z-10">
                <div class="mb-6" style=item(0)>
                    <span class="text-lg text-blue-400 font-medium">
                        {profile.greeting.as_str()}
                    </span>
                </div>

                <h1
                    class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-white via-blue-200 to-purple-300 bg-clip-text text-transparent"
                    style=item(1)
                >
                    {profile.name.as_str()}
                </h1>

                <h2 class="text-2xl md:text-3xl text-gray-300 mb-8 font-light" style=item(2)>
                    {profile.role.as_str()}
                </h2>

                <p
                    class="text-lg text-gray-400 mb-12 max-w-2xl mx-auto leading-relaxed"
                    style=item(3)
                >
                    {profile.tagline.as_str()}
                </p>

                <div
                    class="flex flex-col sm:flex-row gap-4 justify-center items-center"
                    style=item(4)
                >
                    <button
                        class="bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white px-8 py-3 rounded-full font-medium transition-all duration-300 hover:scale-105 shadow-lg hover:shadow-blue-500/25"
                        on:click=move |_| scroll_to_section(Section::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        class="border-2 border-purple-400 text-purple-400 hover:bg-purple-400 hover:text-white px-8 py-3 rounded-full font-medium transition-all duration-300 hover:scale-105"
                        on:click=move |_| scroll_to_section(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>

                <div class="mt-16" style=move || FADE.style(shown(), SCROLL_HINT_DELAY_MS)>
                    <div class="w-6 h-10 border-2 border-purple-400 rounded-full mx-auto relative animate-bob">
                        <div class="w-1 h-3 bg-purple-400 rounded-full mx-auto mt-1 animate-bob-deep" />
                    </div>
                </div>
            </div>
        </section>
    }
}
