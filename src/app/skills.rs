use leptos::{html, prelude::*};

use super::hooks::use_reveal_once;
use crate::{
    content::profile,
    motion::{FADE, ITEM, SECTION_STAGGER, SKILL_CHIP},
    sections::Section,
};

const SKILL_CLOUD_DELAY_MS: u32 = 800;

#[component]
pub fn Skills() -> impl IntoView {
    let profile = profile();
    let header_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(header_ref, Section::Skills.id());
    let item = move |i: usize| move || SECTION_STAGGER.style(&ITEM, revealed(), i);

    view! {
        <section id=Section::Skills.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div node_ref=header_ref class="text-center mb-16">
                    <h2
                        class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent"
                        style=item(0)
                    >
                        "Skills & Technologies"
                    </h2>
                    <div
                        class="w-24 h-1 bg-gradient-to-r from-blue-400 to-purple-400 mx-auto rounded-full"
                        style=item(1)
                    />
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {profile
                        .skill_categories
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <div
                                    class="bg-gradient-to-br from-slate-800/40 to-purple-900/20 backdrop-blur-sm rounded-2xl p-6 border border-purple-500/20 hover:border-purple-400/40 transition-all duration-300"
                                    style=item(i)
                                >
                                    <h3 class="text-xl font-semibold text-blue-400 mb-6 text-center">
                                        {category.title.as_str()}
                                    </h3>
                                    <div class="grid grid-cols-2 gap-3">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(j, skill)| {
                                                view! {
                                                    <div
                                                        class="bg-gradient-to-r from-purple-500/20 to-blue-500/20 backdrop-blur-sm rounded-lg p-3 text-center border border-purple-500/30 hover:border-purple-400/60 hover:scale-105 active:scale-95 transition-all duration-300 cursor-pointer group"
                                                        style=move || {
                                                            SECTION_STAGGER.style(&SKILL_CHIP, revealed(), j)
                                                        }
                                                    >
                                                        <span class="text-sm font-medium text-gray-300 group-hover:text-white transition-colors">
                                                            {skill.as_str()}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class="mt-16 relative h-32 overflow-hidden"
                    style=move || FADE.style(revealed(), SKILL_CLOUD_DELAY_MS)
                >
                    <div class="absolute whitespace-nowrap text-6xl font-bold opacity-5 text-purple-400 animate-marquee">
                        {profile.skill_cloud()}
                    </div>
                </div>
            </div>
        </section>
    }
}
