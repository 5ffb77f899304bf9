use leptos::{html, prelude::*};

use super::hooks::use_reveal_once;
use crate::{
    content::profile,
    motion::{ITEM, SECTION_STAGGER},
    sections::Section,
};

#[component]
pub fn About() -> impl IntoView {
    let profile = profile();
    let header_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(header_ref, Section::About.id());
    let item = move |i: usize| move || SECTION_STAGGER.style(&ITEM, revealed(), i);
    let last = profile.experiences.len().saturating_sub(1);

    view! {
        <section id=Section::About.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div node_ref=header_ref class="text-center mb-16">
                    <h2
                        class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent"
                        style=item(0)
                    >
                        "About Me"
                    </h2>
                    <div
                        class="w-24 h-1 bg-gradient-to-r from-blue-400 to-purple-400 mx-auto rounded-full"
                        style=item(1)
                    />
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-6" style=item(0)>
                        <div class="bg-gradient-to-r from-gray-800 to-gray-900 backdrop-blur-sm rounded-2xl p-8 border border-gray-700">
                            <h3 class="text-2xl font-semibold mb-4 text-blue-400">"My Story"</h3>
                            {profile
                                .story
                                .iter()
                                .map(|p| {
                                    view! {
                                        <p class="text-gray-300 leading-relaxed mb-4">{p.as_str()}</p>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=profile.resume_url.as_str()
                                download=""
                                class="inline-block mt-2 bg-gradient-to-r from-blue-500 to-purple-500 hover:from-blue-600 hover:to-purple-600 text-white px-6 py-2 rounded-full transition-all duration-300 hover:scale-105"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h3 class="text-2xl font-semibold mb-6 text-blue-400">"Experience"</h3>
                        {profile
                            .experiences
                            .iter()
                            .enumerate()
                            .map(|(i, exp)| {
                                view! {
                                    <div class="relative" style=item(i)>
                                        <div class="bg-gradient-to-r from-gray-800 to-gray-900 backdrop-blur-sm border border-gray-700 rounded-xl p-6 hover:border-gray-600 transition-all duration-300 hover:scale-[1.02]">
                                            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-3">
                                                <h4 class="text-lg font-semibold text-white">
                                                    {exp.title.as_str()}
                                                </h4>
                                                <span class="text-sm text-purple-400 font-medium">
                                                    {exp.period.as_str()}
                                                </span>
                                            </div>
                                            <p class="text-blue-300 font-medium mb-2">
                                                {exp.company.as_str()}
                                            </p>
                                            <p class="text-gray-400 text-sm leading-relaxed">
                                                {exp.description.as_str()}
                                            </p>
                                        </div>
                                        // connector down to the next entry
                                        {(i < last)
                                            .then(|| {
                                                view! {
                                                    <div class="absolute left-4 top-full w-0.5 h-4 bg-gradient-to-b from-gray-600 to-transparent" />
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
