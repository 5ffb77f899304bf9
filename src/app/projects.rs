use leptos::{html, prelude::*};

use super::hooks::use_reveal_once;
use crate::{
    content::{profile, Project},
    motion::{ITEM, SECTION_STAGGER},
    sections::Section,
};

#[component]
pub fn Projects() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(header_ref, Section::Projects.id());

    view! {
        <section id=Section::Projects.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div node_ref=header_ref class="text-center mb-16">
                    <h2
                        class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent"
                        style=move || SECTION_STAGGER.style(&ITEM, revealed(), 0)
                    >
                        "Featured Projects"
                    </h2>
                    <div
                        class="w-24 h-1 bg-gradient-to-r from-blue-400 to-purple-400 mx-auto rounded-full"
                        style=move || SECTION_STAGGER.style(&ITEM, revealed(), 1)
                    />
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {profile()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div style=move || SECTION_STAGGER.style(&ITEM, revealed(), i)>
                                    <ProjectCard project />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let link_class = "text-sm font-medium text-purple-300 hover:text-white transition-colors";
    view! {
        <div class="h-full flex flex-col bg-gradient-to-br from-slate-800/40 to-purple-900/20 backdrop-blur-sm rounded-2xl p-6 border border-purple-500/20 hover:border-purple-400/40 transition-all duration-300 hover:scale-[1.02]">
            <h3 class="text-xl font-semibold text-blue-400 mb-3">{project.title.as_str()}</h3>
            <p class="text-gray-400 text-sm leading-relaxed mb-6 flex-grow">
                {project.description.as_str()}
            </p>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="text-xs px-3 py-1 rounded-full bg-purple-500/20 border border-purple-500/30 text-gray-300">
                                {t.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4">
                {project
                    .repo
                    .as_deref()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class=link_class>
                                <i class="devicon-github-plain mr-1" />
                                "Code"
                            </a>
                        }
                    })}
                {project
                    .demo
                    .as_deref()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class=link_class>
                                "Live Demo →"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
