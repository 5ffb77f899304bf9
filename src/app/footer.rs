use leptos::prelude::*;

use crate::content::{copyright_line, profile};

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Server-only: rendered by `shell` after `App`, outside the hydrated tree.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-purple-500/20 bg-slate-900 text-center text-sm text-gray-500">
            <p>{copyright_line(&profile().name, BUILD_TIME)}</p>
            <p class="mt-1 text-xs text-gray-600" title=BUILD_TIME>
                "Built with Leptos · " {BUILD_TIME}
            </p>
        </footer>
    }
}
