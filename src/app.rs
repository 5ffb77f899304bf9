mod about;
mod contact;
mod footer;
mod hero;
mod hooks;
mod navigation;
mod projects;
mod skills;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::profile, notify::NotificationQueue};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use projects::Projects;
use skills::Skills;
use toaster::Toaster;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-slate-900">
                <App />
                <Footer />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RwSignal::new(NotificationQueue::new()));

    view! {
        <Title formatter=|title| format!("{} - {title}", profile().name) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section stacked in page order.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Meta name="description" content=profile().tagline.as_str() />
        <div class="bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 min-h-screen text-white overflow-x-hidden">
            <Navigation />
            <main>
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Toaster />
        </div>
    }
}
