mod contact;
mod experience;
mod expertise;
mod hero;
mod navbar;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PORTFOLIO;
use contact::Contact;
use experience::WorkExperience;
use expertise::Expertise;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;

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
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PORTFOLIO.profile.name) />
        <Meta name="description" content=PORTFOLIO.profile.summary.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section stacked in navigation order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background">
            <Navbar />
            <main>
                <Hero />
                <Expertise />
                <WorkExperience />
                <Projects />
                <Contact />
            </main>
        </div>
    }
}

/// Shared heading block used at the top of each content section.
#[component]
fn SectionHeading(
    badge: &'static str,
    lead: &'static str,
    highlight: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 section-content">
            <div class="inline-flex items-center gap-2 px-4 py-2 bg-white/5 border border-outline rounded-full mb-6">
                <span class="w-2 h-2 bg-primary rounded-full"></span>
                <span class="text-sm text-slate-300">{badge}</span>
            </div>
            <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                {lead}
                " "
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                    {highlight}
                </span>
            </h2>
            <p class="text-slate-400 text-lg max-w-2xl mx-auto">{blurb}</p>
        </div>
    }
}
