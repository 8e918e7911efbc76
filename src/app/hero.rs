use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::nav::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &PORTFOLIO.profile;

    view! {
        <section
            id=SectionId::Home.id()
            class="relative min-h-screen flex items-center justify-center px-6 py-32 bg-background overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-20 left-10 w-96 h-96 bg-primary/20 rounded-full blur-3xl drift"></div>
                <div class="absolute bottom-20 right-10 w-96 h-96 bg-secondary/20 rounded-full blur-3xl drift-reverse"></div>
                <div class="absolute inset-0 hero-grid"></div>
            </div>

            <div class="max-w-7xl mx-auto w-full relative z-10">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <div class="flex justify-center lg:justify-end section-content">
                        <div class="relative">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-r from-primary/20 to-secondary/20 blur-2xl"></div>
                            <div class="relative w-72 h-72 md:w-96 md:h-96 rounded-full overflow-hidden border-4 border-white/10 shadow-2xl transition-transform duration-300 hover:scale-[1.02]">
                                <img
                                    src=profile.portrait.clone()
                                    alt="Profile"
                                    class="w-full h-full object-cover"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-slate-950/50 via-transparent to-transparent"></div>
                            </div>
                            <div class="absolute -bottom-4 -right-4 px-4 py-2 bg-surface-variant/90 backdrop-blur-md border border-outline rounded-full">
                                <div class="flex items-center gap-2">
                                    <span class="text-primary">"✦"</span>
                                    <span class="text-sm font-medium text-white">
                                        {profile.availability.clone()}
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="text-center lg:text-left section-content">
                        <div class="mb-4">
                            <span class="inline-flex items-center gap-2 px-4 py-2 bg-white/5 border border-outline rounded-full text-sm text-slate-300">
                                <span class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></span>
                                {profile.badge.clone()}
                            </span>
                        </div>

                        <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold text-white mb-6">
                            "Hi, I am "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary">
                                {profile.name.clone()}
                            </span>
                        </h1>

                        <p class="mb-6 text-2xl md:text-3xl text-slate-300 font-light">
                            {profile
                                .roles
                                .iter()
                                .enumerate()
                                .map(|(i, role)| {
                                    view! {
                                        {(i > 0)
                                            .then(|| {
                                                view! {
                                                    " "
                                                    <span class="text-secondary">"&"</span>
                                                    " "
                                                }
                                            })}
                                        <span>{role.clone()}</span>
                                    }
                                })
                                .collect_view()}
                        </p>

                        <p class="text-slate-400 text-lg leading-relaxed max-w-xl mx-auto lg:mx-0 mb-8">
                            {profile.summary.clone()}
                        </p>

                        <div class="flex flex-wrap gap-4 justify-center lg:justify-start mb-12">
                            <a
                                href=SectionId::Projects.anchor()
                                class="group relative px-8 py-4 bg-primary text-white font-semibold rounded-xl overflow-hidden transition-transform duration-200 hover:scale-[1.03]"
                            >
                                <span class="relative z-10 flex items-center gap-2">
                                    "View Projects" <span>"→"</span>
                                </span>
                            </a>
                            <a
                                href=SectionId::Contact.anchor()
                                class="px-8 py-4 border-2 border-outline-variant text-white font-semibold rounded-xl hover:bg-white/5 transition-colors duration-300"
                            >
                                "Get in Touch"
                            </a>
                        </div>

                        <div>
                            <p class="text-sm text-slate-500 mb-4">"Tech Stack"</p>
                            <div class="flex flex-wrap gap-2 justify-center lg:justify-start">
                                {profile
                                    .tech_stack
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-4 py-2 bg-white/5 border border-outline rounded-lg text-sm text-slate-300 cursor-default hover:border-primary/40 transition-colors duration-200">
                                                {tech.clone()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
