use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{Project, PORTFOLIO};
use crate::nav::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.id() class="py-24 px-6 bg-background relative overflow-hidden">
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeading
                    badge="Portfolio"
                    lead="Featured"
                    highlight="Projects"
                    blurb="A selection of my recent work showcasing full-stack development and design expertise"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PORTFOLIO
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group relative bg-white/5 backdrop-blur-xl border border-outline rounded-3xl overflow-hidden transition-all duration-300 hover:-translate-y-2 hover:border-primary/40 section-content">
            <div class="relative h-52 overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-t {} opacity-0 group-hover:opacity-20 transition-opacity duration-300",
                    project.gradient,
                )></div>
                <div class="absolute top-4 left-4">
                    <span class="px-3 py-1 bg-slate-950/70 backdrop-blur-md border border-white/10 rounded-full text-xs text-white font-medium">
                        {project.category.clone()}
                    </span>
                </div>
                <div class="absolute inset-0 flex items-center justify-center bg-slate-950/60 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <a
                        href=project.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-3 bg-primary text-white font-semibold rounded-xl"
                    >
                        "View Project"
                    </a>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-white mb-3">{project.title.clone()}</h3>
                <p class="text-slate-400 text-sm leading-relaxed mb-4">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-white/5 border border-outline rounded-lg text-xs text-slate-300 hover:border-primary/40 transition-colors duration-200">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 text-primary hover:text-white font-medium transition-colors duration-200"
                >
                    "Visit Live Site"
                    <span class="transition-transform duration-200 group-hover:translate-x-1 group-hover:-translate-y-0.5">
                        "↗"
                    </span>
                </a>
            </div>
        </div>
    }
}
