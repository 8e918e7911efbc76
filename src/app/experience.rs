use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{Experience, PORTFOLIO};
use crate::nav::SectionId;

#[component]
pub fn WorkExperience() -> impl IntoView {
    let count = PORTFOLIO.experience.len();

    view! {
        <section
            id=SectionId::Experience.id()
            class="py-24 px-6 bg-surface relative overflow-hidden"
        >
            <div class="max-w-5xl mx-auto relative z-10">
                <SectionHeading
                    badge="Career Journey"
                    lead="Work"
                    highlight="Experience"
                    blurb="A track record of delivering exceptional results across diverse industries and roles"
                />
                <div class="relative">
                    {PORTFOLIO
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| view! { <TimelineEntry entry is_last=i + 1 == count /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: &'static Experience, is_last: bool) -> impl IntoView {
    view! {
        <div class="group relative flex gap-6 md:gap-8 section-content">
            <div class="relative flex flex-col items-center">
                <div class="w-4 h-4 mt-8 rounded-full border-2 border-primary bg-surface-variant transition-colors duration-300 group-hover:bg-primary"></div>
                {(!is_last)
                    .then(|| {
                        view! {
                            <div class="w-0.5 flex-1 bg-gradient-to-b from-primary/50 to-outline"></div>
                        }
                    })}
            </div>
            <div class="flex-1 pb-12">
                <div class="relative bg-white/5 backdrop-blur-xl border border-outline rounded-2xl p-6 md:p-8 overflow-hidden transition-all duration-300 group-hover:-translate-y-1 group-hover:border-primary/40">
                    <div class="mb-4">
                        <span class="inline-block px-3 py-1 bg-primary/10 border border-primary/30 rounded-full text-sm text-primary font-medium">
                            {entry.company.clone()}
                        </span>
                    </div>
                    <h3 class="text-xl md:text-2xl font-bold text-white mb-4">{entry.role.clone()}</h3>
                    <p class="text-slate-400 leading-relaxed mb-6">{entry.description.clone()}</p>
                    <a
                        href=entry.website.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 text-primary hover:text-white font-medium transition-colors duration-200"
                    >
                        "Visit Website"
                        <span class="transition-transform duration-200 group-hover:translate-x-1">
                            "↗"
                        </span>
                    </a>
                </div>
            </div>
        </div>
    }
}
