use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{Accent, SkillCard, Stat, PORTFOLIO};
use crate::nav::SectionId;

#[component]
pub fn Expertise() -> impl IntoView {
    view! {
        <section
            id=SectionId::Expertise.id()
            class="py-24 px-6 bg-background relative overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeading
                    badge="What I Do"
                    lead="My"
                    highlight="Expertise"
                    blurb="A comprehensive tech stack that enables me to build end-to-end solutions"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PORTFOLIO
                        .expertise
                        .iter()
                        .map(|card| view! { <SkillCardView card /> })
                        .collect_view()}
                </div>
                <div class="mt-20 grid grid-cols-2 md:grid-cols-4 gap-6">
                    {PORTFOLIO.stats.iter().map(|stat| view! { <StatView stat /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn icon_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Primary => "p-4 bg-primary/20 rounded-2xl border border-primary/30 text-primary text-2xl",
        Accent::Secondary => {
            "p-4 bg-secondary/20 rounded-2xl border border-secondary/30 text-secondary text-2xl"
        }
    }
}

#[component]
fn SkillCardView(card: &'static SkillCard) -> impl IntoView {
    view! {
        <div
            class="group relative bg-white/5 backdrop-blur-xl border border-outline rounded-3xl p-8 overflow-hidden transition-transform duration-300 hover:-translate-y-1 section-content"
            data-accent=card.accent.name()
        >
            <div class="relative z-10">
                <div class="flex items-center gap-4 mb-8">
                    <div class=icon_class(card.accent)>
                        {match card.accent {
                            Accent::Primary => "</>",
                            Accent::Secondary => "▤",
                        }}
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-white mb-1">{card.title.clone()}</h3>
                        <p class="text-slate-400 text-sm">{card.subtitle.clone()}</p>
                    </div>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 sm:gap-4">
                    {card
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="flex items-center gap-3 p-3 rounded-xl bg-white/5 border border-outline cursor-default hover:bg-white/10 transition-colors duration-200">
                                    <span class=format!(
                                        "flex-shrink-0 w-5 text-center {}",
                                        skill.color,
                                    )>{skill.glyph.clone()}</span>
                                    <span class="text-slate-300 font-medium text-sm leading-tight">
                                        {skill.name.clone()}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatView(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="text-center p-6 bg-white/5 border border-outline rounded-2xl section-content">
            <div class="text-4xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-primary to-secondary mb-2">
                {stat.value}
                {stat.suffix.clone()}
            </div>
            <p class="text-slate-400 text-sm">{stat.label.clone()}</p>
        </div>
    }
}
