use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal, use_staggered_reveal};
use super::use_page_config;
use crate::content::{categories, filter_skills, CategoryFilter, CONTENT};
use crate::sections::SKILLS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let config = use_page_config();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, config.thresholds.skills);
    let cards = use_staggered_reveal(visible, CONTENT.skills.len(), config.skills_stagger);
    let (filter, set_filter) = signal(CategoryFilter::All);

    let filter_buttons = categories(&CONTENT.skills)
        .into_iter()
        .map(|category| {
            let label = category.label().to_string();
            let selected = category.clone();
            view! {
                <button
                    on:click=move |_| set_filter.set(selected.clone())
                    class=move || {
                        if filter.with(|f| *f == category) {
                            "px-6 py-2 rounded-full font-medium transition-all duration-300 bg-primary text-primary-foreground shadow-medium"
                        } else {
                            "px-6 py-2 rounded-full font-medium transition-all duration-300 bg-card text-foreground hover:bg-accent/20 border border-border"
                        }
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let skill_cards = move || {
        let current = filter.get();
        filter_skills(&CONTENT.skills, &current)
            .into_iter()
            .enumerate()
            .map(|(index, skill)| {
                let level = skill.proficiency();
                let shown = move || cards.with(|c| c.is_revealed(index));
                view! {
                    <div class=move || {
                        if shown() {
                            "bg-card rounded-xl p-6 shadow-soft hover-lift transition-all duration-1000 fade-in-up"
                        } else {
                            "bg-card rounded-xl p-6 shadow-soft hover-lift transition-all duration-1000"
                        }
                    }>
                        <div class="flex justify-between items-center mb-3">
                            <h3 class="font-semibold text-lg text-foreground">{skill.name.clone()}</h3>
                            <span class="text-sm text-accent font-medium">{skill.category.clone()}</span>
                        </div>
                        <div class="w-full bg-muted rounded-full h-3 overflow-hidden">
                            <div
                                class="h-full bg-gradient-to-r from-primary to-accent rounded-full transition-all duration-1000"
                                style=move || format!("width: {}%", if shown() { level } else { 0 })
                            />
                        </div>
                        <div class="flex justify-between items-center mt-2">
                            <span class="text-sm text-muted-foreground">"Proficiency"</span>
                            <span class="text-sm font-medium text-foreground">{format!("{level}%")}</span>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id=SKILLS.id node_ref=section_ref class="py-24 px-6 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <div class=reveal_class(visible, "text-center mb-16 transition-all duration-1000", "fade-in-up")>
                    <h2
                        class="font-display text-4xl md:text-5xl lg:text-6xl font-bold text-primary mb-6 glitch gradient-text"
                    >
                        "Skills & Expertise"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "A comprehensive toolkit of modern technologies and creative solutions that enable me to bring ideas to life with precision and innovation."
                    </p>
                </div>

                <div class=reveal_class(
                    visible,
                    "flex flex-wrap justify-center gap-3 mb-12 transition-all duration-1000 delay-300",
                    "fade-in-up",
                )>{filter_buttons}</div>

                <div class="grid md:grid-cols-2 gap-6">{skill_cards}</div>
            </div>
        </section>
    }
}
