use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal, use_staggered_reveal};
use super::use_page_config;
use crate::content::{EntryKind, CONTENT};
use crate::sections::EXPERIENCE;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let config = use_page_config();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, config.thresholds.experience);
    let entries = use_staggered_reveal(visible, CONTENT.timeline.len(), config.experience_stagger);

    let timeline = CONTENT
        .timeline
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            // even rows sit on the right on wide screens
            let (row, card) = if index % 2 == 0 {
                (
                    "relative flex flex-col md:flex-row items-start md:items-center transition-all duration-1000 md:flex-row-reverse",
                    "ml-16 md:ml-0 md:w-5/12 md:mr-auto md:pr-16",
                )
            } else {
                (
                    "relative flex flex-col md:flex-row items-start md:items-center transition-all duration-1000",
                    "ml-16 md:ml-0 md:w-5/12 md:ml-auto md:pl-16",
                )
            };
            let badge = match entry.kind {
                EntryKind::Experience => "px-3 py-1 text-sm font-medium rounded-full bg-primary/10 text-primary",
                EntryKind::Education => "px-3 py-1 text-sm font-medium rounded-full bg-accent/10 text-accent",
            };
            let achievements = entry
                .achievements
                .iter()
                .map(|a| {
                    view! {
                        <div class="flex items-center gap-3">
                            <div class="w-1.5 h-1.5 bg-accent rounded-full flex-shrink-0"></div>
                            <span class="text-muted-foreground">{a.clone()}</span>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class=move || {
                    if entries.with(|e| e.is_revealed(index)) {
                        format!("{row} fade-in-up")
                    } else {
                        row.to_string()
                    }
                }>
                    <div class="absolute left-6 md:left-1/2 transform md:-translate-x-1/2 w-4 h-4 bg-accent rounded-full border-4 border-background shadow-medium z-10"></div>
                    <div class=card>
                        <div class="bg-card rounded-xl p-6 md:p-8 shadow-soft hover-lift">
                            <div class="flex items-center justify-between mb-4">
                                <span class=badge>{entry.kind.to_string()}</span>
                                <span class="text-sm text-muted-foreground font-medium">
                                    {entry.period.clone()}
                                </span>
                            </div>
                            <h3 class="font-display text-xl md:text-2xl font-semibold text-primary mb-2">
                                {entry.title.clone()}
                            </h3>
                            <h4 class="text-lg font-medium text-secondary mb-4">
                                {entry.organization.clone()}
                            </h4>
                            <p class="text-muted-foreground leading-relaxed mb-6">
                                {entry.description.clone()}
                            </p>
                            <div class="space-y-2">
                                <h5 class="font-semibold text-foreground mb-3">"Key Achievements:"</h5>
                                {achievements}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=EXPERIENCE.id node_ref=section_ref class="py-24 px-6 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <div class=reveal_class(visible, "text-center mb-16 transition-all duration-1000", "fade-in-up")>
                    <h2
                        class="font-display text-4xl md:text-5xl lg:text-6xl font-bold text-primary mb-6 glitch gradient-text"
                    >
                        "Experience & Education"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "A journey of continuous learning, growth, and professional development in the ever-evolving world of technology and design."
                    </p>
                </div>

                <div class="relative">
                    <div class="absolute left-8 md:left-1/2 transform md:-translate-x-0.5 top-0 bottom-0 w-0.5 bg-gradient-to-b from-primary to-accent"></div>
                    <div class="space-y-16">{timeline}</div>
                </div>
            </div>
        </section>
    }
}
