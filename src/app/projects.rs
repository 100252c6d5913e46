use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use super::use_page_config;
use crate::content::CONTENT;
use crate::sections::PROJECTS;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let config = use_page_config();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, config.thresholds.projects);
    let hovered = RwSignal::new(None::<u32>);
    let stagger = config.projects_stagger;

    let cards = CONTENT
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let id = project.id;
            let base = if project.featured {
                "group relative bg-card rounded-2xl overflow-hidden shadow-soft hover-lift transition-all duration-1000 lg:col-span-2"
            } else {
                "group relative bg-card rounded-2xl overflow-hidden shadow-soft hover-lift transition-all duration-1000"
            };
            let tech = project
                .tech
                .iter()
                .map(|t| {
                    view! {
                        <span class="px-3 py-1 bg-muted text-muted-foreground text-sm rounded-full border border-border">
                            {t.clone()}
                        </span>
                    }
                })
                .collect_view();

            view! {
                <div
                    class=reveal_class(visible, base, "fade-in-up")
                    style=format!("animation-delay: {}", stagger.css_delay(index))
                    on:mouseenter=move |_| hovered.set(Some(id))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    <div class="relative h-64 md:h-80 overflow-hidden bg-gradient-card">
                        <img
                            src=project.image.clone()
                            alt=project.title.clone()
                            class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                        />
                        <div class="absolute inset-0 bg-primary/60 opacity-0 group-hover:opacity-100 transition-opacity duration-500 flex items-center justify-center">
                            <div class="flex gap-4">
                                <a
                                    href=project.live_url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-1 rounded-md bg-background/90 hover:bg-background text-foreground border border-background"
                                >
                                    "Live Demo"
                                </a>
                                <a
                                    href=project.source_url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-1 rounded-md bg-background/90 hover:bg-background text-foreground border border-background"
                                >
                                    <i class="devicon-github-plain mr-2"></i>
                                    "Source"
                                </a>
                            </div>
                        </div>
                    </div>

                    <div class="p-6 md:p-8">
                        <div class="flex items-center justify-between mb-4">
                            <h3 class="font-display text-2xl md:text-3xl font-semibold text-primary">
                                {project.title.clone()}
                            </h3>
                            {project
                                .featured
                                .then(|| {
                                    view! {
                                        <span class="px-3 py-1 bg-accent text-accent-foreground text-sm font-medium rounded-full">
                                            "Featured"
                                        </span>
                                    }
                                })}
                        </div>
                        <p class="text-muted-foreground text-lg leading-relaxed mb-6">
                            {project.description.clone()}
                        </p>
                        <div class="flex flex-wrap gap-2 mb-6">{tech}</div>
                        <div class="flex gap-4">
                            <a
                                href=project.live_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md bg-primary hover:bg-primary-light text-primary-foreground"
                            >
                                "View Project"
                            </a>
                            <a
                                href=project.source_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-primary text-primary hover:bg-primary hover:text-primary-foreground"
                            >
                                "Source Code"
                            </a>
                        </div>
                    </div>

                    <Show when=move || hovered.get() == Some(id)>
                        <div class="absolute inset-0 bg-gradient-glow opacity-30 pointer-events-none" />
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=PROJECTS.id node_ref=section_ref class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class=reveal_class(visible, "text-center mb-16 transition-all duration-1000", "fade-in-up")>
                    <h2
                        class="font-display text-4xl md:text-5xl lg:text-6xl font-bold text-primary mb-6 glitch gradient-text"
                    >
                        "Featured Projects"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "A showcase of my latest work, demonstrating expertise in modern web development, creative problem-solving, and innovative design solutions."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-8">{cards}</div>
            </div>
        </section>
    }
}
