use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use super::theme::ThemeToggle;
use super::use_page_config;
use crate::sections::{Section, CONTACT, HOME, SECTIONS};
use crate::tracker::{ActiveSectionTracker, SectionBounds};

/// Smoothly scrolls so the section's top meets the viewport top.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn measure_section(id: &str) -> Option<SectionBounds> {
    let el = document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds::new(
        f64::from(el.offset_top()),
        f64::from(el.offset_height()),
    ))
}

#[component]
pub fn Navigation() -> impl IntoView {
    let config = use_page_config();
    let (active, set_active) = signal(HOME.id);
    let (is_scrolled, set_is_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let tracker = StoredValue::new(
        ActiveSectionTracker::new(SECTIONS.to_vec(), &config)
            .inspect_err(|err| log::error!("section highlighting disabled: {err}"))
            .ok(),
    );

    let on_scroll = move || {
        let Ok(offset) = window().scroll_y() else {
            return;
        };
        let update = tracker
            .try_update_value(|t| t.as_mut().map(|t| t.update(offset, measure_section)))
            .flatten();
        let Some(update) = update else {
            return;
        };
        if is_scrolled.get_untracked() != update.is_scrolled {
            set_is_scrolled.set(update.is_scrolled);
        }
        if update.changed {
            set_active.set(update.active.id);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| on_scroll());
    // measure once on mount in case the page loads scrolled
    Effect::new(move |_| on_scroll());

    let go_to = move |section: Section| {
        scroll_to_section(section.id);
        set_menu_open.set(false);
    };

    let desktop_links = SECTIONS
        .iter()
        .map(|&section| {
            let is_active = move || active.get() == section.id;
            view! {
                <button
                    on:click=move |_| go_to(section)
                    class=move || {
                        if is_active() {
                            "font-medium transition-colors duration-300 relative text-primary"
                        } else {
                            "font-medium transition-colors duration-300 relative text-muted-foreground hover:text-foreground"
                        }
                    }
                >
                    {section.label}
                    <Show when=is_active>
                        <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-primary rounded-full" />
                    </Show>
                </button>
            }
        })
        .collect_view();

    let mobile_links = move || {
        SECTIONS
            .iter()
            .map(|&section| {
                view! {
                    <button
                        on:click=move |_| go_to(section)
                        class=move || {
                            if active.get() == section.id {
                                "block w-full text-left font-medium text-lg transition-colors duration-300 text-primary"
                            } else {
                                "block w-full text-left font-medium text-lg transition-colors duration-300 text-muted-foreground hover:text-foreground"
                            }
                        }
                    >
                        {section.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if is_scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/95 backdrop-blur-md border-b border-border shadow-soft"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <div class="font-display text-2xl font-bold gradient-text">"ND"</div>

                    <div class="hidden md:flex items-center space-x-8">{desktop_links}</div>

                    <div class="hidden md:flex items-center gap-4">
                        <ThemeToggle />
                        <button
                            on:click=move |_| go_to(CONTACT)
                            class="px-4 py-2 rounded-md bg-primary hover:bg-primary-light text-primary-foreground hover-lift"
                        >
                            "Let's Talk"
                        </button>
                    </div>

                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="md:hidden p-2 rounded-lg hover:bg-accent/20 transition-colors"
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-40 md:hidden">
                <div
                    class="fixed inset-0 bg-background/95 backdrop-blur-md"
                    on:click=move |_| set_menu_open.set(false)
                />
                <div class="fixed top-16 left-0 right-0 bg-card border-b border-border shadow-strong">
                    <div class="px-6 py-8 space-y-6">
                        {mobile_links()}
                        <div class="pt-4 border-t border-border space-y-4">
                            <div class="flex justify-center">
                                <ThemeToggle />
                            </div>
                            <button
                                on:click=move |_| go_to(CONTACT)
                                class="w-full px-4 py-2 rounded-md bg-primary hover:bg-primary-light text-primary-foreground"
                            >
                                "Let's Talk"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
