use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use super::use_page_config;

#[component]
pub fn QuoteSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, use_page_config().thresholds.quote);

    view! {
        <section
            node_ref=section_ref
            class="py-24 px-6 bg-gradient-hero relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-background/95" />

            <div class="relative z-10 max-w-4xl mx-auto text-center">
                <div class=reveal_class(visible, "transition-all duration-1000", "fade-in-up")>
                    <blockquote class="font-display text-3xl md:text-4xl lg:text-5xl font-medium text-primary leading-relaxed mb-8">
                        "\"The best way to predict the future is to "
                        <span class="gradient-text">"create it"</span>
                        " with passion, precision, and endless curiosity.\""
                    </blockquote>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto mb-6"></div>
                    <p class="text-xl text-muted-foreground font-light">
                        "My philosophy on innovation and development"
                    </p>
                </div>

                <div class="absolute top-1/4 left-10 w-4 h-4 bg-accent/30 rounded-full blur-sm"></div>
                <div class="absolute bottom-1/4 right-10 w-6 h-6 bg-primary/20 rounded-full blur-sm"></div>
                <div class="absolute top-1/2 left-1/4 w-2 h-2 bg-secondary/40 rounded-full blur-sm"></div>
                <div class="absolute top-3/4 right-1/3 w-3 h-3 bg-accent/25 rounded-full blur-sm"></div>
            </div>
        </section>
    }
}
