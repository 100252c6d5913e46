use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use super::use_page_config;
use crate::sections::ABOUT;

const DRIVERS: [(&str, &str); 4] = [
    ("bg-accent", "Turning messy data into meaningful insights 🤖"),
    ("bg-secondary", "Writing code my future self will actually thank me for 💻"),
    ("bg-primary", "Designing products people don’t just use — they love ✨"),
    ("bg-accent", "Pushing boundaries and shipping ideas that matter 🚀"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, use_page_config().thresholds.about);

    view! {
        <section id=ABOUT.id node_ref=section_ref class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class=reveal_class(visible, "transition-all duration-1000", "fade-in-left")>
                        <h2
                            class="font-display text-4xl md:text-5xl lg:text-6xl font-bold text-primary mb-8 glitch gradient-text"
                        >
                            "About Me"
                        </h2>
                        <div class="space-y-6 text-lg text-muted-foreground leading-relaxed">
                            <p>
                                "I don’t just write code — I craft smart, beautiful, and human-centered experiences. Some days I’m teaching machines how to think, other days I’m building web apps that scale with ease. Either way, I believe technology should feel effortless, intelligent, and a little magical."
                            </p>
                            <p>
                                "I love working at the crossroads of AI/ML, design, and full-stack development — where data meets creativity and algorithms meet user delight. Curiosity keeps me learning, coffee keeps me coding, and “good enough” is never good enough."
                            </p>
                        </div>
                    </div>

                    <div class=reveal_class(visible, "transition-all duration-1000 delay-300", "fade-in-right")>
                        <div class="relative">
                            <div class="bg-gradient-card rounded-2xl p-8 shadow-soft hover-lift">
                                <h3 class="font-display text-2xl font-semibold text-primary mb-6">
                                    "What Drives Me"
                                </h3>
                                <div class="space-y-4">
                                    {DRIVERS
                                        .iter()
                                        .map(|(dot, text)| {
                                            view! {
                                                <div class="flex items-center gap-3">
                                                    <div class=format!("w-2 h-2 rounded-full {dot}")></div>
                                                    <span class="text-foreground">{*text}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-8 h-8 bg-accent/30 rounded-full blur-sm"></div>
                            <div class="absolute -bottom-4 -left-4 w-12 h-12 bg-primary/20 rounded-lg blur-sm"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
