use leptos::prelude::*;

use super::navigation::scroll_to_section;
use super::reveal::reveal_class;
use crate::sections::{ABOUT, CONTACT, HOME, PROJECTS};

#[component]
pub fn HeroSection() -> impl IntoView {
    // the hero is on screen at load, so it animates as soon as it mounts
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    let visible = Signal::from(mounted);

    view! {
        <section
            id=HOME.id
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-24 md:pt-32"
        >
            <div class="absolute inset-0 bg-gradient-hero opacity-20" />

            <div class="relative z-10 text-center px-6 max-w-4xl mx-auto mt-8">
                <div class=reveal_class(visible, "transition-all duration-1000", "fade-in-up")>
                    <h1
                        class="font-display text-6xl md:text-8xl lg:text-9xl font-bold mb-6 glitch gradient-text"
                    >
                        "Naseta"
                    </h1>
                </div>

                <div class=reveal_class(visible, "transition-all duration-1000 delay-300", "fade-in-up")>
                    <h2 class="font-body text-xl md:text-2xl lg:text-3xl text-muted-foreground mb-8 font-light">
                        "Building Smarter, Scalable Technology"
                    </h2>
                </div>

                <div class=reveal_class(visible, "transition-all duration-1000 delay-500", "fade-in-up")>
                    <p class="font-body text-lg md:text-xl text-muted-foreground mb-12 max-w-2xl mx-auto leading-relaxed">
                        "From AI models to full-stack applications, I craft solutions that combine innovation, performance, and user-centric design."
                    </p>
                </div>

                <div class=reveal_class(visible, "transition-all duration-1000 delay-700", "fade-in-up")>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-16">
                        <button
                            class="bg-primary hover:bg-primary-light text-primary-foreground px-8 py-4 rounded-md text-lg font-medium hover-lift"
                            on:click=move |_| scroll_to_section(PROJECTS.id)
                        >
                            "View My Work"
                        </button>
                        <button
                            class="border border-primary text-primary hover:bg-primary hover:text-primary-foreground px-8 py-4 rounded-md text-lg font-medium hover-lift"
                            on:click=move |_| scroll_to_section(CONTACT.id)
                        >
                            "Get In Touch"
                        </button>
                    </div>
                </div>

                <div class=reveal_class(visible, "transition-all duration-1000 delay-900", "fade-in-up")>
                    <div class="flex justify-center gap-6 mb-16">
                        <a
                            href="https://github.com/git112"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-3 rounded-full bg-card border border-border hover-glow transition-all duration-300"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain text-2xl"></i>
                        </a>
                        <a
                            href="https://linkedin.com/in/naseta-d"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-3 rounded-full bg-card border border-border hover-glow transition-all duration-300"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain text-2xl"></i>
                        </a>
                        <a
                            href="mailto:naseta121@gmail.com"
                            class="p-3 rounded-full bg-card border border-border hover-glow transition-all duration-300"
                            aria-label="Send Email"
                        >
                            "✉"
                        </a>
                    </div>
                </div>

                <div class=reveal_class(visible, "transition-all duration-1000 delay-1100", "fade-in-up")>
                    <button
                        on:click=move |_| scroll_to_section(ABOUT.id)
                        class="animate-bounce p-2 rounded-full hover:bg-accent/20 transition-colors duration-300 text-accent text-3xl"
                        aria-label="Scroll to About section"
                    >
                        "↓"
                    </button>
                </div>
            </div>

            <div class="absolute inset-0 pointer-events-none">
                <div
                    class="absolute top-1/4 left-1/4 w-16 h-16 bg-accent/20 rounded-full float"
                    style="animation-delay: 0s"
                />
                <div
                    class="absolute top-3/4 right-1/4 w-12 h-12 bg-secondary/20 rounded-full float"
                    style="animation-delay: 2s"
                />
                <div
                    class="absolute top-1/2 right-1/3 w-8 h-8 bg-primary/20 rounded-full float"
                    style="animation-delay: 4s"
                />
            </div>
        </section>
    }
}
