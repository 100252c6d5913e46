use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

const SOCIAL: [(&str, &str, &str); 3] = [
    ("https://github.com/git112", "devicon-github-plain", "GitHub Profile"),
    ("https://linkedin.com/in/naseta-d", "devicon-linkedin-plain", "LinkedIn Profile"),
    ("https://twitter.com", "devicon-twitter-original", "Twitter Profile"),
];

/// Stamped by the build script, so server and client agree on it.
fn build_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_time();
    let year = built.year();

    view! {
        <footer class="bg-primary text-primary-foreground py-12 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-3 gap-8 items-center">
                    <div>
                        <h3 class="font-display text-2xl font-bold mb-2">"Portfolio"</h3>
                        <p class="text-primary-foreground/80">
                            "Crafting exceptional digital experiences with passion and precision."
                        </p>
                    </div>

                    <div class="flex justify-center">
                        <div class="flex gap-4">
                            {SOCIAL
                                .iter()
                                .map(|(href, icon, label)| {
                                    view! {
                                        <a
                                            href=*href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-10 h-10 bg-primary-foreground/10 rounded-lg hover:bg-primary-foreground/20 flex items-center justify-center transition-colors duration-300"
                                            aria-label=*label
                                        >
                                            <i class=format!("{icon} text-lg")></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="text-center md:text-right">
                        <p class="text-primary-foreground/80 flex items-center justify-center md:justify-end gap-1">
                            {format!("© {year} Made with")}
                            <span class="text-accent">"♥"</span>
                            "by Naseta"
                        </p>
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-primary-foreground/20 text-center">
                    <p class="text-primary-foreground/60 text-sm">
                        "This portfolio showcases modern web development practices and creative design solutions."
                    </p>
                    <p class="text-primary-foreground/40 text-xs mt-2">
                        {format!("Built {}", built.format("%Y-%m-%d"))}
                    </p>
                </div>
            </div>
        </footer>
    }
}
