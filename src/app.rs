mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod navigation;
mod projects;
mod quote;
mod reveal;
mod skills;
mod theme;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::PageConfig;
use crate::schedule::{BrowserScheduler, TaskGroup};

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use projects::ProjectsSection;
use quote::QuoteSection;
use skills::SkillsSection;
use theme::provide_theme;
use toast::{provide_toasts, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Naseta - AI/ML and full-stack developer building smarter, scalable technology."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-body antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(PageConfig::default());
    provide_theme();
    provide_toasts();

    view! {
        <Title formatter=|title| format!("Naseta - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site: one scrolling page.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen">
            <Navigation />
            <main>
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ProjectsSection />
                <QuoteSection />
                <ExperienceSection />
                <ContactSection />
            </main>
            <Footer />
            <Toaster />
        </div>
    }
}

pub(crate) fn use_page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_default()
}

/// Timers owned by the current component; all pending ones are cancelled when
/// it is torn down.
pub(crate) fn use_task_group() -> TaskGroup<BrowserScheduler> {
    let tasks = TaskGroup::new(BrowserScheduler);
    on_cleanup({
        let tasks = tasks.clone();
        move || tasks.cancel_all()
    });
    tasks
}
