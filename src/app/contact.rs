use leptos::{ev::SubmitEvent, html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use super::toast::use_toasts;
use super::{use_page_config, use_task_group};
use crate::contact::{ContactField, ContactForm};
use crate::sections::CONTACT;

const INPUT_CLASS: &str = "w-full rounded-md border border-border bg-background px-3 py-2 text-foreground placeholder:text-muted-foreground focus:outline-none focus:ring-2 focus:ring-primary";

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your full name",
        ContactField::Email => "your@email.com",
        ContactField::Subject => "Project inquiry, collaboration, etc.",
        ContactField::Message => "Tell me about your project or how I can help you...",
    }
}

fn label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name *",
        ContactField::Email => "Email *",
        ContactField::Subject => "Subject *",
        ContactField::Message => "Message *",
    }
}

/// Labelled single-line input bound to one field of `form`.
fn text_input(form: RwSignal<ContactForm>, field: ContactField) -> impl IntoView {
    let kind = if field == ContactField::Email { "email" } else { "text" };
    view! {
        <div>
            <label for=field.key() class="block text-sm font-medium text-foreground mb-2">
                {label(field)}
            </label>
            <input
                id=field.key()
                name=field.key()
                type=kind
                required
                class=INPUT_CLASS
                placeholder=placeholder(field)
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_page_config();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, config.thresholds.contact);
    let form = RwSignal::new(ContactForm::default());
    let tasks = use_task_group();
    let toasts = use_toasts();
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(message)) => {
                log::info!("sending message from {}", message.email);
                let toasts = toasts.clone();
                tasks.spawn_after(config.submit_delay, move || {
                    if let Some(sent) = form.try_update(|f| f.finish_submit()).flatten() {
                        toasts.notify(sent);
                    }
                });
            }
            Some(Err(err)) => log::debug!("contact form not submitted: {err}"),
            None => {}
        }
    };

    view! {
        <section id=CONTACT.id node_ref=section_ref class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=reveal_class(visible, "text-center mb-16 transition-all duration-1000", "fade-in-up")>
                    <h2
                        class="font-display text-4xl md:text-5xl lg:text-6xl font-bold text-primary mb-6 glitch gradient-text"
                    >
                        "Let's Work Together"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Ready to bring your ideas to life? I'd love to hear about your project and discuss how we can create something amazing together."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-16">
                    <div class=reveal_class(visible, "transition-all duration-1000 delay-300", "fade-in-left")>
                        <div class="bg-card rounded-2xl p-8 shadow-soft">
                            <h3 class="font-display text-2xl font-semibold text-primary mb-6">
                                "Send a Message"
                            </h3>
                            <form on:submit=on_submit class="space-y-6">
                                <div class="grid md:grid-cols-2 gap-4">
                                    {text_input(form, ContactField::Name)}
                                    {text_input(form, ContactField::Email)}
                                </div>
                                {text_input(form, ContactField::Subject)}
                                <div>
                                    <label
                                        for=ContactField::Message.key()
                                        class="block text-sm font-medium text-foreground mb-2"
                                    >
                                        {label(ContactField::Message)}
                                    </label>
                                    <textarea
                                        id=ContactField::Message.key()
                                        name=ContactField::Message.key()
                                        rows=6
                                        required
                                        class=format!("{INPUT_CLASS} resize-none")
                                        placeholder=placeholder(ContactField::Message)
                                        prop:value=move || {
                                            form.with(|f| f.field(ContactField::Message).to_string())
                                        }
                                        on:input=move |ev| {
                                            form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                                        }
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    disabled=submitting
                                    class="w-full bg-primary hover:bg-primary-light text-primary-foreground py-3 rounded-md text-lg font-medium hover-lift disabled:opacity-60"
                                >
                                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>
                        </div>
                    </div>

                    <div class=reveal_class(visible, "transition-all duration-1000 delay-500", "fade-in-right")>
                        <div class="space-y-8">
                            <div>
                                <h3 class="font-display text-2xl font-semibold text-primary mb-6">
                                    "Get In Touch"
                                </h3>
                                <p class="text-lg text-muted-foreground leading-relaxed mb-8">
                                    "I'm always excited to work on new projects and collaborate with talented individuals. Whether you have a specific project in mind or just want to chat about possibilities, feel free to reach out."
                                </p>
                            </div>

                            <div class="space-y-6">
                                <ContactMethod icon="✉" title="Email">
                                    <a
                                        href="mailto:hello@example.com"
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        "hello@example.com"
                                    </a>
                                </ContactMethod>
                                <ContactMethod icon="☎" title="Phone">
                                    <a
                                        href="tel:+1234567890"
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        "+1 (234) 567-890"
                                    </a>
                                </ContactMethod>
                                <ContactMethod icon="⌖" title="Location">
                                    <span class="text-muted-foreground">"New York, NY"</span>
                                </ContactMethod>
                            </div>

                            <div>
                                <h4 class="font-semibold text-foreground mb-4">"Follow Me"</h4>
                                <div class="flex gap-4">
                                    <SocialLink href="https://github.com/git112" icon="devicon-github-plain" label="GitHub Profile" />
                                    <SocialLink href="https://linkedin.com/in/naseta-d" icon="devicon-linkedin-plain" label="LinkedIn Profile" />
                                    <SocialLink href="https://twitter.com" icon="devicon-twitter-original" label="Twitter Profile" />
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactMethod(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 bg-card rounded-xl shadow-soft hover-lift">
            <div class="w-12 h-12 bg-accent/10 rounded-lg flex items-center justify-center text-accent text-xl">
                {icon}
            </div>
            <div>
                <h4 class="font-semibold text-foreground">{title}</h4>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn SocialLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="w-12 h-12 bg-card rounded-lg shadow-soft hover-lift flex items-center justify-center"
            aria-label=label
        >
            <i class=format!("{icon} text-xl")></i>
        </a>
    }
}
