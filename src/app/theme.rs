use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.mode.update(|m| *m = m.toggled());
    }
}

/// Provides the display mode, kept in local storage and mirrored as the
/// `dark` class on `<html>`.
pub fn provide_theme() {
    let mode = RwSignal::new(ThemeMode::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<ThemeMode, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| mode.set(stored.get_untracked()),
            true,
        );
        Effect::watch(
            move || mode.get(),
            move |mode, _, _| set_stored.set(*mode),
            false,
        );
    }

    Effect::new(move |_| {
        let dark = mode.get() == ThemeMode::Dark;
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force("dark", dark) {
            log::warn!("couldn't apply theme: {err:?}");
        }
    });

    provide_context(ThemeContext { mode });
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class="p-2 rounded-lg border border-border hover:bg-accent/20 transition-colors"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || if theme.mode.get() == ThemeMode::Dark { "☀" } else { "☾" }}
        </button>
    }
}
