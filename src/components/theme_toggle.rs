//! Theme toggle button

use leptos::*;

use super::icons::{MoonIcon, SunIcon};
use crate::theme::{Theme, ThemeState};

/// Icon button flipping between light and dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeState>();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            <Show
                when=move || theme.theme.get() == Theme::Dark
                fallback=|| view! { <MoonIcon/> }
            >
                <SunIcon/>
            </Show>
        </button>
    }
}
