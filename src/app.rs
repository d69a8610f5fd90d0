use leptos::prelude::*;
use crate::core::config::SiteConfig;
use crate::pages::Home;

#[component]
pub fn App() -> impl IntoView {
    let site = SiteConfig::embedded().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[config] {}, using built-in profile", e).into());
        SiteConfig::default()
    });

    provide_context(site);

    view! {
        <main class="app">
            <Home />
        </main>
    }
}
