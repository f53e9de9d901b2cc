//! Landing page hosting the question panel.

use leptos::prelude::*;

use crate::components::query_panel::QueryPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"Agri Advisor"</h1>
                <p class="home-page__subtitle">"Ask about sowing, irrigation, pests, and prices."</p>
            </header>
            <QueryPanel/>
        </main>
    }
}
