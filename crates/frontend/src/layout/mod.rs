//! Application shell: top header, sidebar, content area.

pub mod sidebar;

use crate::navigation::use_navigation;
use leptos::children::Children;
use leptos::prelude::*;
use sidebar::Sidebar;

#[component]
#[allow(non_snake_case)]
pub fn Shell(children: Children) -> impl IntoView {
    let nav = use_navigation();
    nav.init_router_integration();

    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="app-title">"FieldServe"</span>
                <span class="app-path">{move || nav.current.get()}</span>
            </header>
            <div class="app-main">
                <Sidebar />
                <main class="app-content">{children()}</main>
            </div>
        </div>
    }
}
