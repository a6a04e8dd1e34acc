use crate::routes::RouteKey;
use leptos::prelude::*;

/// Placeholder for registered destinations whose page has not been built
/// yet. Keeping them routable means the menu and registry stay complete
/// while sections land one at a time.
#[component]
#[allow(non_snake_case)]
pub fn SectionPage(route_key: RouteKey) -> impl IntoView {
    view! {
        <div class="page section-page">
            <div class="page-header">
                <h2>{route_key.section()}</h2>
            </div>
            <p class="muted">{format!("{} is not available yet.", route_key.name())}</p>
        </div>
    }
}
