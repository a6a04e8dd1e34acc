use crate::navigation::AppLink;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h2>"Page not found"</h2>
            <p class="mono">{path}</p>
            <AppLink to="/".to_string() class="btn btn-primary">
                "Go home"
            </AppLink>
        </div>
    }
}
