use crate::layout::Shell;
use crate::navigation::NavigationContext;
use crate::pages::PageRouter;
use crate::routes::Routes;
use crate::shared::api::Base44Client;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    // Composition root: the registry, navigation context and data client
    // are built once here and provided via context.
    let routes = Routes::new();
    provide_context(NavigationContext::new(routes));
    provide_context(Base44Client::from_window());

    view! {
        <Shell>
            <PageRouter />
        </Shell>
    }
}
