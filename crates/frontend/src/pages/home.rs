use crate::navigation::{use_navigation, AppLink};
use crate::routes::RouteKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    let nav = use_navigation();
    let routes = nav.routes();

    let shortcut = |label: &'static str, icon_name: &'static str, key: RouteKey| {
        let to = routes.template(key).to_string();
        view! {
            <AppLink to=to class="home-shortcut">
                {icon(icon_name)}
                <span>{label}</span>
            </AppLink>
        }
    };

    view! {
        <div class="page home-page">
            <div class="page-header">
                <h2>"Field Service"</h2>
            </div>
            <div class="home-shortcuts">
                {shortcut("Create Job", "plus", RouteKey::JobsCreate)}
                {shortcut("All Jobs", "jobs", RouteKey::Jobs)}
                {shortcut("Jobs Board", "dashboards", RouteKey::JobsBoard)}
                {shortcut("Customers", "building", RouteKey::Customers)}
            </div>
        </div>
    }
}
