//! Page dispatch: resolves the current path through the registry and
//! renders the page for the matched key. Unknown paths fall through to
//! the not-found page.

pub mod create_job;
pub mod diagnostics;
pub mod home;
pub mod job_detail;
pub mod jobs_list;
pub mod not_found;
pub mod section;

use crate::navigation::use_navigation;
use crate::routes::RouteKey;
use create_job::CreateJobPage;
use diagnostics::DiagnosticsPage;
use home::HomePage;
use job_detail::JobDetailPage;
use jobs_list::JobsListPage;
use leptos::prelude::*;
use not_found::NotFoundPage;
use section::SectionPage;

#[component]
#[allow(non_snake_case)]
pub fn PageRouter() -> impl IntoView {
    let nav = use_navigation();

    move || {
        let path = nav.current.get();
        let matched = nav.routes().match_path(&path);
        let Some(matched) = matched else {
            return view! { <NotFoundPage path=path /> }.into_any();
        };

        match matched.key {
            RouteKey::Home => view! { <HomePage /> }.into_any(),
            RouteKey::Jobs => view! { <JobsListPage /> }.into_any(),
            RouteKey::JobsCreate => view! { <CreateJobPage /> }.into_any(),
            RouteKey::JobsDetail => {
                let id = matched.param("jobId").unwrap_or_default().to_string();
                view! { <JobDetailPage id=id /> }.into_any()
            }
            RouteKey::DiagnosticsRoutes => view! { <DiagnosticsPage /> }.into_any(),
            RouteKey::NotFound => view! { <NotFoundPage path=path /> }.into_any(),
            key => view! { <SectionPage route_key=key /> }.into_any(),
        }
    }
}
