use crate::navigation::{use_navigation, AppLink};
use crate::routes::RouteKey;
use crate::shared::api::Base44Client;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::job::Job;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn JobsListPage() -> impl IntoView {
    let nav = use_navigation();
    let client =
        use_context::<Base44Client>().expect("Base44Client not found in context");

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let load = {
        let client = client.clone();
        move || {
            let client = client.clone();
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match client.list::<Job>().await {
                    Ok(list) => jobs.set(list),
                    Err(e) => {
                        log::error!("Failed to load jobs: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        }
    };
    load();

    let create_path = nav.routes().template(RouteKey::JobsCreate).to_string();

    view! {
        <div class="page jobs-list-page">
            <div class="page-header">
                <h2>"Jobs"</h2>
                <div class="page-actions">
                    <button class="btn btn-secondary" on:click={
                        let load = load.clone();
                        move |_| load()
                    }>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <AppLink to=create_path class="btn btn-primary">
                        {icon("plus")}
                        "Create Job"
                    </AppLink>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Loading..."</div> }.into_any();
                }
                let list = jobs.get();
                if list.is_empty() {
                    return view! { <div class="empty">"No jobs yet."</div> }.into_any();
                }
                let routes = nav.routes();
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Number"</th>
                                <th>"Type"</th>
                                <th>"Status"</th>
                                <th>"Priority"</th>
                                <th>"Scheduled"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|job| {
                                    let detail = routes
                                        .job_detail(&job.id)
                                        .unwrap_or_else(|_| "/jobs".to_string());
                                    view! {
                                        <tr>
                                            <td>
                                                <AppLink to=detail>
                                                    {job.fields.job_number.clone()}
                                                </AppLink>
                                            </td>
                                            <td>{job.fields.job_type.label()}</td>
                                            <td>{job.fields.status.label()}</td>
                                            <td>{job.fields.priority.label()}</td>
                                            <td>
                                                {job.fields
                                                    .scheduled_date
                                                    .map(format_date)
                                                    .unwrap_or_else(|| "-".into())}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
