use crate::shared::api::Base44Client;
use crate::shared::date_utils::format_date;
use contracts::domain::job::Job;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn JobDetailPage(id: String) -> impl IntoView {
    let client =
        use_context::<Base44Client>().expect("Base44Client not found in context");

    let job = RwSignal::new(Option::<Job>::None);
    let error = RwSignal::new(Option::<String>::None);

    {
        let client = client.clone();
        spawn_local(async move {
            match client.get::<Job>(&id).await {
                Ok(loaded) => job.set(Some(loaded)),
                Err(e) => {
                    log::error!("Failed to load job {}: {}", id, e);
                    error.set(Some(e));
                }
            }
        });
    }

    let row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-label">{label}</span>
                <span class="detail-value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="page job-detail-page">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match job.get() {
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
                Some(job) => {
                    let f = job.fields;
                    view! {
                        <div class="page-header">
                            <h2>{f.job_number.clone()}</h2>
                            <span class="badge">{f.status.label()}</span>
                        </div>
                        <div class="detail-card">
                            {row("Type", f.job_type.label().to_string())}
                            {row("Work location", f.work_location.label().to_string())}
                            {row("Priority", f.priority.label().to_string())}
                            {row("Customer", f.customer.clone())}
                            {row("Site", f.site.clone())}
                            {row(
                                "Due date",
                                f.due_date.map(format_date).unwrap_or_else(|| "Not set".into()),
                            )}
                            {row(
                                "Scheduled",
                                match (f.scheduled_date, f.scheduled_time) {
                                    (Some(d), Some(t)) => {
                                        format!("{} ({})", format_date(d), t.label())
                                    }
                                    (Some(d), None) => format_date(d),
                                    _ => "Not scheduled".into(),
                                },
                            )}
                            {row(
                                "Description",
                                if f.description.is_empty() {
                                    "-".into()
                                } else {
                                    f.description.clone()
                                },
                            )}
                            {row(
                                "Fault details",
                                if f.fault_details.is_empty() {
                                    "-".into()
                                } else {
                                    f.fault_details.clone()
                                },
                            )}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
