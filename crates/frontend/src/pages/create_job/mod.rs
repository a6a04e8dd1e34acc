//! Seven-step job creation wizard. All transition logic lives in
//! [`state`]; this module wires the reducer to the DOM and to the data
//! service.

pub mod state;

use crate::navigation::use_navigation;
use crate::shared::api::Base44Client;
use crate::shared::date_utils::parse_date_input;
use crate::shared::icons::icon;
use contracts::domain::activity_log::ActivityLog;
use contracts::domain::asset::Asset;
use contracts::domain::common::Entity;
use contracts::domain::contact::Contact;
use contracts::domain::customer::Customer;
use contracts::domain::employee::EmployeeProfile;
use contracts::domain::job::{Job, JobPriority, JobType, TimeSlot, WorkLocation};
use contracts::domain::site::Site;
use contracts::domain::team::Team;
use leptos::prelude::*;
use serde_json::json;
use state::{
    apply, assets_for_site, can_proceed, compose_job, contacts_for_customer, employees_for_team,
    job_number, sites_for_customer, WizardAction, WizardState, WizardStep,
};
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn CreateJobPage() -> impl IntoView {
    let nav = use_navigation();
    let client =
        use_context::<Base44Client>().expect("Base44Client not found in context");

    let wizard = RwSignal::new(WizardState::default());

    let customers = RwSignal::new(Vec::<Customer>::new());
    let sites = RwSignal::new(Vec::<Site>::new());
    let contacts = RwSignal::new(Vec::<Contact>::new());
    let assets = RwSignal::new(Vec::<Asset>::new());
    let teams = RwSignal::new(Vec::<Team>::new());
    let employees = RwSignal::new(Vec::<EmployeeProfile>::new());
    let load_error = RwSignal::new(Option::<String>::None);

    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(Option::<String>::None);

    {
        let client = client.clone();
        spawn_local(async move {
            let loaded: Result<(), String> = async {
                customers.set(client.filter(&json!({ "status": "Active" })).await?);
                sites.set(client.list().await?);
                contacts.set(client.list().await?);
                assets.set(client.filter(&json!({ "status": "Active" })).await?);
                teams.set(client.list().await?);
                employees.set(client.filter(&json!({ "isActive": true })).await?);
                Ok(())
            }
            .await;
            if let Err(e) = loaded {
                log::error!("Failed to load wizard reference data: {}", e);
                load_error.set(Some(e));
            }
        });
    }

    let dispatch = move |action: WizardAction| {
        wizard.update(|s| *s = apply(std::mem::take(s), action));
    };

    let submit = {
        let client = client.clone();
        move |_| {
            if submitting.get() {
                return;
            }
            let today = chrono::Utc::now().date_naive();
            let seed = (js_sys::Math::random() * 10000.0) as u32;
            let fields = match compose_job(&wizard.get().draft, job_number(today, seed)) {
                Ok(fields) => fields,
                Err(e) => {
                    submit_error.set(Some(e));
                    return;
                }
            };
            submitting.set(true);
            submit_error.set(None);

            let client = client.clone();
            spawn_local(async move {
                let job = Job {
                    id: String::new(),
                    fields,
                };
                match client.create(&job).await {
                    Ok(created) => {
                        let entry = ActivityLog::created(
                            Job::collection_name(),
                            created.id(),
                            &format!("Job {} created", created.fields.job_number),
                        );
                        // The job exists either way; a missing log entry is
                        // not worth blocking the user over.
                        if let Err(e) = client.create(&entry).await {
                            log::warn!("Failed to record activity log entry: {}", e);
                        }
                        match nav.routes().job_detail(created.id()) {
                            Ok(path) => nav.navigate(&path),
                            Err(e) => {
                                log::error!("Could not build job detail path: {}", e);
                                nav.navigate("/jobs");
                            }
                        }
                    }
                    Err(e) => {
                        submit_error.set(Some(format!("Failed to create job: {}", e)));
                        submitting.set(false);
                    }
                }
            });
        }
    };

    let step_indicator = move || {
        let current = wizard.get().step;
        WizardStep::ALL
            .iter()
            .map(|step| {
                let step = *step;
                let done = step < current;
                let active = step == current;
                let class = if active {
                    "wizard-step active"
                } else if done {
                    "wizard-step done"
                } else {
                    "wizard-step"
                };
                view! {
                    <button
                        class=class
                        disabled=!done
                        on:click=move |_| dispatch(WizardAction::JumpBack(step))
                    >
                        <span class="wizard-step-index">
                            {if done { icon("check") } else { step.index().to_string().into_any() }}
                        </span>
                        <span class="wizard-step-label">{step.label()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let step_body = move || match wizard.get().step {
        WizardStep::Customer => view! {
            <CustomerStep wizard=wizard customers=customers dispatch=dispatch />
        }
        .into_any(),
        WizardStep::Site => view! {
            <SiteStep wizard=wizard sites=sites contacts=contacts dispatch=dispatch />
        }
        .into_any(),
        WizardStep::JobType => view! {
            <JobTypeStep wizard=wizard dispatch=dispatch />
        }
        .into_any(),
        WizardStep::Asset => view! {
            <AssetStep wizard=wizard assets=assets dispatch=dispatch />
        }
        .into_any(),
        WizardStep::Schedule => view! {
            <ScheduleStep wizard=wizard dispatch=dispatch />
        }
        .into_any(),
        WizardStep::Assign => view! {
            <AssignStep wizard=wizard teams=teams employees=employees dispatch=dispatch />
        }
        .into_any(),
        WizardStep::Review => view! {
            <ReviewStep
                wizard=wizard
                customers=customers
                sites=sites
                contacts=contacts
                assets=assets
                teams=teams
                employees=employees
            />
        }
        .into_any(),
    };

    view! {
        <div class="page create-job-page">
            <div class="page-header">
                <h2>"Create Job"</h2>
            </div>

            {move || load_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="wizard-steps">{step_indicator}</div>

            <div class="wizard-body">{step_body}</div>

            {move || submit_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="wizard-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || wizard.get().step == WizardStep::Customer
                    on:click=move |_| dispatch(WizardAction::Back)
                >
                    {icon("chevron-left")}
                    "Back"
                </button>
                {move || {
                    if wizard.get().step == WizardStep::Review {
                        view! {
                            <button
                                class="btn btn-primary"
                                disabled=move || submitting.get()
                                on:click=submit.clone()
                            >
                                {icon("check")}
                                {move || if submitting.get() { "Creating..." } else { "Create Job" }}
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <button
                                class="btn btn-primary"
                                disabled=move || !can_proceed(&wizard.get())
                                on:click=move |_| dispatch(WizardAction::Next)
                            >
                                "Next"
                                {icon("chevron-right")}
                            </button>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn CustomerStep(
    wizard: RwSignal<WizardState>,
    customers: RwSignal<Vec<Customer>>,
    dispatch: impl Fn(WizardAction) + Copy + Send + 'static,
) -> impl IntoView {
    view! {
        <div class="wizard-panel">
            <h3>"Who is this job for?"</h3>
            <div class="option-list">
                {move || {
                    let selected = wizard.get().draft.customer;
                    customers
                        .get()
                        .into_iter()
                        .map(|c| {
                            let active = selected.as_deref() == Some(c.id.as_str());
                            let id = c.id.clone();
                            view! {
                                <button
                                    class=if active { "option-card selected" } else { "option-card" }
                                    on:click=move |_| {
                                        dispatch(WizardAction::SelectCustomer(id.clone()))
                                    }
                                >
                                    {icon("building")}
                                    <span class="option-title">{c.name.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn SiteStep(
    wizard: RwSignal<WizardState>,
    sites: RwSignal<Vec<Site>>,
    contacts: RwSignal<Vec<Contact>>,
    dispatch: impl Fn(WizardAction) + Copy + Send + 'static,
) -> impl IntoView {
    view! {
        <div class="wizard-panel">
            <h3>"Where is the work?"</h3>
            <div class="option-list">
                {move || {
                    let draft = wizard.get().draft;
                    sites_for_customer(&sites.get(), draft.customer.as_deref())
                        .into_iter()
                        .map(|s| {
                            let active = draft.site.as_deref() == Some(s.id.as_str());
                            let id = s.id.clone();
                            view! {
                                <button
                                    class=if active { "option-card selected" } else { "option-card" }
                                    on:click=move |_| {
                                        dispatch(WizardAction::SelectSite(id.clone()))
                                    }
                                >
                                    {icon("map-pin")}
                                    <span class="option-title">{s.site_name.clone()}</span>
                                    <span class="option-subtitle">
                                        {s.address.clone().unwrap_or_default()}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="form-group">
                <label for="primary_contact">"Primary contact (optional)"</label>
                <select
                    id="primary_contact"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        dispatch(WizardAction::SetPrimaryContact(
                            (!value.is_empty()).then_some(value),
                        ));
                    }
                >
                    <option value="">"No contact"</option>
                    {move || {
                        let draft = wizard.get().draft;
                        contacts_for_customer(&contacts.get(), draft.customer.as_deref())
                            .into_iter()
                            .map(|c| {
                                let selected =
                                    draft.primary_contact.as_deref() == Some(c.id.as_str());
                                view! {
                                    <option value=c.id.clone() selected=selected>
                                        {format!("{} ({})", c.name, c.role.clone().unwrap_or_else(|| "Contact".into()))}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn JobTypeStep(
    wizard: RwSignal<WizardState>,
    dispatch: impl Fn(WizardAction) + Copy + Send + 'static,
) -> impl IntoView {
    view! {
        <div class="wizard-panel">
            <h3>"What kind of work?"</h3>
            <div class="option-list">
                {move || {
                    let selected = wizard.get().draft.job_type;
                    JobType::ALL
                        .iter()
                        .map(|jt| {
                            let jt = *jt;
                            let active = selected == Some(jt);
                            view! {
                                <button
                                    class=if active { "option-card selected" } else { "option-card" }
                                    on:click=move |_| dispatch(WizardAction::SelectJobType(jt))
                                >
                                    <span class="option-title">{jt.label()}</span>
                                    <span class="option-subtitle">{jt.description()}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="form-group">
                <label>"Work location"</label>
                <div class="radio-row">
                    {move || {
                        let current = wizard.get().draft.work_location;
                        WorkLocation::ALL
                            .iter()
                            .map(|loc| {
                                let loc = *loc;
                                view! {
                                    <label class="radio-option">
                                        <input
                                            type="radio"
                                            name="work_location"
                                            checked=current == loc
                                            on:change=move |_| {
                                                dispatch(WizardAction::SetWorkLocation(loc))
                                            }
                                        />
                                        {loc.label()}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn AssetStep(
    wizard: RwSignal<WizardState>,
    assets: RwSignal<Vec<Asset>>,
    dispatch: impl Fn(WizardAction) + Copy + Send + 'static,
) -> impl IntoView {
    view! {
        <div class="wizard-panel">
            <h3>"Which equipment? (optional)"</h3>
            <div class="option-list">
                {move || {
                    let draft = wizard.get().draft;
                    assets_for_site(&assets.get(), draft.site.as_deref())
                        .into_iter()
                        .map(|a| {
                            let active = draft.asset.as_deref() == Some(a.id.as_str());
                            let id = a.id.clone();
                            view! {
                                <button
                                    class=if active { "option-card selected" } else { "option-card" }
                                    on:click=move |_| {
                                        // Clicking the selected asset again deselects it.
                                        let next = if active { None } else { Some(id.clone()) };
                                        dispatch(WizardAction::SelectAsset(next));
                                    }
                                >
                                    <span class="option-title">{a.display_name()}</span>
                                    <span class="option-subtitle">{a.internal_asset_id.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ScheduleStep(
    wizard: RwSignal<WizardState>,
    dispatch: impl Fn(WizardAction) + Copy + Send + 'static,
) -> impl IntoView {
    view! {
        <div class="wizard-panel">
            <h3>"When? (optional)"</h3>

            <div class="form-group">
                <label>"Priority"</label>
                <div class="radio-row">
                    {move || {
                        let current = wizard.get().draft.priority;
                        JobPriority::ALL
                            .iter()
                            .map(|p| {
                                let p = *p;
                                view! {
                                    <label class="radio-option">
                                        <input
                                            type="radio"
                                            name="priority"
                                            checked=current == p
                                            on:change=move |_| dispatch(WizardAction::SetPriority(p))
                                        />
                                        {p.label()}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="form-group">
                <label for="due_date">"Due date"</label>
                <input
                    type="date"
                    id="due_date"
                    on:input=move |ev| {
                        dispatch(WizardAction::SetDueDate(parse_date_input(&event_target_value(&ev))))
                    }
                />
            </div>

            <div class="form-group">
                <label for="scheduled_date">"Scheduled date"</label>
                <input
                    type="date"
                    id="scheduled_date"
                    on:input=move |ev| {
                        dispatch(WizardAction::SetScheduledDate(
                            parse_date_input(&event_target_value(&ev)),
                        ))
                    }
                />
            </div>

            <div class="form-group">
                <label for="scheduled_time">"Time slot"</label>
                <select
                    id="scheduled_time"
                    on:change=move |ev| {
                        let slot = match event_target_value(&ev).as_str() {
                            "AM" => Some(TimeSlot::Am),
                            "PM" => Some(TimeSlot::Pm),
                            "All Day" => Some(TimeSlot::AllDay),
                            _ => None,
                        };
                        dispatch(WizardAction::SetScheduledTime(slot));
                    }
                >
                    <option value="">"Not set"</option>
                    {move || {
                        let current = wizard.get().draft.scheduled_time;
                        TimeSlot::ALL
                            .iter()
                            .map(|slot| {
                                let value = match slot {
                                    TimeSlot::Am => "AM",
                                    TimeSlot::Pm => "PM",
                                    TimeSlot::AllDay => "All Day",
                                };
                                view! {
                                    <option value=value selected=current == Some(*slot)>
                                        {slot.label()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form-group">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    prop:value=move || wizard.get().draft.description
                    on:input=move |ev| {
                        dispatch(WizardAction::SetDescription(event_target_value(&ev)))
                    }
                    rows="3"
                />
            </div>

            <div class="form-group">
                <label for="fault_details">"Fault details"</label>
                <textarea
                    id="fault_details"
                    prop:value=move || wizard.get().draft.fault_details
                    on:input=move |ev| {
                        dispatch(WizardAction::SetFaultDetails(event_target_value(&ev)))
                    }
                    rows="3"
                />
            </div>

            <div class="form-group">
                <label for="risk_notes">"Risk notes"</label>
                <textarea
                    id="risk_notes"
                    prop:value=move || wizard.get().draft.risk_notes
                    on:input=move |ev| {
                        dispatch(WizardAction::SetRiskNotes(event_target_value(&ev)))
                    }
                    rows="2"
                />
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn AssignStep(
    wizard: RwSignal<WizardState>,
    teams: RwSignal<Vec<Team>>,
    employees: RwSignal<Vec<EmployeeProfile>>,
    dispatch: impl Fn(WizardAction) + Copy + Send + 'static,
) -> impl IntoView {
    view! {
        <div class="wizard-panel">
            <h3>"Who does the work? (optional)"</h3>

            <div class="form-group">
                <label for="assigned_team">"Team"</label>
                <select
                    id="assigned_team"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        dispatch(WizardAction::SelectTeam((!value.is_empty()).then_some(value)));
                    }
                >
                    <option value="">"No team"</option>
                    {move || {
                        let selected = wizard.get().draft.assigned_team;
                        teams
                            .get()
                            .into_iter()
                            .map(|t| {
                                let is_selected = selected.as_deref() == Some(t.id.as_str());
                                view! {
                                    <option value=t.id.clone() selected=is_selected>
                                        {t.name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form-group">
                <label for="assigned_primary">"Primary assignee"</label>
                <select
                    id="assigned_primary"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        dispatch(WizardAction::SelectPrimaryAssignee(
                            (!value.is_empty()).then_some(value),
                        ));
                    }
                >
                    <option value="">"Unassigned"</option>
                    {move || {
                        let draft = wizard.get().draft;
                        employees_for_team(&employees.get(), draft.assigned_team.as_deref())
                            .into_iter()
                            .map(|e| {
                                let is_selected =
                                    draft.assigned_primary.as_deref() == Some(e.id.as_str());
                                view! {
                                    <option value=e.id.clone() selected=is_selected>
                                        {e.display_name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ReviewStep(
    wizard: RwSignal<WizardState>,
    customers: RwSignal<Vec<Customer>>,
    sites: RwSignal<Vec<Site>>,
    contacts: RwSignal<Vec<Contact>>,
    assets: RwSignal<Vec<Asset>>,
    teams: RwSignal<Vec<Team>>,
    employees: RwSignal<Vec<EmployeeProfile>>,
) -> impl IntoView {
    let row = |label: &'static str, value: String| {
        view! {
            <div class="review-row">
                <span class="review-label">{label}</span>
                <span class="review-value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="wizard-panel">
            <h3>"Review"</h3>
            <div class="review-card">
                {move || {
                    let draft = wizard.get().draft;
                    let lookup = |id: Option<&str>, name: Option<String>| {
                        name.unwrap_or_else(|| id.unwrap_or("-").to_string())
                    };
                    let customer_name = draft.customer.as_deref().map(|id| {
                        lookup(
                            Some(id),
                            customers.get().iter().find(|c| c.id == id).map(|c| c.name.clone()),
                        )
                    });
                    let site_name = draft.site.as_deref().map(|id| {
                        lookup(
                            Some(id),
                            sites.get().iter().find(|s| s.id == id).map(|s| s.site_name.clone()),
                        )
                    });
                    let contact_name = draft.primary_contact.as_deref().map(|id| {
                        lookup(
                            Some(id),
                            contacts.get().iter().find(|c| c.id == id).map(|c| c.name.clone()),
                        )
                    });
                    let asset_name = draft.asset.as_deref().map(|id| {
                        lookup(
                            Some(id),
                            assets.get().iter().find(|a| a.id == id).map(|a| a.display_name()),
                        )
                    });
                    let team_name = draft.assigned_team.as_deref().map(|id| {
                        lookup(
                            Some(id),
                            teams.get().iter().find(|t| t.id == id).map(|t| t.name.clone()),
                        )
                    });
                    let assignee_name = draft.assigned_primary.as_deref().map(|id| {
                        lookup(
                            Some(id),
                            employees
                                .get()
                                .iter()
                                .find(|e| e.id == id)
                                .map(|e| e.display_name.clone()),
                        )
                    });

                    view! {
                        {row("Customer", customer_name.unwrap_or_else(|| "-".into()))}
                        {row("Site", site_name.unwrap_or_else(|| "-".into()))}
                        {row("Contact", contact_name.unwrap_or_else(|| "None".into()))}
                        {row(
                            "Job type",
                            draft.job_type.map(|t| t.label().to_string()).unwrap_or_else(|| "-".into()),
                        )}
                        {row("Work location", draft.work_location.label().to_string())}
                        {row("Asset", asset_name.unwrap_or_else(|| "None".into()))}
                        {row("Priority", draft.priority.label().to_string())}
                        {row(
                            "Due date",
                            draft
                                .due_date
                                .map(crate::shared::date_utils::format_date)
                                .unwrap_or_else(|| "Not set".into()),
                        )}
                        {row(
                            "Scheduled",
                            match (draft.scheduled_date, draft.scheduled_time) {
                                (Some(d), Some(t)) => format!(
                                    "{} ({})",
                                    crate::shared::date_utils::format_date(d),
                                    t.label(),
                                ),
                                (Some(d), None) => crate::shared::date_utils::format_date(d),
                                _ => "Not scheduled".into(),
                            },
                        )}
                        {row("Team", team_name.unwrap_or_else(|| "None".into()))}
                        {row("Assignee", assignee_name.unwrap_or_else(|| "Unassigned".into()))}
                    }
                }}
            </div>
        </div>
    }
}
