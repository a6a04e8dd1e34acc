//! Sidebar navigation. The menu is declarative config built from the
//! route registry, so every target is a registered template by
//! construction; the diagnostics page re-checks that claim at runtime.

use crate::navigation::use_navigation;
use crate::routes::{RouteKey, Routes};
use crate::shared::icons::icon;
use leptos::prelude::*;

pub struct NavItem {
    pub label: &'static str,
    pub path: String,
}

pub struct NavGroup {
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<NavItem>,
}

/// The sidebar menu. Paths come from the registry, never hand-written.
pub fn nav_groups(routes: &Routes) -> Vec<NavGroup> {
    let item = |label: &'static str, key: RouteKey| NavItem {
        label,
        path: routes.template(key).to_string(),
    };

    vec![
        NavGroup {
            label: "Jobs",
            icon: "jobs",
            items: vec![
                item("All Jobs", RouteKey::Jobs),
                item("Jobs Board", RouteKey::JobsBoard),
                item("Create Job", RouteKey::JobsCreate),
            ],
        },
        NavGroup {
            label: "PPM",
            icon: "ppm",
            items: vec![
                item("Plans", RouteKey::PpmPlans),
                item("Instances", RouteKey::PpmInstances),
            ],
        },
        NavGroup {
            label: "Internal Ops",
            icon: "check",
            items: vec![
                item("Tasks", RouteKey::OpsTasks),
                item("Incidents", RouteKey::OpsIncidents),
            ],
        },
        NavGroup {
            label: "Fleet",
            icon: "fleet",
            items: vec![
                item("Vehicles", RouteKey::FleetVehicles),
                item("Daily Checks", RouteKey::FleetChecks),
                item("Defects", RouteKey::FleetDefects),
                item("Fuel Log", RouteKey::FleetFuel),
            ],
        },
        NavGroup {
            label: "Hire",
            icon: "hire",
            items: vec![
                item("Hire Assets", RouteKey::HireAssets),
                item("Calendar", RouteKey::HireCalendar),
                item("Contracts", RouteKey::HireContracts),
            ],
        },
        NavGroup {
            label: "Dashboards",
            icon: "dashboards",
            items: vec![
                item("Overview", RouteKey::Dashboards),
                item("Jobs", RouteKey::DashboardsJobs),
                item("PPM", RouteKey::DashboardsPpm),
                item("Fleet", RouteKey::DashboardsFleet),
                item("Hire", RouteKey::DashboardsHire),
                item("Ops", RouteKey::DashboardsOps),
            ],
        },
        NavGroup {
            label: "Core Data",
            icon: "core",
            items: vec![
                item("Customers", RouteKey::Customers),
                item("Sites", RouteKey::Sites),
                item("Contacts", RouteKey::Contacts),
                item("Assets", RouteKey::Assets),
            ],
        },
        NavGroup {
            label: "Admin",
            icon: "admin",
            items: vec![
                item("Settings", RouteKey::AdminSettings),
                item("Route Diagnostics", RouteKey::DiagnosticsRoutes),
            ],
        },
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn Sidebar() -> impl IntoView {
    let nav = use_navigation();
    let expanded = RwSignal::new(vec!["Jobs"]);

    let groups = nav_groups(&nav.routes());

    view! {
        <aside class="sidebar">
            <nav>
                {groups
                    .into_iter()
                    .map(|group| {
                        let label = group.label;
                        let is_expanded =
                            move || expanded.get().contains(&label);
                        let toggle = move |_| {
                            expanded.update(|open| {
                                if let Some(pos) = open.iter().position(|g| *g == label) {
                                    open.remove(pos);
                                } else {
                                    open.push(label);
                                }
                            });
                        };
                        view! {
                            <div class="sidebar-group">
                                <button class="sidebar-group-header" on:click=toggle>
                                    {icon(group.icon)}
                                    <span>{label}</span>
                                    <span class="sidebar-chevron">
                                        {move || {
                                            if is_expanded() {
                                                icon("chevron-left")
                                            } else {
                                                icon("chevron-right")
                                            }
                                        }}
                                    </span>
                                </button>
                                <div
                                    class="sidebar-group-items"
                                    style:display=move || {
                                        if is_expanded() { "block" } else { "none" }
                                    }
                                >
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| {
                                            let path = item.path.clone();
                                            let active_path = item.path.clone();
                                            view! {
                                                <button
                                                    class=move || {
                                                        if nav.current.get() == active_path {
                                                            "sidebar-item active"
                                                        } else {
                                                            "sidebar-item"
                                                        }
                                                    }
                                                    on:click=move |_| nav.navigate(&path)
                                                >
                                                    {item.label}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
