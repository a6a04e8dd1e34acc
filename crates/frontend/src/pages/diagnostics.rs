//! Route diagnostics: dumps the registry and audits the navigation menu
//! against it. Meant for development and support, reachable from the admin
//! group in the sidebar.

use crate::layout::sidebar::nav_groups;
use crate::navigation::use_navigation;
use crate::routes::{guard, RouteKey, Routes};
use leptos::prelude::*;

/// A navigation menu entry as the audit sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTarget {
    pub label: String,
    pub path: String,
}

/// Findings of one audit run. A target can appear in more than one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteAudit {
    /// Menu targets that are not absolute paths (and not external links).
    pub relative_targets: Vec<MenuTarget>,
    /// Menu targets pointing at a raw parametric template.
    pub parametric_menu_targets: Vec<MenuTarget>,
    /// Menu targets no registry entry accounts for.
    pub unregistered_targets: Vec<MenuTarget>,
}

impl RouteAudit {
    pub fn is_clean(&self) -> bool {
        self.relative_targets.is_empty()
            && self.parametric_menu_targets.is_empty()
            && self.unregistered_targets.is_empty()
    }
}

/// Check every menu target against the registry.
pub fn audit_navigation(routes: &Routes, menu: &[MenuTarget]) -> RouteAudit {
    let prefixes = routes.prefixes();
    let mut audit = RouteAudit::default();

    for target in menu {
        if guard::is_external(&target.path) {
            continue;
        }
        if !target.path.starts_with('/') {
            audit.relative_targets.push(target.clone());
        }
        if target.path.contains(':') {
            audit.parametric_menu_targets.push(target.clone());
        }

        let registered = routes
            .entries()
            .iter()
            .any(|e| e.template == target.path)
            || prefixes.iter().any(|p| {
                target.path == *p || target.path.starts_with(&format!("{}/", p))
            });
        if !registered {
            audit.unregistered_targets.push(target.clone());
        }
    }
    audit
}

#[component]
#[allow(non_snake_case)]
pub fn DiagnosticsPage() -> impl IntoView {
    let nav = use_navigation();
    let routes = nav.routes();

    let menu: Vec<MenuTarget> = nav_groups(&routes)
        .into_iter()
        .flat_map(|group| group.items)
        .map(|item| MenuTarget {
            label: item.label.to_string(),
            path: item.path,
        })
        .collect();
    let audit = audit_navigation(&routes, &menu);

    let sections: Vec<&'static str> = {
        let mut seen = Vec::new();
        for key in RouteKey::ALL {
            let section = key.section();
            if !seen.contains(&section) {
                seen.push(section);
            }
        }
        seen
    };

    let registry_table = sections
        .into_iter()
        .map(|section| {
            let rows = RouteKey::ALL
                .iter()
                .filter(|k| k.section() == section)
                .map(|key| {
                    let template = routes.template(*key);
                    let parametric = routes.is_parametric(*key);
                    view! {
                        <tr>
                            <td class="mono">{key.name()}</td>
                            <td class="mono">{template}</td>
                            <td>{if parametric { "parametric" } else { "static" }}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <div class="diagnostics-section">
                    <h4>{section}</h4>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Key"</th>
                                <th>"Template"</th>
                                <th>"Kind"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            }
        })
        .collect_view();

    let finding_list = |title: &'static str, targets: Vec<MenuTarget>| {
        if targets.is_empty() {
            return ().into_any();
        }
        view! {
            <div class="diagnostics-finding">
                <h4>{title}</h4>
                <ul>
                    {targets
                        .into_iter()
                        .map(|t| view! { <li>{format!("{} -> {}", t.label, t.path)}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page diagnostics-page">
            <div class="page-header">
                <h2>"Route Diagnostics"</h2>
            </div>

            <div class="diagnostics-summary">
                {if audit.is_clean() {
                    view! { <div class="status-ok">"Menu audit clean"</div> }.into_any()
                } else {
                    view! { <div class="status-warn">"Menu audit found issues"</div> }.into_any()
                }}
            </div>

            {finding_list("Relative targets", audit.relative_targets)}
            {finding_list("Parametric menu targets", audit.parametric_menu_targets)}
            {finding_list("Unregistered targets", audit.unregistered_targets)}

            {registry_table}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(label: &str, path: &str) -> MenuTarget {
        MenuTarget {
            label: label.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_sidebar_menu_audits_clean() {
        let routes = Routes::new();
        let menu: Vec<MenuTarget> = nav_groups(&routes)
            .into_iter()
            .flat_map(|g| g.items)
            .map(|i| target(i.label, &i.path))
            .collect();
        let audit = audit_navigation(&routes, &menu);
        assert!(audit.is_clean(), "{:?}", audit);
    }

    #[test]
    fn test_sidebar_menu_covers_dashboard_routes() {
        // Every static dashboard destination must be reachable from the
        // menu, not only via direct URL.
        let routes = Routes::new();
        let menu_paths: Vec<String> = nav_groups(&routes)
            .into_iter()
            .flat_map(|g| g.items)
            .map(|i| i.path)
            .collect();
        for key in RouteKey::ALL {
            if key.section() == "Dashboards" && !routes.is_parametric(key) {
                let template = routes.template(key);
                assert!(
                    menu_paths.iter().any(|p| p == template),
                    "{} missing from menu",
                    template
                );
            }
        }
    }

    #[test]
    fn test_relative_target_flagged() {
        let routes = Routes::new();
        let audit = audit_navigation(&routes, &[target("Jobs", "jobs")]);
        assert_eq!(audit.relative_targets.len(), 1);
    }

    #[test]
    fn test_parametric_target_flagged() {
        let routes = Routes::new();
        let audit = audit_navigation(&routes, &[target("Job", "/jobs/:jobId")]);
        assert_eq!(audit.parametric_menu_targets.len(), 1);
    }

    #[test]
    fn test_unregistered_target_flagged() {
        let routes = Routes::new();
        let audit = audit_navigation(&routes, &[target("Ghost", "/reports/weekly")]);
        assert_eq!(audit.unregistered_targets.len(), 1);
    }

    #[test]
    fn test_prefix_descendant_is_registered() {
        // /jobs/123 falls under the JOBS_DETAIL prefix even though it is
        // not itself a template.
        let routes = Routes::new();
        let audit = audit_navigation(&routes, &[target("A job", "/jobs/123")]);
        assert!(audit.unregistered_targets.is_empty());
    }

    #[test]
    fn test_external_targets_skipped() {
        let routes = Routes::new();
        let audit = audit_navigation(
            &routes,
            &[target("Docs", "https://docs.example.com/guide")],
        );
        assert!(audit.is_clean());
    }

    #[test]
    fn test_overlapping_findings_allowed() {
        let routes = Routes::new();
        let audit = audit_navigation(&routes, &[target("Broken", "reports/:id")]);
        assert_eq!(audit.relative_targets.len(), 1);
        assert_eq!(audit.parametric_menu_targets.len(), 1);
        assert_eq!(audit.unregistered_targets.len(), 1);
    }
}
