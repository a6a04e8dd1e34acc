//! Canonical route registry - single source of truth for all app routes.
//!
//! Every navigable destination has one logical key and one path template.
//! All navigation must go through the registry's builders so broken links
//! cannot be introduced by hand-written paths.

use std::fmt;

/// Logical key of a navigable destination, independent of its URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Home,
    // Work orders (jobs)
    Jobs,
    JobsBoard,
    JobsCreate,
    JobsDetail,
    // PPM
    PpmPlans,
    PpmPlansDetail,
    PpmInstances,
    PpmInstancesDetail,
    // Internal ops & compliance
    Ops,
    OpsTasks,
    OpsTasksDetail,
    OpsIncidents,
    OpsIncidentsCreate,
    OpsIncidentsDetail,
    // Fleet
    Fleet,
    FleetVehicles,
    FleetVehiclesDetail,
    FleetChecks,
    FleetDefects,
    FleetDefectsDetail,
    FleetFuel,
    FleetFuelDetail,
    FleetFuelReview,
    // Hire / rental
    Hire,
    HireAssets,
    HireCalendar,
    HireContracts,
    HireContractsCreate,
    HireContractsDetail,
    HireInspectionsDetail,
    // Dashboards & analytics
    Dashboards,
    DashboardsJobs,
    DashboardsPpm,
    DashboardsFleet,
    DashboardsHire,
    DashboardsOps,
    // Core data & admin
    Customers,
    CustomersDetail,
    Sites,
    SitesDetail,
    Contacts,
    Assets,
    AssetsDetail,
    AdminSettings,
    // Special
    DiagnosticsRoutes,
    NotFound,
}

impl RouteKey {
    pub const ALL: [RouteKey; 47] = [
        RouteKey::Home,
        RouteKey::Jobs,
        RouteKey::JobsBoard,
        RouteKey::JobsCreate,
        RouteKey::JobsDetail,
        RouteKey::PpmPlans,
        RouteKey::PpmPlansDetail,
        RouteKey::PpmInstances,
        RouteKey::PpmInstancesDetail,
        RouteKey::Ops,
        RouteKey::OpsTasks,
        RouteKey::OpsTasksDetail,
        RouteKey::OpsIncidents,
        RouteKey::OpsIncidentsCreate,
        RouteKey::OpsIncidentsDetail,
        RouteKey::Fleet,
        RouteKey::FleetVehicles,
        RouteKey::FleetVehiclesDetail,
        RouteKey::FleetChecks,
        RouteKey::FleetDefects,
        RouteKey::FleetDefectsDetail,
        RouteKey::FleetFuel,
        RouteKey::FleetFuelDetail,
        RouteKey::FleetFuelReview,
        RouteKey::Hire,
        RouteKey::HireAssets,
        RouteKey::HireCalendar,
        RouteKey::HireContracts,
        RouteKey::HireContractsCreate,
        RouteKey::HireContractsDetail,
        RouteKey::HireInspectionsDetail,
        RouteKey::Dashboards,
        RouteKey::DashboardsJobs,
        RouteKey::DashboardsPpm,
        RouteKey::DashboardsFleet,
        RouteKey::DashboardsHire,
        RouteKey::DashboardsOps,
        RouteKey::Customers,
        RouteKey::CustomersDetail,
        RouteKey::Sites,
        RouteKey::SitesDetail,
        RouteKey::Contacts,
        RouteKey::Assets,
        RouteKey::AssetsDetail,
        RouteKey::AdminSettings,
        RouteKey::DiagnosticsRoutes,
        RouteKey::NotFound,
    ];

    /// Stable symbolic name, matching the registry's documentation.
    pub fn name(&self) -> &'static str {
        match self {
            RouteKey::Home => "HOME",
            RouteKey::Jobs => "JOBS",
            RouteKey::JobsBoard => "JOBS_BOARD",
            RouteKey::JobsCreate => "JOBS_CREATE",
            RouteKey::JobsDetail => "JOBS_DETAIL",
            RouteKey::PpmPlans => "PPM_PLANS",
            RouteKey::PpmPlansDetail => "PPM_PLANS_DETAIL",
            RouteKey::PpmInstances => "PPM_INSTANCES",
            RouteKey::PpmInstancesDetail => "PPM_INSTANCES_DETAIL",
            RouteKey::Ops => "OPS",
            RouteKey::OpsTasks => "OPS_TASKS",
            RouteKey::OpsTasksDetail => "OPS_TASKS_DETAIL",
            RouteKey::OpsIncidents => "OPS_INCIDENTS",
            RouteKey::OpsIncidentsCreate => "OPS_INCIDENTS_CREATE",
            RouteKey::OpsIncidentsDetail => "OPS_INCIDENTS_DETAIL",
            RouteKey::Fleet => "FLEET",
            RouteKey::FleetVehicles => "FLEET_VEHICLES",
            RouteKey::FleetVehiclesDetail => "FLEET_VEHICLES_DETAIL",
            RouteKey::FleetChecks => "FLEET_CHECKS",
            RouteKey::FleetDefects => "FLEET_DEFECTS",
            RouteKey::FleetDefectsDetail => "FLEET_DEFECTS_DETAIL",
            RouteKey::FleetFuel => "FLEET_FUEL",
            RouteKey::FleetFuelDetail => "FLEET_FUEL_DETAIL",
            RouteKey::FleetFuelReview => "FLEET_FUEL_REVIEW",
            RouteKey::Hire => "HIRE",
            RouteKey::HireAssets => "HIRE_ASSETS",
            RouteKey::HireCalendar => "HIRE_CALENDAR",
            RouteKey::HireContracts => "HIRE_CONTRACTS",
            RouteKey::HireContractsCreate => "HIRE_CONTRACTS_CREATE",
            RouteKey::HireContractsDetail => "HIRE_CONTRACTS_DETAIL",
            RouteKey::HireInspectionsDetail => "HIRE_INSPECTIONS_DETAIL",
            RouteKey::Dashboards => "DASHBOARDS",
            RouteKey::DashboardsJobs => "DASHBOARDS_JOBS",
            RouteKey::DashboardsPpm => "DASHBOARDS_PPM",
            RouteKey::DashboardsFleet => "DASHBOARDS_FLEET",
            RouteKey::DashboardsHire => "DASHBOARDS_HIRE",
            RouteKey::DashboardsOps => "DASHBOARDS_OPS",
            RouteKey::Customers => "CUSTOMERS",
            RouteKey::CustomersDetail => "CUSTOMERS_DETAIL",
            RouteKey::Sites => "SITES",
            RouteKey::SitesDetail => "SITES_DETAIL",
            RouteKey::Contacts => "CONTACTS",
            RouteKey::Assets => "ASSETS",
            RouteKey::AssetsDetail => "ASSETS_DETAIL",
            RouteKey::AdminSettings => "ADMIN_SETTINGS",
            RouteKey::DiagnosticsRoutes => "DIAGNOSTICS_ROUTES",
            RouteKey::NotFound => "NOT_FOUND",
        }
    }

    /// Section grouping used by the diagnostics page.
    pub fn section(&self) -> &'static str {
        match self {
            RouteKey::Jobs
            | RouteKey::JobsBoard
            | RouteKey::JobsCreate
            | RouteKey::JobsDetail => "Work Orders",
            RouteKey::PpmPlans
            | RouteKey::PpmPlansDetail
            | RouteKey::PpmInstances
            | RouteKey::PpmInstancesDetail => "PPM",
            RouteKey::Ops
            | RouteKey::OpsTasks
            | RouteKey::OpsTasksDetail
            | RouteKey::OpsIncidents
            | RouteKey::OpsIncidentsCreate
            | RouteKey::OpsIncidentsDetail => "Internal Ops",
            RouteKey::Fleet
            | RouteKey::FleetVehicles
            | RouteKey::FleetVehiclesDetail
            | RouteKey::FleetChecks
            | RouteKey::FleetDefects
            | RouteKey::FleetDefectsDetail
            | RouteKey::FleetFuel
            | RouteKey::FleetFuelDetail
            | RouteKey::FleetFuelReview => "Fleet",
            RouteKey::Hire
            | RouteKey::HireAssets
            | RouteKey::HireCalendar
            | RouteKey::HireContracts
            | RouteKey::HireContractsCreate
            | RouteKey::HireContractsDetail
            | RouteKey::HireInspectionsDetail => "Hire / Rental",
            RouteKey::Dashboards
            | RouteKey::DashboardsJobs
            | RouteKey::DashboardsPpm
            | RouteKey::DashboardsFleet
            | RouteKey::DashboardsHire
            | RouteKey::DashboardsOps => "Dashboards",
            RouteKey::Customers
            | RouteKey::CustomersDetail
            | RouteKey::Sites
            | RouteKey::SitesDetail
            | RouteKey::Contacts
            | RouteKey::Assets
            | RouteKey::AssetsDetail => "Core Data",
            RouteKey::AdminSettings | RouteKey::DiagnosticsRoutes => "Admin & Special",
            RouteKey::Home | RouteKey::NotFound => "Other",
        }
    }
}

/// One registry row: logical key plus its path template.
///
/// Templates need not be unique (`FLEET` and `FLEET_VEHICLES` are aliases)
/// but keys are.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub key: RouteKey,
    pub template: &'static str,
}

impl RouteEntry {
    pub fn is_parametric(&self) -> bool {
        self.template.contains(':')
    }

    /// Template with trailing parameter segments stripped, e.g.
    /// `/jobs/:jobId` -> `/jobs`. Used for prefix membership checks.
    pub fn prefix(&self) -> &'static str {
        let mut end = self.template.len();
        for (idx, segment) in self.template.match_indices('/') {
            if segment.len() + idx < self.template.len()
                && self.template[idx + 1..].starts_with(':')
            {
                end = idx;
                break;
            }
        }
        if end == 0 {
            "/"
        } else {
            &self.template[..end]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A parametric route was looked up as a static destination.
    ParametricRoute(RouteKey),
    /// Builder was given the wrong number of identifiers.
    ParamCountMismatch {
        key: RouteKey,
        expected: usize,
        got: usize,
    },
    /// Builder was given an empty identifier for the named placeholder.
    EmptyParam {
        key: RouteKey,
        placeholder: &'static str,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::ParametricRoute(key) => {
                write!(f, "route {} requires parameters", key.name())
            }
            RouteError::ParamCountMismatch { key, expected, got } => write!(
                f,
                "route {} takes {} parameter(s), got {}",
                key.name(),
                expected,
                got
            ),
            RouteError::EmptyParam { key, placeholder } => write!(
                f,
                "route {} given an empty value for :{}",
                key.name(),
                placeholder
            ),
        }
    }
}

/// Result of matching a concrete path against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub key: RouteKey,
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The route registry. Constructed once at the composition root and passed
/// down explicitly; not a process-wide singleton.
#[derive(Debug, Clone)]
pub struct Routes {
    entries: Vec<RouteEntry>,
}

impl Routes {
    pub fn new() -> Self {
        // Sites live under /core/sites; the registry and builders agree.
        let entries = vec![
            RouteEntry { key: RouteKey::Home, template: "/" },
            RouteEntry { key: RouteKey::Jobs, template: "/jobs" },
            RouteEntry { key: RouteKey::JobsBoard, template: "/jobs/board" },
            RouteEntry { key: RouteKey::JobsCreate, template: "/jobs/new" },
            RouteEntry { key: RouteKey::JobsDetail, template: "/jobs/:jobId" },
            RouteEntry { key: RouteKey::PpmPlans, template: "/ppm/plans" },
            RouteEntry { key: RouteKey::PpmPlansDetail, template: "/ppm/plans/:planId" },
            RouteEntry { key: RouteKey::PpmInstances, template: "/ppm/instances" },
            RouteEntry { key: RouteKey::PpmInstancesDetail, template: "/ppm/instances/:instanceId" },
            RouteEntry { key: RouteKey::Ops, template: "/ops" },
            RouteEntry { key: RouteKey::OpsTasks, template: "/ops/tasks" },
            RouteEntry { key: RouteKey::OpsTasksDetail, template: "/ops/tasks/:taskId" },
            RouteEntry { key: RouteKey::OpsIncidents, template: "/ops/incidents" },
            RouteEntry { key: RouteKey::OpsIncidentsCreate, template: "/ops/incidents/new" },
            RouteEntry { key: RouteKey::OpsIncidentsDetail, template: "/ops/incidents/:incidentId" },
            RouteEntry { key: RouteKey::Fleet, template: "/fleet/vehicles" },
            RouteEntry { key: RouteKey::FleetVehicles, template: "/fleet/vehicles" },
            RouteEntry { key: RouteKey::FleetVehiclesDetail, template: "/fleet/vehicles/:vehicleId" },
            RouteEntry { key: RouteKey::FleetChecks, template: "/fleet/checks" },
            RouteEntry { key: RouteKey::FleetDefects, template: "/fleet/defects" },
            RouteEntry { key: RouteKey::FleetDefectsDetail, template: "/fleet/defects/:defectId" },
            RouteEntry { key: RouteKey::FleetFuel, template: "/fleet/fuel" },
            RouteEntry { key: RouteKey::FleetFuelDetail, template: "/fleet/fuel/:fuelId" },
            RouteEntry { key: RouteKey::FleetFuelReview, template: "/fleet/fuel-review" },
            RouteEntry { key: RouteKey::Hire, template: "/hire/assets" },
            RouteEntry { key: RouteKey::HireAssets, template: "/hire/assets" },
            RouteEntry { key: RouteKey::HireCalendar, template: "/hire/calendar" },
            RouteEntry { key: RouteKey::HireContracts, template: "/hire/contracts" },
            RouteEntry { key: RouteKey::HireContractsCreate, template: "/hire/contracts/new" },
            RouteEntry { key: RouteKey::HireContractsDetail, template: "/hire/contracts/:contractId" },
            RouteEntry { key: RouteKey::HireInspectionsDetail, template: "/hire/inspections/:inspectionId" },
            RouteEntry { key: RouteKey::Dashboards, template: "/dashboards" },
            RouteEntry { key: RouteKey::DashboardsJobs, template: "/dashboards/jobs" },
            RouteEntry { key: RouteKey::DashboardsPpm, template: "/dashboards/ppm" },
            RouteEntry { key: RouteKey::DashboardsFleet, template: "/dashboards/fleet" },
            RouteEntry { key: RouteKey::DashboardsHire, template: "/dashboards/hire" },
            RouteEntry { key: RouteKey::DashboardsOps, template: "/dashboards/ops" },
            RouteEntry { key: RouteKey::Customers, template: "/core/customers" },
            RouteEntry { key: RouteKey::CustomersDetail, template: "/core/customers/:customerId" },
            RouteEntry { key: RouteKey::Sites, template: "/core/sites" },
            RouteEntry { key: RouteKey::SitesDetail, template: "/core/sites/:siteId" },
            RouteEntry { key: RouteKey::Contacts, template: "/core/contacts" },
            RouteEntry { key: RouteKey::Assets, template: "/core/assets" },
            RouteEntry { key: RouteKey::AssetsDetail, template: "/core/assets/:assetId" },
            RouteEntry { key: RouteKey::AdminSettings, template: "/admin/settings" },
            RouteEntry { key: RouteKey::DiagnosticsRoutes, template: "/diagnostics/routes" },
            RouteEntry { key: RouteKey::NotFound, template: "/404" },
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    fn entry(&self, key: RouteKey) -> &RouteEntry {
        // Registry drift is a programmer error and fails loudly; the table
        // covering every variant is enforced by test_every_key_registered.
        self.entries
            .iter()
            .find(|e| e.key == key)
            .unwrap_or_else(|| panic!("route key {} missing from registry", key.name()))
    }

    pub fn template(&self, key: RouteKey) -> &'static str {
        self.entry(key).template
    }

    pub fn is_parametric(&self, key: RouteKey) -> bool {
        self.entry(key).is_parametric()
    }

    /// Resolve a non-parametric destination to its path. Looking up a
    /// parametric route here is a programmer error and fails loudly.
    pub fn resolve_static(&self, key: RouteKey) -> Result<&'static str, RouteError> {
        let entry = self.entry(key);
        if entry.is_parametric() {
            return Err(RouteError::ParametricRoute(key));
        }
        Ok(entry.template)
    }

    /// Substitute positional identifiers into the template's placeholders,
    /// in template order. Identifier segments are percent-encoded; empty
    /// identifiers are rejected rather than silently emitting a malformed
    /// path segment.
    pub fn build(&self, key: RouteKey, ids: &[&str]) -> Result<String, RouteError> {
        let entry = self.entry(key);
        let expected = entry
            .template
            .split('/')
            .filter(|s| s.starts_with(':'))
            .count();
        if expected != ids.len() {
            return Err(RouteError::ParamCountMismatch {
                key,
                expected,
                got: ids.len(),
            });
        }

        let mut ids = ids.iter();
        let mut out = String::with_capacity(entry.template.len());
        for segment in entry.template.split('/').skip(1) {
            out.push('/');
            if let Some(placeholder) = segment.strip_prefix(':') {
                let id = ids.next().unwrap_or(&"");
                if id.trim().is_empty() {
                    return Err(RouteError::EmptyParam { key, placeholder });
                }
                out.push_str(&urlencoding::encode(id));
            } else {
                out.push_str(segment);
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }

    /// Match a concrete path against the registry. Exact (static) matches
    /// take precedence over parametric ones, so `/jobs/new` resolves to
    /// `JOBS_CREATE` and not `JOBS_DETAIL`.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let path = if path.len() > 1 && path.ends_with('/') {
            &path[..path.len() - 1]
        } else {
            path
        };

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| !e.is_parametric() && e.template == path)
        {
            return Some(RouteMatch {
                key: entry.key,
                params: Vec::new(),
            });
        }

        let segments: Vec<&str> = path.split('/').skip(1).collect();
        'entries: for entry in self.entries.iter().filter(|e| e.is_parametric()) {
            let tmpl: Vec<&str> = entry.template.split('/').skip(1).collect();
            if tmpl.len() != segments.len() {
                continue;
            }
            let mut params = Vec::new();
            for (t, s) in tmpl.iter().zip(segments.iter()) {
                if let Some(name) = t.strip_prefix(':') {
                    if s.is_empty() {
                        continue 'entries;
                    }
                    let value = urlencoding::decode(s)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| (*s).to_string());
                    params.push((name.to_string(), value));
                } else if t != s {
                    continue 'entries;
                }
            }
            return Some(RouteMatch {
                key: entry.key,
                params,
            });
        }
        None
    }

    /// Registered path prefixes (templates with trailing parameter
    /// segments stripped), used by the navigation audit.
    pub fn prefixes(&self) -> Vec<&'static str> {
        let mut prefixes: Vec<&'static str> = self.entries.iter().map(|e| e.prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        prefixes
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_key_registered_exactly_once() {
        let routes = Routes::new();
        let mut seen = HashSet::new();
        for entry in routes.entries() {
            assert!(seen.insert(entry.key), "duplicate key {:?}", entry.key);
        }
        for key in RouteKey::ALL {
            assert!(seen.contains(&key), "missing key {:?}", key);
        }
    }

    #[test]
    fn test_every_template_is_absolute() {
        let routes = Routes::new();
        for entry in routes.entries() {
            assert!(
                entry.template.starts_with('/'),
                "{} is not absolute",
                entry.template
            );
        }
    }

    #[test]
    fn test_resolve_static() {
        let routes = Routes::new();
        assert_eq!(routes.resolve_static(RouteKey::Jobs), Ok("/jobs"));
        assert_eq!(routes.resolve_static(RouteKey::Home), Ok("/"));
        assert_eq!(
            routes.resolve_static(RouteKey::JobsDetail),
            Err(RouteError::ParametricRoute(RouteKey::JobsDetail))
        );
    }

    #[test]
    fn test_build_substitutes_in_order() {
        let routes = Routes::new();
        assert_eq!(
            routes.build(RouteKey::JobsDetail, &["abc123"]),
            Ok("/jobs/abc123".to_string())
        );
        assert_eq!(
            routes.build(RouteKey::SitesDetail, &["s-9"]),
            Ok("/core/sites/s-9".to_string())
        );
    }

    #[test]
    fn test_build_static_route_returns_template() {
        let routes = Routes::new();
        assert_eq!(routes.build(RouteKey::Jobs, &[]), Ok("/jobs".to_string()));
        assert_eq!(routes.build(RouteKey::Home, &[]), Ok("/".to_string()));
    }

    #[test]
    fn test_build_rejects_empty_id() {
        let routes = Routes::new();
        assert_eq!(
            routes.build(RouteKey::JobsDetail, &[""]),
            Err(RouteError::EmptyParam {
                key: RouteKey::JobsDetail,
                placeholder: "jobId",
            })
        );
        assert_eq!(
            routes.build(RouteKey::JobsDetail, &[]),
            Err(RouteError::ParamCountMismatch {
                key: RouteKey::JobsDetail,
                expected: 1,
                got: 0,
            })
        );
    }

    #[test]
    fn test_build_encodes_unsafe_segments() {
        let routes = Routes::new();
        let path = routes.build(RouteKey::JobsDetail, &["a b/c"]).unwrap();
        assert_eq!(path, "/jobs/a%20b%2Fc");
        assert!(path.starts_with('/'));
    }

    #[test]
    fn test_match_path_static_beats_parametric() {
        let routes = Routes::new();
        let m = routes.match_path("/jobs/new").unwrap();
        assert_eq!(m.key, RouteKey::JobsCreate);

        let m = routes.match_path("/jobs/j-42").unwrap();
        assert_eq!(m.key, RouteKey::JobsDetail);
        assert_eq!(m.param("jobId"), Some("j-42"));
    }

    #[test]
    fn test_match_path_unknown() {
        let routes = Routes::new();
        assert!(routes.match_path("/nope").is_none());
        assert!(routes.match_path("/jobs/a/b").is_none());
    }

    #[test]
    fn test_prefix_strips_trailing_params() {
        let entry = RouteEntry {
            key: RouteKey::JobsDetail,
            template: "/jobs/:jobId",
        };
        assert_eq!(entry.prefix(), "/jobs");

        let entry = RouteEntry {
            key: RouteKey::Home,
            template: "/",
        };
        assert_eq!(entry.prefix(), "/");
    }
}
