//! Route builders for detail pages with ID substitution.
//!
//! One builder per parametric route, each deriving from the registry
//! template - there is no second source of truth for path shapes.

use super::registry::{RouteError, RouteKey, Routes};

impl Routes {
    pub fn job_detail(&self, job_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::JobsDetail, &[job_id])
    }

    pub fn ppm_plan_detail(&self, plan_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::PpmPlansDetail, &[plan_id])
    }

    pub fn ppm_instance_detail(&self, instance_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::PpmInstancesDetail, &[instance_id])
    }

    pub fn ops_task_detail(&self, task_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::OpsTasksDetail, &[task_id])
    }

    pub fn incident_detail(&self, incident_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::OpsIncidentsDetail, &[incident_id])
    }

    pub fn vehicle_detail(&self, vehicle_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::FleetVehiclesDetail, &[vehicle_id])
    }

    pub fn defect_detail(&self, defect_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::FleetDefectsDetail, &[defect_id])
    }

    pub fn fuel_detail(&self, fuel_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::FleetFuelDetail, &[fuel_id])
    }

    pub fn hire_contract_detail(&self, contract_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::HireContractsDetail, &[contract_id])
    }

    pub fn hire_inspection_detail(&self, inspection_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::HireInspectionsDetail, &[inspection_id])
    }

    pub fn customer_detail(&self, customer_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::CustomersDetail, &[customer_id])
    }

    pub fn site_detail(&self, site_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::SitesDetail, &[site_id])
    }

    pub fn asset_detail(&self, asset_id: &str) -> Result<String, RouteError> {
        self.build(RouteKey::AssetsDetail, &[asset_id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_are_wellformed() {
        let routes = Routes::new();
        let id = "x9";
        let cases = [
            (routes.job_detail(id), "/jobs/x9"),
            (routes.ppm_plan_detail(id), "/ppm/plans/x9"),
            (routes.ppm_instance_detail(id), "/ppm/instances/x9"),
            (routes.ops_task_detail(id), "/ops/tasks/x9"),
            (routes.incident_detail(id), "/ops/incidents/x9"),
            (routes.vehicle_detail(id), "/fleet/vehicles/x9"),
            (routes.defect_detail(id), "/fleet/defects/x9"),
            (routes.fuel_detail(id), "/fleet/fuel/x9"),
            (routes.hire_contract_detail(id), "/hire/contracts/x9"),
            (routes.hire_inspection_detail(id), "/hire/inspections/x9"),
            (routes.customer_detail(id), "/core/customers/x9"),
            (routes.site_detail(id), "/core/sites/x9"),
            (routes.asset_detail(id), "/core/assets/x9"),
        ];
        for (built, expected) in cases {
            let path = built.unwrap();
            assert_eq!(path, expected);
            assert!(path.starts_with('/'));
            assert!(path.ends_with(id));
        }
    }

    #[test]
    fn test_every_parametric_route_has_a_builder() {
        // The builder list above must stay in lockstep with the registry's
        // parametric entries.
        let routes = Routes::new();
        let parametric = routes
            .entries()
            .iter()
            .filter(|e| e.is_parametric())
            .count();
        assert_eq!(parametric, 13);
    }

    #[test]
    fn test_builder_rejects_empty_identifier() {
        let routes = Routes::new();
        assert!(routes.job_detail("").is_err());
        assert!(routes.customer_detail("   ").is_err());
    }
}
