//! Job-creation wizard state machine.
//!
//! Seven linear steps; earlier steps gate progress, later ones are
//! optional. Every mutation, including the cascading resets, goes through
//! `apply` so the whole flow is a testable `(state, action) -> state`
//! transition.

use chrono::{Datelike, NaiveDate};
use contracts::domain::asset::Asset;
use contracts::domain::contact::Contact;
use contracts::domain::employee::EmployeeProfile;
use contracts::domain::job::{
    JobFields, JobPriority, JobStatus, JobType, TimeSlot, WorkLocation,
};
use contracts::domain::site::Site;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Customer,
    Site,
    JobType,
    Asset,
    Schedule,
    Assign,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Customer,
        WizardStep::Site,
        WizardStep::JobType,
        WizardStep::Asset,
        WizardStep::Schedule,
        WizardStep::Assign,
        WizardStep::Review,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Customer => "Customer",
            WizardStep::Site => "Site",
            WizardStep::JobType => "Job Type",
            WizardStep::Asset => "Asset",
            WizardStep::Schedule => "Schedule",
            WizardStep::Assign => "Assign",
            WizardStep::Review => "Review",
        }
    }

    fn next(&self) -> WizardStep {
        let idx = self.index();
        *Self::ALL.get(idx).unwrap_or(&WizardStep::Review)
    }

    fn prev(&self) -> WizardStep {
        if self.index() <= 1 {
            WizardStep::Customer
        } else {
            Self::ALL[self.index() - 2]
        }
    }
}

/// The in-memory draft. Selections are ids into the reference
/// collections; `None` means not chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub customer: Option<String>,
    pub site: Option<String>,
    pub primary_contact: Option<String>,
    pub job_type: Option<JobType>,
    pub work_location: WorkLocation,
    pub asset: Option<String>,
    pub priority: JobPriority,
    pub due_date: Option<NaiveDate>,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<TimeSlot>,
    pub description: String,
    pub fault_details: String,
    pub risk_notes: String,
    pub assigned_team: Option<String>,
    pub assigned_primary: Option<String>,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            customer: None,
            site: None,
            primary_contact: None,
            job_type: None,
            work_location: WorkLocation::OnSite,
            asset: None,
            priority: JobPriority::Medium,
            due_date: None,
            scheduled_date: None,
            scheduled_time: None,
            description: String::new(),
            fault_details: String::new(),
            risk_notes: String::new(),
            assigned_team: None,
            assigned_primary: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub draft: JobDraft,
    pub step: WizardStep,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Customer
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    SelectCustomer(String),
    SelectSite(String),
    SetPrimaryContact(Option<String>),
    SelectJobType(JobType),
    SetWorkLocation(WorkLocation),
    SelectAsset(Option<String>),
    SetPriority(JobPriority),
    SetDueDate(Option<NaiveDate>),
    SetScheduledDate(Option<NaiveDate>),
    SetScheduledTime(Option<TimeSlot>),
    SetDescription(String),
    SetFaultDetails(String),
    SetRiskNotes(String),
    SelectTeam(Option<String>),
    SelectPrimaryAssignee(Option<String>),
    Next,
    Back,
    JumpBack(WizardStep),
}

/// Required fields per step; optional steps always pass.
pub fn can_proceed(state: &WizardState) -> bool {
    match state.step {
        WizardStep::Customer => state.draft.customer.is_some(),
        WizardStep::Site => state.draft.site.is_some(),
        WizardStep::JobType => state.draft.job_type.is_some(),
        WizardStep::Asset | WizardStep::Schedule | WizardStep::Assign => true,
        WizardStep::Review => true,
    }
}

/// The wizard's only state-transition function.
pub fn apply(mut state: WizardState, action: WizardAction) -> WizardState {
    match action {
        WizardAction::SelectCustomer(id) => {
            // Site and contact are scoped to the customer; a new customer
            // invalidates both.
            if state.draft.customer.as_deref() != Some(id.as_str()) {
                state.draft.site = None;
                state.draft.primary_contact = None;
            }
            state.draft.customer = Some(id);
        }
        WizardAction::SelectSite(id) => state.draft.site = Some(id),
        WizardAction::SetPrimaryContact(id) => state.draft.primary_contact = id,
        WizardAction::SelectJobType(job_type) => state.draft.job_type = Some(job_type),
        WizardAction::SetWorkLocation(loc) => state.draft.work_location = loc,
        WizardAction::SelectAsset(id) => state.draft.asset = id,
        WizardAction::SetPriority(priority) => state.draft.priority = priority,
        WizardAction::SetDueDate(date) => state.draft.due_date = date,
        WizardAction::SetScheduledDate(date) => state.draft.scheduled_date = date,
        WizardAction::SetScheduledTime(slot) => state.draft.scheduled_time = slot,
        WizardAction::SetDescription(text) => state.draft.description = text,
        WizardAction::SetFaultDetails(text) => state.draft.fault_details = text,
        WizardAction::SetRiskNotes(text) => state.draft.risk_notes = text,
        WizardAction::SelectTeam(id) => {
            // The assignee belongs to the team; changing the team
            // invalidates the assignee.
            if state.draft.assigned_team != id {
                state.draft.assigned_primary = None;
            }
            state.draft.assigned_team = id;
        }
        WizardAction::SelectPrimaryAssignee(id) => state.draft.assigned_primary = id,
        WizardAction::Next => {
            if can_proceed(&state) && state.step != WizardStep::Review {
                state.step = state.step.next();
            }
        }
        WizardAction::Back => {
            state.step = state.step.prev();
        }
        WizardAction::JumpBack(target) => {
            // Only completed steps are clickable; forward jumps go
            // through Next.
            if target < state.step {
                state.step = target;
            }
        }
    }
    state
}

// ---------------------------------------------------------------------
// Derived reference projections
// ---------------------------------------------------------------------

/// Sites belonging to the selected customer; none until one is chosen.
pub fn sites_for_customer(sites: &[Site], customer: Option<&str>) -> Vec<Site> {
    match customer {
        Some(id) => sites.iter().filter(|s| s.customer == id).cloned().collect(),
        None => Vec::new(),
    }
}

pub fn contacts_for_customer(contacts: &[Contact], customer: Option<&str>) -> Vec<Contact> {
    match customer {
        Some(id) => contacts
            .iter()
            .filter(|c| c.customer == id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Assets at the selected site, plus unallocated equipment. With no site
/// selected every asset is offered.
pub fn assets_for_site(assets: &[Asset], site: Option<&str>) -> Vec<Asset> {
    match site {
        Some(id) => assets
            .iter()
            .filter(|a| a.site.as_deref() == Some(id) || a.site.is_none())
            .cloned()
            .collect(),
        None => assets.to_vec(),
    }
}

pub fn employees_for_team(
    employees: &[EmployeeProfile],
    team: Option<&str>,
) -> Vec<EmployeeProfile> {
    match team {
        Some(id) => employees
            .iter()
            .filter(|e| e.team.as_deref() == Some(id))
            .cloned()
            .collect(),
        None => employees.to_vec(),
    }
}

// ---------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------

/// Human-readable job identifier: JOB-<yy><mm>-<4-digit suffix>.
pub fn job_number(date: NaiveDate, seed: u32) -> String {
    format!(
        "JOB-{:02}{:02}-{:04}",
        date.year() % 100,
        date.month(),
        seed % 10000
    )
}

/// Assemble the create payload from the draft. Required selections are
/// re-checked here so a cascading reset can never leave a dangling
/// reference in the submitted record.
pub fn compose_job(draft: &JobDraft, job_number: String) -> Result<JobFields, String> {
    let customer = draft
        .customer
        .clone()
        .ok_or_else(|| "No customer selected".to_string())?;
    let site = draft
        .site
        .clone()
        .ok_or_else(|| "No site selected".to_string())?;
    let job_type = draft
        .job_type
        .ok_or_else(|| "No job type selected".to_string())?;

    let fields = JobFields {
        job_number,
        status: JobStatus::initial(
            draft.assigned_primary.is_some(),
            draft.scheduled_date.is_some(),
        ),
        customer,
        site,
        primary_contact: draft.primary_contact.clone(),
        job_type,
        work_location: draft.work_location,
        asset: draft.asset.clone(),
        priority: draft.priority,
        due_date: draft.due_date,
        scheduled_date: draft.scheduled_date,
        scheduled_time: draft.scheduled_time,
        description: draft.description.clone(),
        fault_details: draft.fault_details.clone(),
        risk_notes: draft.risk_notes.clone(),
        assigned_team: draft.assigned_team.clone(),
        assigned_primary: draft.assigned_primary.clone(),
    };
    fields.validate()?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Entity;
    use contracts::domain::customer::Customer;
    use contracts::domain::job::Job;

    fn drive(state: WizardState, actions: impl IntoIterator<Item = WizardAction>) -> WizardState {
        actions.into_iter().fold(state, apply)
    }

    #[test]
    fn test_next_is_noop_until_customer_selected() {
        let state = WizardState::default();
        let state = apply(state, WizardAction::Next);
        assert_eq!(state.step, WizardStep::Customer);

        let state = drive(
            state,
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::Next,
            ],
        );
        assert_eq!(state.step, WizardStep::Site);
    }

    #[test]
    fn test_next_never_skips_steps() {
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::SelectSite("s1".into()),
                WizardAction::SelectJobType(JobType::Service),
                WizardAction::Next,
            ],
        );
        assert_eq!(state.step, WizardStep::Site);
    }

    #[test]
    fn test_optional_steps_pass_through() {
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::Next,
                WizardAction::SelectSite("s1".into()),
                WizardAction::Next,
                WizardAction::SelectJobType(JobType::Service),
                WizardAction::Next,
                WizardAction::Next,
                WizardAction::Next,
                WizardAction::Next,
            ],
        );
        assert_eq!(state.step, WizardStep::Review);
        // Review is terminal; Next stays put.
        let state = apply(state, WizardAction::Next);
        assert_eq!(state.step, WizardStep::Review);
    }

    #[test]
    fn test_back_preserves_fields() {
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::Next,
                WizardAction::SelectSite("s1".into()),
                WizardAction::Back,
            ],
        );
        assert_eq!(state.step, WizardStep::Customer);
        assert_eq!(state.draft.site.as_deref(), Some("s1"));

        let state = apply(state, WizardAction::Back);
        assert_eq!(state.step, WizardStep::Customer);
    }

    #[test]
    fn test_jump_back_only_goes_backwards() {
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::Next,
                WizardAction::SelectSite("s1".into()),
                WizardAction::Next,
            ],
        );
        assert_eq!(state.step, WizardStep::JobType);

        let state = apply(state, WizardAction::JumpBack(WizardStep::Review));
        assert_eq!(state.step, WizardStep::JobType);

        let state = apply(state, WizardAction::JumpBack(WizardStep::Customer));
        assert_eq!(state.step, WizardStep::Customer);
    }

    #[test]
    fn test_changing_customer_clears_site_and_contact() {
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::SelectSite("s1".into()),
                WizardAction::SetPrimaryContact(Some("p1".into())),
                WizardAction::SelectCustomer("c2".into()),
            ],
        );
        assert_eq!(state.draft.customer.as_deref(), Some("c2"));
        assert_eq!(state.draft.site, None);
        assert_eq!(state.draft.primary_contact, None);
    }

    #[test]
    fn test_reselecting_same_customer_keeps_site() {
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::SelectSite("s1".into()),
                WizardAction::SelectCustomer("c1".into()),
            ],
        );
        assert_eq!(state.draft.site.as_deref(), Some("s1"));
    }

    #[test]
    fn test_changing_team_clears_assignee() {
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectTeam(Some("t1".into())),
                WizardAction::SelectPrimaryAssignee(Some("e1".into())),
                WizardAction::SelectTeam(Some("t2".into())),
            ],
        );
        assert_eq!(state.draft.assigned_primary, None);
    }

    #[test]
    fn test_status_derivation() {
        let mut draft = JobDraft {
            customer: Some("c1".into()),
            site: Some("s1".into()),
            job_type: Some(JobType::Service),
            ..JobDraft::default()
        };

        draft.assigned_primary = Some("e1".into());
        draft.scheduled_date = NaiveDate::from_ymd_opt(2026, 9, 1);
        let fields = compose_job(&draft, "JOB-2609-0001".into()).unwrap();
        assert_eq!(fields.status, JobStatus::Assigned);

        draft.assigned_primary = None;
        let fields = compose_job(&draft, "JOB-2609-0001".into()).unwrap();
        assert_eq!(fields.status, JobStatus::Scheduled);

        draft.scheduled_date = None;
        let fields = compose_job(&draft, "JOB-2609-0001".into()).unwrap();
        assert_eq!(fields.status, JobStatus::Draft);
    }

    #[test]
    fn test_compose_rejects_cascaded_away_site() {
        // C1's site was cleared by switching to C2; the payload must not
        // carry the stale site id.
        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer("c1".into()),
                WizardAction::SelectSite("s1".into()),
                WizardAction::SelectCustomer("c2".into()),
                WizardAction::SelectJobType(JobType::Service),
            ],
        );
        assert!(compose_job(&state.draft, "JOB-2608-0001".into()).is_err());
    }

    #[test]
    fn test_job_number_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(job_number(date, 7), "JOB-2608-0007");
        assert_eq!(job_number(date, 123456), "JOB-2608-3456");

        let date = NaiveDate::from_ymd_opt(2031, 1, 2).unwrap();
        assert_eq!(job_number(date, 9999), "JOB-3101-9999");
    }

    #[test]
    fn test_reference_projections() {
        let sites = vec![
            Site {
                id: "s1".into(),
                site_name: "HQ".into(),
                address: None,
                customer: "c1".into(),
            },
            Site {
                id: "s2".into(),
                site_name: "Depot".into(),
                address: None,
                customer: "c2".into(),
            },
        ];
        assert!(sites_for_customer(&sites, None).is_empty());
        let filtered = sites_for_customer(&sites, Some("c1"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "s1");

        let assets = vec![
            Asset {
                id: "a1".into(),
                make: "Acme".into(),
                model: "X".into(),
                internal_asset_id: "EQ-1".into(),
                site: Some("s1".into()),
                status: None,
            },
            Asset {
                id: "a2".into(),
                make: "Acme".into(),
                model: "Y".into(),
                internal_asset_id: "EQ-2".into(),
                site: None,
                status: None,
            },
            Asset {
                id: "a3".into(),
                make: "Acme".into(),
                model: "Z".into(),
                internal_asset_id: "EQ-3".into(),
                site: Some("s2".into()),
                status: None,
            },
        ];
        // No site: everything. With a site: its assets plus unallocated.
        assert_eq!(assets_for_site(&assets, None).len(), 3);
        let filtered = assets_for_site(&assets, Some("s1"));
        let ids: Vec<&str> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2"]);

        let employees = vec![
            EmployeeProfile {
                id: "e1".into(),
                display_name: "A".into(),
                team: Some("t1".into()),
                is_active: true,
            },
            EmployeeProfile {
                id: "e2".into(),
                display_name: "B".into(),
                team: Some("t2".into()),
                is_active: true,
            },
        ];
        assert_eq!(employees_for_team(&employees, None).len(), 2);
        assert_eq!(employees_for_team(&employees, Some("t2"))[0].id, "e2");
    }

    /// End-to-end: seed reference data, walk the wizard, persist into an
    /// in-memory store and check the created record and exit path.
    #[test]
    fn test_full_wizard_scenario() {
        use crate::routes::Routes;
        use std::cell::RefCell;
        use std::collections::HashMap;

        struct MemoryStore {
            records: RefCell<HashMap<&'static str, Vec<serde_json::Value>>>,
            next_id: RefCell<u32>,
        }

        impl MemoryStore {
            fn new() -> Self {
                Self {
                    records: RefCell::new(HashMap::new()),
                    next_id: RefCell::new(1),
                }
            }

            fn seed<E: Entity>(&self, record: &E) {
                let value = serde_json::to_value(record).unwrap();
                self.records
                    .borrow_mut()
                    .entry(E::collection_name())
                    .or_default()
                    .push(value);
            }

            fn create<E: Entity>(&self, record: &E) -> E {
                let mut value = serde_json::to_value(record).unwrap();
                let id = format!("rec-{}", self.next_id.replace_with(|n| *n + 1));
                value["id"] = serde_json::Value::String(id);
                let stored: E = serde_json::from_value(value.clone()).unwrap();
                self.records
                    .borrow_mut()
                    .entry(E::collection_name())
                    .or_default()
                    .push(value);
                stored
            }

            fn count(&self, collection: &str) -> usize {
                self.records
                    .borrow()
                    .get(collection)
                    .map(|v| v.len())
                    .unwrap_or(0)
            }
        }

        let store = MemoryStore::new();
        let acme = Customer {
            id: "Acme-id".into(),
            name: "Acme".into(),
            billing_address: None,
            status: Some("Active".into()),
        };
        let hq = Site {
            id: "Acme HQ-id".into(),
            site_name: "Acme HQ".into(),
            address: None,
            customer: "Acme-id".into(),
        };
        store.seed(&acme);
        store.seed(&hq);

        let offered = sites_for_customer(&[hq.clone()], Some(acme.id.as_str()));
        assert_eq!(offered.len(), 1);

        let state = drive(
            WizardState::default(),
            [
                WizardAction::SelectCustomer(acme.id.clone()),
                WizardAction::Next,
                WizardAction::SelectSite(offered[0].id.clone()),
                WizardAction::Next,
                WizardAction::SelectJobType(JobType::Service),
                WizardAction::Next,
                WizardAction::Next, // asset skipped
                WizardAction::Next, // schedule skipped
                WizardAction::Next, // assignment skipped
            ],
        );
        assert_eq!(state.step, WizardStep::Review);

        let number = job_number(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(), 42);
        let fields = compose_job(&state.draft, number).unwrap();
        let job = store.create(&Job {
            id: String::new(),
            fields,
        });

        assert_eq!(store.count("Job"), 1);
        assert_eq!(job.fields.customer, "Acme-id");
        assert_eq!(job.fields.site, "Acme HQ-id");
        assert_eq!(job.fields.job_type, JobType::Service);
        assert_eq!(job.fields.status, JobStatus::Draft);
        assert_eq!(job.fields.job_number, "JOB-2608-0042");

        let routes = Routes::new();
        let exit = routes.job_detail(&job.id).unwrap();
        assert_eq!(exit, format!("/jobs/{}", job.id));
    }
}
