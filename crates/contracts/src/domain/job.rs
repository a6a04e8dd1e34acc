use crate::domain::common::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    Breakdown,
    Service,
    Install,
    Transport,
    Inspection,
    Other,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::Breakdown,
        JobType::Service,
        JobType::Install,
        JobType::Transport,
        JobType::Inspection,
        JobType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::Breakdown => "Breakdown",
            JobType::Service => "Service",
            JobType::Install => "Install",
            JobType::Transport => "Transport",
            JobType::Inspection => "Inspection",
            JobType::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            JobType::Breakdown => "Emergency equipment repair or fault",
            JobType::Service => "Scheduled maintenance & cleaning",
            JobType::Install => "Equipment installation or setup",
            JobType::Transport => "Equipment delivery or pickup",
            JobType::Inspection => "Equipment inspection & safety check",
            JobType::Other => "General work order",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl JobPriority {
    pub const ALL: [JobPriority; 4] = [
        JobPriority::Low,
        JobPriority::Medium,
        JobPriority::High,
        JobPriority::Urgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobPriority::Low => "Low",
            JobPriority::Medium => "Medium",
            JobPriority::High => "High",
            JobPriority::Urgent => "Urgent",
        }
    }
}

impl Default for JobPriority {
    fn default() -> Self {
        JobPriority::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkLocation {
    #[serde(rename = "On-site")]
    OnSite,
    Workshop,
    Transport,
}

impl WorkLocation {
    pub const ALL: [WorkLocation; 3] = [
        WorkLocation::OnSite,
        WorkLocation::Workshop,
        WorkLocation::Transport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkLocation::OnSite => "On-site",
            WorkLocation::Workshop => "Workshop",
            WorkLocation::Transport => "Transport",
        }
    }
}

impl Default for WorkLocation {
    fn default() -> Self {
        WorkLocation::OnSite
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
    #[serde(rename = "All Day")]
    AllDay,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Am, TimeSlot::Pm, TimeSlot::AllDay];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Am => "Morning (AM)",
            TimeSlot::Pm => "Afternoon (PM)",
            TimeSlot::AllDay => "All Day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Draft,
    Scheduled,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// Initial status of a freshly created job. An assignee outranks a
    /// schedule, a schedule outranks nothing.
    pub fn initial(has_assignee: bool, has_schedule: bool) -> Self {
        if has_assignee {
            JobStatus::Assigned
        } else if has_schedule {
            JobStatus::Scheduled
        } else {
            JobStatus::Draft
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Draft => "Draft",
            JobStatus::Scheduled => "Scheduled",
            JobStatus::Assigned => "Assigned",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
        }
    }
}

/// A persisted work order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(flatten)]
    pub fields: JobFields,
}

/// Work-order fields common to the create payload and the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFields {
    pub job_number: String,
    pub status: JobStatus,
    pub customer: String,
    pub site: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<String>,
    pub job_type: JobType,
    pub work_location: WorkLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    pub priority: JobPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<TimeSlot>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fault_details: String,
    #[serde(default)]
    pub risk_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_primary: Option<String>,
}

impl JobFields {
    pub fn validate(&self) -> Result<(), String> {
        if self.customer.trim().is_empty() {
            return Err("Job must reference a customer".into());
        }
        if self.site.trim().is_empty() {
            return Err("Job must reference a site".into());
        }
        if self.job_number.trim().is_empty() {
            return Err("Job number must not be empty".into());
        }
        Ok(())
    }
}

impl Entity for Job {
    fn collection_name() -> &'static str {
        "Job"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_priority_order() {
        assert_eq!(JobStatus::initial(true, true), JobStatus::Assigned);
        assert_eq!(JobStatus::initial(true, false), JobStatus::Assigned);
        assert_eq!(JobStatus::initial(false, true), JobStatus::Scheduled);
        assert_eq!(JobStatus::initial(false, false), JobStatus::Draft);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let fields = JobFields {
            job_number: "JOB-2608-0001".into(),
            status: JobStatus::Draft,
            customer: "c1".into(),
            site: "s1".into(),
            primary_contact: None,
            job_type: JobType::Service,
            work_location: WorkLocation::OnSite,
            asset: None,
            priority: JobPriority::Medium,
            due_date: None,
            scheduled_date: None,
            scheduled_time: Some(TimeSlot::AllDay),
            description: String::new(),
            fault_details: String::new(),
            risk_notes: String::new(),
            assigned_team: None,
            assigned_primary: None,
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["jobNumber"], "JOB-2608-0001");
        assert_eq!(json["workLocation"], "On-site");
        assert_eq!(json["scheduledTime"], "All Day");
        assert!(json.get("assignedPrimary").is_none());
    }

    #[test]
    fn test_validate_rejects_dangling_draft() {
        let fields = JobFields {
            job_number: "JOB-2608-0001".into(),
            status: JobStatus::Draft,
            customer: String::new(),
            site: "s1".into(),
            primary_contact: None,
            job_type: JobType::Service,
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
        };
        assert!(fields.validate().is_err());
    }
}
