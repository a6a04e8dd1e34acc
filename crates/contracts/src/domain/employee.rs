use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    #[serde(default)]
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Entity for EmployeeProfile {
    fn collection_name() -> &'static str {
        "EmployeeProfile"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
