use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

/// Audit-trail entry recorded alongside entity mutations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub activity_type: String,
    pub description: String,
}

impl ActivityLog {
    pub fn created(entity_type: &str, entity_id: &str, description: &str) -> Self {
        Self {
            id: String::new(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            activity_type: "Created".to_string(),
            description: description.to_string(),
        }
    }
}

impl Entity for ActivityLog {
    fn collection_name() -> &'static str {
        "ActivityLog"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
