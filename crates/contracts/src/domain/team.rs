use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Entity for Team {
    fn collection_name() -> &'static str {
        "Team"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
