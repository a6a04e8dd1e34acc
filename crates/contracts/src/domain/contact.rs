use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub customer: String,
}

impl Entity for Contact {
    fn collection_name() -> &'static str {
        "Contact"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
