use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub billing_address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Customer {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Customer name must not be empty".into());
        }
        Ok(())
    }
}

impl Entity for Customer {
    fn collection_name() -> &'static str {
        "Customer"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
