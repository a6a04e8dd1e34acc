use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

/// A customer location work is carried out at. `customer` holds the
/// owning customer's record id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(default)]
    pub id: String,
    pub site_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub customer: String,
}

impl Site {
    pub fn validate(&self) -> Result<(), String> {
        if self.site_name.trim().is_empty() {
            return Err("Site name must not be empty".into());
        }
        if self.customer.trim().is_empty() {
            return Err("Site must reference a customer".into());
        }
        Ok(())
    }
}

impl Entity for Site {
    fn collection_name() -> &'static str {
        "Site"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
