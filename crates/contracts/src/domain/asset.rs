use crate::domain::common::Entity;
use serde::{Deserialize, Serialize};

/// A serviceable piece of equipment. `site` is optional: unallocated
/// equipment can be linked to a job regardless of the selected site.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default)]
    pub id: String,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub internal_asset_id: String,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Asset {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

impl Entity for Asset {
    fn collection_name() -> &'static str {
        "Asset"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
