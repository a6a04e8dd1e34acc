use serde::de::DeserializeOwned;
use serde::Serialize;

/// Contract every hosted-service collection record satisfies.
///
/// The backing service exposes one collection per entity type; records
/// travel as camelCase JSON maps with an opaque string `id` assigned on
/// create. Typed structs validate at this boundary so the rest of the
/// app never handles untyped field maps.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Collection name on the hosted service, e.g. `"Job"`.
    fn collection_name() -> &'static str;

    /// Opaque record identifier. Empty until the record has been persisted.
    fn id(&self) -> &str;
}
