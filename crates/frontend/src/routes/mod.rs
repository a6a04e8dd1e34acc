pub mod builders;
pub mod guard;
pub mod registry;

pub use guard::{normalize_navigation_target, NormalizedTarget};
pub use registry::{RouteError, RouteKey, RouteMatch, Routes};
