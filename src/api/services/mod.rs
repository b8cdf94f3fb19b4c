pub mod health;
pub mod lookup;

pub use health::{health_routes, HealthService};
pub use lookup::{lookup_routes, LookupService};
