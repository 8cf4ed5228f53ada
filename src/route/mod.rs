// criteria module
mod criteria;
// error module
mod error;
// explorer module
mod explorer;
// provider module
mod provider;
// shortest module
mod shortest;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports for the application layer.
//─────────────────────────────────────────────────────────────────────────────
pub use criteria::{RouteCriteria, SearchLimits};
pub use error::RouteError;
pub use explorer::Trip;
pub use provider::{RouteProvider, RouteQueryEngine, NO_ROUTE};
