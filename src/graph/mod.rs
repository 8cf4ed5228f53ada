// graph module
mod graph;

pub use graph::{Graph, LocationId, Route, TOWN_CAPACITY};
