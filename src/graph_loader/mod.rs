// error module
pub mod error;
// loader module
mod loader;

pub use error::GraphLoaderError;
pub use loader::{build_graph, load_graph_from_file};
