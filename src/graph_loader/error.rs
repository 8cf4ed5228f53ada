use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for building a graph from a route specification.
/// Building is all-or-nothing: any of these means no graph was produced.
#[derive(Error, Debug)]
pub enum GraphLoaderError {
    /// The route specification was empty or only whitespace.
    #[error("Invalid route information: the route specification is empty")]
    InvalidInput,

    /// A token did not match `<SRC><DST><WEIGHT>`, e.g. `AB5`.
    #[error("Malformed route '{0}': expected two uppercase town names followed by a distance 1-9")]
    MalformedRoute(String),

    /// A well-formed token named a town outside the supported alphabet.
    #[error("Route '{token}' uses town '{town}', which is outside the supported towns")]
    TownOutOfRange { token: String, town: char },

    /// Error when reading a route specification file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),
}
