use std::fs;

use super::error::GraphLoaderError;
use crate::graph::{Graph, TOWN_CAPACITY};

//─────────────────────────────────────────────────────────────────────────────

const DELIMITER: char = ',';

/// One parsed `<SRC><DST><WEIGHT>` token.
#[derive(Debug, PartialEq, Eq)]
struct RouteToken {
    from: char,
    to: char,
    weight: u32,
}

/// Builds a graph from a route specification such as
/// `"AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7"`.
///
/// Every comma-separated token, once trimmed, must be two uppercase town
/// names followed by a single digit distance 1-9. Routes are added to their
/// source town in the order they appear.
///
/// # Errors
/// - `InvalidInput` if the specification is empty.
/// - `MalformedRoute` for the first token that does not fit the pattern.
/// - `TownOutOfRange` if a town lies beyond `TOWN_CAPACITY`.
pub fn build_graph(route_spec: &str) -> Result<Graph, GraphLoaderError> {
    if route_spec.trim().is_empty() {
        return Err(GraphLoaderError::InvalidInput);
    }

    let mut graph = Graph::new(TOWN_CAPACITY);

    for raw_token in route_spec.split(DELIMITER) {
        let token = raw_token.trim();
        let route = parse_route_token(token)?;

        let out_of_range = |town| GraphLoaderError::TownOutOfRange {
            token: token.to_string(),
            town,
        };
        let from = graph
            .get_or_insert(route.from)
            .ok_or_else(|| out_of_range(route.from))?;
        let to = graph
            .get_or_insert(route.to)
            .ok_or_else(|| out_of_range(route.to))?;

        graph.add_route(from, to, route.weight);
    }

    Ok(graph)
}

/// Reads a route specification from a file and builds a graph from it.
///
/// Besides commas, line breaks separate routes, so a file may list one route
/// per line. Blank lines are skipped, and a single comma closing a line is
/// allowed. Empty tokens inside a line stay malformed.
pub fn load_graph_from_file(file_path: &str) -> Result<Graph, GraphLoaderError> {
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| GraphLoaderError::ReadFile(file_path.into(), e))?;

    let route_spec = file_content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_suffix(',').unwrap_or(line).trim_end())
        .collect::<Vec<_>>()
        .join(",");

    build_graph(&route_spec)
}

/// Parses a single trimmed token.
fn parse_route_token(token: &str) -> Result<RouteToken, GraphLoaderError> {
    let malformed = || GraphLoaderError::MalformedRoute(token.to_string());

    let mut chars = token.chars();
    let (Some(from), Some(to), Some(weight), None) =
        (chars.next(), chars.next(), chars.next(), chars.next())
    else {
        return Err(malformed());
    };

    if !from.is_ascii_uppercase() || !to.is_ascii_uppercase() {
        return Err(malformed());
    }

    match weight.to_digit(10) {
        Some(weight @ 1..=9) => Ok(RouteToken { from, to, weight }),
        _ => Err(malformed()),
    }
}
