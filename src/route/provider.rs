use super::criteria::{RouteCriteria, SearchLimits};
use super::error::RouteError;
use super::explorer::{Trip, TripExplorer};
use super::shortest;
use crate::graph::{Graph, LocationId};

/// Returned by distance queries when no route exists.
pub const NO_ROUTE: i64 = -1;

/// Queries a route network answers.
pub trait RouteProvider {
    /// Distance along the exact path `towns`, or `NO_ROUTE` if some hop has
    /// no direct route. At least two towns are required.
    fn distance_along(&self, towns: &[char]) -> Result<i64, RouteError>;

    /// Number of trips from `from` to `to` whose stop count meets `criteria`.
    fn count_by_stops(&self, from: char, to: char, criteria: RouteCriteria)
        -> Result<usize, RouteError>;

    /// Number of trips from `from` to `to` with total distance below
    /// `max_distance`.
    fn count_by_distance(&self, from: char, to: char, max_distance: u32)
        -> Result<usize, RouteError>;

    /// Shortest distance from `from` to `to`, or `NO_ROUTE`. When both are the
    /// same town this is the shortest round trip.
    fn shortest_distance(&self, from: char, to: char) -> Result<i64, RouteError>;

    /// The trips counted by `count_by_stops`.
    fn trips_by_stops(&self, from: char, to: char, criteria: RouteCriteria)
        -> Result<Vec<Trip>, RouteError>;

    /// The trips counted by `count_by_distance`.
    fn trips_by_distance(&self, from: char, to: char, max_distance: u32)
        -> Result<Vec<Trip>, RouteError>;
}

/// Answers route queries over a graph supplied through `initialize`.
#[derive(Clone, Debug, Default)]
pub struct RouteQueryEngine<'g> {
    graph: Option<&'g Graph>,
    limits: SearchLimits,
}

impl<'g> RouteQueryEngine<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            limits,
            ..Self::new()
        }
    }

    /// Supplies the graph every later query reads from.
    pub fn initialize(&mut self, graph: &'g Graph) {
        self.graph = Some(graph);
    }

    fn graph(&self) -> Result<&'g Graph, RouteError> {
        self.graph.ok_or(RouteError::NotInitialized)
    }

    /// Resolves both ends of a trip query.
    fn endpoints(&self, from: char, to: char) -> Result<(&'g Graph, LocationId, LocationId), RouteError> {
        let graph = self.graph()?;
        Ok((graph, resolve(graph, from)?, resolve(graph, to)?))
    }

    fn explore_stops(
        &self,
        mut explorer: TripExplorer<'g>,
        from: LocationId,
        to: LocationId,
        criteria: RouteCriteria,
    ) -> (usize, TripExplorer<'g>) {
        let max_stops = criteria.max_stops(&self.limits);
        let count = explorer.count_by_stops(from, to, criteria, max_stops);
        (count, explorer)
    }
}

impl RouteProvider for RouteQueryEngine<'_> {
    fn distance_along(&self, towns: &[char]) -> Result<i64, RouteError> {
        let graph = self.graph()?;

        if towns.len() < 2 {
            return Err(RouteError::InvalidInput(
                "There should be at least two names of towns.".to_string(),
            ));
        }

        let ids = towns
            .iter()
            .map(|&town| resolve(graph, town))
            .collect::<Result<Vec<_>, _>>()?;

        let mut distance = 0i64;
        for hop in ids.windows(2) {
            let (current, next) = (hop[0], hop[1]);
            match graph.routes_from(current).iter().find(|r| r.destination == next) {
                Some(route) => distance += i64::from(route.weight),
                None => return Ok(NO_ROUTE),
            }
        }

        Ok(distance)
    }

    fn count_by_stops(
        &self,
        from: char,
        to: char,
        criteria: RouteCriteria,
    ) -> Result<usize, RouteError> {
        let (graph, from, to) = self.endpoints(from, to)?;
        let (count, _) = self.explore_stops(TripExplorer::counting(graph), from, to, criteria);
        Ok(count)
    }

    fn count_by_distance(&self, from: char, to: char, max_distance: u32) -> Result<usize, RouteError> {
        let (graph, from, to) = self.endpoints(from, to)?;
        Ok(TripExplorer::counting(graph).count_by_distance(from, to, max_distance))
    }

    fn shortest_distance(&self, from: char, to: char) -> Result<i64, RouteError> {
        let (graph, from, to) = self.endpoints(from, to)?;
        Ok(shortest::shortest_distance(graph, from, to).map_or(NO_ROUTE, i64::from))
    }

    fn trips_by_stops(
        &self,
        from: char,
        to: char,
        criteria: RouteCriteria,
    ) -> Result<Vec<Trip>, RouteError> {
        let (graph, from, to) = self.endpoints(from, to)?;
        let (_, explorer) = self.explore_stops(TripExplorer::collecting(graph), from, to, criteria);
        Ok(explorer.into_trips())
    }

    fn trips_by_distance(
        &self,
        from: char,
        to: char,
        max_distance: u32,
    ) -> Result<Vec<Trip>, RouteError> {
        let (graph, from, to) = self.endpoints(from, to)?;
        let mut explorer = TripExplorer::collecting(graph);
        explorer.count_by_distance(from, to, max_distance);
        Ok(explorer.into_trips())
    }
}

/// Town names are uppercase letters inside the graph's alphabet, and the
/// town must exist.
fn resolve(graph: &Graph, town: char) -> Result<LocationId, RouteError> {
    if !graph.supports(town) {
        return Err(RouteError::InvalidTown(town));
    }
    graph.lookup(town).ok_or(RouteError::UnknownLocation(town))
}
