use std::fmt;

use super::criteria::RouteCriteria;
use crate::graph::{Graph, LocationId, Route};

/// The towns of one walk, in travel order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip(Vec<char>);

impl Trip {
    pub fn towns(&self) -> &[char] {
        &self.0
    }

    /// Number of routes travelled.
    pub fn legs(&self) -> usize {
        self.towns().len().saturating_sub(1)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, town) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", town)?;
        }
        Ok(())
    }
}

/// A location on the search stack: the next route to try and the search
/// state on entry (stop count or remaining budget).
struct Frame<S> {
    location: LocationId,
    next_route: usize,
    state: S,
}

impl<S> Frame<S> {
    fn new(location: LocationId, state: S) -> Self {
        Self {
            location,
            next_route: 0,
            state,
        }
    }
}

/// `TripExplorer` enumerates walks between two locations by depth-first
/// search. Walks may revisit locations; each search carries its own bound.
/// The search keeps its own frame stack, so deep walks cost heap, not call
/// stack.
///
/// Every search returns the number of walks it counted. When created with
/// `collecting`, the counted walks are also kept and handed back by
/// `into_trips`.
pub struct TripExplorer<'g> {
    graph: &'g Graph,
    /// Locations entered on the current branch.
    path: Vec<LocationId>,
    trips: Option<Vec<Trip>>,
}

impl<'g> TripExplorer<'g> {
    pub fn counting(graph: &'g Graph) -> Self {
        Self {
            graph,
            path: Vec::new(),
            trips: None,
        }
    }

    pub fn collecting(graph: &'g Graph) -> Self {
        Self {
            trips: Some(Vec::new()),
            ..Self::counting(graph)
        }
    }

    /// Walks found so far, empty for a counting explorer.
    pub fn into_trips(self) -> Vec<Trip> {
        self.trips.unwrap_or_default()
    }

    /// Counts walks from `from` to `to` whose stop count meets `criteria`.
    ///
    /// The stop count is the number of locations entered, starting at 1 for
    /// `from`. A route landing on `to` is counted when the stop count of the
    /// location it leaves satisfies `criteria`, and that branch ends there.
    /// Landing on `to` without a match keeps exploring past it. Branches
    /// deeper than `max_stops` are dropped.
    pub fn count_by_stops(
        &mut self,
        from: LocationId,
        to: LocationId,
        criteria: RouteCriteria,
        max_stops: usize,
    ) -> usize {
        self.stops_from(from, to, &criteria, max_stops)
    }

    /// Counts walks from `from` to `to` shorter than `max_distance`.
    ///
    /// Only routes strictly lighter than the remaining budget are taken. Each
    /// route landing on `to` counts, and the search goes on past `to` with
    /// what is left of the budget.
    pub fn count_by_distance(&mut self, from: LocationId, to: LocationId, max_distance: u32) -> usize {
        self.within_from(from, to, max_distance)
    }

    fn stops_from(
        &mut self,
        from: LocationId,
        to: LocationId,
        criteria: &RouteCriteria,
        max_stops: usize,
    ) -> usize {
        if max_stops == 0 {
            return 0;
        }

        let graph = self.graph;
        let mut stack = vec![Frame::new(from, 1)];
        self.path.push(from);

        let mut found = 0;
        while let Some(frame) = stack.last_mut() {
            let Some(route) = graph.routes_from(frame.location).get(frame.next_route) else {
                stack.pop();
                self.path.pop();
                continue;
            };
            frame.next_route += 1;
            let stops = frame.state;

            if route.destination == to && criteria.is_satisfied_by(stops) {
                self.record(route);
                found += 1;
            } else if stops < max_stops {
                stack.push(Frame::new(route.destination, stops + 1));
                self.path.push(route.destination);
            }
        }
        found
    }

    fn within_from(&mut self, from: LocationId, to: LocationId, max_distance: u32) -> usize {
        let graph = self.graph;
        let mut stack = vec![Frame::new(from, max_distance)];
        self.path.push(from);

        let mut found = 0;
        while let Some(frame) = stack.last_mut() {
            let Some(route) = graph.routes_from(frame.location).get(frame.next_route) else {
                stack.pop();
                self.path.pop();
                continue;
            };
            frame.next_route += 1;
            let budget = frame.state;

            if route.weight >= budget {
                continue;
            }
            if route.destination == to {
                self.record(route);
                found += 1;
            }
            stack.push(Frame::new(route.destination, budget - route.weight));
            self.path.push(route.destination);
        }
        found
    }

    /// Keeps the current branch plus `last` as a trip, if collecting.
    fn record(&mut self, last: &Route) {
        if let Some(trips) = self.trips.as_mut() {
            let towns = self
                .path
                .iter()
                .chain(std::iter::once(&last.destination))
                .map(|&id| self.graph.label_of(id))
                .collect();
            trips.push(Trip(towns));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_loader::build_graph;

    fn ids(graph: &Graph, from: char, to: char) -> (LocationId, LocationId) {
        (graph.lookup(from).unwrap(), graph.lookup(to).unwrap())
    }

    #[test]
    fn trip_display_joins_towns() {
        let trip = Trip(vec!['A', 'B', 'C']);
        assert_eq!(trip.to_string(), "A-B-C");
        assert_eq!(trip.legs(), 2);
    }

    #[test]
    fn collects_trips_by_stops() {
        let graph = build_graph("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7").unwrap();
        let (c, _) = ids(&graph, 'C', 'C');

        let mut explorer = TripExplorer::collecting(&graph);
        let count = explorer.count_by_stops(c, c, RouteCriteria::at_most(3), 3);
        let trips: Vec<String> = explorer.into_trips().iter().map(Trip::to_string).collect();

        assert_eq!(count, 2);
        assert_eq!(trips, vec!["C-D-C", "C-E-B-C"]);
    }

    #[test]
    fn collects_trips_by_distance() {
        let graph = build_graph("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7").unwrap();
        let (c, _) = ids(&graph, 'C', 'C');

        let mut explorer = TripExplorer::collecting(&graph);
        let count = explorer.count_by_distance(c, c, 20);
        let trips: Vec<String> = explorer.into_trips().iter().map(Trip::to_string).collect();

        assert_eq!(count, 3);
        assert_eq!(trips, vec!["C-D-C", "C-E-B-C", "C-E-B-C-E-B-C"]);
    }

    #[test]
    fn counting_explorer_keeps_no_trips() {
        let graph = build_graph("AB1, BA1").unwrap();
        let (a, _) = ids(&graph, 'A', 'A');

        let mut explorer = TripExplorer::counting(&graph);
        assert_eq!(explorer.count_by_distance(a, a, 5), 2);
        assert!(explorer.into_trips().is_empty());
    }

    #[test]
    fn zero_stop_bound_finds_nothing() {
        let graph = build_graph("AB1").unwrap();
        let (a, b) = ids(&graph, 'A', 'B');
        let mut explorer = TripExplorer::counting(&graph);
        assert_eq!(explorer.count_by_stops(a, b, RouteCriteria::at_most(0), 0), 0);
    }
}
