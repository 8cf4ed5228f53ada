//! Turns command-line requests into route queries and formats the answers.
//!
//! This covers loading the graph from `--routes` or `--file`, the ten
//! standard questions asked by `report`, running each query against a
//! `RouteProvider`, and rendering the answer lines.

use std::fmt;

use super::cli::{Cli, Command};
use super::error::AppError;
use super::file_handler;
use super::verbose_println;
use crate::graph::Graph;
use crate::graph_loader;
use crate::route::{RouteCriteria, RouteProvider, Trip, NO_ROUTE};

/// One question put to the route provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Distance(Vec<char>),
    Stops {
        from: char,
        to: char,
        criteria: RouteCriteria,
    },
    Within {
        from: char,
        to: char,
        max_distance: u32,
    },
    Shortest {
        from: char,
        to: char,
    },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Distance(towns) => {
                let route: Vec<String> = towns.iter().map(char::to_string).collect();
                write!(f, "The distance of the route {}", route.join("-"))
            }
            Query::Stops { from, to, criteria } => write!(
                f,
                "The number of trips starting at {} and ending at {} with {}",
                from, to, criteria
            ),
            Query::Within {
                from,
                to,
                max_distance,
            } => write!(
                f,
                "The number of different routes from {} to {} with a distance of less than {}",
                from, to, max_distance
            ),
            Query::Shortest { from, to } => write!(
                f,
                "The length of the shortest route (in terms of distance to travel) from {} to {}",
                from, to
            ),
        }
    }
}

/// Result of one query. Distances keep `NO_ROUTE` as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Distance(i64),
    Count(usize),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Distance(NO_ROUTE) => f.write_str("NO SUCH ROUTE"),
            Answer::Distance(distance) => write!(f, "{}", distance),
            Answer::Count(count) => write!(f, "{}", count),
        }
    }
}

/// Builds the graph from whichever route source the command line names.
pub fn load_graph(cli: &Cli, quiet_mode: bool) -> Result<Graph, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading routes...");
    let graph = match (&cli.routes, &cli.file) {
        (Some(route_spec), _) => graph_loader::build_graph(route_spec)?,
        (None, Some(route_file)) => {
            let route_file = file_handler::validate_route_file(route_file, quiet_mode)?;
            graph_loader::load_graph_from_file(route_file)?
        }
        (None, None) => {
            return Err(AppError::General(
                "No routes given: use --routes or --file".to_string(),
            ))
        }
    };

    verbose_println!(
        quiet_mode,
        "   => Loaded {} town(s).",
        graph.location_count()
    );
    for location in graph.locations() {
        let routes: Vec<String> = location
            .routes()
            .iter()
            .map(|r| format!("{}{}", graph.label_of(r.destination), r.weight))
            .collect();
        verbose_println!(quiet_mode, "     {} -> {}", location.label(), routes.join(", "));
    }
    Ok(graph)
}

/// The queries selected by the command line; `report` when none is given.
pub fn queries_for(command: Option<&Command>) -> Result<Vec<Query>, AppError> {
    let query = match command {
        None | Some(Command::Report) => return Ok(standard_report()),
        Some(Command::Distance { route }) => Query::Distance(parse_route_path(route)?),
        Some(Command::Stops {
            from,
            to,
            op,
            stops,
        }) => Query::Stops {
            from: *from,
            to: *to,
            criteria: op.criteria(*stops),
        },
        Some(Command::Within {
            from,
            to,
            max_distance,
        }) => Query::Within {
            from: *from,
            to: *to,
            max_distance: *max_distance,
        },
        Some(Command::Shortest { from, to }) => Query::Shortest {
            from: *from,
            to: *to,
        },
    };
    Ok(vec![query])
}

/// The ten standard questions for a rail network.
pub fn standard_report() -> Vec<Query> {
    vec![
        Query::Distance(vec!['A', 'B', 'C']),
        Query::Distance(vec!['A', 'D']),
        Query::Distance(vec!['A', 'D', 'C']),
        Query::Distance(vec!['A', 'E', 'B', 'C', 'D']),
        Query::Distance(vec!['A', 'E', 'D']),
        Query::Stops {
            from: 'C',
            to: 'C',
            criteria: RouteCriteria::at_most(3),
        },
        Query::Stops {
            from: 'A',
            to: 'C',
            criteria: RouteCriteria::equals(4),
        },
        Query::Shortest { from: 'A', to: 'C' },
        Query::Shortest { from: 'B', to: 'B' },
        Query::Within {
            from: 'C',
            to: 'C',
            max_distance: 30,
        },
    ]
}

/// Splits a route such as `A-B-C` into town names.
pub fn parse_route_path(route: &str) -> Result<Vec<char>, AppError> {
    route
        .split('-')
        .map(|part| {
            let mut chars = part.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(town), None) => Ok(town),
                _ => Err(AppError::General(format!(
                    "Invalid route '{}': expected town names separated by '-', e.g. A-B-C",
                    route
                ))),
            }
        })
        .collect()
}

/// Runs one query. In verbose mode trip counts come from the listed trips,
/// which are logged, so each query searches the graph once.
pub fn answer_query(
    provider: &dyn RouteProvider,
    query: &Query,
    quiet_mode: bool,
) -> Result<Answer, AppError> {
    let answer = match query {
        Query::Distance(towns) => Answer::Distance(provider.distance_along(towns)?),
        Query::Stops { from, to, criteria } if quiet_mode => {
            Answer::Count(provider.count_by_stops(*from, *to, *criteria)?)
        }
        Query::Stops { from, to, criteria } => {
            count_logged_trips(&provider.trips_by_stops(*from, *to, *criteria)?, quiet_mode)
        }
        Query::Within {
            from,
            to,
            max_distance,
        } if quiet_mode => Answer::Count(provider.count_by_distance(*from, *to, *max_distance)?),
        Query::Within {
            from,
            to,
            max_distance,
        } => count_logged_trips(
            &provider.trips_by_distance(*from, *to, *max_distance)?,
            quiet_mode,
        ),
        Query::Shortest { from, to } => Answer::Distance(provider.shortest_distance(*from, *to)?),
    };
    Ok(answer)
}

fn count_logged_trips(trips: &[Trip], quiet_mode: bool) -> Answer {
    for trip in trips {
        verbose_println!(quiet_mode, "     Valid route found: {} ({} stops)", trip, trip.legs());
    }
    Answer::Count(trips.len())
}

/// Renders answers as `Output #n: value` lines, one per query.
pub fn render_answers(answers: &[Answer]) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("Output #{}: {}\n", i + 1, answer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_loader::build_graph;
    use crate::route::{RouteError, RouteQueryEngine};
    use std::cell::Cell;

    const SAMPLE: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

    #[test]
    fn parses_route_paths() {
        assert_eq!(parse_route_path("A-B-C").unwrap(), vec!['A', 'B', 'C']);
        assert_eq!(parse_route_path(" A - D ").unwrap(), vec!['A', 'D']);
        assert!(parse_route_path("AB-C").is_err());
        assert!(parse_route_path("A--C").is_err());
    }

    #[test]
    fn report_answers_sample_network() {
        let graph = build_graph(SAMPLE).unwrap();
        let mut engine = RouteQueryEngine::new();
        engine.initialize(&graph);

        let answers = standard_report()
            .iter()
            .map(|query| answer_query(&engine, query, true))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(
            render_answers(&answers),
            "Output #1: 9\n\
             Output #2: 5\n\
             Output #3: 13\n\
             Output #4: 22\n\
             Output #5: NO SUCH ROUTE\n\
             Output #6: 2\n\
             Output #7: 3\n\
             Output #8: 9\n\
             Output #9: 9\n\
             Output #10: 7\n"
        );
    }

    #[test]
    fn single_command_becomes_single_query() {
        let queries = queries_for(Some(&Command::Shortest { from: 'D', to: 'A' })).unwrap();
        assert_eq!(queries, vec![Query::Shortest { from: 'D', to: 'A' }]);
        assert_eq!(queries_for(None).unwrap().len(), 10);
    }

    /// Counts how often each kind of trip search runs.
    struct SearchCounter<'a> {
        inner: &'a dyn RouteProvider,
        counts: Cell<usize>,
        listings: Cell<usize>,
    }

    impl<'a> SearchCounter<'a> {
        fn new(inner: &'a dyn RouteProvider) -> Self {
            Self {
                inner,
                counts: Cell::new(0),
                listings: Cell::new(0),
            }
        }
    }

    impl RouteProvider for SearchCounter<'_> {
        fn distance_along(&self, towns: &[char]) -> Result<i64, RouteError> {
            self.inner.distance_along(towns)
        }

        fn count_by_stops(&self, from: char, to: char, criteria: RouteCriteria) -> Result<usize, RouteError> {
            self.counts.set(self.counts.get() + 1);
            self.inner.count_by_stops(from, to, criteria)
        }

        fn count_by_distance(&self, from: char, to: char, max_distance: u32) -> Result<usize, RouteError> {
            self.counts.set(self.counts.get() + 1);
            self.inner.count_by_distance(from, to, max_distance)
        }

        fn shortest_distance(&self, from: char, to: char) -> Result<i64, RouteError> {
            self.inner.shortest_distance(from, to)
        }

        fn trips_by_stops(&self, from: char, to: char, criteria: RouteCriteria) -> Result<Vec<Trip>, RouteError> {
            self.listings.set(self.listings.get() + 1);
            self.inner.trips_by_stops(from, to, criteria)
        }

        fn trips_by_distance(&self, from: char, to: char, max_distance: u32) -> Result<Vec<Trip>, RouteError> {
            self.listings.set(self.listings.get() + 1);
            self.inner.trips_by_distance(from, to, max_distance)
        }
    }

    #[test]
    fn each_trip_query_searches_once() {
        let graph = build_graph("AB1, BA1").unwrap();
        let mut engine = RouteQueryEngine::new();
        engine.initialize(&graph);
        let queries = [
            Query::Stops {
                from: 'A',
                to: 'A',
                criteria: RouteCriteria::at_most(3),
            },
            Query::Within {
                from: 'A',
                to: 'A',
                max_distance: 5,
            },
        ];

        let verbose = SearchCounter::new(&engine);
        let answers: Vec<Answer> = queries
            .iter()
            .map(|query| answer_query(&verbose, query, false).unwrap())
            .collect();
        assert_eq!(answers, vec![Answer::Count(1), Answer::Count(2)]);
        assert_eq!((verbose.counts.get(), verbose.listings.get()), (0, 2));

        let quiet = SearchCounter::new(&engine);
        for query in &queries {
            answer_query(&quiet, query, true).unwrap();
        }
        assert_eq!((quiet.counts.get(), quiet.listings.get()), (2, 0));
    }

    #[test]
    fn query_errors_propagate() {
        let graph = build_graph("AB5").unwrap();
        let mut engine = RouteQueryEngine::new();
        engine.initialize(&graph);

        let query = Query::Shortest { from: 'A', to: 'C' };
        assert!(matches!(
            answer_query(&engine, &query, true),
            Err(AppError::Route(_))
        ));
    }

    #[test]
    fn describes_queries_in_words() {
        assert_eq!(
            Query::Distance(vec!['A', 'E', 'D']).to_string(),
            "The distance of the route A-E-D"
        );
        let stops = Query::Stops {
            from: 'C',
            to: 'C',
            criteria: RouteCriteria::at_most(3),
        };
        assert_eq!(
            stops.to_string(),
            "The number of trips starting at C and ending at C with at most 3 stops"
        );
    }
}
