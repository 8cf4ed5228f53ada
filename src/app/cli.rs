use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::route::{RouteCriteria, SearchLimits};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Answers distance and trip-count queries over a network of one-way rail routes.", long_about = None)]
pub struct Cli {
    /// Route specification, e.g. "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7"
    #[clap(short, long, required_unless_present = "file")]
    pub routes: Option<String>,

    /// File holding the route specification (commas or one route per line)
    #[clap(short, long, conflicts_with = "routes")]
    pub file: Option<PathBuf>,

    /// Suppress verbose output, only printing the answers.
    #[clap(short, long)]
    pub quiet: bool,

    /// Where verbose output goes.
    #[clap(long, default_value = "routes.log")]
    pub log_file: PathBuf,

    /// Also write the answers to this file.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// How many stops past an "at least" threshold a trip search may go.
    #[clap(long, default_value_t = SearchLimits::DEFAULT_AT_LEAST_EXTRA_STOPS)]
    pub at_least_extra_stops: usize,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            at_least_extra_stops: self.at_least_extra_stops,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Distance along an exact route, e.g. A-B-C
    Distance { route: String },

    /// Number of trips between two towns, constrained by stops
    Stops {
        from: char,
        to: char,
        #[clap(long, value_enum, default_value = "at-most")]
        op: StopOperator,
        #[clap(long)]
        stops: usize,
    },

    /// Number of trips between two towns shorter than a distance
    Within { from: char, to: char, max_distance: u32 },

    /// Length of the shortest route between two towns
    Shortest { from: char, to: char },

    /// Answer the ten standard questions (the default)
    Report,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOperator {
    Exactly,
    AtMost,
    AtLeast,
}

impl StopOperator {
    pub fn criteria(self, stops: usize) -> RouteCriteria {
        match self {
            StopOperator::Exactly => RouteCriteria::equals(stops),
            StopOperator::AtMost => RouteCriteria::at_most(stops),
            StopOperator::AtLeast => RouteCriteria::at_least(stops),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_or_file_is_required() {
        assert!(Cli::try_parse_from(["rail-routes"]).is_err());
        assert!(Cli::try_parse_from(["rail-routes", "--routes", "AB5", "--file", "r.txt"]).is_err());
    }

    #[test]
    fn defaults_to_report() {
        let cli = Cli::try_parse_from(["rail-routes", "-r", "AB5"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.quiet);
        assert_eq!(cli.log_file, PathBuf::from("routes.log"));
        assert_eq!(cli.search_limits(), SearchLimits::default());
    }

    #[test]
    fn parses_stops_query() {
        let cli = Cli::try_parse_from([
            "rail-routes", "-q", "-r", "AB5", "stops", "A", "C", "--op", "exactly", "--stops", "4",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Stops { from, to, op, stops }) => {
                assert_eq!((from, to), ('A', 'C'));
                assert_eq!(op.criteria(stops), RouteCriteria::equals(4));
            }
            other => panic!("expected stops command, got {:?}", other),
        }
    }

    #[test]
    fn stop_operators_map_to_criteria() {
        assert_eq!(StopOperator::AtMost.criteria(3), RouteCriteria::at_most(3));
        assert_eq!(StopOperator::AtLeast.criteria(2), RouteCriteria::at_least(2));
    }

    #[test]
    fn parses_within_and_limits() {
        let cli = Cli::try_parse_from([
            "rail-routes", "-f", "routes.txt", "--at-least-extra-stops", "3", "within", "C", "C", "30",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("routes.txt")));
        assert_eq!(cli.search_limits().at_least_extra_stops, 3);
        assert_eq!(
            cli.command,
            Some(Command::Within { from: 'C', to: 'C', max_distance: 30 })
        );
    }

    #[test]
    fn town_must_be_single_character() {
        assert!(Cli::try_parse_from(["rail-routes", "-r", "AB5", "shortest", "AB", "C"]).is_err());
    }
}
