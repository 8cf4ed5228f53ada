use std::fmt;

/// How a walk's stop count is compared with the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Equals,
    AtMost,
    AtLeast,
}

/// Constraint on the number of stops for `count_by_stops`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteCriteria {
    pub operator: Operator,
    pub stops: usize,
}

impl RouteCriteria {
    pub fn equals(stops: usize) -> Self {
        Self {
            operator: Operator::Equals,
            stops,
        }
    }

    pub fn at_most(stops: usize) -> Self {
        Self {
            operator: Operator::AtMost,
            stops,
        }
    }

    pub fn at_least(stops: usize) -> Self {
        Self {
            operator: Operator::AtLeast,
            stops,
        }
    }

    /// Whether a walk standing at the destination after `stops` stops counts.
    pub fn is_satisfied_by(&self, stops: usize) -> bool {
        match self.operator {
            Operator::Equals => stops == self.stops,
            Operator::AtMost => stops <= self.stops,
            Operator::AtLeast => stops >= self.stops,
        }
    }

    /// Deepest stop count the search may reach before a branch is dropped.
    ///
    /// `Equals` and `AtMost` can never match past their threshold. `AtLeast`
    /// has no natural ceiling, so it is capped at the threshold plus
    /// `limits.at_least_extra_stops`; otherwise a cycle that never reaches the
    /// destination would be walked forever.
    pub fn max_stops(&self, limits: &SearchLimits) -> usize {
        match self.operator {
            Operator::Equals | Operator::AtMost => self.stops,
            Operator::AtLeast => self.stops.saturating_add(limits.at_least_extra_stops),
        }
    }
}

impl fmt::Display for RouteCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.operator {
            Operator::Equals => "exactly",
            Operator::AtMost => "at most",
            Operator::AtLeast => "at least",
        };
        write!(f, "{} {} stops", op, self.stops)
    }
}

/// Bounds applied to open-ended searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Extra stops explored beyond an `AtLeast` threshold.
    pub at_least_extra_stops: usize,
}

impl SearchLimits {
    pub const DEFAULT_AT_LEAST_EXTRA_STOPS: usize = 10;
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            at_least_extra_stops: Self::DEFAULT_AT_LEAST_EXTRA_STOPS,
        }
    }
}
