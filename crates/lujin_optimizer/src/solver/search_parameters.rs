use jiff::{SignedDuration, Timestamp};

/// How the routing model builds its first (and here, only) solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstSolutionStrategy {
    /// Starting at the route start, repeatedly extend the route with the
    /// unvisited node reached by the cheapest arc from the current endpoint.
    /// Ties go to the lowest index.
    #[default]
    PathCheapestArc,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Termination {
    Duration(SignedDuration),
    /// Maximum number of route extension steps.
    Iterations(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchParameters {
    pub first_solution_strategy: FirstSolutionStrategy,
    pub terminations: Vec<Termination>,
}

pub const DEFAULT_TIME_LIMIT: SignedDuration = SignedDuration::from_secs(30);

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            first_solution_strategy: FirstSolutionStrategy::PathCheapestArc,
            terminations: vec![Termination::Duration(DEFAULT_TIME_LIMIT)],
        }
    }
}

impl SearchParameters {
    pub fn with_time_limit(time_limit: SignedDuration) -> Self {
        Self {
            terminations: vec![Termination::Duration(time_limit)],
            ..Self::default()
        }
    }

    pub(crate) fn should_terminate(&self, iteration: usize, started_at: Timestamp) -> bool {
        self.terminations
            .iter()
            .any(|termination| match *termination {
                Termination::Iterations(max_iterations) => iteration >= max_iterations,
                Termination::Duration(max_duration) => {
                    Timestamp::now().duration_since(started_at) > max_duration
                }
            })
    }
}
