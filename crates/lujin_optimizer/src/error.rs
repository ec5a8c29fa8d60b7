use thiserror::Error;

use crate::solver::{index_manager::SolverIndex, routing_model::CallbackIdx};

/// The caller's waypoint list could not be turned into a problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`waypoints` must be an array of [x, y] pairs")]
    NotAnArray,

    #[error("waypoint {position} must be an [x, y] array")]
    NotACoordinatePair { position: usize },

    #[error("waypoint {position} must have exactly 2 coordinates, found {len}")]
    WrongArity { position: usize, len: usize },

    #[error("waypoint {position} has a non-numeric coordinate")]
    NonNumeric { position: usize },

    #[error("waypoint {position} has a non-finite coordinate")]
    NonFinite { position: usize },

    #[error("waypoint {position} has a coordinate outside the supported range")]
    OutOfRange { position: usize },
}

/// The routing model could not produce a complete assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("no arc cost evaluator was set on the routing model")]
    MissingArcCostEvaluator,

    #[error("transit callback {0} is not registered")]
    UnknownCallback(CallbackIdx),

    #[error("arc cost from index {from} to index {to} is not a finite number")]
    InvalidArcCost { from: SolverIndex, to: SolverIndex },

    #[error("search budget exhausted after routing {visited} of {total} nodes")]
    BudgetExhausted { visited: usize, total: usize },

    #[error("assignment has no successor for index {0}")]
    IncompleteAssignment(SolverIndex),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no feasible route: {0}")]
    Solver(#[from] SolverError),
}
