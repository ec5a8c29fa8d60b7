use super::{index_manager::SolverIndex, routing_model::Cost};

/// Successor links produced by a solve, one per solver index.
#[derive(Debug, Clone)]
pub struct Assignment {
    next: Vec<Option<SolverIndex>>,
    objective: Cost,
}

impl Assignment {
    pub(crate) fn new(next: Vec<Option<SolverIndex>>, objective: Cost) -> Self {
        Self { next, objective }
    }

    /// `None` for the end index.
    pub fn next(&self, index: SolverIndex) -> Option<SolverIndex> {
        self.next.get(index.get()).copied().flatten()
    }

    /// Total arc cost of the route, including the arc into the end index.
    pub fn objective(&self) -> Cost {
        self.objective
    }
}
