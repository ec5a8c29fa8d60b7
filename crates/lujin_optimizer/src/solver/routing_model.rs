use tracing::{Level, instrument};

use crate::{define_index_newtype, error::SolverError};

use super::{
    assignment::Assignment,
    construction::path_cheapest_arc::path_cheapest_arc,
    index_manager::{IndexManager, SolverIndex},
    search_parameters::{FirstSolutionStrategy, SearchParameters},
};

pub type Cost = f64;

define_index_newtype!(CallbackIdx);

pub(crate) type TransitCallback<'a> = dyn Fn(SolverIndex, SolverIndex) -> Cost + 'a;

/// A single-vehicle routing problem over the indices of an [`IndexManager`].
///
/// Arc costs come from a registered transit callback, which may borrow
/// whatever data it needs for as long as the model lives.
pub struct RoutingModel<'a> {
    manager: &'a IndexManager,
    transit_callbacks: Vec<Box<TransitCallback<'a>>>,
    arc_cost_evaluator: Option<CallbackIdx>,
}

impl<'a> RoutingModel<'a> {
    pub fn new(manager: &'a IndexManager) -> Self {
        RoutingModel {
            manager,
            transit_callbacks: Vec::new(),
            arc_cost_evaluator: None,
        }
    }

    pub fn register_transit_callback<F>(&mut self, callback: F) -> CallbackIdx
    where
        F: Fn(SolverIndex, SolverIndex) -> Cost + 'a,
    {
        self.transit_callbacks.push(Box::new(callback));
        CallbackIdx::new(self.transit_callbacks.len() - 1)
    }

    pub fn set_arc_cost_evaluator(&mut self, callback: CallbackIdx) -> Result<(), SolverError> {
        if callback.get() >= self.transit_callbacks.len() {
            return Err(SolverError::UnknownCallback(callback));
        }

        self.arc_cost_evaluator = Some(callback);
        Ok(())
    }

    pub fn start(&self) -> SolverIndex {
        self.manager.start_index()
    }

    pub fn end(&self) -> SolverIndex {
        self.manager.end_index()
    }

    pub fn is_end(&self, index: SolverIndex) -> bool {
        self.manager.is_end(index)
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn solve_with_parameters(
        &self,
        params: &SearchParameters,
    ) -> Result<Assignment, SolverError> {
        let evaluator = self
            .arc_cost_evaluator
            .map(|callback| self.transit_callbacks[callback.get()].as_ref())
            .ok_or(SolverError::MissingArcCostEvaluator)?;

        match params.first_solution_strategy {
            FirstSolutionStrategy::PathCheapestArc => {
                path_cheapest_arc(self.manager, evaluator, params)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::index_manager::NodeIdx;

    #[test]
    fn test_solve_without_evaluator() {
        let manager = IndexManager::new(3, NodeIdx::new(0), NodeIdx::new(0));
        let routing = RoutingModel::new(&manager);

        assert!(matches!(
            routing.solve_with_parameters(&SearchParameters::default()),
            Err(SolverError::MissingArcCostEvaluator)
        ));
    }

    #[test]
    fn test_unknown_callback() {
        let manager = IndexManager::new(3, NodeIdx::new(0), NodeIdx::new(0));
        let mut routing = RoutingModel::new(&manager);

        assert_eq!(
            routing.set_arc_cost_evaluator(CallbackIdx::new(0)),
            Err(SolverError::UnknownCallback(CallbackIdx::new(0)))
        );
    }

    #[test]
    fn test_last_evaluator_wins() {
        let manager = IndexManager::new(3, NodeIdx::new(0), NodeIdx::new(0));
        let mut routing = RoutingModel::new(&manager);

        let constant = routing.register_transit_callback(|_, _| 1.0);
        let by_index =
            routing.register_transit_callback(|from, to| from.get().abs_diff(to.get()) as Cost);
        assert_eq!(constant, CallbackIdx::new(0));
        assert_eq!(by_index, CallbackIdx::new(1));

        routing.set_arc_cost_evaluator(constant).unwrap();
        routing.set_arc_cost_evaluator(by_index).unwrap();

        let assignment = routing
            .solve_with_parameters(&SearchParameters::default())
            .unwrap();

        // 0 -> 1 -> 2 -> end(3)
        assert_eq!(assignment.objective(), 3.0);
        assert_eq!(assignment.next(routing.start()), Some(SolverIndex::new(1)));
        assert_eq!(assignment.next(routing.end()), None);
    }
}
