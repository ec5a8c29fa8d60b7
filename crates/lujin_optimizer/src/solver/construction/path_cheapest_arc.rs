use fixedbitset::FixedBitSet;
use jiff::Timestamp;
use tracing::debug;

use crate::{
    error::SolverError,
    solver::{
        assignment::Assignment,
        index_manager::{IndexManager, SolverIndex},
        routing_model::{Cost, TransitCallback},
        search_parameters::SearchParameters,
    },
};

/// Greedy route construction: from the start index, always move to the
/// unvisited index with the cheapest arc from the current endpoint, then close
/// the route at the end index.
///
/// Candidates are scanned in index order and only a strictly cheaper arc
/// replaces the current best, so equal costs resolve to the lowest index.
/// Running out of budget before every index is routed is an error; no partial
/// route is ever returned.
pub(crate) fn path_cheapest_arc(
    manager: &IndexManager,
    arc_cost: &TransitCallback<'_>,
    params: &SearchParameters,
) -> Result<Assignment, SolverError> {
    let started_at = Timestamp::now();

    let num_indices = manager.num_indices();
    let start = manager.start_index();
    let end = manager.end_index();

    let mut next: Vec<Option<SolverIndex>> = vec![None; num_indices];
    let mut visited = FixedBitSet::with_capacity(num_indices);
    visited.insert(start.get());
    visited.insert(end.get());

    let evaluate = |from: SolverIndex, to: SolverIndex| {
        let cost = arc_cost(from, to);
        if cost.is_finite() {
            Ok(cost)
        } else {
            Err(SolverError::InvalidArcCost { from, to })
        }
    };

    let total = num_indices - 2;
    let mut current = start;
    let mut objective: Cost = 0.0;

    for iteration in 0..total {
        if params.should_terminate(iteration, started_at) {
            return Err(SolverError::BudgetExhausted {
                visited: iteration,
                total,
            });
        }

        let mut best: Option<(SolverIndex, Cost)> = None;
        for candidate in visited.zeroes().map(SolverIndex::new) {
            let cost = evaluate(current, candidate)?;
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((candidate, cost));
            }
        }

        let Some((chosen, cost)) = best else {
            break;
        };

        next[current.get()] = Some(chosen);
        visited.insert(chosen.get());
        objective += cost;
        current = chosen;
    }

    objective += evaluate(current, end)?;
    next[current.get()] = Some(end);

    debug!(objective, indices = num_indices, "path cheapest arc finished");

    Ok(Assignment::new(next, objective))
}
