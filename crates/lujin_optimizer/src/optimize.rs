use fixedbitset::FixedBitSet;
use tracing::{Level, debug, instrument};

use crate::{
    error::{OptimizeError, SolverError, ValidationError},
    problem::{
        distance::{distance, path_distance},
        waypoint::{Waypoint, WaypointIdx},
    },
    solver::{
        assignment::Assignment,
        index_manager::{IndexManager, NodeIdx},
        routing_model::RoutingModel,
        search_parameters::SearchParameters,
    },
    timer_debug,
};

const ORIGIN: NodeIdx = NodeIdx::new(0);

#[derive(Clone, Debug, Default)]
pub struct OptimizeParams {
    pub search: SearchParameters,
}

/// Input waypoints in visiting order.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    positions: Vec<WaypointIdx>,
    waypoints: Vec<Waypoint>,
    distance: f64,
}

impl Route {
    fn empty() -> Self {
        Route {
            positions: vec![],
            waypoints: vec![],
            distance: 0.0,
        }
    }

    fn from_positions(positions: Vec<WaypointIdx>, input: &[Waypoint]) -> Self {
        let waypoints: Vec<Waypoint> = positions.iter().map(|&position| input[position]).collect();
        let distance = path_distance(&waypoints);

        Route {
            positions,
            waypoints,
            distance,
        }
    }

    /// Positions of the visited waypoints in the caller's input.
    pub fn positions(&self) -> &[WaypointIdx] {
        &self.positions
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }

    /// Length of the open path, without a return to the origin.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// Reorders `waypoints` into a short route starting at the first one.
///
/// The route is built with the path-cheapest-arc heuristic (always travel to
/// the nearest unvisited waypoint, ties to the lowest input position). It is a
/// greedy approximation: the total distance is usually reasonable but is not
/// guaranteed to be minimal.
///
/// Waypoints are deduplicated by position, not by coordinates, so repeated
/// coordinates each appear once in the route.
#[instrument(skip_all, fields(waypoints = waypoints.len()), level = Level::DEBUG)]
pub fn optimize_waypoints(
    waypoints: &[Waypoint],
    params: &OptimizeParams,
) -> Result<Route, OptimizeError> {
    for (position, waypoint) in waypoints.iter().enumerate() {
        if !waypoint.is_finite() {
            return Err(ValidationError::NonFinite { position }.into());
        }
        if !waypoint.is_in_range() {
            return Err(ValidationError::OutOfRange { position }.into());
        }
    }

    match waypoints.len() {
        0 => return Ok(Route::empty()),
        1 => return Ok(Route::from_positions(vec![WaypointIdx::new(0)], waypoints)),
        _ => {}
    }

    let manager = IndexManager::new(waypoints.len(), ORIGIN, ORIGIN);
    let mut routing = RoutingModel::new(&manager);

    let transit_callback = routing.register_transit_callback(|from, to| {
        let from_node = manager.index_to_node(from);
        let to_node = manager.index_to_node(to);
        distance(&waypoints[from_node.get()], &waypoints[to_node.get()])
    });
    routing.set_arc_cost_evaluator(transit_callback)?;

    let solution = timer_debug!(
        "solved routing model",
        routing.solve_with_parameters(&params.search)
    )?;

    let positions = walk_assignment(&manager, &solution)?
        .into_iter()
        .map(|node| WaypointIdx::new(node.get()))
        .collect();

    let route = Route::from_positions(positions, waypoints);

    debug!(
        objective = solution.objective(),
        distance = route.distance(),
        "extracted route"
    );

    Ok(route)
}

/// Follows the successor links from the start index to the end index and
/// returns each node the first time it is reached. A distinct end node is
/// appended once at the end.
fn walk_assignment(
    manager: &IndexManager,
    assignment: &Assignment,
) -> Result<Vec<NodeIdx>, SolverError> {
    let start_node = manager.index_to_node(manager.start_index());

    let mut nodes = Vec::with_capacity(manager.num_nodes());
    let mut seen = FixedBitSet::with_capacity(manager.num_nodes());

    // A complete route reaches the end within `num_indices` links; more means
    // the successor links form a cycle.
    let mut index = manager.start_index();
    let mut steps = 0;
    while !manager.is_end(index) {
        if steps == manager.num_indices() {
            return Err(SolverError::IncompleteAssignment(index));
        }
        steps += 1;

        let node = manager.index_to_node(index);
        if !seen.put(node.get()) {
            nodes.push(node);
        }

        index = assignment
            .next(index)
            .ok_or(SolverError::IncompleteAssignment(index))?;
    }

    let last_node = manager.index_to_node(index);
    if last_node != start_node && !seen.contains(last_node.get()) {
        nodes.push(last_node);
    }

    Ok(nodes)
}
