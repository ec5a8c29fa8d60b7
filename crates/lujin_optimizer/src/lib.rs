//! Waypoint ordering on top of a small single-vehicle routing model.
//!
//! The entry point is [`optimize::optimize_waypoints`]. It poses the input as a
//! routing problem with a fixed origin, solves it with the path-cheapest-arc
//! first-solution heuristic and walks the resulting assignment back into the
//! caller's waypoints. The heuristic is greedy: the returned route is a
//! reasonable approximation, never a guaranteed shortest route.

pub mod error;
pub mod json;
pub mod optimize;
pub mod problem;
pub mod solver;
pub mod utils;
