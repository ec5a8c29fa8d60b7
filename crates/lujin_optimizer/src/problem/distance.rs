use geo::{Distance, Euclidean};

use super::waypoint::Waypoint;

/// Straight-line distance between two waypoints. This is the arc cost of the
/// routing model: symmetric, non-negative and zero between equal points.
pub fn distance(from: &Waypoint, to: &Waypoint) -> f64 {
    Euclidean.distance(from.point(), to.point())
}

/// Length of the open path visiting `waypoints` in order.
pub fn path_distance(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}
