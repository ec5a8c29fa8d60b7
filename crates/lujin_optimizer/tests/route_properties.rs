//! Property tests for waypoint ordering.
//!
//! - every input position is visited exactly once, origin first
//! - output coordinates come from the input
//! - the distance metric is symmetric, non-negative and zero on the diagonal

use std::collections::HashSet;

use lujin_optimizer::{
    optimize::{OptimizeParams, optimize_waypoints},
    problem::{distance::distance, waypoint::Waypoint},
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    -1_000.0..1_000.0_f64
}

fn waypoint() -> impl Strategy<Value = Waypoint> {
    (coordinate(), coordinate()).prop_map(Waypoint::from)
}

/// Small grids produce plenty of duplicates and equidistant candidates.
fn grid_waypoint() -> impl Strategy<Value = Waypoint> {
    (0_i32..4, 0_i32..4).prop_map(|(x, y)| Waypoint::new(f64::from(x), f64::from(y)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_is_symmetric(a in waypoint(), b in waypoint()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_is_non_negative(a in waypoint(), b in waypoint()) {
        prop_assert!(distance(&a, &b) >= 0.0);
        prop_assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn route_visits_every_position_once(waypoints in prop::collection::vec(waypoint(), 0..40)) {
        let route = optimize_waypoints(&waypoints, &OptimizeParams::default()).unwrap();

        prop_assert_eq!(route.len(), waypoints.len());

        let unique: HashSet<usize> = route.positions().iter().map(|position| position.get()).collect();
        prop_assert_eq!(unique.len(), route.len());

        if !waypoints.is_empty() {
            prop_assert_eq!(route.positions()[0].get(), 0);
            prop_assert_eq!(route.waypoints()[0], waypoints[0]);
        }
    }

    #[test]
    fn route_waypoints_come_from_input(waypoints in prop::collection::vec(grid_waypoint(), 0..25)) {
        let route = optimize_waypoints(&waypoints, &OptimizeParams::default()).unwrap();

        prop_assert!(route.len() <= waypoints.len());
        for (position, waypoint) in route.positions().iter().zip(route.waypoints()) {
            prop_assert_eq!(waypoints[position.get()], *waypoint);
        }
    }

    #[test]
    fn each_step_goes_to_a_nearest_remaining_waypoint(
        waypoints in prop::collection::vec(waypoint(), 2..30)
    ) {
        let route = optimize_waypoints(&waypoints, &OptimizeParams::default()).unwrap();
        let positions: Vec<usize> = route.positions().iter().map(|position| position.get()).collect();

        for step in 1..positions.len() {
            let current = &waypoints[positions[step - 1]];
            let taken = distance(current, &waypoints[positions[step]]);
            for &remaining in &positions[step + 1..] {
                prop_assert!(taken <= distance(current, &waypoints[remaining]));
            }
        }
    }
}
