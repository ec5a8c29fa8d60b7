use crate::define_index_newtype;

define_index_newtype!(WaypointIdx, Waypoint);

/// Largest accepted coordinate magnitude. Differences of two coordinates stay
/// below `f64::MAX / 2`, so every distance between waypoints is finite.
pub const MAX_COORDINATE: f64 = f64::MAX / 4.0;

/// A stop to visit, given as planar `(x, y)` coordinates.
///
/// Waypoints have no identity besides their position in the caller's input;
/// two waypoints at the same coordinates are still two stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    point: geo::Point,
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: geo::Point::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn point(&self) -> geo::Point {
        self.point
    }

    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    pub fn is_in_range(&self) -> bool {
        self.x().abs() <= MAX_COORDINATE && self.y().abs() <= MAX_COORDINATE
    }
}

impl From<(f64, f64)> for Waypoint {
    fn from((x, y): (f64, f64)) -> Self {
        Waypoint::new(x, y)
    }
}
