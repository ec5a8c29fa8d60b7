pub mod distance;
pub mod waypoint;
