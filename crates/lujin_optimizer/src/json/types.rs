use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::{
    error::ValidationError,
    optimize::Route,
    problem::waypoint::Waypoint,
};

/// A coordinate pair exactly as the caller wrote it, so the response echoes
/// `1` back as `1` rather than `1.0`.
pub type JsonCoordinates = [Number; 2];

/// Body of `POST /api/optimize-waypoints`.
///
/// `waypoints` is kept as raw JSON so that a missing or `null` list can be
/// treated as empty and malformed entries can be reported by position.
#[derive(Debug, Default, Deserialize)]
pub struct JsonOptimizeRequest {
    #[serde(default)]
    pub waypoints: Value,
}

#[derive(Debug, Serialize)]
pub struct JsonOptimizeResponse {
    pub waypoints: Vec<JsonCoordinates>,
}

/// Validated waypoints alongside the JSON coordinates they were parsed from.
#[derive(Debug, Clone, Default)]
pub struct JsonWaypoints {
    coordinates: Vec<JsonCoordinates>,
    waypoints: Vec<Waypoint>,
}

impl JsonWaypoints {
    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let entries = match value {
            Value::Null => return Ok(Self::default()),
            Value::Array(entries) => entries,
            _ => return Err(ValidationError::NotAnArray),
        };

        let mut parsed = JsonWaypoints {
            coordinates: Vec::with_capacity(entries.len()),
            waypoints: Vec::with_capacity(entries.len()),
        };

        for (position, entry) in entries.iter().enumerate() {
            let [x, y] = parse_coordinates(position, entry)?;

            let waypoint = match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Waypoint::new(x, y),
                _ => return Err(ValidationError::NonNumeric { position }),
            };

            if !waypoint.is_finite() {
                return Err(ValidationError::NonFinite { position });
            }
            if !waypoint.is_in_range() {
                return Err(ValidationError::OutOfRange { position });
            }

            parsed.coordinates.push([x.clone(), y.clone()]);
            parsed.waypoints.push(waypoint);
        }

        Ok(parsed)
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Builds the response from the caller's own coordinates, in route order.
    pub fn to_response(&self, route: &Route) -> JsonOptimizeResponse {
        JsonOptimizeResponse {
            waypoints: route
                .positions()
                .iter()
                .map(|&position| self.coordinates[position.get()].clone())
                .collect(),
        }
    }
}

fn parse_coordinates(position: usize, entry: &Value) -> Result<[&Number; 2], ValidationError> {
    let Value::Array(pair) = entry else {
        return Err(ValidationError::NotACoordinatePair { position });
    };

    match pair.as_slice() {
        [Value::Number(x), Value::Number(y)] => Ok([x, y]),
        [_, _] => Err(ValidationError::NonNumeric { position }),
        _ => Err(ValidationError::WrongArity {
            position,
            len: pair.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::optimize::{OptimizeParams, optimize_waypoints};

    fn parse(value: Value) -> Result<JsonWaypoints, ValidationError> {
        JsonWaypoints::parse(&value)
    }

    #[test]
    fn test_missing_waypoints_is_empty() {
        let request: JsonOptimizeRequest = serde_json::from_value(json!({})).unwrap();
        assert!(JsonWaypoints::parse(&request.waypoints).unwrap().is_empty());

        assert!(parse(json!(null)).unwrap().is_empty());
        assert!(parse(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_parse_integer_and_float_coordinates() {
        let parsed = parse(json!([[1, 2], [3.5, -4.25]])).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed.waypoints(),
            &[Waypoint::new(1.0, 2.0), Waypoint::new(3.5, -4.25)]
        );
    }

    #[test]
    fn test_not_an_array() {
        assert_eq!(
            parse(json!({"x": 1})).unwrap_err(),
            ValidationError::NotAnArray
        );
        assert_eq!(parse(json!("0,0")).unwrap_err(), ValidationError::NotAnArray);
    }

    #[test]
    fn test_entry_not_a_pair() {
        assert_eq!(
            parse(json!([[0, 0], {"x": 1, "y": 2}])).unwrap_err(),
            ValidationError::NotACoordinatePair { position: 1 }
        );
        assert_eq!(
            parse(json!([7])).unwrap_err(),
            ValidationError::NotACoordinatePair { position: 0 }
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            parse(json!([[0, 0], [1, 2, 3]])).unwrap_err(),
            ValidationError::WrongArity {
                position: 1,
                len: 3
            }
        );
        assert_eq!(
            parse(json!([[1]])).unwrap_err(),
            ValidationError::WrongArity {
                position: 0,
                len: 1
            }
        );
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(
            parse(json!([["a", "b"]])).unwrap_err(),
            ValidationError::NonNumeric { position: 0 }
        );
        assert_eq!(
            parse(json!([[0, 0], [1, null]])).unwrap_err(),
            ValidationError::NonNumeric { position: 1 }
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse(json!([[1e308, 0], [-1e308, 0]])).unwrap_err(),
            ValidationError::OutOfRange { position: 0 }
        );
        assert_eq!(
            parse(json!([[0, 0], [0, -1.7e308]])).unwrap_err(),
            ValidationError::OutOfRange { position: 1 }
        );
        assert_eq!(parse(json!([[4e307, -4e307]])).unwrap().len(), 1);
    }

    #[test]
    fn test_response_echoes_input_numbers() {
        let parsed = parse(json!([[0, 0], [10, 0], [2.5, 0], [6, 0]])).unwrap();
        let route = optimize_waypoints(parsed.waypoints(), &OptimizeParams::default()).unwrap();

        assert_eq!(
            serde_json::to_value(parsed.to_response(&route)).unwrap(),
            json!({"waypoints": [[0, 0], [2.5, 0], [6, 0], [10, 0]]})
        );
    }
}
