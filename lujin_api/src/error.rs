use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lujin_optimizer::error::{OptimizeError, ValidationError};
use serde::Serialize;
use tracing::error;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InvalidJson(StatusCode, String),
    SolverInfeasible(String),
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'static str,
    message: &'a str,
}

impl ApiError {
    /// Hides `detail` from the caller unless the service runs in debug mode.
    pub fn internal(detail: impl std::fmt::Display, debug: bool) -> Self {
        let detail = detail.to_string();
        error!(%detail, "internal error while handling request");

        if debug {
            ApiError::InternalServerError(detail)
        } else {
            ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_owned())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(status, _) => *status,
            ApiError::SolverInfeasible(_) | ApiError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "invalid_waypoints",
            ApiError::InvalidJson(..) => "invalid_json",
            ApiError::SolverInfeasible(_) => "solver_infeasible",
            ApiError::InternalServerError(_) => "internal_error",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(message)
            | ApiError::InvalidJson(_, message)
            | ApiError::SolverInfeasible(message)
            | ApiError::InternalServerError(message) => message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson(rejection.status(), rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<OptimizeError> for ApiError {
    fn from(error: OptimizeError) -> Self {
        match error {
            OptimizeError::Validation(error) => error.into(),
            OptimizeError::Solver(_) => {
                error!(%error, "solver found no feasible route");
                ApiError::SolverInfeasible(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.message(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use lujin_optimizer::error::SolverError;

    use super::*;

    #[test]
    fn test_validation_error_is_bad_request() {
        let error = ApiError::from(OptimizeError::Validation(ValidationError::NonNumeric {
            position: 3,
        }));

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), "invalid_waypoints");
        assert_eq!(error.message(), "waypoint 3 has a non-numeric coordinate");
    }

    #[test]
    fn test_solver_error_is_server_error() {
        let error = ApiError::from(OptimizeError::Solver(SolverError::BudgetExhausted {
            visited: 1,
            total: 4,
        }));

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code(), "solver_infeasible");
        assert!(error.message().contains("budget exhausted"));
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let hidden = ApiError::internal("task panicked", false);
        let shown = ApiError::internal("task panicked", true);

        assert_eq!(hidden.message(), "internal server error");
        assert_eq!(shown.message(), "task panicked");
        assert_eq!(shown.code(), "internal_error");
    }
}
