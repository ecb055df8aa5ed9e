use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid trip duration: {0} days (must be between 1 and 30)")]
    InvalidDuration(i64),

    #[error("{0}")]
    Validation(String),

    /// Raised by the pricing calculator when duration × travelers is zero.
    #[error("Daily budget is undefined for a trip with zero days or zero travelers")]
    DivisionUndefined,

    #[error("Invalid itinerary id: {0}")]
    InvalidId(String),

    #[error("Itinerary not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl PlannerError {
    /// Everything the caller can fix by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlannerError::MissingFields(_)
                | PlannerError::InvalidDuration(_)
                | PlannerError::Validation(_)
                | PlannerError::DivisionUndefined
        )
    }
}

impl From<mongodb::error::Error> for PlannerError {
    fn from(err: mongodb::error::Error) -> Self {
        PlannerError::Storage(err.to_string())
    }
}

impl ResponseError for PlannerError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::InvalidId(_) => StatusCode::BAD_REQUEST,
            PlannerError::NotFound => StatusCode::NOT_FOUND,
            PlannerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let PlannerError::Storage(msg) = self {
            log::error!("Storage failure: {}", msg);
            return HttpResponse::build(self.status_code())
                .json(json!({ "error": "Failed to access itinerary storage" }));
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_family() {
        assert!(PlannerError::InvalidDuration(0).is_validation());
        assert!(PlannerError::MissingFields(vec!["destination"]).is_validation());
        assert!(PlannerError::DivisionUndefined.is_validation());
        assert!(!PlannerError::NotFound.is_validation());
        assert!(!PlannerError::Storage("down".to_string()).is_validation());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PlannerError::InvalidDuration(45).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PlannerError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(PlannerError::InvalidId("x".to_string()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            PlannerError::Storage("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_fields_message() {
        let err = PlannerError::MissingFields(vec!["destination", "startDate"]);
        assert_eq!(err.to_string(), "Missing required fields: destination, startDate");
    }
}
