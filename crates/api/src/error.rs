use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

/// Every use case error ends up as one of these. The body is the plain
/// text message, which the SDK surfaces as `APIError::message`.
#[derive(Error, Debug, PartialEq)]
pub enum StudyDeskError {
    #[error("Something went wrong while handling the request")]
    InternalError,
    #[error("Rejected input: {0}")]
    BadClientData(String),
    #[error("Conflicting request: {0}")]
    Conflict(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for StudyDeskError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(self.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            StudyDeskError::BadClientData("interval".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StudyDeskError::NotFound("pattern".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StudyDeskError::InternalError.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_carries_the_reason() {
        let err = StudyDeskError::BadClientData("daysOfWeek must not be empty".into());
        assert_eq!(err.to_string(), "Rejected input: daysOfWeek must not be empty");
    }
}
