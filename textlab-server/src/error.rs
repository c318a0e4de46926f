use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use textlab_core::analysis::ErrorBody;
use textlab_core::{ErrorKind, TextLabError};

/// HTTP rendering of a [`TextLabError`].
///
/// Every failure is answered with a JSON `{ "error": "..." }` body.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub TextLabError);

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self.0.kind() {
			ErrorKind::MissingInput | ErrorKind::InvalidArgument | ErrorKind::InsufficientData => {
				StatusCode::BAD_REQUEST
			}
			ErrorKind::InputTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
			ErrorKind::ExternalCapabilityUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if status.is_server_error() {
			error!("request failed: {}", self.0);
		}
		HttpResponse::build(status).json(ErrorBody::from(&self.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_codes_follow_error_kind() {
		let cases = [
			(TextLabError::MissingInput("x".into()), StatusCode::BAD_REQUEST),
			(TextLabError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
			(TextLabError::EmptyTrainingData, StatusCode::BAD_REQUEST),
			(TextLabError::InsufficientTestData { found: 0 }, StatusCode::BAD_REQUEST),
			(
				TextLabError::InputTooLarge { field: "text".into(), limit: 1, actual: 2 },
				StatusCode::PAYLOAD_TOO_LARGE,
			),
			(TextLabError::CapabilityUnavailable("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
		];
		for (error, status) in cases {
			assert_eq!(ApiError(error).status_code(), status);
		}
	}
}
