use tracing::{debug, warn};
use warp::{
    http::{Method, StatusCode},
    reply::Response,
};
use wapoints_scoring::{Conversion, Direction, ErrorKind, ScoringRequest, Venue};

use crate::{
    AppState,
    payload::{Payload, PayloadError},
    reply::{self, ErrorBody, PerformanceBody, PointsBody},
};

const NOT_FOUND_MESSAGE: &str = "Could not find performance for given points";

/// Routes one request to the conversion endpoint by method.
pub(crate) fn dispatch(state: &AppState, method: &Method, body: &[u8]) -> Response {
    match *method {
        Method::OPTIONS => reply::preflight(),
        Method::POST => convert(state, body),
        _ => {
            debug!(%method, "method not allowed");
            reply::json(
                &ErrorBody::new("Method not allowed"),
                StatusCode::METHOD_NOT_ALLOWED,
            )
        }
    }
}

fn convert(state: &AppState, body: &[u8]) -> Response {
    let payload = match Payload::parse(body) {
        Ok(payload) => payload,
        Err(error) => return payload_error(error),
    };

    debug!(
        direction = payload.direction.as_str(),
        event = %payload.event,
        gender = %payload.gender,
        indoor = payload.indoor,
        value = payload.value,
        "conversion request"
    );

    let request = ScoringRequest::new(
        payload.event.as_str(),
        payload.gender,
        Venue::from_indoor(payload.indoor),
        payload.direction,
    );

    match state.calculator.convert(&request, payload.value) {
        Ok(Conversion::Points(points)) => reply::json(
            &PointsBody {
                event: &payload.event,
                performance: payload.value,
                units: &payload.units,
                gender: payload.gender.code(),
                indoor: payload.indoor,
                points,
                direction: Direction::PerformanceToPoints.as_str(),
                table_version: &state.table_version,
            },
            StatusCode::OK,
        ),
        Ok(Conversion::Performance(solution)) => reply::json(
            &PerformanceBody {
                event: &payload.event,
                points: payload.value,
                performance: solution.performance,
                units: &payload.units,
                gender: payload.gender.code(),
                indoor: payload.indoor,
                direction: Direction::PointsToPerformance.as_str(),
                table_version: &state.table_version,
            },
            StatusCode::OK,
        ),
        Err(error) => {
            warn!(
                key = %request.key(),
                direction = payload.direction.as_str(),
                %error,
                "conversion failed"
            );
            let body = match error.kind() {
                ErrorKind::Input => ErrorBody::new("Invalid field").details(error.to_string()),
                ErrorKind::SearchExhausted => ErrorBody::new(NOT_FOUND_MESSAGE)
                    .details(format!("Bisection search failed: {error}")),
                ErrorKind::SearchAborted => ErrorBody::new(NOT_FOUND_MESSAGE)
                    .details(format!("Event not supported: {error}")),
                ErrorKind::Calculation => {
                    ErrorBody::new("Calculation error").details(error.to_string())
                }
            };
            reply::json(&body, StatusCode::BAD_REQUEST)
        }
    }
}

fn payload_error(error: PayloadError) -> Response {
    let body = match error {
        PayloadError::InvalidJson => ErrorBody::new("Invalid JSON"),
        PayloadError::Missing {
            direction,
            required,
        } => ErrorBody::new(format!(
            "Missing required fields for {}",
            direction.as_str()
        ))
        .required(required),
        PayloadError::InvalidField { field, reason } => {
            ErrorBody::new("Invalid field").details(format!("{field}: {reason}"))
        }
    };
    warn!(error = %body.error, "rejected request body");
    reply::json(&body, StatusCode::BAD_REQUEST)
}
