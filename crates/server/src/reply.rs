use serde::Serialize;
use serde_json::Value;
use warp::{
    Reply,
    http::{
        HeaderValue, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
    },
    reply::Response,
};

/// Body of a successful performance-to-points conversion.
#[derive(Debug, Serialize)]
pub(crate) struct PointsBody<'a> {
    pub event: &'a str,
    pub performance: f64,
    pub units: &'a Value,
    pub gender: &'static str,
    pub indoor: bool,
    pub points: Option<f64>,
    pub direction: &'static str,
    pub table_version: &'a str,
}

/// Body of a successful points-to-performance conversion.
#[derive(Debug, Serialize)]
pub(crate) struct PerformanceBody<'a> {
    pub event: &'a str,
    pub points: f64,
    pub performance: f64,
    pub units: &'a Value,
    pub gender: &'static str,
    pub indoor: bool,
    pub direction: &'static str,
    pub table_version: &'a str,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<&'static [&'static str]>,
}

impl ErrorBody {
    pub(crate) fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            required: None,
        }
    }

    #[must_use]
    pub(crate) fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub(crate) fn required(mut self, required: &'static [&'static str]) -> Self {
        self.required = Some(required);
        self
    }
}

/// Serializes `body` with `status` and the cross-origin headers.
pub(crate) fn json<T: Serialize>(body: &T, status: StatusCode) -> Response {
    with_cors(warp::reply::with_status(warp::reply::json(body), status).into_response())
}

/// An empty `200 OK` for pre-flight requests.
pub(crate) fn preflight() -> Response {
    let mut response = warp::reply().into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    with_cors(response)
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
