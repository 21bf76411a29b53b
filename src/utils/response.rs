use axum::{
    extract::Json,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// The `{ success, data | message | error }` body every JSON response uses.
///
/// Only the constructors below build it, so a successful envelope never
/// carries `error` and a failed one never carries `data`.
#[derive(Serialize, Debug)]
pub struct Envelope<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

pub fn data<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(Envelope::data(data))).into_response()
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(Envelope::message(message))).into_response()
}

pub fn error(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(Envelope::error(error))).into_response()
}

pub async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    tracing::error!("Request handler panicked: {}", details);

    error(StatusCode::INTERNAL_SERVER_ERROR, details)
}
