//! HTTP helpers for JSON APIs dispatched through the interceptor pipeline.
//! Feature clients build requests here and decode responses the same way, so
//! HTTP error handling stays in one place. The helpers never attach
//! credentials; the auth stage owns that concern.

pub mod config;
pub mod errors;
pub mod interceptors;

pub use config::ApiConfig;
pub use errors::AppError;

use crate::features::users::types::ApiError;
use interceptors::{AuthLayer, AuthService, LoggingLayer, LoggingService};
use reqwest::{
    Client, Method, Request, Response, Url,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tower::{BoxError, Service, ServiceBuilder, ServiceExt};
use tracing::debug;

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// The production pipeline: auth, then logging, then the network.
pub type Transport = AuthService<LoggingService<Client>>;

/// Builds the production request pipeline around a fresh `reqwest::Client`.
///
/// # Errors
///
/// Returns `AppError::Config` if the HTTP client cannot be constructed.
pub fn transport(config: &ApiConfig) -> Result<Transport, AppError> {
    let client = Client::builder()
        .user_agent(config.user_agent())
        .build()
        .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

    Ok(ServiceBuilder::new()
        .layer(AuthLayer::new())
        .layer(LoggingLayer::new())
        .service(client))
}

/// Builds a request with an optional JSON body.
///
/// # Errors
///
/// Returns `AppError::Serialization` if the body cannot be encoded.
pub fn json_request<B: Serialize + ?Sized>(
    method: Method,
    url: Url,
    body: Option<&B>,
) -> Result<Request, AppError> {
    let mut request = Request::new(method, url);

    if let Some(body) = body {
        let payload = serde_json::to_vec(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(payload.into());
    }

    Ok(request)
}

/// Sends `request` through `service` and decodes a JSON response.
///
/// # Errors
///
/// Returns `AppError::Network`/`AppError::Timeout` when the transport fails,
/// `AppError::Http` for non-success statuses and `AppError::Parse` for bodies
/// that do not decode into `T`.
pub async fn send_json<S, T>(service: S, request: Request) -> Result<T, AppError>
where
    S: Service<Request, Response = Response>,
    S::Error: Into<BoxError>,
    T: DeserializeOwned,
{
    let response = service
        .oneshot(request)
        .await
        .map_err(|err| map_transport_error(err.into()))?;

    handle_json_response(response).await
}

/// Maps transport failures into `AppError`, detecting timeouts.
fn map_transport_error(err: BoxError) -> AppError {
    let timed_out = err
        .downcast_ref::<reqwest::Error>()
        .is_some_and(reqwest::Error::is_timeout);

    if timed_out {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")));
    }

    let body = response.text().await.unwrap_or_default();
    let api_error = serde_json::from_str::<ApiError>(&body).ok();
    debug!(status = status.as_u16(), has_api_error = api_error.is_some(), "HTTP error response");

    let message = api_error
        .as_ref()
        .map_or_else(|| sanitize_body(&body), |api_error| api_error.message.clone());

    Err(AppError::Http {
        status: status.as_u16(),
        message,
        api_error,
    })
}

/// Trims and truncates error bodies for display.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
