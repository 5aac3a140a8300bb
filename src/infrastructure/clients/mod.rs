//! Remote Service Clients
//!
//! reqwest implementations of the application gateways. One shared
//! `reqwest::Client` (connection pool) is built at startup and cloned into
//! each client.

pub mod auth_client;
pub mod desc_client;
pub mod mock_client;
pub mod notification_client;

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::RemoteServicesSettings;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

pub use auth_client::AuthClient;
pub use desc_client::DescClient;
pub use mock_client::MockClient;
pub use notification_client::NotificationClient;

/// Build the HTTP client shared by all remote clients
pub fn build_http_client(settings: &RemoteServicesSettings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .user_agent(concat!("checkdev-site/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Join a base URL and a path without doubling or dropping the slash
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Send a request and decode a JSON body.
///
/// Returns `Ok(None)` on 404 so callers can model absent records.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<Option<T>, AppError> {
    let start = Instant::now();
    let result = send(request).await;
    let outcome = match &result {
        Ok(Some(_)) => "ok",
        Ok(None) => "not_found",
        Err(_) => "error",
    };
    metrics::record_remote_call(service, outcome, start.elapsed().as_secs_f64());

    if let Err(e) = &result {
        tracing::warn!(service, error = %e, "Remote call failed");
    }
    result
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<Option<T>, AppError> {
    let response = request.send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let body = response.error_for_status()?.json::<T>().await?;
    Ok(Some(body))
}

/// Like [`fetch_json`] but a 404 is an error.
pub(crate) async fn fetch_required<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T, AppError> {
    fetch_json(service, request)
        .await?
        .ok_or_else(|| AppError::Upstream(format!("{} returned 404", service)))
}
