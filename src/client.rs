//! Lightstep API client
//!
//! Provides authenticated access to the Lightstep public API for managing
//! projects, alert destinations, conditions, dashboards, notebooks, snooze
//! rules, and role bindings.

use crate::error::{ApiError, Result};
use log::debug;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Host serving the `public` environment
const PUBLIC_API_HOST: &str = "https://api.lightstep.com";

/// Path prefix of the public API, appended after the host
const API_PATH_PREFIX: &str = "public/v0.2";

/// Environment variable that replaces the API host entirely when set
const BASE_URL_ENV_VAR: &str = "LIGHTSTEP_API_BASE_URL";

/// Media type for request and response bodies
const MEDIA_TYPE: &str = "application/vnd.api+json";

/// User agent for API requests
const USER_AGENT: &str = concat!("lightstep-client/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Lightstep public API.
///
/// Configuration is fixed at construction; the client holds no mutable
/// state and is safe to share across threads. Each call issues exactly one
/// outbound request — no retries, no caching.
pub struct ApiClient {
    /// HTTP client with configured timeout and user agent
    http_client: Client,
    /// API key sent as the bearer credential on every request
    api_key: String,
    /// Fully resolved base URL, including the org segment
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given organization and environment.
    ///
    /// The base URL is derived from the environment name (`public` maps to
    /// the production host, any other name to `api-{env}`); setting
    /// `LIGHTSTEP_API_BASE_URL` replaces the host entirely. No network call
    /// is made here.
    pub fn new(api_key: impl Into<String>, org: &str, env: &str) -> Result<Self> {
        let override_host = std::env::var(BASE_URL_ENV_VAR).ok();
        let base_url = resolve_base_url(org, env, override_host.as_deref());
        Self::with_base_url(api_key, base_url)
    }

    /// Create a client with a fully specified base URL, bypassing
    /// environment resolution. The org segment must already be included.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Get the resolved base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request against a resource path and decode the response.
    ///
    /// `path` is the suffix under the base URL, e.g.
    /// `projects/my-project/dashboards/dash-123`. `payload` is serialized
    /// as the JSON request body; pass `None` for GET and DELETE. The
    /// response body is decoded into `T` — typically an
    /// [`Envelope`](crate::types::Envelope) around the resource type.
    pub fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<T> {
        let (status, body) = self.execute(method, path, payload)?;
        decode_body(status, body)
    }

    /// GET a resource path and decode the response
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (status, body) = self.execute::<()>(Method::GET, path, None)?;
        decode_body(status, body)
    }

    /// POST a JSON body to a resource path and decode the response
    pub fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, payload: &B) -> Result<T> {
        let (status, body) = self.execute(Method::POST, path, Some(payload))?;
        decode_body(status, body)
    }

    /// PUT a JSON body to a resource path and decode the response
    pub fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, payload: &B) -> Result<T> {
        let (status, body) = self.execute(Method::PUT, path, Some(payload))?;
        decode_body(status, body)
    }

    /// PATCH a JSON body at a resource path and decode the response
    pub fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, payload: &B) -> Result<T> {
        let (status, body) = self.execute(Method::PATCH, path, Some(payload))?;
        decode_body(status, body)
    }

    /// DELETE a resource path.
    ///
    /// Any 2xx response is a success; the body (usually empty, the API
    /// answers 204) is not decoded.
    pub fn delete(&self, path: &str) -> Result<()> {
        self.execute::<()>(Method::DELETE, path, None)?;
        Ok(())
    }

    /// Send the request and read the full response body.
    ///
    /// Returns the status and body on any 2xx; classifies everything else
    /// as [`ApiError::Status`].
    fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<(StatusCode, String)> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);

        // Content-Type is set before .json() so the JSON:API media type
        // is not replaced by reqwest's default application/json.
        let mut request = self
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, format!("bearer {}", self.api_key))
            .header(CONTENT_TYPE, MEDIA_TYPE)
            .header(ACCEPT, MEDIA_TYPE);

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if status.is_success() {
            Ok((status, body))
        } else {
            debug!("{} returned {}: {}", url, status, body);
            Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                body,
            })
        }
    }
}

/// Decode a response body, wrapping failures with the status and raw body
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(|e| ApiError::Decode {
        status: status.as_u16(),
        message: e.to_string(),
        body,
    })
}

/// Resolve the base URL from the organization, environment name, and the
/// optional host override. Pure function, no environment access.
fn resolve_base_url(org: &str, env: &str, override_host: Option<&str>) -> String {
    let host = match override_host {
        Some(host) => host.trim_end_matches('/').to_string(),
        None if env == "public" => PUBLIC_API_HOST.to_string(),
        None => format!("https://api-{env}.lightstep.com"),
    };
    format!("{host}/{API_PATH_PREFIX}/{org}")
}
