use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::error::{Error, Result};
use super::order::OrderService;
use super::response::Response;
use super::server::ServerService;
use crate::config::Config;
use crate::utils::{build_query_string, join_url};

/// A request ready to be executed against the webservice.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// Form fields; the Robot webservice takes urlencoded bodies
    pub form: Option<Vec<(String, String)>>,
}

/// The capabilities an endpoint service needs from its HTTP layer.
///
/// [`Client`] is the production implementation. Tests can plug in their own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Build a request for `path`, relative to the configured base URL.
    fn new_request(&self, method: Method, path: &str, form: Option<Vec<(String, String)>>) -> Result<ApiRequest>;

    /// Send the request and read the full body. Non-success statuses come
    /// back as [`Error::Api`]. If `cancel` fires first the call returns
    /// [`Error::Cancelled`].
    async fn execute(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<Response>;
}

/// HTTP client for the Robot webservice.
///
/// Cloning is cheap and clones share the connection pool, so one client can
/// serve any number of concurrent calls.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("hrobot/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn order(&self) -> OrderService<'_, Self> {
        OrderService::new(self)
    }

    pub fn server(&self) -> ServerService<'_, Self> {
        ServerService::new(self)
    }

    async fn send(&self, request: ApiRequest) -> Result<Response> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(ACCEPT, "application/json");
        if let Some(ref form) = request.form {
            builder = builder.form(form);
        }
        let resp = builder.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        Ok(Response { status, headers, body })
    }
}

#[async_trait]
impl Transport for Client {
    fn new_request(&self, method: Method, path: &str, form: Option<Vec<(String, String)>>) -> Result<ApiRequest> {
        let url = Url::parse(&join_url(&self.config.base_url, path))?;
        Ok(ApiRequest { method, url, form })
    }

    async fn execute(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<Response> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        tracing::debug!("Request:\n{}", curl_command(&request, &self.config.username));
        let url = request.url.clone();

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(%url, "Request cancelled");
                return Err(Error::Cancelled);
            }
            result = self.send(request) => result?,
        };

        tracing::debug!(status = %response.status, bytes = response.body.len(), "Response received");
        response.error_for_status()
    }
}

/// Render the request as an equivalent curl invocation, password redacted.
pub fn curl_command(request: &ApiRequest, username: &str) -> String {
    let mut parts = vec![
        "curl".to_string(),
        format!("-X {}", request.method),
        format!("'{}'", request.url),
    ];
    if !username.is_empty() {
        parts.push(format!("-u '{}:***'", username));
    }
    if let Some(ref form) = request.form {
        let body = build_query_string(form).replace('\'', "'\\''");
        parts.push(format!("-d '{}'", body));
    }
    parts.join(" ")
}
