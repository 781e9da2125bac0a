//! ELIS HTTP client: request layer, authentication and session lifecycle

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::config::api;
use crate::elis::credentials::{CredentialKind, CredentialResolver};
use crate::elis::query::{encode_query, Query};
use crate::elis::Object;
use crate::error::{ElisError, Result};

/// Static client identification sent with every request.
///
/// Built once at startup and handed to the client.
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    user_agent: String,
}

impl ClientIdentity {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    /// `elisctl/<version> (<os>-<arch>)`
    pub fn from_build() -> Self {
        Self::new(format!(
            "elisctl/{} ({}-{})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        ))
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers
    }
}

/// How requests are authenticated; fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Log in once, then send `Authorization: Token <key>`
    Token,
    /// Send username and password with every request
    Basic,
}

/// Session options
#[derive(Debug, Clone, Copy)]
pub struct ClientOptions {
    pub auth_mode: AuthMode,
    /// Append `/v1` to the configured URL
    pub use_api_version: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            auth_mode: AuthMode::Token,
            use_api_version: true,
        }
    }
}

/// Status code a successful call of the given method answers with
pub fn default_expected_status(method: &Method) -> StatusCode {
    if method == Method::POST {
        StatusCode::CREATED
    } else if method == Method::DELETE {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::OK
    }
}

/// A single API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    /// Path relative to the API root, or an absolute URL
    url: String,
    query: Query,
    body: Option<Value>,
    headers: HeaderMap,
    expected_status: StatusCode,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        let expected_status = default_expected_status(&method);
        Self {
            method,
            url: url.into(),
            query: Query::new(),
            body: None,
            headers: HeaderMap::new(),
            expected_status,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, url).json(body)
    }

    pub fn patch(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PATCH, url).json(body)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Caller header; overrides both identification and authentication headers
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn expect(mut self, status: StatusCode) -> Self {
        self.expected_status = status;
        self
    }
}

/// ELIS API session
///
/// Credentials are resolved lazily, the token is obtained on the first
/// authenticated request and released by [`ElisClient::logout`].
pub struct ElisClient {
    client: Client,
    identity: ClientIdentity,
    credentials: Box<dyn CredentialResolver>,
    options: ClientOptions,
    url: OnceLock<String>,
    username: OnceLock<String>,
    password: OnceLock<String>,
    token: OnceCell<String>,
    logged_out: AtomicBool,
}

impl ElisClient {
    pub fn new(
        identity: ClientIdentity,
        credentials: impl CredentialResolver + 'static,
        options: ClientOptions,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            identity,
            credentials: Box::new(credentials),
            options,
            url: OnceLock::new(),
            username: OnceLock::new(),
            password: OnceLock::new(),
            token: OnceCell::new(),
            logged_out: AtomicBool::new(false),
        }
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.options.auth_mode
    }

    fn cached<'a>(&self, cell: &'a OnceLock<String>, kind: CredentialKind) -> Result<&'a str> {
        if let Some(value) = cell.get() {
            return Ok(value);
        }
        let value = self.credentials.resolve(kind)?;
        Ok(cell.get_or_init(|| value))
    }

    /// API root, including the version suffix when enabled
    pub fn url(&self) -> Result<&str> {
        if let Some(url) = self.url.get() {
            return Ok(url);
        }
        let raw = self.credentials.resolve(CredentialKind::Url)?;
        let suffix = if self.options.use_api_version {
            api::VERSION_SUFFIX
        } else {
            ""
        };
        let url = format!("{}{}", raw.trim_end_matches('/'), suffix);
        Ok(self.url.get_or_init(|| url))
    }

    fn username(&self) -> Result<&str> {
        self.cached(&self.username, CredentialKind::Username)
    }

    fn password(&self) -> Result<&str> {
        self.cached(&self.password, CredentialKind::Password)
    }

    /// Turn an API path into an absolute URL; absolute URLs pass through
    pub fn absolute_url(&self, path_or_url: &str) -> Result<String> {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            return Ok(path_or_url.to_string());
        }
        Ok(format!(
            "{}/{}",
            self.url()?,
            path_or_url.trim_start_matches('/')
        ))
    }

    /// Issue a request, failing unless the response has the expected status
    pub async fn request(&self, request: ApiRequest) -> Result<Response> {
        if self.logged_out.load(Ordering::SeqCst) {
            return Err(ElisError::SessionClosed);
        }

        let raw_url = self.absolute_url(&request.url)?;
        let mut url = Url::parse(&raw_url)
            .map_err(|e| ElisError::Config(format!("Invalid URL '{}': {}", raw_url, e)))?;
        let pairs = encode_query(&request.query);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let mut headers = self.identity.headers();
        headers.extend(self.authentication_headers().await?);
        headers.extend(request.headers);

        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        if response.status() != request.expected_status {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!(
                "{} {} answered {} (expected {})",
                request.method, url, status, request.expected_status
            );
            return Err(ElisError::InvalidResponse {
                url: url.to_string(),
                body,
            });
        }
        Ok(response)
    }

    pub async fn get(&self, path: &str, query: Query) -> Result<Response> {
        self.request(ApiRequest::get(path).query(query)).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Response> {
        self.request(ApiRequest::post(path, body)).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<Response> {
        self.request(ApiRequest::patch(path, body)).await
    }

    pub async fn delete_url(&self, url: &str) -> Result<Response> {
        self.request(ApiRequest::delete(url)).await
    }

    /// GET a path and decode it as a JSON object
    pub async fn get_object(&self, path: &str) -> Result<Object> {
        let response = self.get(path, Query::new()).await?;
        into_object(response).await
    }

    /// Authentication headers for the session's auth mode
    pub async fn authentication_headers(&self) -> Result<HeaderMap> {
        let value = match self.options.auth_mode {
            AuthMode::Token => format!("Token {}", self.ensure_token().await?),
            AuthMode::Basic => {
                let pair = format!("{}:{}", self.username()?, self.password()?);
                format!("Basic {}", STANDARD.encode(pair))
            }
        };
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&value)
            .map_err(|e| ElisError::Config(format!("Invalid authorization header: {}", e)))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Cached token, logging in on first use
    pub async fn ensure_token(&self) -> Result<&str> {
        self.token
            .get_or_try_init(|| self.login())
            .await
            .map(String::as_str)
    }

    /// Exchange username and password for a token.
    ///
    /// Bypasses [`ElisClient::request`], which itself needs the token.
    async fn login(&self) -> Result<String> {
        let url = self.absolute_url(api::LOGIN)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.identity.headers())
            .json(&json!({
                "username": self.username()?,
                "password": self.password()?,
            }))
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ElisError::InvalidCredentials);
        }
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ElisError::InvalidResponse { url, body });
        }

        let body = get_json(response).await?;
        match body.get("key").and_then(Value::as_str) {
            Some(key) => {
                debug!("Logged in to {}", url);
                Ok(key.to_string())
            }
            None => Err(ElisError::InvalidResponse {
                url,
                body: body.to_string(),
            }),
        }
    }

    /// Release the session token.
    ///
    /// Only calls the API when a token was actually obtained. Call once, at teardown.
    pub async fn logout(&self) -> Result<()> {
        let result = if self.options.auth_mode == AuthMode::Token && self.token.initialized() {
            self.request(ApiRequest::post(api::LOGOUT, json!({})).expect(StatusCode::OK))
                .await
                .map(|_| ())
        } else {
            Ok(())
        };
        self.logged_out.store(true, Ordering::SeqCst);
        result
    }

    /// Run `work` and log out afterwards, whatever its outcome.
    ///
    /// An error from `work` takes precedence over a logout failure.
    pub async fn in_session<T, E, F>(&self, work: F) -> std::result::Result<T, E>
    where
        F: Future<Output = std::result::Result<T, E>>,
        E: From<ElisError>,
    {
        let outcome = work.await;
        let teardown = self.logout().await;
        match (outcome, teardown) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e.into()),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(logout_err)) => {
                warn!("Logout failed after error: {}", logout_err);
                Err(e)
            }
        }
    }
}

/// Decode a response body as JSON; undecodable bodies are an invalid response
pub async fn get_json(response: Response) -> Result<Value> {
    let url = response.url().to_string();
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|_| ElisError::InvalidResponse { url, body: text })
}

/// Decode a response body as text
pub async fn get_text(response: Response) -> Result<String> {
    let url = response.url().to_string();
    response.text().await.map_err(|e| ElisError::InvalidResponse {
        url,
        body: e.to_string(),
    })
}

/// Decode a response body as a JSON object
pub async fn into_object(response: Response) -> Result<Object> {
    let url = response.url().to_string();
    match get_json(response).await? {
        Value::Object(object) => Ok(object),
        other => Err(ElisError::InvalidResponse {
            url,
            body: other.to_string(),
        }),
    }
}
