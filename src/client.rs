//! Postmark async client and request dispatcher.

use crate::{ApiError, Error, Result};
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

const BASE_URL: &str = "https://api.postmarkapp.com";
const USER_AGENT_VALUE: &str = concat!("postmark-client/", env!("CARGO_PKG_VERSION"));

const SERVER_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-postmark-server-token");
const ACCOUNT_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-postmark-account-token");

/// Which credential an endpoint requires.
///
/// Exactly one token header is attached per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenScope {
    /// Operations on the server the server token belongs to.
    Server,
    /// Account-wide operations, such as managing servers.
    Account,
}

/// Async client for the Postmark API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like a different base URL, proxies, timeouts or a custom user agent.
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    server_token: HeaderValue,
    account_token: HeaderValue,
    proxy: Option<String>,
    user_agent: HeaderValue,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the public Postmark API.
    ///
    /// Either token may be empty when the endpoints that need it are never
    /// called.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::Client;
    /// # fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::new("server-token", "account-token")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(server_token: impl Into<String>, account_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new()
            .server_token(server_token)
            .account_token(account_token)
            .build()
    }

    /// Root URL all request paths are relative to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Issue a GET request and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, scope: TokenScope) -> Result<T> {
        self.request(Method::GET, path, None::<&()>, scope).await
    }

    /// Issue a POST request with a JSON payload.
    pub(crate) async fn post<B, T>(&self, path: &str, payload: &B, scope: TokenScope) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(payload), scope).await
    }

    /// Issue a PUT request with a JSON payload.
    pub(crate) async fn put<B, T>(&self, path: &str, payload: &B, scope: TokenScope) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(payload), scope).await
    }

    /// Issue a PUT request without a body.
    pub(crate) async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: TokenScope,
    ) -> Result<T> {
        self.request(Method::PUT, path, None::<&()>, scope).await
    }

    /// Issue a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: TokenScope,
    ) -> Result<T> {
        self.request(Method::DELETE, path, None::<&()>, scope).await
    }

    /// Dispatch a call and decode the body into `T`.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
        scope: TokenScope,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(method, path, payload, scope).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Dispatch a call and return the raw JSON body.
    ///
    /// The HTTP status is not checked. A body that is an object with a
    /// non-zero `ErrorCode` is returned as [`Error::Api`] instead; any body
    /// that is not JSON at all is an [`Error::Json`].
    pub(crate) async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
        scope: TokenScope,
    ) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .headers(self.headers(scope));

        if let Some(payload) = payload {
            request = request.body(serde_json::to_vec(payload)?);
        }

        debug!(%method, %url, ?scope, "sending Postmark request");
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            warn!(%method, %url, %status, "Postmark returned a non-success status");
        }

        let body: Value = serde_json::from_slice(&bytes)?;
        if let Some(err) = ApiError::from_body(&body) {
            debug!(%url, code = err.error_code, message = %err.message, "Postmark rejected request");
            return Err(err.into());
        }

        Ok(bytes.to_vec())
    }

    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Build headers for API requests.
    fn headers(&self, scope: TokenScope) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, self.user_agent.clone());
        match scope {
            TokenScope::Server => headers.insert(SERVER_TOKEN_HEADER, self.server_token.clone()),
            TokenScope::Account => headers.insert(ACCOUNT_TOKEN_HEADER, self.account_token.clone()),
        };
        headers
    }
}

/// Builder for configuring a Postmark client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    server_token: String,
    account_token: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    base_url: String,
    http: Option<reqwest::Client>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Empty server and account tokens
    /// - No proxy and no timeout
    /// - `danger_accept_invalid_certs = false`
    /// - `postmark-client/<version>` user agent
    /// - `https://api.postmarkapp.com` base URL
    pub fn new() -> Self {
        Self {
            server_token: String::new(),
            account_token: String::new(),
            proxy: None,
            timeout: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            base_url: BASE_URL.to_string(),
            http: None,
        }
    }

    /// Token from the server's API Tokens tab, sent as `X-Postmark-Server-Token`.
    pub fn server_token(mut self, token: impl Into<String>) -> Self {
        self.server_token = token.into();
        self
    }

    /// Account-owner token, sent as `X-Postmark-Account-Token`.
    pub fn account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = token.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// Ignored when a custom transport is supplied with [`ClientBuilder::http_client`].
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Total deadline for each request. No deadline is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the API root.
    ///
    /// Useful for testing against a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a preconfigured `reqwest` client as the transport.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// No network traffic happens here.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::Client;
    /// # fn main() -> Result<(), postmark_client::Error> {
    /// let client = Client::builder()
    ///     .server_token("server-token")
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let server_token = sensitive_header(&self.server_token, "server token")?;
        let account_token = sensitive_header(&self.account_token, "account token")?;
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|_| Error::InvalidHeader("user agent"))?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder()
                    .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

                if let Some(proxy_url) = &self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
                }
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                builder.build()?
            }
        };

        Ok(Client {
            http,
            server_token,
            account_token,
            proxy: self.proxy,
            user_agent,
            base_url: self.base_url,
        })
    }
}

fn sensitive_header(token: &str, name: &'static str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(token).map_err(|_| Error::InvalidHeader(name))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::builder()
            .server_token("server-token")
            .account_token("account-token")
            .base_url("http://localhost:1234/")
            .build()
            .unwrap()
    }

    #[test]
    fn url_joins_base_and_path_with_single_slash() {
        let client = client();
        assert_eq!(client.url("bounces?count=1"), "http://localhost:1234/bounces?count=1");
        assert_eq!(client.url("/server"), "http://localhost:1234/server");
    }

    #[test]
    fn server_scope_attaches_only_server_token() {
        let headers = client().headers(TokenScope::Server);
        assert_eq!(headers[SERVER_TOKEN_HEADER], "server-token");
        assert!(!headers.contains_key(ACCOUNT_TOKEN_HEADER));
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn account_scope_attaches_only_account_token() {
        let headers = client().headers(TokenScope::Account);
        assert_eq!(headers[ACCOUNT_TOKEN_HEADER], "account-token");
        assert!(!headers.contains_key(SERVER_TOKEN_HEADER));
    }

    #[test]
    fn tokens_are_sensitive_and_hidden_from_debug() {
        let client = client();
        assert!(client.headers(TokenScope::Server)[SERVER_TOKEN_HEADER].is_sensitive());
        let debug = format!("{client:?}");
        assert!(!debug.contains("server-token"));
        assert!(!debug.contains("account-token"));
    }

    #[test]
    fn rejects_token_that_is_not_a_header_value() {
        let err = Client::new("bad\ntoken", "").unwrap_err();
        assert!(matches!(err, Error::InvalidHeader("server token")));
        assert_eq!(err.to_string(), "invalid server token: not a valid header value");
    }

    #[test]
    fn rejects_user_agent_that_is_not_a_header_value() {
        let err = Client::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHeader("user agent")));
        assert_eq!(err.to_string(), "invalid user agent: not a valid header value");
    }

    #[test]
    fn defaults_to_public_api() {
        let client = Client::new("a", "b").unwrap();
        assert_eq!(client.base_url(), "https://api.postmarkapp.com");
        assert_eq!(client.proxy(), None);
    }
}
