//! Transport-level request/response types and the client trait.

use super::HttpError;

/// An outbound call to the Slack Web API.
///
/// Plain value type: [`SlackClient`](super::SlackClient) builds it, any
/// [`HttpClient`] sends it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET or POST for the Web API)
    pub method: http::Method,
    /// Fully resolved API endpoint
    pub url: url::Url,
    /// Headers to send, including `Authorization`
    pub headers: http::HeaderMap,
    /// Form-encoded body, present only for POST calls
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header, replacing any previous value for the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A response from the Slack Web API with its body fully buffered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code is in `[200, 300)`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends [`HttpRequest`]s and returns fully buffered [`HttpResponse`]s.
///
/// This is the seam between the API client and the network. Production code
/// uses [`ReqwestClient`](super::ReqwestClient); tests substitute recording
/// mocks. Implementations must read the whole body before returning so that
/// the underlying connection is released.
///
/// Any status code is a successful *transport* outcome here: interpreting
/// non-2xx responses is the API client's job.
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - The connection fails or the body cannot be read ([`HttpError::Connection`])
    /// - The request times out in the transport ([`HttpError::Timeout`])
    /// - The URL cannot be used ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
