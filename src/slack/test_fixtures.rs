//! Shared test fixtures for the Slack layer and the relay.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "https://slack.test/api/";

pub fn test_base_url() -> url::Url {
    url::Url::parse(TEST_BASE_URL).unwrap()
}

/// Canned outcome for one Web API method.
enum Canned {
    Response(u16, String),
    Timeout,
    Connection,
}

/// Mock transport keyed by Web API method name (last URL path segment).
///
/// Records every request it sees. Methods without a canned response fail
/// with a connection error so unexpected calls are visible in assertions.
#[derive(Default)]
pub struct MockSlack {
    canned: Mutex<HashMap<String, Canned>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockSlack {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_json(self, method: &str, body: &str) -> Self {
        self.with_status(method, 200, body)
    }

    #[must_use]
    pub fn with_status(self, method: &str, status: u16, body: &str) -> Self {
        self.canned
            .lock()
            .unwrap()
            .insert(method.to_string(), Canned::Response(status, body.to_string()));
        self
    }

    #[must_use]
    pub fn with_timeout(self, method: &str) -> Self {
        self.canned
            .lock()
            .unwrap()
            .insert(method.to_string(), Canned::Timeout);
        self
    }

    #[must_use]
    pub fn with_connection_error(self, method: &str) -> Self {
        self.canned
            .lock()
            .unwrap()
            .insert(method.to_string(), Canned::Connection);
        self
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Web API method names in call order.
    pub fn called_methods(&self) -> Vec<String> {
        self.captured_requests()
            .iter()
            .map(|req| api_method(req).to_string())
            .collect()
    }

    /// The last request sent to `method`, if any.
    pub fn request_for(&self, method: &str) -> Option<HttpRequest> {
        self.captured_requests()
            .into_iter()
            .rev()
            .find(|req| api_method(req) == method)
    }
}

fn api_method(req: &HttpRequest) -> &str {
    req.url
        .path_segments()
        .and_then(Iterator::last)
        .unwrap_or_default()
}

impl HttpClient for MockSlack {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let method = api_method(&req).to_string();
        self.requests.lock().unwrap().push(req);

        match self.canned.lock().unwrap().get(&method) {
            Some(Canned::Response(status, body)) => Ok(HttpResponse::new(
                http::StatusCode::from_u16(*status).unwrap(),
                body.clone().into_bytes(),
            )),
            Some(Canned::Timeout) => Err(HttpError::Timeout),
            Some(Canned::Connection) => Err(HttpError::Connection(Box::new(
                std::io::Error::other("connection refused"),
            ))),
            None => Err(HttpError::Connection(Box::new(std::io::Error::other(
                format!("no canned response for {method}"),
            )))),
        }
    }
}

impl HttpClient for Arc<MockSlack> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

/// Builds a `users.list` body from `(id, display_name)` pairs.
pub fn users_list_json(members: &[(&str, &str)], next_cursor: &str) -> String {
    let members: Vec<_> = members
        .iter()
        .map(|(id, name)| serde_json::json!({ "id": id, "profile": { "display_name": name } }))
        .collect();
    serde_json::json!({
        "ok": true,
        "members": members,
        "response_metadata": { "next_cursor": next_cursor },
    })
    .to_string()
}

/// Decodes a captured form body into ordered pairs.
pub fn form_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    let body = req.body.as_deref().unwrap_or_default();
    url::form_urlencoded::parse(body).into_owned().collect()
}
