//! Thin HTTP client that returns owned, Send-safe responses.
//!
//! Requests are built without touching `reqwest` and only converted when
//! sent, so request construction stays cheap and testable. The response body
//! is read eagerly into memory; collection pages are small.

use std::collections::HashMap;
use std::time::Duration;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A simplified HTTP response that contains only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, Clone, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds `Authorization: Bearer <token>` when a token is present.
    pub fn bearer(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.header("Authorization", format!("Bearer {token}")),
            None => self,
        }
    }

    /// Appends query parameters, in iteration order.
    pub fn query<'a>(mut self, params: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        let json_bytes = serde_json::to_vec(value)?;
        self.body = Some(json_bytes);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    pub async fn send(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = match self.method {
            Method::Get => client.get(&self.url),
            Method::Post => client.post(&self.url),
            Method::Patch => client.patch(&self.url),
            Method::Delete => client.delete(&self.url),
        };

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        // Extract status and headers before consuming the response
        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), v.to_owned());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }

    pub fn patch(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Patch, url)
    }

    pub fn delete(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Delete, url)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            headers: HashMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_owned(), "application/json".to_owned());

        let response = Response {
            status: 200,
            headers,
            body: Vec::new(),
        };

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_response_json() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct TestData {
            message: String,
        }

        let data: TestData = response(200, br#"{"message": "hello"}"#)
            .json()
            .expect("valid json");
        assert_eq!(
            data,
            TestData {
                message: "hello".to_owned()
            }
        );
    }

    #[test]
    fn test_request_builder_bearer() {
        let builder = Client::get("https://example.com").bearer(Some("token"));
        assert_eq!(
            builder.headers.get("Authorization"),
            Some(&"Bearer token".to_owned())
        );

        let builder = Client::get("https://example.com").bearer(None);
        assert!(builder.headers.is_empty());
    }

    #[test]
    fn test_request_builder_query_keeps_order() {
        let mut params = BTreeMap::new();
        params.insert("page".to_owned(), "2".to_owned());
        params.insert("status".to_owned(), "Pending".to_owned());

        let builder = Client::get("https://example.com").query(&params);
        assert_eq!(
            builder.query,
            vec![
                ("page".to_owned(), "2".to_owned()),
                ("status".to_owned(), "Pending".to_owned()),
            ]
        );
    }

    #[test]
    fn test_request_builder_json() {
        #[derive(serde::Serialize)]
        struct TestBody {
            name: String,
        }

        let builder = Client::patch("https://example.com")
            .json(&TestBody {
                name: "test".to_owned(),
            })
            .expect("serializable");

        assert_eq!(builder.method, Method::Patch);
        assert_eq!(
            builder.headers.get("content-type"),
            Some(&"application/json".to_owned())
        );
        assert_eq!(builder.body.as_deref(), Some(br#"{"name":"test"}"#.as_slice()));
    }
}
