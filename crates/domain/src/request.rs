use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// HTTP method of an intercepted request.
///
/// Only `GET` participates in caching; everything else is passed through
/// untouched by the fetch handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }

    /// Read-only retrieval method eligible for cache interception.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            "PATCH" => Ok(Method::Patch),
            other => Err(format!("Unsupported HTTP method: {other}")),
        }
    }
}

/// One intercepted outgoing request from a controlled page.
///
/// Transient: exists only for the duration of one fetch-interception cycle.
/// `Arc<str>` for the URL keeps the clone taken for the network leg cheap.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub method: Method,
    pub url: Arc<str>,
    pub headers: Vec<(String, String)>,
    pub body: Option<bytes::Bytes>,
}

impl FetchRequest {
    pub fn get(url: impl Into<Arc<str>>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn new(method: Method, url: impl Into<Arc<str>>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Cache key: method + URL. Headers do not participate in matching.
    pub fn cache_key(&self) -> String {
        format!("{} {}", self.method, self.url)
    }
}
