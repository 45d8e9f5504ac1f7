//! Generic HTTP vocabulary consumed by generated OpenAPI server handlers.
//!
//! # Responsibilities
//! - Framework-agnostic request/response representations
//! - Header fields as an ordered list (duplicates allowed)
//! - Request metadata: captured path parameters and ordered query items
//!
//! # Design Decisions
//! - Bodies travel separately from `Request`/`Response` so the message
//!   heads stay `Clone + PartialEq` while bodies remain single-use
//! - Duplicate path-parameter capture names resolve as first occurrence
//!   wins; this is a documented policy, not construction-order accident

use std::collections::HashMap;
use std::fmt;

use axum::http::Method as HttpMethod;

use crate::error::TransportError;

pub mod body;

/// HTTP method as known to the generic vocabulary.
///
/// The enumeration is closed over the methods OpenAPI operations can
/// declare; `Other` is an escape hatch for nonstandard verbs travelling
/// toward the host, never produced by inbound conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
    /// Nonstandard verb, passed through verbatim toward the host.
    Other(String),
}

impl Method {
    /// Uppercase wire name of the method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::Patch => "PATCH",
            Method::Trace => "TRACE",
            Method::Other(name) => name,
        }
    }

    /// Convert to the host method type.
    ///
    /// Standard verbs map onto the host constants; `Other` is passed
    /// through verbatim and only fails if the name is not a valid token.
    pub fn to_http(&self) -> Result<HttpMethod, TransportError> {
        HttpMethod::from_bytes(self.as_str().as_bytes())
            .map_err(|_| TransportError::UnroutableMethod(self.as_str().to_owned()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&HttpMethod> for Method {
    type Error = TransportError;

    /// Closed mapping from the host method. A method absent from the
    /// generic enumeration fails conversion: no handler can exist for it,
    /// so the caller surfaces the failure as "not found".
    fn try_from(method: &HttpMethod) -> Result<Self, Self::Error> {
        match method.as_str() {
            "GET" => Ok(Method::Get),
            "PUT" => Ok(Method::Put),
            "POST" => Ok(Method::Post),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            "HEAD" => Ok(Method::Head),
            "PATCH" => Ok(Method::Patch),
            "TRACE" => Ok(Method::Trace),
            other => Err(TransportError::UnsupportedMethod(other.to_owned())),
        }
    }
}

/// One header field. Lists of these preserve order and duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Generic inbound request head. The body travels separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Percent-encoded request path, as received.
    pub path: String,
    /// Raw query string without the leading `?`, if any.
    pub query: Option<String>,
    pub header_fields: Vec<HeaderField>,
}

impl Request {
    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }
}

/// Generic outbound response head. The body travels separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code; the host supplies the reason phrase.
    pub status: u16,
    pub header_fields: Vec<HeaderField>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            header_fields: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header_fields.push(HeaderField::new(name, value));
        self
    }
}

/// One query item. Names may repeat; order is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub name: String,
    pub value: String,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Path and query parameters extracted from a matched request, passed to
/// the handler alongside the converted request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerRequestMetadata {
    /// Captured path parameters. On duplicate capture names the first
    /// occurrence wins.
    pub path_parameters: HashMap<String, String>,
    /// Decoded query items in the order they appeared in the query string.
    pub query_parameters: Vec<QueryItem>,
}

impl ServerRequestMetadata {
    /// Build metadata from path captures in match order.
    pub fn from_captures<'a, I>(captures: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut path_parameters = HashMap::new();
        for (name, value) in captures {
            // first occurrence wins
            path_parameters
                .entry(name.to_owned())
                .or_insert_with(|| value.to_owned());
        }
        Self {
            path_parameters,
            query_parameters: Vec::new(),
        }
    }

    pub fn with_query_items(mut self, items: Vec<QueryItem>) -> Self {
        self.query_parameters = items;
        self
    }
}
