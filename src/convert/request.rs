//! Inbound conversion: host request → generic request + metadata.
//!
//! # Responsibilities
//! - Map the host method onto the generic enumeration (closed mapping)
//! - Copy header fields pairwise, preserving order and duplicates
//! - Wrap the host body as a single-use chunk sequence with a length
//!   annotation derived from `content-length`
//! - Extract path captures and ordered query items into request metadata
//!
//! # Design Decisions
//! - A method the generic vocabulary cannot express fails the conversion;
//!   the caller surfaces it as "not found" since no handler can apply
//! - Malformed or missing `content-length` degrades to unknown length
//!   rather than failing the request

use axum::body::Body;
use axum::extract::RawPathParams;
use axum::http::{header, HeaderMap, Request as HostRequest};

use crate::convert::stream::HostBodyStream;
use crate::error::TransportError;
use crate::types::body::{BodyLength, HttpBody};
use crate::types::{HeaderField, Method, QueryItem, Request, ServerRequestMetadata};

/// Convert a matched host request into the generic representation.
///
/// The returned body wraps the host's chunk stream lazily; nothing is read
/// until the handler pulls from it.
pub fn into_openapi_request(
    request: HostRequest<Body>,
) -> Result<(Request, Option<HttpBody>), TransportError> {
    let (parts, host_body) = request.into_parts();

    let method = Method::try_from(&parts.method)?;
    let path = parts.uri.path().to_owned();
    let query = parts.uri.query().map(str::to_owned);

    let header_fields = parts
        .headers
        .iter()
        .map(|(name, value)| {
            // header values are not required to be UTF-8; copy lossily
            // rather than failing the request for one odd value
            HeaderField::new(name.as_str(), String::from_utf8_lossy(value.as_bytes()))
        })
        .collect();

    let length = content_length(&parts.headers);
    let body = HttpBody::from_stream(HostBodyStream::new(host_body), length);

    Ok((
        Request {
            method,
            path,
            query,
            header_fields,
        },
        Some(body),
    ))
}

/// Build request metadata from the host's raw path captures and the raw
/// query string.
pub fn request_metadata(params: &RawPathParams, query: Option<&str>) -> ServerRequestMetadata {
    let metadata = ServerRequestMetadata::from_captures(params);
    match query {
        Some(query) => metadata.with_query_items(query_items(query)),
        None => metadata,
    }
}

/// Decode a raw query string into ordered items, duplicates preserved.
pub fn query_items(query: &str) -> Vec<QueryItem> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(name, value)| QueryItem::new(name, value))
        .collect()
}

/// Length annotation for the inbound body. Name matching is
/// case-insensitive by construction of the host header map; a value that
/// does not parse as a non-negative integer is treated as absent.
fn content_length(headers: &HeaderMap) -> BodyLength {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(BodyLength::Known)
        .unwrap_or(BodyLength::Unknown)
}
