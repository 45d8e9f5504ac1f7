//! Outbound conversion: generic response → host response.
//!
//! # Responsibilities
//! - Numeric status passthrough; the host supplies the reason phrase
//! - Copy header fields pairwise, appending duplicates in order
//! - Pick the body representation: empty, exact-length, or chunked
//!
//! # Design Decisions
//! - A known body length is propagated as an exact `content-length` so the
//!   host writes the stream to completion instead of chunking it
//! - A header pair the host types reject is dropped, never fatal

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Response as HostResponse, StatusCode};

use crate::convert::stream::ChunkToHostStream;
use crate::error::TransportError;
use crate::types::body::{BodyLength, HttpBody};
use crate::types::Response;

/// Convert a generic response into the host representation.
pub fn into_host_response(
    response: Response,
    body: Option<HttpBody>,
) -> Result<HostResponse<Body>, TransportError> {
    let status = StatusCode::from_u16(response.status)
        .map_err(|_| TransportError::InvalidStatus(response.status))?;

    let mut headers = HeaderMap::with_capacity(response.header_fields.len());
    for field in &response.header_fields {
        let name = match HeaderName::from_bytes(field.name.as_bytes()) {
            Ok(name) => name,
            Err(_) => {
                tracing::debug!(name = %field.name, "dropping response header with invalid name");
                continue;
            }
        };
        let value = match HeaderValue::from_str(&field.value) {
            Ok(value) => value,
            Err(_) => {
                tracing::debug!(name = %field.name, "dropping response header with invalid value");
                continue;
            }
        };
        headers.append(name, value);
    }

    let host_body = match body {
        None => Body::empty(),
        Some(body) => {
            if let BodyLength::Known(length) = body.length() {
                // exact length known up front; advertise it so the host
                // avoids chunked transfer encoding
                if !headers.contains_key(header::CONTENT_LENGTH) {
                    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
                }
            }
            match body.try_into_bytes() {
                Ok(bytes) => Body::from(bytes),
                Err(streaming) => Body::from_stream(ChunkToHostStream::new(streaming)),
            }
        }
    };

    let mut host_response = HostResponse::new(host_body);
    *host_response.status_mut() = status;
    *host_response.headers_mut() = headers;
    Ok(host_response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeaderField;
    use bytes::Bytes;
    use futures_util::StreamExt;

    async fn body_bytes(body: Body) -> Vec<u8> {
        let mut data = body.into_data_stream();
        let mut collected = Vec::new();
        while let Some(chunk) = data.next().await {
            collected.extend_from_slice(&chunk.unwrap());
        }
        collected
    }

    #[tokio::test]
    async fn test_status_and_headers_preserved() {
        let response = Response::new(201)
            .with_header("x-mumble", "mumble")
            .with_header("set-cookie", "a=1")
            .with_header("set-cookie", "b=2");
        let host = into_host_response(response, None).unwrap();

        assert_eq!(host.status(), StatusCode::CREATED);
        assert_eq!(host.headers().get("x-mumble").unwrap(), "mumble");
        let cookies: Vec<_> = host.headers().get_all("set-cookie").iter().collect();
        assert_eq!(cookies, vec!["a=1", "b=2"]);
        assert!(body_bytes(host.into_body()).await.is_empty());
    }

    #[tokio::test]
    async fn test_buffered_body_advertises_exact_length() {
        let host = into_host_response(Response::new(200), Some(HttpBody::from("👋"))).unwrap();
        assert_eq!(host.headers().get(header::CONTENT_LENGTH).unwrap(), "4");
        assert_eq!(body_bytes(host.into_body()).await, "👋".as_bytes());
    }

    #[tokio::test]
    async fn test_known_length_stream_advertises_exact_length() {
        let chunks = vec![
            Ok(Bytes::from_static(b"abc")),
            Ok(Bytes::from_static(b"def")),
        ];
        let body = HttpBody::from_stream(futures_util::stream::iter(chunks), BodyLength::Known(6));
        let host = into_host_response(Response::new(200), Some(body)).unwrap();
        assert_eq!(host.headers().get(header::CONTENT_LENGTH).unwrap(), "6");
        assert_eq!(body_bytes(host.into_body()).await, b"abcdef");
    }

    #[tokio::test]
    async fn test_unknown_length_stream_has_no_content_length() {
        let body = HttpBody::from_stream(
            futures_util::stream::iter(vec![Ok(Bytes::from_static(b"xyz"))]),
            BodyLength::Unknown,
        );
        let host = into_host_response(Response::new(200), Some(body)).unwrap();
        assert!(host.headers().get(header::CONTENT_LENGTH).is_none());
        assert_eq!(body_bytes(host.into_body()).await, b"xyz");
    }

    #[test]
    fn test_existing_content_length_is_not_overwritten() {
        let response = Response::new(200).with_header("content-length", "4");
        let host = into_host_response(response, Some(HttpBody::from("👋"))).unwrap();
        let values: Vec<_> = host.headers().get_all(header::CONTENT_LENGTH).iter().collect();
        assert_eq!(values, vec!["4"]);
    }

    #[test]
    fn test_invalid_header_name_dropped_silently() {
        let response = Response::new(200)
            .with_header("bad name", "x")
            .with_header("good-name", "y");
        let host = into_host_response(response, None).unwrap();
        assert!(host.headers().get("good-name").is_some());
        assert_eq!(host.headers().len(), 1);
    }

    #[test]
    fn test_out_of_range_status_is_an_error() {
        let err = into_host_response(Response::new(99), None).unwrap_err();
        assert!(matches!(err, TransportError::InvalidStatus(99)));
    }
}
