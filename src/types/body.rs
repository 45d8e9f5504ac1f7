//! Single-use HTTP body as a lazy byte-chunk sequence.
//!
//! # Responsibilities
//! - Represent a body as buffered bytes or a lazy chunk stream
//! - Carry the length annotation (`Known(n)` / `Unknown`)
//! - Enforce single-use iteration: a body is drained exactly once
//!
//! # Design Decisions
//! - Consumption is by value, so a second iteration is usually a compile
//!   error; polling past the terminal item panics to catch the remaining
//!   cases instead of silently yielding no data

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures_util::stream::BoxStream;
use futures_util::{Stream, StreamExt};

use crate::error::BoxError;

/// Whether the total body length is known up front.
///
/// A known length lets the receiving side emit an exact `Content-Length`
/// instead of falling back to chunked transfer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLength {
    Known(u64),
    Unknown,
}

enum Inner {
    /// Fully materialized body; the slot empties once the chunk is yielded.
    Buffered(Option<Bytes>),
    /// Lazy chunk source, pulled one chunk at a time.
    Streaming(BoxStream<'static, Result<Bytes, BoxError>>),
    /// Terminal item already delivered; polling again is a bug.
    Consumed,
}

/// A forward-only, single-use sequence of byte chunks with a length
/// annotation.
///
/// Bodies built from in-memory bytes report `BodyLength::Known`; bodies
/// wrapping a stream carry whatever annotation the caller supplies.
pub struct HttpBody {
    length: BodyLength,
    inner: Inner,
}

impl HttpBody {
    /// Body backed by a single in-memory buffer. Length is known exactly.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            length: BodyLength::Known(bytes.len() as u64),
            inner: Inner::Buffered(Some(bytes)),
        }
    }

    /// Body backed by a lazy chunk stream.
    pub fn from_stream<S>(stream: S, length: BodyLength) -> Self
    where
        S: Stream<Item = Result<Bytes, BoxError>> + Send + 'static,
    {
        Self {
            length,
            inner: Inner::Streaming(stream.boxed()),
        }
    }

    pub fn length(&self) -> BodyLength {
        self.length
    }

    /// Recover the underlying buffer when the body is fully materialized;
    /// returns the body unchanged when it is streaming.
    pub fn try_into_bytes(self) -> Result<Bytes, Self> {
        match self.inner {
            Inner::Buffered(Some(bytes)) => Ok(bytes),
            inner => Err(Self {
                length: self.length,
                inner,
            }),
        }
    }

    /// Drain the body into one contiguous buffer.
    pub async fn collect(mut self) -> Result<Bytes, BoxError> {
        if let Inner::Buffered(Some(bytes)) = &mut self.inner {
            return Ok(std::mem::take(bytes));
        }
        let mut collected = BytesMut::new();
        while let Some(chunk) = self.next().await {
            collected.extend_from_slice(&chunk?);
        }
        Ok(collected.freeze())
    }
}

impl From<Bytes> for HttpBody {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for HttpBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<String> for HttpBody {
    fn from(text: String) -> Self {
        Self::from_bytes(text.into_bytes())
    }
}

impl From<&'static str> for HttpBody {
    fn from(text: &'static str) -> Self {
        Self::from_bytes(Bytes::from_static(text.as_bytes()))
    }
}

impl std::fmt::Debug for HttpBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.inner {
            Inner::Buffered(Some(bytes)) => format!("buffered({} bytes)", bytes.len()),
            Inner::Buffered(None) => "buffered(drained)".to_owned(),
            Inner::Streaming(_) => "streaming".to_owned(),
            Inner::Consumed => "consumed".to_owned(),
        };
        f.debug_struct("HttpBody")
            .field("length", &self.length)
            .field("state", &state)
            .finish()
    }
}

impl Stream for HttpBody {
    type Item = Result<Bytes, BoxError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match &mut this.inner {
            Inner::Buffered(slot) => match slot.take() {
                Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                None => {
                    this.inner = Inner::Consumed;
                    Poll::Ready(None)
                }
            },
            Inner::Streaming(stream) => match stream.as_mut().poll_next(cx) {
                Poll::Ready(None) => {
                    this.inner = Inner::Consumed;
                    Poll::Ready(None)
                }
                other => other,
            },
            Inner::Consumed => {
                panic!("HttpBody polled after completion; bodies are single-use")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[tokio::test]
    async fn test_buffered_body_collects_to_original_bytes() {
        let body = HttpBody::from("👋");
        assert_eq!(body.length(), BodyLength::Known(4));
        let collected = body.collect().await.unwrap();
        assert_eq!(&collected[..], "👋".as_bytes());
    }

    #[tokio::test]
    async fn test_streaming_body_collects_all_chunks() {
        let chunks = vec![
            Ok(Bytes::from_static(b"hello ")),
            Ok(Bytes::from_static(b"world")),
        ];
        let body = HttpBody::from_stream(stream::iter(chunks), BodyLength::Unknown);
        assert_eq!(body.length(), BodyLength::Unknown);
        let collected = body.collect().await.unwrap();
        assert_eq!(&collected[..], b"hello world");
    }

    #[tokio::test]
    async fn test_stream_failure_propagates() {
        let chunks: Vec<Result<Bytes, BoxError>> =
            vec![Ok(Bytes::from_static(b"partial")), Err("disconnected".into())];
        let body = HttpBody::from_stream(stream::iter(chunks), BodyLength::Unknown);
        assert!(body.collect().await.is_err());
    }

    #[tokio::test]
    #[should_panic(expected = "single-use")]
    async fn test_polling_past_completion_panics() {
        let mut body = HttpBody::from_bytes(Bytes::from_static(b"once"));
        assert!(body.next().await.is_some());
        assert!(body.next().await.is_none());
        // the sequence ended above; this pull is a programming error
        let _ = body.next().await;
    }

    #[test]
    fn test_try_into_bytes_only_for_buffered() {
        let buffered = HttpBody::from_bytes(Bytes::from_static(b"abc"));
        assert!(buffered.try_into_bytes().is_ok());

        let streaming = HttpBody::from_stream(stream::empty(), BodyLength::Unknown);
        assert!(streaming.try_into_bytes().is_err());
    }
}
