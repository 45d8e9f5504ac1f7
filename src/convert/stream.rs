//! Body-stream bridges between the host body and the generic chunk
//! sequence.
//!
//! Both directions are one-to-one pull adapters: a chunk is fetched only
//! when the consumer asks for one, so backpressure is inherited from
//! whichever side is slower. Neither direction buffers beyond the single
//! in-flight chunk, and neither can be restarted after exhaustion.

use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::{Body, BodyDataStream};
use bytes::Bytes;
use futures_util::Stream;

use crate::error::BoxError;
use crate::types::body::HttpBody;

/// Host body → generic chunk sequence.
///
/// Pulls the next data frame from the host body on each poll; a terminal
/// frame ends the sequence, and host read errors are passed through boxed.
pub struct HostBodyStream {
    inner: BodyDataStream,
}

impl HostBodyStream {
    pub fn new(body: Body) -> Self {
        Self {
            inner: body.into_data_stream(),
        }
    }
}

impl Stream for HostBodyStream {
    type Item = Result<Bytes, BoxError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => Poll::Ready(Some(Ok(chunk))),
            Poll::Ready(Some(Err(err))) => Poll::Ready(Some(Err(err.into()))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Generic chunk sequence → host buffer sequence.
///
/// Materializes each generic chunk as the host's native buffer type for
/// `Body::from_stream`. Failures pulling from the generic body propagate
/// unchanged and surface as write failures on the host connection.
pub struct ChunkToHostStream {
    inner: HttpBody,
}

impl ChunkToHostStream {
    pub fn new(body: HttpBody) -> Self {
        Self { inner: body }
    }
}

impl Stream for ChunkToHostStream {
    type Item = Result<Bytes, BoxError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
