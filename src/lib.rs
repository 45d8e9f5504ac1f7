//! Axum transport for generated OpenAPI server handlers.
//!
//! Generated OpenAPI server code speaks a framework-agnostic vocabulary:
//! a request/response pair, an ordered header list, a single-use
//! byte-chunk body, and per-request routing metadata. This crate supplies
//! that vocabulary and binds it to axum, so a generated API can be served
//! by an [`axum::Router`]:
//!
//! ```no_run
//! use openapi_axum::{operation, Method, OpenApiRouter, Response, ServerTransport};
//!
//! let mut transport = OpenApiRouter::new();
//! transport
//!     .register(
//!         operation(|_request, _body, metadata| async move {
//!             let name = metadata.path_parameters["name"].clone();
//!             Ok((Response::new(200), Some(format!("Hello {name}").into())))
//!         }),
//!         Method::Get,
//!         "/hello/{name}",
//!     )
//!     .unwrap();
//! let app: axum::Router = transport.into_router();
//! ```
//!
//! Everything here is per-request, stateless glue: conversions must be
//! lossless field-for-field, bodies are streamed without buffering, and
//! failures propagate through the host's own error handling.

pub mod convert;
pub mod error;
pub mod path;
pub mod transport;
pub mod types;

pub use error::{BoxError, TransportError};
pub use path::{render_path, translate, ParamStyle, RouterPathComponent};
pub use transport::{operation, HandlerFuture, OpenApiRouter, OperationHandler, ServerTransport};
pub use types::body::{BodyLength, HttpBody};
pub use types::{HeaderField, Method, QueryItem, Request, Response, ServerRequestMetadata};
