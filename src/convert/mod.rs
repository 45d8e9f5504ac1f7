//! Conversions between the host framework's messages and the generic
//! vocabulary.
//!
//! # Data Flow
//! ```text
//! axum request
//!     → request.rs (method, headers, body, metadata → generic)
//!     → [generated handler runs]
//!     → response.rs (generic status, headers, body → axum)
//! stream.rs bridges body chunks in both directions
//! ```

pub mod request;
pub mod response;
pub mod stream;
