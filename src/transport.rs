//! Router registration: install generic OpenAPI handlers on an axum router.
//!
//! # Responsibilities
//! - Translate the generic route template into the host grammar
//! - Install a per-route closure that converts the request, invokes the
//!   generic handler, and converts the response
//! - Map conversion and handler failures through the host's standard
//!   error-to-response translation
//!
//! # Design Decisions
//! - `OpenApiRouter` is an explicit adapter owning the host router rather
//!   than an extension of a foreign type; `into_router` hands the
//!   configured router back for serving
//! - Registration fails for verbs the host router cannot route instead of
//!   installing a route that can never match

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::RawPathParams;
use axum::http::Request as HostRequest;
use axum::response::IntoResponse;
use axum::routing::{on, MethodFilter};
use axum::Router;

use crate::convert;
use crate::error::{BoxError, TransportError};
use crate::path::{self, ParamStyle, RouterPathComponent};
use crate::types::body::HttpBody;
use crate::types::{Method, Request, Response, ServerRequestMetadata};

/// Future returned by an operation handler.
pub type HandlerFuture =
    Pin<Box<dyn Future<Output = Result<(Response, Option<HttpBody>), BoxError>> + Send>>;

/// A handler expressed purely in the generic request/response vocabulary.
pub type OperationHandler =
    Arc<dyn Fn(Request, Option<HttpBody>, ServerRequestMetadata) -> HandlerFuture + Send + Sync>;

/// Wrap an async closure as an [`OperationHandler`].
pub fn operation<F, Fut>(handler: F) -> OperationHandler
where
    F: Fn(Request, Option<HttpBody>, ServerRequestMetadata) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(Response, Option<HttpBody>), BoxError>> + Send + 'static,
{
    Arc::new(move |request, body, metadata| Box::pin(handler(request, body, metadata)))
}

/// Registration contract consumed by generated OpenAPI server code.
pub trait ServerTransport {
    /// Register a handler for `method` at `path`, where `path` uses the
    /// generic bracket grammar (`/pets/{petId}`).
    fn register(
        &mut self,
        handler: OperationHandler,
        method: Method,
        path: &str,
    ) -> Result<(), TransportError>;
}

/// Adapter that registers generic OpenAPI handlers on an [`axum::Router`].
#[derive(Default)]
pub struct OpenApiRouter {
    router: Router,
}

impl OpenApiRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing router; already-installed routes are kept.
    pub fn from_router(router: Router) -> Self {
        Self { router }
    }

    /// Hand the configured router back for serving.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Register a handler using a typed component path.
    pub fn register_components(
        &mut self,
        handler: OperationHandler,
        method: Method,
        components: &[RouterPathComponent],
    ) -> Result<(), TransportError> {
        let mut template = String::from("/");
        template.push_str(&path::render_path(components, ParamStyle::Brace));
        self.install(handler, method, template)
    }

    fn install(
        &mut self,
        handler: OperationHandler,
        method: Method,
        template: String,
    ) -> Result<(), TransportError> {
        let http_method = method.to_http()?;
        let filter = MethodFilter::try_from(http_method.clone())
            .map_err(|_| TransportError::UnroutableMethod(method.as_str().to_owned()))?;

        let route = on(
            filter,
            move |params: RawPathParams, request: HostRequest<Body>| {
                let handler = handler.clone();
                async move {
                    let query = request.uri().query().map(str::to_owned);
                    let metadata = convert::request::request_metadata(&params, query.as_deref());
                    let (openapi_request, body) =
                        match convert::request::into_openapi_request(request) {
                            Ok(converted) => converted,
                            Err(err) => return err.into_response(),
                        };
                    match handler(openapi_request, body, metadata).await {
                        Ok((response, response_body)) => {
                            match convert::response::into_host_response(response, response_body) {
                                Ok(host_response) => host_response,
                                Err(err) => err.into_response(),
                            }
                        }
                        Err(err) => TransportError::Handler(err).into_response(),
                    }
                }
            },
        );

        self.router = std::mem::take(&mut self.router).route(&template, route);
        tracing::debug!(method = %http_method, path = %template, "registered OpenAPI route");
        Ok(())
    }
}

impl ServerTransport for OpenApiRouter {
    fn register(
        &mut self,
        handler: OperationHandler,
        method: Method,
        path: &str,
    ) -> Result<(), TransportError> {
        // axum's template grammar is the generic bracket grammar
        let template = path::translate(path, ParamStyle::Brace);
        self.install(handler, method, template)
    }
}
