//! Redirect-or-delegate request handling.
//!
//! # Responsibilities
//! - Look up the request path in the current [`RouteTable`] snapshot
//! - Answer matches with `302 Found` and a `Location` header
//! - Hand every other request, unchanged, to the fallback service
//!
//! # Design Decisions
//! - The fallback is any `tower::Service`, so axum routers, handlers and
//!   `service_fn` closures all plug in
//! - The path is percent-decoded before lookup; the query string is ignored
//! - One response per request: either the redirect or whatever the fallback
//!   returns

use std::borrow::Cow;
use std::convert::Infallible;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::{self, BoxFuture, FutureExt};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tower::{Layer, Service};

use crate::redirect::rules::{parse_json, parse_yaml, ParseError};
use crate::redirect::table::{RouteTable, RouteTableHandle};

/// Bytes that may not appear in a header value as-is. Non-ASCII is always
/// encoded by `utf8_percent_encode`.
const LOCATION: &AsciiSet = &CONTROLS.add(b' ');

/// Service that redirects mapped paths and delegates the rest to `F`.
#[derive(Debug, Clone)]
pub struct RedirectService<F> {
    table: RouteTableHandle,
    fallback: F,
}

impl<F> RedirectService<F> {
    pub fn new(table: RouteTableHandle, fallback: F) -> Self {
        Self { table, fallback }
    }

    /// Handle for swapping the table this service reads from.
    pub fn handle(&self) -> RouteTableHandle {
        self.table.clone()
    }
}

impl<F> Service<Request<Body>> for RedirectService<F>
where
    F: Service<Request<Body>, Error = Infallible> + Send + 'static,
    F::Response: IntoResponse,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let table = self.table.load();
        let redirect = {
            let path = request_path(&req);
            match table.get(&path) {
                Some(destination) => {
                    tracing::trace!(path = %path, destination = %destination, "Redirect matched");
                    Some(found(destination))
                }
                None => {
                    tracing::trace!(path = %path, "No redirect, delegating to fallback");
                    None
                }
            }
        };

        if let Some(response) = redirect {
            return future::ready(Ok(response)).boxed();
        }

        let response = self.fallback.call(req);
        async move { response.await.map(IntoResponse::into_response) }.boxed()
    }
}

/// Wraps a fallback service in a [`RedirectService`] sharing one table.
#[derive(Debug, Clone)]
pub struct RedirectLayer {
    table: RouteTableHandle,
}

impl RedirectLayer {
    pub fn new(table: RouteTableHandle) -> Self {
        Self { table }
    }
}

impl<F> Layer<F> for RedirectLayer {
    type Service = RedirectService<F>;

    fn layer(&self, fallback: F) -> Self::Service {
        RedirectService::new(self.table.clone(), fallback)
    }
}

/// Build a handler from an in-memory table.
pub fn map_handler<F>(table: RouteTable, fallback: F) -> RedirectService<F> {
    RedirectService::new(RouteTableHandle::new(table), fallback)
}

/// Build a handler from a YAML redirect document.
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
pub fn yaml_handler<F>(yaml: &[u8], fallback: F) -> Result<RedirectService<F>, ParseError> {
    let rules = parse_yaml(yaml)?;
    Ok(map_handler(RouteTable::build(rules), fallback))
}

/// Build a handler from a JSON redirect document.
pub fn json_handler<F>(json: &[u8], fallback: F) -> Result<RedirectService<F>, ParseError> {
    let rules = parse_json(json)?;
    Ok(map_handler(RouteTable::build(rules), fallback))
}

fn request_path(req: &Request<Body>) -> Cow<'_, str> {
    percent_decode_str(req.uri().path()).decode_utf8_lossy()
}

fn found(destination: &str) -> Response {
    let encoded = utf8_percent_encode(destination, LOCATION).to_string();
    match HeaderValue::from_str(&encoded) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            tracing::error!(destination = %destination, error = %e, "Unusable redirect destination");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
