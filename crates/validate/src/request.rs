//! Request metadata handed to every stage of a handler chain.
//!
//! A request travels through the chain as two halves: the [`RequestContext`] (method, uri,
//! version and headers) and the [`ReqBody`](crate::body::ReqBody). Keeping them apart lets a
//! stage borrow the body mutably for reading and rewinding while the head stays shared.

use http::request::Parts;
use http::{HeaderMap, Method, Request, Uri, Version};

use crate::body::ReqBody;

/// The head of an HTTP request.
#[derive(Debug)]
pub struct RequestContext {
    inner: Request<()>,
}

impl RequestContext {
    /// Returns the HTTP method of the request
    pub fn method(&self) -> &Method {
        self.inner.method()
    }

    /// Returns the URI of the request
    pub fn uri(&self) -> &Uri {
        self.inner.uri()
    }

    /// Returns the HTTP version of the request
    pub fn version(&self) -> Version {
        self.inner.version()
    }

    /// Returns the HTTP headers of the request
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Attaches a body to a copy of this head, producing a full `Request<T>`.
    pub fn to_request<T>(&self, body: T) -> Request<T> {
        let mut request = Request::new(body);
        *request.method_mut() = self.method().clone();
        *request.uri_mut() = self.uri().clone();
        *request.version_mut() = self.version();
        *request.headers_mut() = self.headers().clone();
        request
    }
}

impl From<Parts> for RequestContext {
    #[inline]
    fn from(parts: Parts) -> Self {
        Self { inner: Request::from_parts(parts, ()) }
    }
}

impl From<Request<()>> for RequestContext {
    #[inline]
    fn from(inner: Request<()>) -> Self {
        Self { inner }
    }
}

/// Splits a full request into the two halves a handler chain works on.
pub fn split_request<B>(request: Request<B>) -> (RequestContext, ReqBody)
where
    ReqBody: From<B>,
{
    let (parts, body) = request.into_parts();
    (RequestContext::from(parts), ReqBody::from(body))
}
