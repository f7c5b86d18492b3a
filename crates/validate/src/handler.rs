use crate::body::{ReqBody, ResponseBody};
use crate::error::HandlerError;
use crate::responder::Responder;
use crate::RequestContext;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};

use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// One stage of a handler chain.
///
/// A stage receives the request head and a mutable borrow of the body. Stages that wrap
/// another handler decide whether to delegate or to answer on their own; stages that read
/// the body are expected to leave it rewound for whoever reads next.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn invoke(&self, req: &mut RequestContext, body: &mut ReqBody) -> Result<Response<ResponseBody>, HandlerError>;
}

#[async_trait]
impl<H: RequestHandler + ?Sized> RequestHandler for Box<H> {
    async fn invoke(&self, req: &mut RequestContext, body: &mut ReqBody) -> Result<Response<ResponseBody>, HandlerError> {
        (**self).invoke(req, body).await
    }
}

#[async_trait]
impl<H: RequestHandler + ?Sized> RequestHandler for Arc<H> {
    async fn invoke(&self, req: &mut RequestContext, body: &mut ReqBody) -> Result<Response<ResponseBody>, HandlerError> {
        (**self).invoke(req, body).await
    }
}

/// an async Fn holder which receives the whole request, body included
pub struct FnHandler<F> {
    f: F,
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}

pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
    F: Fn(Request<Bytes>) -> Fut + Send + Sync,
    Fut: Future + Send,
    Fut::Output: Responder,
{
    FnHandler { f }
}

#[async_trait]
impl<F, Fut> RequestHandler for FnHandler<F>
where
    F: Fn(Request<Bytes>) -> Fut + Send + Sync,
    Fut: Future + Send,
    Fut::Output: Responder,
{
    async fn invoke(&self, req: &mut RequestContext, body: &mut ReqBody) -> Result<Response<ResponseBody>, HandlerError> {
        let bytes = body.rewind_on_drop().read_to_end().await?;
        let responder = (self.f)(req.to_request(bytes)).await;
        Ok(responder.into_response())
    }
}
