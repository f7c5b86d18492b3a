//! Admission gate for write requests.
//!
//! [`ValidateBody`] sits in front of another [`RequestHandler`] and makes sure every `POST` and
//! `PUT` request carries a non-empty JSON body holding the configured top-level keys. Requests
//! that fail are answered with a bare `400 Bad Request` and never reach the wrapped handler;
//! everything else is delegated with the body rewound to its first byte.
//!
//! ```
//! use bytes::Bytes;
//! use http::{Request, StatusCode};
//! use micro_validate::decorator::Decorator;
//! use micro_validate::{handler_fn, split_request, RequestHandler, ValidateBodyConfig, ValidateBodyDecorator};
//!
//! # async fn run() {
//! let config = ValidateBodyConfig::with_required_keys(["product_id"]);
//! let handler = ValidateBodyDecorator::new(config)
//!     .decorate(handler_fn(|_req: Request<Bytes>| async { (StatusCode::CREATED, ()) }));
//!
//! let request = Request::post("/orders").body(r#"{"product_id": 42}"#).unwrap();
//! let (mut req, mut body) = split_request(request);
//!
//! let resp = handler.invoke(&mut req, &mut body).await.unwrap();
//! assert_eq!(resp.status(), StatusCode::CREATED);
//! # }
//! ```

mod config;
mod rejection;

pub use config::{ValidateBodyConfig, ValidateBodyConfigBuilder};
pub use rejection::Rejection;

use crate::body::{ReqBody, ResponseBody};
use crate::decorator::Decorator;
use crate::error::HandlerError;
use crate::handler::RequestHandler;
use crate::responder::Responder;
use crate::RequestContext;
use async_trait::async_trait;
use http::{Method, Response};
use serde_json::Value;
use tracing::{debug, error, trace};

/// A handler that validates write request bodies before delegating to `H`.
#[derive(Debug)]
pub struct ValidateBody<H> {
    handler: H,
    config: ValidateBodyConfig,
}

impl<H: RequestHandler> ValidateBody<H> {
    pub fn new(handler: H, config: ValidateBodyConfig) -> Self {
        Self { handler, config }
    }

    pub fn config(&self) -> &ValidateBodyConfig {
        &self.config
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.handler
    }
}

#[async_trait]
impl<H: RequestHandler> RequestHandler for ValidateBody<H> {
    async fn invoke(&self, req: &mut RequestContext, body: &mut ReqBody) -> Result<Response<ResponseBody>, HandlerError> {
        if !is_write(req.method()) {
            trace!(method = %req.method(), "method is not validated, pass through");
            body.rewind();
            return self.handler.invoke(req, body).await;
        }

        let admission = {
            let mut cursor = body.rewind_on_drop();
            // an earlier stage may have left the body half read
            cursor.rewind();

            let raw = match cursor.read_to_end().await {
                Ok(raw) => raw,
                Err(e) => {
                    error!(cause = %e, method = %req.method(), path = req.uri().path(), "failed to read request body");
                    return Err(e.into());
                }
            };

            admit(&self.config, &raw)
        };

        match admission {
            Ok(()) => {
                trace!(method = %req.method(), path = req.uri().path(), "request body accepted");
                self.handler.invoke(req, body).await
            }
            Err(rejection) => {
                debug!(method = %req.method(), path = req.uri().path(), reason = %rejection, "reject request");
                Ok(rejection.into_response())
            }
        }
    }
}

/// Create and update requests, the only ones whose body is inspected.
fn is_write(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT
}

/// Decides whether a raw write request body may pass.
fn admit(config: &ValidateBodyConfig, raw: &[u8]) -> Result<(), Rejection> {
    if raw.is_empty() {
        return Err(Rejection::EmptyBody);
    }

    let value: Value = serde_json::from_slice(raw)?;

    match value {
        Value::Object(object) => {
            if object.is_empty() {
                return Err(Rejection::EmptyJson);
            }

            let missing = config
                .required_keys()
                .iter()
                .filter(|key| !object.contains_key(key.as_str()))
                .cloned()
                .collect::<Vec<_>>();

            if missing.is_empty() { Ok(()) } else { Err(Rejection::missing_keys(missing)) }
        }
        Value::Array(items) if items.is_empty() => Err(Rejection::EmptyJson),
        Value::String(s) if s.is_empty() => Err(Rejection::EmptyJson),
        _ if config.required_keys().is_empty() => Ok(()),
        _ => Err(Rejection::NotAnObject),
    }
}

/// Wraps handlers into [`ValidateBody`] stages sharing one config.
#[derive(Debug, Clone, Default)]
pub struct ValidateBodyDecorator {
    config: ValidateBodyConfig,
}

impl ValidateBodyDecorator {
    pub fn new(config: ValidateBodyConfig) -> Self {
        Self { config }
    }
}

impl<H: RequestHandler> Decorator<H> for ValidateBodyDecorator {
    type Out = ValidateBody<H>;

    fn decorate(&self, raw: H) -> Self::Out {
        ValidateBody::new(raw, self.config.clone())
    }
}
