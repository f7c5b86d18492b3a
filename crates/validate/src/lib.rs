//! Request body validation for micro-web style handler chains.
//!
//! The crate provides [`ValidateBody`], a handler stage that guards write requests (`POST` and
//! `PUT`): their body must be a non-empty JSON value and, when configured, a JSON object holding
//! a set of required top-level keys. Rejected requests get a bare `400 Bad Request`; accepted
//! ones reach the wrapped handler with the body rewound, so it can read the payload again from
//! the first byte.
//!
//! # Architecture
//!
//! - [`request`](RequestContext): the request head every stage receives
//! - [`body`]: the replayable [`ReqBody`], its [`RewindGuard`](body::RewindGuard), and
//!   [`ResponseBody`]
//! - [`handler`]: the [`RequestHandler`] seam between stages, and [`handler_fn`]
//! - [`decorator`]: stacking stages in front of a handler
//! - [`Responder`]: what handlers, and the gate itself, answer with
//! - [`validate`]: the validation stage, its config and rejection reasons

mod request;
mod responder;

pub mod body;
pub mod decorator;
pub mod error;
pub mod handler;
pub mod validate;

pub use body::ReqBody;
pub use body::ResponseBody;
pub use handler::FnHandler;
pub use handler::RequestHandler;
pub use handler::handler_fn;
pub use request::RequestContext;
pub use request::split_request;
pub use responder::Responder;
pub use validate::ValidateBody;
pub use validate::ValidateBodyConfig;
pub use validate::ValidateBodyDecorator;
