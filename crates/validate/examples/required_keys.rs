//! Runs a few requests through a validated handler chain and prints the outcome.
//!
//! ```text
//! RUST_LOG=debug cargo run --example required_keys
//! ```

use bytes::Bytes;
use http::{Method, Request, StatusCode};
use micro_validate::decorator::{Decorator, decorators};
use micro_validate::{RequestHandler, ValidateBodyConfig, ValidateBodyDecorator, handler_fn, split_request};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

async fn create_order(req: Request<Bytes>) -> (StatusCode, String) {
    let body = String::from_utf8_lossy(req.body()).into_owned();
    info!(method = %req.method(), body = %body, "order accepted");
    (StatusCode::CREATED, format!("created from {body}\r\n"))
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config: ValidateBodyConfig = match r#"{ "required_keys": ["product_id", "quantity"] }"#.parse() {
        Ok(config) => config,
        Err(e) => {
            error!(cause = %e, "invalid validation config");
            return;
        }
    };

    let handler = decorators().and_then(ValidateBodyDecorator::new(config)).decorate(handler_fn(create_order));

    let requests: [(Method, &'static str); 6] = [
        (Method::POST, r#"{"product_id": 7, "quantity": 2}"#),
        (Method::POST, r#"{"product_id": 7}"#),
        (Method::PUT, "{}"),
        (Method::PUT, "not json"),
        (Method::POST, ""),
        (Method::GET, ""),
    ];

    for (method, raw) in requests {
        let request = Request::builder().method(method.clone()).uri("/orders").body(raw).expect("valid request");
        let (mut req, mut body) = split_request(request);

        match handler.invoke(&mut req, &mut body).await {
            Ok(resp) => info!(%method, body = raw, status = %resp.status(), "request handled"),
            Err(e) => error!(cause = %e, %method, "request failed"),
        }
    }
}
