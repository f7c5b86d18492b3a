use bytes::Bytes;
use criterion::{Criterion, criterion_group, criterion_main};
use http::{Method, Request, StatusCode};
use micro_validate::decorator::Decorator;
use micro_validate::{RequestHandler, ValidateBodyConfig, ValidateBodyDecorator, handler_fn, split_request};
use std::hint::black_box;

const ACCEPTED: &str = r#"{"product_id": 7, "quantity": 2, "note": "leave at the door", "tags": ["a", "b", "c"]}"#;
const MISSING: &str = r#"{"product_id": 7, "note": "leave at the door", "tags": ["a", "b", "c"]}"#;

fn bench_validate(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

    let handler = ValidateBodyDecorator::new(ValidateBodyConfig::with_required_keys(["product_id", "quantity"]))
        .decorate(handler_fn(|_req: Request<Bytes>| async { (StatusCode::OK, ()) }));

    let handler = &handler;
    let mut group = c.benchmark_group("validate_body");

    for (name, method, raw) in
        [("accepted", Method::POST, ACCEPTED), ("missing_key", Method::POST, MISSING), ("pass_through", Method::GET, ACCEPTED)]
    {
        group.bench_function(name, |b| {
            b.to_async(&runtime).iter(|| {
                let method = method.clone();
                async move {
                    let request = Request::builder().method(method).uri("/orders").body(raw).unwrap();
                    let (mut req, mut body) = split_request(request);
                    black_box(handler.invoke(&mut req, &mut body).await.unwrap())
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
