use crate::body::ResponseBody;
use http::{Response, StatusCode};

/// Values a handler may answer with.
///
/// The gate itself answers through this trait too: a [`Rejection`](crate::validate::Rejection)
/// becomes `(StatusCode::BAD_REQUEST, ())`.
pub trait Responder {
    fn into_response(self) -> Response<ResponseBody>;
}

impl<B: Into<ResponseBody>> Responder for Response<B> {
    fn into_response(self) -> Response<ResponseBody> {
        self.map(Into::into)
    }
}

impl<T: Responder> Responder for (StatusCode, T) {
    fn into_response(self) -> Response<ResponseBody> {
        let (status, inner) = self;
        let mut response = inner.into_response();
        *response.status_mut() = status;
        response
    }
}

impl Responder for () {
    fn into_response(self) -> Response<ResponseBody> {
        Response::new(ResponseBody::empty())
    }
}

impl Responder for String {
    fn into_response(self) -> Response<ResponseBody> {
        Response::new(ResponseBody::from(self))
    }
}
