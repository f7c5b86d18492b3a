use crate::body::ResponseBody;
use crate::responder::Responder;
use http::{Response, StatusCode};
use thiserror::Error;

/// Why a write request was turned away.
///
/// The reason only reaches the logs; every variant answers the caller with the same bare
/// `400 Bad Request`.
#[derive(Error, Debug)]
pub enum Rejection {
    #[error("request body is empty")]
    EmptyBody,

    #[error("request body is not valid json: {source}")]
    MalformedJson {
        #[from]
        source: serde_json::Error,
    },

    #[error("request body is an empty json value")]
    EmptyJson,

    #[error("request body is not a json object")]
    NotAnObject,

    #[error("request body misses required keys: {}", .missing.join(", "))]
    MissingKeys { missing: Vec<String> },
}

impl Rejection {
    pub fn missing_keys(missing: Vec<String>) -> Self {
        Self::MissingKeys { missing }
    }
}

impl Responder for Rejection {
    /// Status 400, no body and no extra headers, whatever the reason.
    fn into_response(self) -> Response<ResponseBody> {
        (StatusCode::BAD_REQUEST, ()).into_response()
    }
}
