use std::error::Error;
use std::io;
use thiserror::Error;

/// The error type every [`RequestHandler`](crate::handler::RequestHandler) may fail with.
pub type HandlerError = Box<dyn Error + Send + Sync>;

/// Failures of the body transport itself.
///
/// These are never produced for a body that was delivered but is malformed; such bodies are
/// rejected by the validator instead. A `BodyError` means the stream could not be read at all.
#[derive(Error, Debug)]
pub enum BodyError {
    #[error("invalid body: {reason}")]
    InvalidBody { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl BodyError {
    pub fn invalid_body<S: ToString>(str: S) -> Self {
        Self::InvalidBody { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_reason() {
        let err = BodyError::invalid_body("connection reset before body");
        assert_eq!(err.to_string(), "invalid body: connection reset before body");

        let err = BodyError::io(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert_eq!(err.to_string(), "io error: eof");
    }

    #[test]
    fn boxes_into_handler_error() {
        let err: HandlerError = BodyError::invalid_body("gone").into();
        assert!(err.downcast_ref::<BodyError>().is_some());
    }
}
