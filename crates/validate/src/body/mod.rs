//! Request and response bodies.
//!
//! [`ReqBody`] is a replayable request body: whatever it pulls from its transport source is
//! retained, so after [`ReqBody::rewind`] the next reader starts again at the first byte. This
//! is what lets a validation stage inspect the payload and still hand an unread body to the
//! handler behind it.
//!
//! [`RewindGuard`] scopes one read of the body and rewinds it when dropped, on every exit path.

mod response;
mod rewind;

pub use response::ResponseBody;
pub use rewind::RewindGuard;

use crate::error::BodyError;
use bytes::{Bytes, BytesMut};
use http_body::{Body, Frame, SizeHint};
use http_body_util::BodyExt;
use http_body_util::combinators::UnsyncBoxBody;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

pub struct ReqBody {
    buf: Bytes,
    cursor: usize,
    source: Source,
}

enum Source {
    Pending(UnsyncBoxBody<Bytes, BodyError>),
    Done,
    Failed,
}

impl ReqBody {
    /// A body with no content.
    pub fn empty() -> Self {
        Self::once(Bytes::new())
    }

    /// A body whose whole content is already in memory.
    pub fn once(bytes: Bytes) -> Self {
        Self { buf: bytes, cursor: 0, source: Source::Done }
    }

    /// A body that is pulled from `body` on demand.
    pub fn stream<B>(body: B) -> Self
    where
        B: Body<Data = Bytes> + Send + 'static,
        B::Error: Into<BodyError>,
    {
        let source = body.map_err(Into::<BodyError>::into).boxed_unsync();
        Self { buf: Bytes::new(), cursor: 0, source: Source::Pending(source) }
    }

    /// Reads everything from the current position to the end of the body.
    ///
    /// The transport source is drained on the first call; the returned bytes stay buffered so
    /// a later [`rewind`](Self::rewind) replays them. A source failure is returned as an error
    /// and poisons the body.
    pub async fn read_to_end(&mut self) -> Result<Bytes, BodyError> {
        match std::mem::replace(&mut self.source, Source::Done) {
            Source::Pending(mut source) => {
                let mut buf = BytesMut::with_capacity(self.buf.len());
                buf.extend_from_slice(&self.buf);

                while let Some(frame) = source.frame().await {
                    match frame {
                        // trailers carry no payload
                        Ok(frame) => {
                            if let Ok(data) = frame.into_data() {
                                buf.extend_from_slice(&data);
                            }
                        }
                        Err(e) => {
                            self.buf = buf.freeze();
                            self.source = Source::Failed;
                            return Err(e);
                        }
                    }
                }

                self.buf = buf.freeze();
            }
            Source::Failed => {
                self.source = Source::Failed;
                return Err(BodyError::invalid_body("body stream has failed"));
            }
            Source::Done => {}
        }

        let remaining = self.buf.slice(self.cursor..);
        self.cursor = self.buf.len();
        Ok(remaining)
    }

    /// Moves the read position back to the first byte.
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Borrows the body for one read, rewinding it when the guard is dropped.
    #[inline]
    pub fn rewind_on_drop(&mut self) -> RewindGuard<'_> {
        RewindGuard::new(self)
    }

    /// Current read position, in bytes from the start.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn append(&mut self, data: &Bytes) {
        if self.buf.is_empty() {
            self.buf = data.clone();
            return;
        }

        let mut joined = BytesMut::with_capacity(self.buf.len() + data.len());
        joined.extend_from_slice(&self.buf);
        joined.extend_from_slice(data);
        self.buf = joined.freeze();
    }
}

impl fmt::Debug for ReqBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Pending(_) => "pending",
            Source::Done => "done",
            Source::Failed => "failed",
        };
        f.debug_struct("ReqBody")
            .field("buffered", &self.buf.len())
            .field("cursor", &self.cursor)
            .field("source", &source)
            .finish()
    }
}

impl Default for ReqBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bytes> for ReqBody {
    fn from(bytes: Bytes) -> Self {
        Self::once(bytes)
    }
}

impl From<Vec<u8>> for ReqBody {
    fn from(value: Vec<u8>) -> Self {
        Self::once(Bytes::from(value))
    }
}

impl From<String> for ReqBody {
    fn from(value: String) -> Self {
        Self::once(Bytes::from(value))
    }
}

impl From<&'static str> for ReqBody {
    fn from(value: &'static str) -> Self {
        Self::once(Bytes::from_static(value.as_bytes()))
    }
}

impl From<()> for ReqBody {
    fn from((): ()) -> Self {
        Self::empty()
    }
}

impl Body for ReqBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_frame(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();

        if this.cursor < this.buf.len() {
            let chunk = this.buf.slice(this.cursor..);
            this.cursor = this.buf.len();
            return Poll::Ready(Some(Ok(Frame::data(chunk))));
        }

        let source = match &mut this.source {
            Source::Pending(source) => source,
            Source::Done => return Poll::Ready(None),
            Source::Failed => return Poll::Ready(Some(Err(BodyError::invalid_body("body stream has failed")))),
        };

        match ready!(Pin::new(source).poll_frame(cx)) {
            Some(Ok(frame)) => match frame.into_data() {
                Ok(data) => {
                    this.append(&data);
                    this.cursor = this.buf.len();
                    Poll::Ready(Some(Ok(Frame::data(data))))
                }
                Err(frame) => Poll::Ready(Some(Ok(frame))),
            },
            Some(Err(e)) => {
                this.source = Source::Failed;
                Poll::Ready(Some(Err(e)))
            }
            None => {
                this.source = Source::Done;
                Poll::Ready(None)
            }
        }
    }

    fn is_end_stream(&self) -> bool {
        self.cursor >= self.buf.len() && matches!(self.source, Source::Done)
    }

    fn size_hint(&self) -> SizeHint {
        let remaining = (self.buf.len() - self.cursor) as u64;
        match &self.source {
            Source::Pending(source) => {
                let inner = source.size_hint();
                let mut hint = SizeHint::new();
                hint.set_lower(inner.lower() + remaining);
                if let Some(upper) = inner.upper() {
                    hint.set_upper(upper + remaining);
                }
                hint
            }
            Source::Done | Source::Failed => SizeHint::with_exact(remaining),
        }
    }
}
