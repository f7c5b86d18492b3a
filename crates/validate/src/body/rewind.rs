use crate::body::ReqBody;
use std::ops::{Deref, DerefMut};

/// Exclusive access to a [`ReqBody`] that rewinds it on drop.
///
/// Obtained from [`ReqBody::rewind_on_drop`]. Whatever happens while the guard is held, an
/// early `return`, a `?` or an unwinding panic, the body is back at its first byte once the
/// guard goes out of scope.
#[derive(Debug)]
pub struct RewindGuard<'body> {
    body: &'body mut ReqBody,
}

impl<'body> RewindGuard<'body> {
    pub(crate) fn new(body: &'body mut ReqBody) -> Self {
        Self { body }
    }
}

impl Deref for RewindGuard<'_> {
    type Target = ReqBody;

    fn deref(&self) -> &Self::Target {
        self.body
    }
}

impl DerefMut for RewindGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.body
    }
}

impl Drop for RewindGuard<'_> {
    fn drop(&mut self) {
        self.body.rewind();
    }
}

#[cfg(test)]
mod tests {
    use crate::body::ReqBody;
    use crate::error::BodyError;

    #[tokio::test]
    async fn rewinds_when_scope_ends() {
        let mut body = ReqBody::from("{\"id\":3}");

        {
            let mut guard = body.rewind_on_drop();
            guard.read_to_end().await.unwrap();
            assert_eq!(guard.position(), 8);
        }

        assert_eq!(body.position(), 0);
    }

    #[tokio::test]
    async fn rewinds_on_early_return() {
        async fn peek_first_byte(body: &mut ReqBody) -> Result<u8, BodyError> {
            let mut guard = body.rewind_on_drop();
            let bytes = guard.read_to_end().await?;
            let Some(first) = bytes.first() else {
                return Err(BodyError::invalid_body("empty"));
            };
            Ok(*first)
        }

        let mut body = ReqBody::from("xyz");
        assert_eq!(peek_first_byte(&mut body).await.unwrap(), b'x');
        assert_eq!(body.position(), 0);

        let mut body = ReqBody::empty();
        assert!(peek_first_byte(&mut body).await.is_err());
        assert_eq!(body.position(), 0);
    }
}
