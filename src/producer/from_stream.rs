use core::convert::Infallible;
use core::pin::Pin;

use alloc::boxed::Box;

use futures::{Stream, StreamExt};

use crate::producer::Invariant;
use crate::Producer;

/// Produces the items of a [`Stream`], polling it for exactly one item per call to `produce`.
///
/// The stream is pinned on the heap, so it need not be [`Unpin`].
pub struct FromStream<S>(Invariant<StreamProducer<S>>);

impl<S> FromStream<S> {
    /// Wraps a stream. The stream is not polled until the first call to `produce`.
    pub fn new(stream: S) -> Self {
        FromStream(Invariant::new(StreamProducer(Box::pin(stream))))
    }
}

impl<S> core::fmt::Debug for FromStream<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FromStream").finish_non_exhaustive()
    }
}

impl<S: Stream> Producer for FromStream<S> {
    type Item = S::Item;
    type Error = Infallible;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.0.produce().await
    }
}

struct StreamProducer<S>(Pin<Box<S>>);

impl<S: Stream> Producer for StreamProducer<S> {
    type Item = S::Item;
    type Error = Infallible;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.0.next().await)
    }
}

/// Produces the items of a [`Stream`] of results: `Ok` values become items, and the first `Err`
/// becomes the error of the producer.
pub struct FromTryStream<S>(Invariant<TryStreamProducer<S>>);

impl<S> FromTryStream<S> {
    /// Wraps a stream. The stream is not polled until the first call to `produce`.
    pub fn new(stream: S) -> Self {
        FromTryStream(Invariant::new(TryStreamProducer(Box::pin(stream))))
    }
}

impl<S> core::fmt::Debug for FromTryStream<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FromTryStream").finish_non_exhaustive()
    }
}

impl<S, T, E> Producer for FromTryStream<S>
where
    S: Stream<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.0.produce().await
    }
}

struct TryStreamProducer<S>(Pin<Box<S>>);

impl<S, T, E> Producer for TryStreamProducer<S>
where
    S: Stream<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.0.next().await.transpose()
    }
}
