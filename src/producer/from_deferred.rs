use core::future::Future;
use core::pin::Pin;

use alloc::boxed::Box;

use crate::producer::Invariant;
use crate::{IntoProducer, Producer};

enum Deferred<F, P> {
    /// Not resolved yet. Pinned on the heap, so that a `produce` future dropped while awaiting
    /// the resolution does not lose its progress.
    Pending(Pin<Box<F>>),
    Resolved(P),
    Failed,
}

/// Awaits a deferred producer-like value on the first call to `produce`, and from then on
/// drives the producer it resolved to.
///
/// The deferred value is awaited at most once. Created by
/// [`from_deferred`](crate::producer::from_deferred).
pub struct FromDeferred<F, P>(Invariant<DeferredProducer<F, P>>);

impl<F, P> FromDeferred<F, P> {
    /// Wraps a future. The future is not polled until the first call to `produce`.
    pub fn new(deferred: F) -> Self {
        FromDeferred(Invariant::new(DeferredProducer(Deferred::Pending(Box::pin(
            deferred,
        )))))
    }

    /// Returns whether the deferred value has been resolved already.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.0.as_ref().0, Deferred::Pending(_))
    }
}

impl<F, P> core::fmt::Debug for FromDeferred<F, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FromDeferred")
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}

impl<F, P> Producer for FromDeferred<F, P>
where
    F: Future,
    F::Output: IntoProducer<IntoProducer = P>,
    P: Producer,
{
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.0.produce().await
    }
}

struct DeferredProducer<F, P>(Deferred<F, P>);

impl<F, P> Producer for DeferredProducer<F, P>
where
    F: Future,
    F::Output: IntoProducer<IntoProducer = P>,
    P: Producer,
{
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match &mut self.0 {
                Deferred::Resolved(producer) => return producer.produce().await,
                Deferred::Pending(deferred) => {
                    let producer = deferred.as_mut().await.into_producer();
                    #[cfg(feature = "tracing")]
                    tracing::trace!("resolved a deferred producer");
                    self.0 = Deferred::Resolved(producer);
                }
                Deferred::Failed => return Ok(None),
            }
        }
    }
}

/// Like [`FromDeferred`], but for deferred values that may fail to resolve. A failed resolution
/// is emitted as the error of this producer.
///
/// Created by [`from_try_deferred`](crate::producer::from_try_deferred).
pub struct FromTryDeferred<F, P>(Invariant<TryDeferredProducer<F, P>>);

impl<F, P> FromTryDeferred<F, P> {
    /// Wraps a future. The future is not polled until the first call to `produce`.
    pub fn new(deferred: F) -> Self {
        FromTryDeferred(Invariant::new(TryDeferredProducer(Deferred::Pending(
            Box::pin(deferred),
        ))))
    }

    /// Returns whether the deferred value has been resolved (successfully or not) already.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.0.as_ref().0, Deferred::Pending(_))
    }
}

impl<F, P> core::fmt::Debug for FromTryDeferred<F, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FromTryDeferred")
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}

impl<F, I, P> Producer for FromTryDeferred<F, P>
where
    F: Future<Output = Result<I, P::Error>>,
    I: IntoProducer<IntoProducer = P>,
    P: Producer,
{
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.0.produce().await
    }
}

struct TryDeferredProducer<F, P>(Deferred<F, P>);

impl<F, I, P> Producer for TryDeferredProducer<F, P>
where
    F: Future<Output = Result<I, P::Error>>,
    I: IntoProducer<IntoProducer = P>,
    P: Producer,
{
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match &mut self.0 {
                Deferred::Resolved(producer) => return producer.produce().await,
                Deferred::Pending(deferred) => match deferred.as_mut().await {
                    Ok(resolved) => {
                        #[cfg(feature = "tracing")]
                        tracing::trace!("resolved a deferred producer");
                        self.0 = Deferred::Resolved(resolved.into_producer());
                    }
                    Err(err) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("a deferred producer failed to resolve");
                        self.0 = Deferred::Failed;
                        return Err(err);
                    }
                },
                Deferred::Failed => return Ok(None),
            }
        }
    }
}
