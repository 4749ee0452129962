use core::future::IntoFuture;

use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that awaits every item of the wrapped producer before emitting it.
///
/// The deferred value of an item is awaited inside the `produce` call that pulled it, so items
/// become visible strictly in upstream order.
#[derive(Debug, Clone)]
pub struct Resolve<P> {
    inner: P,
    done: bool,
}

impl<P> Resolve<P> {
    /// Returns a producer that emits the resolved values of the items of `inner`.
    pub fn new(inner: P) -> Self {
        Resolve { inner, done: false }
    }
}

impl<P> Wrapper<P> for Resolve<P> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> Producer for Resolve<P>
where
    P: Producer,
    P::Item: IntoFuture,
{
    type Item = <P::Item as IntoFuture>::Output;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        match self.inner.produce().await? {
            Some(deferred) => Ok(Some(deferred.await)),
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}

/// A `Producer` adaptor for producers of fallible deferred values: successful values are
/// emitted, and a failed one is emitted as the error of this producer.
#[derive(Debug, Clone)]
pub struct TryResolve<P> {
    inner: P,
    done: bool,
}

impl<P> TryResolve<P> {
    /// Returns a producer that emits the resolved values of the items of `inner`.
    pub fn new(inner: P) -> Self {
        TryResolve { inner, done: false }
    }
}

impl<P> Wrapper<P> for TryResolve<P> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, T> Producer for TryResolve<P>
where
    P: Producer,
    P::Item: IntoFuture<Output = Result<T, P::Error>>,
{
    type Item = T;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        match self.inner.produce().await? {
            Some(deferred) => match deferred.await {
                Ok(item) => Ok(Some(item)),
                Err(err) => {
                    self.done = true;
                    Err(err)
                }
            },
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}
