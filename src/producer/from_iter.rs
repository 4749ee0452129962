use core::convert::Infallible;
use core::fmt::Debug;

use wrapper::Wrapper;

use crate::producer::Invariant;
use crate::Producer;

/// Produces the items of a synchronous iterator, advancing the iterator exactly once per call to
/// `produce`.
///
/// Created by [`from_iter`](crate::producer::from_iter), and by [`adapt`](crate::producer::adapt)
/// for the owned containers of the standard library.
pub struct FromIter<I>(Invariant<IterProducer<I>>);

impl<I> FromIter<I> {
    /// Wraps an iterator. The iterator is not advanced until the first call to `produce`.
    pub fn new(iter: I) -> Self {
        FromIter(Invariant::new(IterProducer(iter)))
    }
}

impl<I: Debug> Debug for FromIter<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FromIter").field(&self.0.as_ref().0).finish()
    }
}

impl<I> Wrapper<I> for FromIter<I> {
    fn into_inner(self) -> I {
        self.0.into_inner().0
    }
}

impl<I: Iterator> Producer for FromIter<I> {
    type Item = I::Item;
    type Error = Infallible;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.0.produce().await
    }
}

struct IterProducer<I>(I);

impl<I: Iterator> Producer for IterProducer<I> {
    type Item = I::Item;
    type Error = Infallible;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.0.next())
    }
}
