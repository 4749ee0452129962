use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that maps the error emitted by an inner `Producer` with a function.
///
/// Mostly useful to give producers of different error types a common one, as the operators
/// combining several producers require.
#[derive(Clone)]
pub struct MapErr<P, F> {
    inner: P,
    fun: F,
    done: bool,
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for MapErr<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &self.inner)
            .field("done", &self.done)
            .finish()
    }
}

impl<E, P: Producer, F: FnMut(P::Error) -> E> MapErr<P, F> {
    /// Returns a producer that behaves like the wrapped producer except it passes the emitted
    /// error through a function.
    pub fn new(inner: P, fun: F) -> Self {
        MapErr {
            inner,
            fun,
            done: false,
        }
    }
}

impl<P, F> Wrapper<P> for MapErr<P, F> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<E, P: Producer, F: FnMut(P::Error) -> E> Producer for MapErr<P, F> {
    type Item = P::Item;
    type Error = E;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        let next = self.inner.produce().await.map_err(&mut self.fun)?;
        if next.is_none() {
            self.done = true;
        }
        Ok(next)
    }
}
