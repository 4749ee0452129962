use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that maps the items emitted by an inner `Producer` with a function.
///
/// The function receives every item together with its index in the upstream sequence.
#[derive(Clone)]
pub struct Map<P, F> {
    inner: P,
    fun: F,
    index: usize,
    done: bool,
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("index", &self.index)
            .finish()
    }
}

impl<B, P: Producer, F: FnMut(P::Item, usize) -> B> Map<P, F> {
    /// Returns a producer that behaves like the wrapped producer except it passes all emitted
    /// items through a function.
    pub fn new(inner: P, fun: F) -> Self {
        Map {
            inner,
            fun,
            index: 0,
            done: false,
        }
    }
}

impl<P, F> Wrapper<P> for Map<P, F> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<B, P: Producer, F: FnMut(P::Item, usize) -> B> Producer for Map<P, F> {
    type Item = B;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        match self.inner.produce().await? {
            Some(item) => {
                let mapped = (self.fun)(item, self.index);
                self.index += 1;
                Ok(Some(mapped))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}
