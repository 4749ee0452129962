use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that only emits the items of the inner producer for which a predicate
/// returns `keep`.
///
/// With `keep == true` this is [`filter`](crate::ProducerExt::filter), with `keep == false` it is
/// [`exclude`](crate::ProducerExt::exclude). The predicate receives every examined item together
/// with its index in the upstream sequence.
#[derive(Clone)]
pub struct Filter<P, F> {
    inner: P,
    pred: F,
    keep: bool,
    index: usize,
    done: bool,
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for Filter<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("keep", &self.keep)
            .field("index", &self.index)
            .finish()
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> Filter<P, F> {
    /// Returns a producer that emits the items of `inner` for which `pred` returns `keep`.
    pub fn new(inner: P, pred: F, keep: bool) -> Self {
        Filter {
            inner,
            pred,
            keep,
            index: 0,
            done: false,
        }
    }
}

impl<P, F> Wrapper<P> for Filter<P, F> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> Producer for Filter<P, F> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            match self.inner.produce().await? {
                Some(item) => {
                    let verdict = (self.pred)(&item, self.index);
                    self.index += 1;
                    if verdict == self.keep {
                        return Ok(Some(item));
                    }
                }
                None => self.done = true,
            }
        }

        Ok(None)
    }
}

/// A `Producer` adaptor that drops the first item of the inner producer for which a predicate
/// holds, and emits every other item.
#[derive(Clone)]
pub struct ExcludeFirst<P, F> {
    inner: P,
    pred: F,
    index: usize,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Searching,
    Passing,
    Done,
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for ExcludeFirst<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExcludeFirst")
            .field("inner", &self.inner)
            .field("phase", &self.phase)
            .finish()
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> ExcludeFirst<P, F> {
    /// Returns a producer that emits the items of `inner` except the first one matching `pred`.
    pub fn new(inner: P, pred: F) -> Self {
        ExcludeFirst {
            inner,
            pred,
            index: 0,
            phase: Phase::Searching,
        }
    }
}

impl<P, F> Wrapper<P> for ExcludeFirst<P, F> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> Producer for ExcludeFirst<P, F> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            if self.phase == Phase::Done {
                return Ok(None);
            }

            match self.inner.produce().await? {
                None => self.phase = Phase::Done,
                Some(item) => {
                    if self.phase == Phase::Searching {
                        let matched = (self.pred)(&item, self.index);
                        self.index += 1;
                        if matched {
                            self.phase = Phase::Passing;
                            continue;
                        }
                    }
                    return Ok(Some(item));
                }
            }
        }
    }
}

/// A `Producer` adaptor over a producer of `Option`s that emits the contents of the `Some`
/// items and drops the `None` items.
#[derive(Debug, Clone)]
pub struct ExcludeNull<P> {
    inner: P,
    done: bool,
}

impl<P> ExcludeNull<P> {
    /// Returns a producer that emits the present values of `inner`.
    pub fn new(inner: P) -> Self {
        ExcludeNull { inner, done: false }
    }
}

impl<P> Wrapper<P> for ExcludeNull<P> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<T, P: Producer<Item = Option<T>>> Producer for ExcludeNull<P> {
    type Item = T;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            match self.inner.produce().await? {
                Some(Some(item)) => return Ok(Some(item)),
                Some(None) => {}
                None => self.done = true,
            }
        }

        Ok(None)
    }
}
