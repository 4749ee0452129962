use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that emits the items of the inner producer as long as a predicate
/// returns `expected` for them.
///
/// With `expected == true` this is [`take_while`](crate::ProducerExt::take_while), with
/// `expected == false` it is [`take_until`](crate::ProducerExt::take_until). The first item that
/// ends the sequence is dropped, and the inner producer is never pulled from again.
#[derive(Clone)]
pub struct TakeWhile<P, F> {
    inner: P,
    pred: F,
    expected: bool,
    index: usize,
    done: bool,
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for TakeWhile<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TakeWhile")
            .field("inner", &self.inner)
            .field("expected", &self.expected)
            .field("done", &self.done)
            .finish()
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> TakeWhile<P, F> {
    /// Returns a producer that emits the leading items of `inner` for which `pred` returns
    /// `expected`.
    pub fn new(inner: P, pred: F, expected: bool) -> Self {
        TakeWhile {
            inner,
            pred,
            expected,
            index: 0,
            done: false,
        }
    }
}

impl<P, F> Wrapper<P> for TakeWhile<P, F> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> Producer for TakeWhile<P, F> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        match self.inner.produce().await? {
            Some(item) if (self.pred)(&item, self.index) == self.expected => {
                self.index += 1;
                Ok(Some(item))
            }
            _ => {
                self.done = true;
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Skipping,
    Passing,
    Done,
}

/// A `Producer` adaptor that drops the items of the inner producer as long as a predicate
/// returns `expected` for them, and emits everything from the first other item on.
///
/// With `expected == true` this is [`skip_while`](crate::ProducerExt::skip_while), with
/// `expected == false` it is [`skip_until`](crate::ProducerExt::skip_until). Once an item has
/// been let through, the predicate is not called anymore.
#[derive(Clone)]
pub struct SkipWhile<P, F> {
    inner: P,
    pred: F,
    expected: bool,
    index: usize,
    phase: Phase,
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for SkipWhile<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkipWhile")
            .field("inner", &self.inner)
            .field("expected", &self.expected)
            .field("phase", &self.phase)
            .finish()
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> SkipWhile<P, F> {
    /// Returns a producer that drops the leading items of `inner` for which `pred` returns
    /// `expected`.
    pub fn new(inner: P, pred: F, expected: bool) -> Self {
        SkipWhile {
            inner,
            pred,
            expected,
            index: 0,
            phase: Phase::Skipping,
        }
    }
}

impl<P, F> Wrapper<P> for SkipWhile<P, F> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer, F: FnMut(&P::Item, usize) -> bool> Producer for SkipWhile<P, F> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match self.phase {
                Phase::Done => return Ok(None),
                Phase::Passing => {
                    let next = self.inner.produce().await?;
                    if next.is_none() {
                        self.phase = Phase::Done;
                    }
                    return Ok(next);
                }
                Phase::Skipping => match self.inner.produce().await? {
                    Some(item) => {
                        let skip = (self.pred)(&item, self.index) == self.expected;
                        self.index += 1;
                        if !skip {
                            self.phase = Phase::Passing;
                            return Ok(Some(item));
                        }
                    }
                    None => self.phase = Phase::Done,
                },
            }
        }
    }
}
