use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that emits the items of the inner producer whose positions lie in
/// `start..end`, where an `end` of `None` means "unbounded".
///
/// Leading items are pulled and discarded. Once the position `end` is reached, the inner
/// producer is not pulled from anymore, and if the range is empty it is not pulled from at all.
#[derive(Debug, Clone)]
pub struct Slice<P> {
    inner: P,
    /// Position of the next item to be pulled from `inner`.
    position: usize,
    start: usize,
    end: Option<usize>,
    done: bool,
}

impl<P> Slice<P> {
    /// Returns a producer that emits the items of `inner` with positions in `start..end`.
    pub fn new(inner: P, start: usize, end: Option<usize>) -> Self {
        Slice {
            inner,
            position: 0,
            start,
            end,
            done: end.is_some_and(|end| end <= start),
        }
    }

    fn reached_end(&self) -> bool {
        self.end.is_some_and(|end| self.position >= end)
    }
}

impl<P> Wrapper<P> for Slice<P> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Slice<P> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            if self.done || self.reached_end() {
                self.done = true;
                return Ok(None);
            }

            match self.inner.produce().await? {
                Some(item) => {
                    let position = self.position;
                    self.position += 1;
                    if position >= self.start {
                        return Ok(Some(item));
                    }
                }
                None => self.done = true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    use crate::producer::{from_iter, TestProducerBuilder};
    use crate::ProducerExt;

    #[test]
    fn slices() {
        smol::block_on(async {
            let p = Slice::new(from_iter([1, 2, 3, 4, 5]), 1, Some(4));
            assert_eq!(p.to_vec().await, Ok(vec![2, 3, 4]));

            let p = Slice::new(from_iter([1, 2, 3, 4, 5]), 3, None);
            assert_eq!(p.to_vec().await, Ok(vec![4, 5]));

            let p = Slice::new(from_iter([1, 2, 3]), 1, Some(10));
            assert_eq!(p.to_vec().await, Ok(vec![2, 3]));

            let p = Slice::new(from_iter([1, 2, 3]), 5, None);
            assert_eq!(p.to_vec().await, Ok(vec![]));
        })
    }

    #[test]
    fn empty_range_never_pulls() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new(vec![1, 2, 3], Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();
            let p = Slice::new(upstream, 2, Some(2));

            assert_eq!(p.to_vec().await, Ok(vec![]));
            assert_eq!(pulls.get(), 0);
        })
    }

    #[test]
    fn no_pulls_past_the_end() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new(vec![1, 2, 3, 4, 5], Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();
            let p = Slice::new(upstream, 0, Some(2));

            assert_eq!(p.to_vec().await, Ok(vec![1, 2]));
            assert_eq!(pulls.get(), 2);
        })
    }

    #[test]
    fn takes_from_an_infinite_producer() {
        smol::block_on(async {
            let p = Slice::new(from_iter(0u64..), 10, Some(13));
            assert_eq!(p.to_vec().await, Ok(vec![10, 11, 12]));
        })
    }
}
