use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that emits all items of the inner producer, followed by one more item.
#[derive(Debug, Clone)]
pub struct Push<P, T> {
    inner: P,
    /// `None` once it has been emitted.
    last: Option<T>,
    inner_done: bool,
}

impl<P: Producer> Push<P, P::Item> {
    /// Returns a producer that emits the items of `inner` and then `last`.
    pub fn new(inner: P, last: P::Item) -> Self {
        Push {
            inner,
            last: Some(last),
            inner_done: false,
        }
    }
}

impl<P, T> Wrapper<P> for Push<P, T> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Push<P, P::Item> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if !self.inner_done {
            match self.inner.produce().await? {
                Some(item) => return Ok(Some(item)),
                None => self.inner_done = true,
            }
        }

        Ok(self.last.take())
    }
}

/// A `Producer` adaptor that emits one item, followed by all items of the inner producer.
#[derive(Debug, Clone)]
pub struct Unshift<P, T> {
    inner: P,
    /// `None` once it has been emitted.
    first: Option<T>,
    done: bool,
}

impl<P: Producer> Unshift<P, P::Item> {
    /// Returns a producer that emits `first` and then the items of `inner`.
    pub fn new(inner: P, first: P::Item) -> Self {
        Unshift {
            inner,
            first: Some(first),
            done: false,
        }
    }
}

impl<P, T> Wrapper<P> for Unshift<P, T> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Unshift<P, P::Item> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(first) = self.first.take() {
            return Ok(Some(first));
        }

        if self.done {
            return Ok(None);
        }

        let next = self.inner.produce().await?;
        if next.is_none() {
            self.done = true;
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;
    use alloc::vec::Vec;

    use crate::producer::{from_iter, TestProducerBuilder};
    use crate::ProducerExt;

    #[test]
    fn push_appends_one_item() {
        smol::block_on(async {
            let mut p = Push::new(from_iter([1, 2]), 3);
            assert_eq!(p.produce().await, Ok(Some(1)));
            assert_eq!(p.produce().await, Ok(Some(2)));
            assert_eq!(p.produce().await, Ok(Some(3)));
            assert_eq!(p.produce().await, Ok(None));
            assert_eq!(p.produce().await, Ok(None));

            let p = Push::new(from_iter(Vec::new()), 'z');
            assert_eq!(p.to_vec().await, Ok(vec!['z']));
        })
    }

    #[test]
    fn unshift_emits_before_pulling() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new(vec![2, 3], Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();
            let mut p = Unshift::new(upstream, 1);

            assert_eq!(p.produce().await, Ok(Some(1)));
            assert_eq!(pulls.get(), 0);
            assert_eq!(p.to_vec().await, Ok(vec![2, 3]));
        })
    }
}
