use wrapper::Wrapper;

use crate::Producer;

#[derive(Debug, Clone)]
enum State<T> {
    Start,
    /// Holds the item pulled last, which is only emitted once a successor turns up.
    Holding(T),
    Done,
}

/// A `Producer` adaptor that emits all items of the inner producer except the last one.
///
/// Each item is held back until the next item has been pulled, so the adaptor runs one item
/// ahead of its consumer.
#[derive(Debug, Clone)]
pub struct Initial<P, T> {
    inner: P,
    state: State<T>,
}

impl<P: Producer> Initial<P, P::Item> {
    /// Returns a producer that emits all items of `inner` but the last.
    pub fn new(inner: P) -> Self {
        Initial {
            inner,
            state: State::Start,
        }
    }
}

impl<P, T> Wrapper<P> for Initial<P, T> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Initial<P, P::Item> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match core::mem::replace(&mut self.state, State::Done) {
                State::Done => return Ok(None),
                State::Start => {
                    if let Some(first) = self.inner.produce().await? {
                        self.state = State::Holding(first);
                    }
                }
                State::Holding(held) => {
                    return match self.inner.produce().await? {
                        Some(next) => {
                            self.state = State::Holding(next);
                            Ok(Some(held))
                        }
                        None => Ok(None),
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;
    use alloc::vec::Vec;

    use crate::producer::from_iter;
    use crate::ProducerExt;

    #[test]
    fn drops_the_last_item() {
        smol::block_on(async {
            assert_eq!(
                Initial::new(from_iter([1, 2, 3, 4])).to_vec().await,
                Ok(vec![1, 2, 3])
            );
            assert_eq!(Initial::new(from_iter([1])).to_vec().await, Ok(vec![]));
            assert_eq!(
                Initial::new(from_iter(Vec::<u8>::new())).to_vec().await,
                Ok(vec![])
            );
        })
    }
}
