use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that emits every pair of consecutive items of the inner producer.
///
/// `[1, 2, 3]` becomes `[(1, 2), (2, 3)]`. Every item but the first and the last appears in two
/// pairs, so items have to be [`Clone`].
#[derive(Debug, Clone)]
pub struct Pairwise<P, T> {
    inner: P,
    previous: Option<T>,
    done: bool,
}

impl<P: Producer> Pairwise<P, P::Item>
where
    P::Item: Clone,
{
    /// Returns a producer of the consecutive pairs of items of `inner`.
    pub fn new(inner: P) -> Self {
        Pairwise {
            inner,
            previous: None,
            done: false,
        }
    }
}

impl<P, T> Wrapper<P> for Pairwise<P, T> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Pairwise<P, P::Item>
where
    P::Item: Clone,
{
    type Item = (P::Item, P::Item);
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        let previous = match self.previous.take() {
            Some(previous) => previous,
            None => match self.inner.produce().await? {
                Some(first) => first,
                None => {
                    self.done = true;
                    return Ok(None);
                }
            },
        };

        match self.inner.produce().await? {
            Some(current) => {
                self.previous = Some(current.clone());
                Ok(Some((previous, current)))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    use crate::producer::from_iter;
    use crate::ProducerExt;

    #[test]
    fn pairs_up_neighbours() {
        smol::block_on(async {
            let p = Pairwise::new(from_iter([1, 2, 3, 4]));
            assert_eq!(p.to_vec().await, Ok(vec![(1, 2), (2, 3), (3, 4)]));

            let p = Pairwise::new(from_iter([1]));
            assert_eq!(p.to_vec().await, Ok(vec![]));
        })
    }
}
