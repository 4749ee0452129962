use futures::future::join;

use crate::Producer;

/// A `Producer` adaptor that pairs up the items of two producers.
///
/// Both producers are asked for their next item at the same time, and the pair is emitted once
/// both have answered. The sequence ends as soon as either producer ends; an item the other
/// producer emitted in that same step is dropped.
#[derive(Debug, Clone)]
pub struct Zip<P, Q> {
    first: P,
    second: Q,
    done: bool,
}

impl<P, Q> Zip<P, Q> {
    /// Returns a producer of pairs of items of `first` and `second`.
    pub fn new(first: P, second: Q) -> Self {
        Zip {
            first,
            second,
            done: false,
        }
    }

    /// Consumes `self` and returns both wrapped producers.
    pub fn into_inner(self) -> (P, Q) {
        (self.first, self.second)
    }
}

impl<P, Q> Producer for Zip<P, Q>
where
    P: Producer,
    Q: Producer<Error = P::Error>,
{
    type Item = (P::Item, Q::Item);
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        let (a, b) = join(self.first.produce(), self.second.produce()).await;
        match (a?, b?) {
            (Some(a), Some(b)) => Ok(Some((a, b))),
            _ => {
                self.done = true;
                Ok(None)
            }
        }
    }
}
