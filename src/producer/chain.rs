use crate::Producer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    First,
    Second,
    Done,
}

/// A `Producer` adaptor that emits all items of one producer, and then all items of another.
///
/// The second producer is not pulled from before the first one has ended.
#[derive(Debug, Clone)]
pub struct Chain<P, Q> {
    first: P,
    second: Q,
    phase: Phase,
}

impl<P, Q> Chain<P, Q> {
    /// Returns a producer that emits the items of `first` followed by the items of `second`.
    pub fn new(first: P, second: Q) -> Self {
        Chain {
            first,
            second,
            phase: Phase::First,
        }
    }

    /// Consumes `self` and returns both wrapped producers.
    pub fn into_inner(self) -> (P, Q) {
        (self.first, self.second)
    }
}

impl<P, Q> Producer for Chain<P, Q>
where
    P: Producer,
    Q: Producer<Item = P::Item, Error = P::Error>,
{
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.phase == Phase::First {
            match self.first.produce().await? {
                Some(item) => return Ok(Some(item)),
                None => self.phase = Phase::Second,
            }
        }

        if self.phase == Phase::Second {
            match self.second.produce().await? {
                Some(item) => return Ok(Some(item)),
                None => self.phase = Phase::Done,
            }
        }

        Ok(None)
    }
}
