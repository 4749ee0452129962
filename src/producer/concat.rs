use crate::{IntoProducer, Producer};

/// A `Producer` adaptor that flattens a producer of producer-like values.
///
/// Every item of the outer producer is converted via [`IntoProducer`] and drained completely
/// before the next item of the outer producer is pulled. Empty inner producers contribute
/// nothing.
#[derive(Debug, Clone)]
pub struct Concat<P, I> {
    outer: P,
    current: Option<I>,
    done: bool,
}

impl<P> Concat<P, <P::Item as IntoProducer>::IntoProducer>
where
    P: Producer,
    P::Item: IntoProducer<Error = P::Error>,
{
    /// Returns a producer that emits the items of all producers emitted by `outer`, in order.
    pub fn new(outer: P) -> Self {
        Concat {
            outer,
            current: None,
            done: false,
        }
    }
}

impl<P, I> Producer for Concat<P, I>
where
    P: Producer,
    P::Item: IntoProducer<IntoProducer = I, Error = P::Error>,
    I: Producer<Error = P::Error>,
{
    type Item = I::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            if let Some(current) = &mut self.current {
                match current.produce().await? {
                    Some(item) => return Ok(Some(item)),
                    None => self.current = None,
                }
            }

            match self.outer.produce().await? {
                Some(next) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("concat advances to the next inner producer");
                    self.current = Some(next.into_producer());
                }
                None => self.done = true,
            }
        }

        Ok(None)
    }
}
