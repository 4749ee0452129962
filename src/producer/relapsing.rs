use core::convert::Infallible;

use alloc::vec::Vec;

use crate::Producer;

/// A deliberately ill-behaved producer: it emits its items, reports the end of the sequence, and
/// then starts over from the first item. Not wrapped in an `Invariant`, so operators built on it
/// have to keep track of the end themselves.
#[derive(Debug, Clone)]
pub(crate) struct Relapsing<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> Relapsing<T> {
    pub(crate) fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Relapsing {
            items: items.into_iter().collect(),
            position: 0,
        }
    }
}

impl<T: Clone> Producer for Relapsing<T> {
    type Item = T;
    type Error = Infallible;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        match self.items.get(self.position) {
            Some(item) => {
                self.position += 1;
                Ok(Some(item.clone()))
            }
            None => {
                self.position = 0;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_over_after_the_end() {
        smol::block_on(async {
            let mut p = Relapsing::new([1, 2]);
            assert_eq!(p.produce().await, Ok(Some(1)));
            assert_eq!(p.produce().await, Ok(Some(2)));
            assert_eq!(p.produce().await, Ok(None));
            assert_eq!(p.produce().await, Ok(Some(1)));
        })
    }
}
