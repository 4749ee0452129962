use core::convert::{AsMut, AsRef};

use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` wrapper that makes the end of a sequence sticky.
///
/// This is the production build of the wrapper: the panicking contract checks of the test build
/// compile away, and an error is treated as the end of the sequence.
///
/// #### Invariants
///
/// - Once `produce` has returned `Ok(None)` or an error, further calls return `Ok(None)` without
///   touching the wrapped producer.
#[derive(Debug, Copy, Clone, Hash, Ord, Eq, PartialEq, PartialOrd)]
pub struct Invariant<P> {
    /// An implementer of the `Producer` trait.
    inner: P,
    /// `true` while the wrapped producer may be advanced.
    active: bool,
}

impl<P> Invariant<P> {
    /// Return a `Producer` that behaves exactly like the wrapped `Producer`
    /// `inner`, except that it never advances `inner` after its sequence has ended.
    pub fn new(inner: P) -> Self {
        Invariant {
            inner,
            active: true,
        }
    }
}

impl<P> AsRef<P> for Invariant<P> {
    fn as_ref(&self) -> &P {
        &self.inner
    }
}

impl<P> AsMut<P> for Invariant<P> {
    fn as_mut(&mut self) -> &mut P {
        &mut self.inner
    }
}

impl<P> Wrapper<P> for Invariant<P> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Invariant<P> {
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if !self.active {
            return Ok(None);
        }

        match self.inner.produce().await {
            Ok(Some(item)) => Ok(Some(item)),
            Ok(None) => {
                self.active = false;
                Ok(None)
            }
            Err(err) => {
                self.active = false;
                Err(err)
            }
        }
    }
}
