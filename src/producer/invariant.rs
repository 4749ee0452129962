use core::convert::{AsMut, AsRef};

use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` wrapper that makes the end of a sequence sticky, and panics when callers violate
/// API contracts such as advancing a producer after it emitted an error.
///
/// The panicking checks only run when testing code (more specifically, when `#[cfg(test)]`
/// applies). In production builds, the wrapper still keeps reporting the end of the sequence
/// once it has done so, but it treats an error as the end of the sequence instead of panicking.
///
/// All source producers implemented in this crate use this wrapper internally already.
///
/// #### Invariants
///
/// The wrapper enforces the following invariants:
///
/// - Once `produce` has returned `Ok(None)`, further calls return `Ok(None)` without touching the
///   wrapped producer.
/// - Must not call `produce` after it had returned an error.
#[derive(Debug, Copy, Clone, Hash, Ord, Eq, PartialEq, PartialOrd)]
pub struct Invariant<P> {
    /// An implementer of the `Producer` trait.
    inner: P,
    /// `true` while the wrapped producer may be advanced, `false` once its sequence has ended.
    active: bool,
    /// Set once the wrapped producer emitted an error.
    errored: bool,
}

impl<P> Invariant<P> {
    /// Return a `Producer` that behaves exactly like the wrapped `Producer`
    /// `inner`, except that - when running tests - it performs runtime
    /// validation of API invariants and panics if they are violated by a
    /// caller.
    pub fn new(inner: P) -> Self {
        Invariant {
            inner,
            active: true,
            errored: false,
        }
    }

    /// Panics if the wrapped producer already emitted an error.
    pub fn check_errored(&self) {
        if self.errored {
            panic!("may not call `Producer` methods after the producer emitted an error");
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
        self.check_errored();

        if !self.active {
            return Ok(None);
        }

        self.inner
            .produce()
            .await
            .inspect(|item| {
                // Mark the producer as inactive once the sequence has ended.
                if item.is_none() {
                    self.active = false;
                }
            })
            .inspect_err(|_| {
                self.active = false;
                self.errored = true;
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::producer::TestProducerBuilder;

    use alloc::vec;

    #[test]
    fn keeps_reporting_the_end() {
        smol::block_on(async {
            let counter;
            let mut p = {
                let test = TestProducerBuilder::new(vec![1u8], Ok::<(), ()>(())).build();
                counter = test.pulls();
                Invariant::new(test)
            };

            assert_eq!(p.produce().await, Ok(Some(1)));
            assert_eq!(p.produce().await, Ok(None));
            assert_eq!(p.produce().await, Ok(None));
            assert_eq!(p.produce().await, Ok(None));
            assert_eq!(counter.get(), 2);
        })
    }

    // Panic conditions:
    //
    // - `produce()` must not be called after an error

    #[test]
    #[should_panic(expected = "may not call `Producer` methods after the producer emitted an error")]
    fn panics_on_produce_after_error() {
        smol::block_on(async {
            let mut p = Invariant::new(TestProducerBuilder::new(vec![1u8], Err(-1i8)).build());
            loop {
                // Call `produce()` until the error is emitted.
                if p.produce().await.is_err() {
                    break;
                }
            }

            let _ = p.produce().await;
        })
    }
}
