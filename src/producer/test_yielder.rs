use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use alloc::boxed::Box;
use alloc::vec::Vec;

use arbitrary::Arbitrary;

/// Decides, following a repeating pattern, whether an async operation completes immediately or
/// first yields back to the executor.
///
/// A `true` in the pattern means "yield": the waker is woken right away and the future returns
/// `Pending` once, so the executor gets to run other tasks before the operation continues.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct TestYielder {
    // Never empty, and contains at least one `false`.
    pattern: Box<[bool]>,
    index: usize,
}

impl TestYielder {
    /// Creates a yielder cycling through `pattern`. A pattern without any `false` gets a
    /// `false` appended, as the operation would never complete otherwise.
    pub fn new(pattern: Box<[bool]>) -> TestYielder {
        if pattern.iter().all(|b| *b) {
            // This also handles empty patterns.
            let mut pat = Vec::with_capacity(pattern.len() + 1);
            pat.extend_from_slice(&pattern);
            pat.push(false);

            TestYielder {
                pattern: pat.into_boxed_slice(),
                index: 0,
            }
        } else {
            TestYielder { pattern, index: 0 }
        }
    }

    /// Completes after yielding to the executor as often as the pattern demands.
    #[inline]
    pub async fn maybe_yield(&mut self) {
        MaybeYield(self).await
    }
}

impl<'a> Arbitrary<'a> for TestYielder {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let pattern = Box::<[bool]>::arbitrary(u)?;
        Ok(Self::new(pattern))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        Box::<[bool]>::size_hint(depth)
    }
}

struct MaybeYield<'s>(&'s mut TestYielder);

impl Future for MaybeYield<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let do_yield = self.0.pattern[self.0.index];
        self.0.index = (self.0.index + 1) % self.0.pattern.len();

        if do_yield {
            cx.waker().wake_by_ref();
            Poll::Pending
        } else {
            Poll::Ready(())
        }
    }
}
