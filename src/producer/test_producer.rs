use core::cell::Cell;
use core::fmt::Debug;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::{self, Vec};

use arbitrary::{size_hint, Arbitrary};

use crate::producer::{Invariant, TestYielder};
use crate::Producer;

/// If you need to test code that works with arbitrary producers, use this one. You choose which
/// items it emits, whether it then ends or emits an error, and when its `produce` futures yield to
/// the executor instead of completing right away. It also counts how often it was pulled from,
/// which is what laziness tests need. Beyond manual control, the [`Arbitrary`] implementation lets
/// you test against various producer behaviours automatically.
///
/// Create new [`TestProducer`]s either via a [`TestProducerBuilder`] or via the implementation of
/// [`Arbitrary`].
pub struct TestProducer<Item, Error>(Invariant<ScriptedProducer<Item, Error>>);

impl<Item, Error> TestProducer<Item, Error> {
    /// Returns a slice of all items that will be produced in the future.
    pub fn remaining(&self) -> &[Item] {
        self.0.as_ref().items.as_slice()
    }

    /// Returns a handle that reports how often this producer has been pulled from, counting the
    /// call which reported the end of the sequence (or the error).
    ///
    /// The handle stays usable after the producer has been moved into an operator.
    pub fn pulls(&self) -> PullCounter {
        self.0.as_ref().pulls.clone()
    }

    /// Returns whether the end of the sequence or the error was already emitted.
    pub fn did_already_emit_last(&self) -> bool {
        self.0.as_ref().last.is_none()
    }
}

impl<Item: Debug, Error: Debug> Debug for TestProducer<Item, Error> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.0.as_ref();
        f.debug_struct("TestProducer")
            .field("remaining", &inner.items.as_slice())
            .field("last", &inner.last)
            .field("pulls", &inner.pulls.get())
            .finish()
    }
}

impl<Item, Error> Producer for TestProducer<Item, Error> {
    type Item = Item;
    type Error = Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.0.produce().await
    }
}

impl<'a, Item: Arbitrary<'a>, Error: Arbitrary<'a>> Arbitrary<'a> for TestProducer<Item, Error> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let items = Vec::<Item>::arbitrary(u)?;
        let last = Result::<(), Error>::arbitrary(u)?;
        let yield_pattern = Box::<[bool]>::arbitrary(u)?;

        Ok(TestProducerBuilder::new(items, last)
            .yield_pattern(yield_pattern)
            .build())
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        size_hint::and_all(&[
            Vec::<Item>::size_hint(depth),
            Result::<(), Error>::size_hint(depth),
            Box::<[bool]>::size_hint(depth),
        ])
    }
}

/// A [builder](https://rust-unofficial.github.io/patterns/patterns/creational/builder.html) for
/// [`TestProducer`].
pub struct TestProducerBuilder<Item, Error> {
    items: Vec<Item>,
    last: Result<(), Error>,
    yield_pattern: Option<Box<[bool]>>,
}

impl<Item, Error> TestProducerBuilder<Item, Error> {
    /// Creates a new [`TestProducerBuilder`].
    ///
    /// The resulting producer will successfully produce the given `items`, and then either end
    /// its sequence (`Ok(())`) or emit the given error.
    pub fn new(items: Vec<Item>, last: Result<(), Error>) -> Self {
        TestProducerBuilder {
            items,
            last,
            yield_pattern: None,
        }
    }

    /// Sets a pattern of whether to complete `produce` immediately (`false`), or to yield back
    /// to the executor first (`true`). The producer cycles through the pattern.
    ///
    /// If all booleans are `true`, a single `false` will be appended (otherwise, the producer
    /// would never complete its operations).
    pub fn yield_pattern(mut self, pattern: Box<[bool]>) -> Self {
        self.yield_pattern = Some(pattern);
        self
    }

    /// Creates a fully configured [`TestProducer`].
    pub fn build(self) -> TestProducer<Item, Error> {
        TestProducer(Invariant::new(ScriptedProducer {
            items: self.items.into_iter(),
            last: Some(self.last),
            yielder: self.yield_pattern.map(TestYielder::new),
            pulls: PullCounter::default(),
        }))
    }
}

/// A shared count of the `produce` calls that reached a [`TestProducer`].
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// The number of pulls so far.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }
}

struct ScriptedProducer<Item, Error> {
    items: vec::IntoIter<Item>,
    last: Option<Result<(), Error>>,
    yielder: Option<TestYielder>,
    pulls: PullCounter,
}

impl<Item, Error> Producer for ScriptedProducer<Item, Error> {
    type Item = Item;
    type Error = Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.pulls.increment();

        if let Some(yielder) = &mut self.yielder {
            yielder.maybe_yield().await;
        }

        match self.items.next() {
            Some(item) => Ok(Some(item)),
            None => match self.last.take() {
                Some(Err(err)) => Err(err),
                _ => Ok(None),
            },
        }
    }
}
