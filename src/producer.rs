//! The [`Producer`] abstraction, the conversions into it, and the lazy operators built on it.
//!
//! ## Obtaining Producers
//!
//! Anything implementing [`IntoProducer`] can be normalised via [`adapt`]: every [`Producer`]
//! (returned unchanged), and the owned sequential containers of the standard library. Other
//! shapes get an explicit constructor:
//!
//! - [`from_iter`] drives a synchronous iterator one step per `produce` call,
//! - [`from_deferred_iter`] does the same but awaits every item the iterator yields,
//! - [`from_stream`] and [`from_try_stream`] drive a [`futures::Stream`],
//! - [`resolve`] and [`try_resolve`] await every item of a producer of futures,
//! - [`from_deferred`] and [`from_try_deferred`] await a future of something producer-like once,
//!   then drive the producer it resolved to.
//!
//! ## Adaptors
//!
//! The lazy operators of [`ProducerExt`](crate::ProducerExt) return the adaptor types of this
//! module. Each adaptor exclusively owns its upstream producer and keeps its own phase, so no
//! adaptor ever pulls from upstream again after reporting the end of its own sequence.
//!
//! ## Development Helpers
//!
//! The [Invariant] adaptor wraps the source producers of this crate. It guarantees that a
//! producer keeps reporting the end of its sequence once it has done so, and during tests it
//! panics when client code advances a producer that already emitted an error.
//!
//! The `TestProducer` (feature `dev`) emits a scripted sequence, optionally yields to the
//! executor between items, and counts how many items were pulled from it.

use core::convert::Infallible;
use core::future::{Future, IntoFuture};

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use either::Either::{self, Left, Right};

#[cfg(test)]
mod invariant;
#[cfg(not(test))]
mod invariant_noop;
#[cfg(test)]
pub use invariant::Invariant;
#[cfg(not(test))]
pub use invariant_noop::Invariant;

mod from_deferred;
mod from_iter;
mod from_stream;
mod resolve;

pub use from_deferred::{FromDeferred, FromTryDeferred};
pub use from_iter::FromIter;
pub use from_stream::{FromStream, FromTryStream};
pub use resolve::{Resolve, TryResolve};

mod chain;
mod concat;
mod endpoints;
mod filter;
mod initial;
mod map;
mod map_err;
mod pairwise;
mod remove;
mod scan;
mod slice;
mod take_while;
mod zip;

pub use chain::Chain;
pub use concat::Concat;
pub use endpoints::{Push, Unshift};
pub use filter::{ExcludeFirst, ExcludeNull, Filter};
pub use initial::Initial;
pub use map::Map;
pub use map_err::MapErr;
pub use pairwise::Pairwise;
pub use remove::{Remove, RemoveFirst};
pub use scan::{Scan, Scan1};
pub use slice::Slice;
pub use take_while::{SkipWhile, TakeWhile};
pub use zip::Zip;

#[cfg(test)]
mod relapsing;
#[cfg(test)]
pub(crate) use relapsing::Relapsing;

#[cfg(any(test, feature = "dev"))]
mod test_producer;
#[cfg(any(test, feature = "dev"))]
mod test_yielder;
#[cfg(any(test, feature = "dev"))]
pub use test_producer::{PullCounter, TestProducer, TestProducerBuilder};
#[cfg(any(test, feature = "dev"))]
pub use test_yielder::TestYielder;

/// A `Producer` produces a potentially infinite sequence, one item at a time.
///
/// The sequence consists of an arbitrary number of values of type `Self::Item`, followed by the
/// end of the sequence. A producer can also signal an error of type `Self::Error` instead of
/// producing an item.
///
/// Producers are *once*: they can be consumed a single time, strictly forward, by a single
/// consumer. All operators of this crate take their upstream producer by value, so that nobody
/// else can advance it afterwards.
pub trait Producer {
    /// The sequence produced by this producer consists of *arbitrarily many* values of this type.
    type Item;
    /// The type of errors the producer can emit instead of doing its job.
    type Error;

    /// Attempt to produce the next item. Yields `Ok(None)` once the sequence has ended.
    /// If the sequence has not ended yet, but no item is available at the time of calling,
    /// the returned future stays pending until an item becomes available (or it becomes clear
    /// that the sequence has ended or an error should be yielded).
    ///
    /// #### Invariants
    ///
    /// After this function has returned `Ok(None)`, every further call must return `Ok(None)`
    /// as well.
    ///
    /// After this function has returned an error, the producer counts as exhausted, and it must
    /// not be called anymore.
    fn produce(&mut self) -> impl Future<Output = Result<Option<Self::Item>, Self::Error>>;
}

/// Conversion into a [`Producer`].
///
/// Which impl applies decides, once and for all, how an input is driven: a [`Producer`] is used
/// as is, a container is drained front to back.
pub trait IntoProducer {
    /// The type of items being produced.
    type Item;

    /// The type of errors the producer may emit.
    type Error;

    /// Which kind of producer are we turning this into?
    type IntoProducer: Producer<Item = Self::Item, Error = Self::Error>;

    /// Creates a producer from a value.
    fn into_producer(self) -> Self::IntoProducer;
}

impl<P: Producer> IntoProducer for P {
    type Item = P::Item;
    type Error = P::Error;
    type IntoProducer = P;

    #[inline]
    fn into_producer(self) -> P {
        self
    }
}

macro_rules! container_into_producer {
    ($($container:ty),*) => {
        $(
            impl<T> IntoProducer for $container {
                type Item = T;
                type Error = Infallible;
                type IntoProducer = FromIter<<$container as IntoIterator>::IntoIter>;

                fn into_producer(self) -> Self::IntoProducer {
                    FromIter::new(IntoIterator::into_iter(self))
                }
            }
        )*
    };
}

container_into_producer!(Vec<T>, VecDeque<T>, Box<[T]>);

impl<T, const N: usize> IntoProducer for [T; N] {
    type Item = T;
    type Error = Infallible;
    type IntoProducer = FromIter<core::array::IntoIter<T, N>>;

    fn into_producer(self) -> Self::IntoProducer {
        FromIter::new(IntoIterator::into_iter(self))
    }
}

/// Either of two producers with the same item and error types is a producer as well.
impl<L, R> Producer for Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item, Error = L::Error>,
{
    type Item = L::Item;
    type Error = L::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        match self {
            Left(p) => p.produce().await,
            Right(p) => p.produce().await,
        }
    }
}

/// Normalises any producer-like input into a [`Producer`].
pub fn adapt<I: IntoProducer>(input: I) -> I::IntoProducer {
    input.into_producer()
}

/// Drives a synchronous iterator, one step per call to `produce`.
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter::new(iter.into_iter())
}

/// Drives a synchronous iterator of deferred values, awaiting each value before producing it.
pub fn from_deferred_iter<I>(iter: I) -> Resolve<FromIter<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: IntoFuture,
{
    Resolve::new(from_iter(iter))
}

/// Drives a [`futures::Stream`], one item per call to `produce`.
pub fn from_stream<S: futures::Stream>(stream: S) -> FromStream<S> {
    FromStream::new(stream)
}

/// Drives a [`futures::Stream`] of results, emitting the errors as producer errors.
pub fn from_try_stream<S, T, E>(stream: S) -> FromTryStream<S>
where
    S: futures::Stream<Item = Result<T, E>>,
{
    FromTryStream::new(stream)
}

/// Awaits every item of a producer of deferred values before producing it.
pub fn resolve<P>(producer: P) -> Resolve<P>
where
    P: Producer,
    P::Item: IntoFuture,
{
    Resolve::new(producer)
}

/// Awaits every item of a producer of fallible deferred values, emitting failures as producer
/// errors.
pub fn try_resolve<P, T>(producer: P) -> TryResolve<P>
where
    P: Producer,
    P::Item: IntoFuture<Output = Result<T, P::Error>>,
{
    TryResolve::new(producer)
}

/// Awaits a deferred producer-like value on the first call to `produce`, and from then on drives
/// the producer it resolved to.
pub fn from_deferred<F>(
    deferred: F,
) -> FromDeferred<F::IntoFuture, <F::Output as IntoProducer>::IntoProducer>
where
    F: IntoFuture,
    F::Output: IntoProducer,
{
    FromDeferred::new(deferred.into_future())
}

/// Like [`from_deferred`], but for deferred values that can fail to resolve.
pub fn from_try_deferred<F, I>(deferred: F) -> FromTryDeferred<F::IntoFuture, I::IntoProducer>
where
    F: IntoFuture<Output = Result<I, I::Error>>,
    I: IntoProducer,
{
    FromTryDeferred::new(deferred.into_future())
}
