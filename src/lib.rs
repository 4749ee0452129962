#![no_std]
#![allow(clippy::type_complexity)]
#![allow(async_fn_in_trait)]

//! Lazy, single-pass operators over asynchronous sequences.
//!
//! This crate normalises several shapes of asynchronous and synchronous sequences into one pull
//! interface, the [`Producer`] trait, and offers a catalogue of operators over it:
//!
//! - lazy operators such as [`map`](ProducerExt::map), [`filter`](ProducerExt::filter),
//!   [`slice`](ProducerExt::slice) or [`concat`](ProducerExt::concat) return new producers which
//!   do nothing until they are asked for an item, and
//! - terminal operators such as [`to_vec`](ProducerExt::to_vec), [`fold`](ProducerExt::fold) or
//!   [`equal`](ProducerExt::equal) drive a producer and compute a single result.
//!
//! ```
//! use async_once::prelude::*;
//! # smol::block_on(async {
//! let evens = adapt(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|n, _| n % 2 == 0)
//!     .map(|n, _| n * 10);
//! assert_eq!(evens.to_vec().await, Ok(vec![20, 40, 60]));
//! # });
//! ```
//!
//! ## Fundamental Design Choices
//!
//! - Async trait methods, no poll-based interfaces.
//! - `nostd` by default, with `alloc` for the operators that collect.
//! - Producers are *once*: every operator takes its producer by value, and a producer is advanced
//!   by a single consumer, strictly forward.
//! - Fatal errors, no resumption of processing after a producer emitted an error.
//! - Nothing is buffered beyond the single item some operators have to look ahead.
//!
//! ## Caveats
//!
//! - The futures returned by async methods are `!Send` whenever the producers involved are.
//! - Dropping a `produce` future before polling it to completion may lose the item it was
//!   working on. Resolving a deferred producer is the only progress that is never lost.
//!
//! ## Module Overview
//!
//! The [`producer`] module defines the [`Producer`] and [`IntoProducer`] traits, the constructors
//! for the supported input shapes, and the adaptor types of the lazy operators. The operators
//! themselves are methods of the [`ProducerExt`] trait. The [`curried`] module offers every
//! operator as a function that first takes the arguments and only then the producer.

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod errors;
pub use errors::*;

mod index;
pub use index::IntoIndex;

pub mod compare;
pub mod curried;
pub mod producer;

pub use producer::{adapt, IntoProducer, Producer};

mod producer_ext;
pub use producer_ext::ProducerExt;

#[cfg(feature = "std")]
mod groups;
#[cfg(feature = "std")]
pub use groups::Groups;

/// A “prelude” for crates using the `async_once` crate.
///
/// This prelude is similar to the standard library's prelude in that you'll almost always want to
/// import its entire contents, but unlike the standard library's prelude you'll have to do so
/// manually:
///
/// ```
/// # #[allow(unused_imports)]
/// use async_once::prelude::*;
/// ```
///
/// The prelude may grow over time.
pub mod prelude {
    pub use core::convert::Infallible;

    pub use crate::producer::{
        adapt, from_deferred, from_deferred_iter, from_iter, from_stream, from_try_deferred,
        from_try_stream, resolve, try_resolve,
    };
    pub use crate::{IntoProducer, OnceError, Producer, ProducerExt};
}
