use core::fmt::{self, Display};

use thiserror::Error;

/// Why a value could not be used as a position in a sequence.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum InvalidIndexError {
    /// The index was less than zero.
    #[error("an index must not be negative")]
    Negative,
    /// The index was infinite or NaN.
    #[error("an index must be finite")]
    NotFinite,
    /// The index had a fractional part.
    #[error("an index must be an integer")]
    NotInteger,
    /// The index does not fit into a `usize`.
    #[error("the index does not fit into a usize")]
    TooLarge,
}

/// Everything that can go wrong in the operators which need more than the upstream producer can
/// guarantee: [`fold1`](crate::ProducerExt::fold1), [`scan1`](crate::ProducerExt::scan1) and
/// [`index`](crate::ProducerExt::index).
///
/// `E` is the `Error` type of the upstream producer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OnceError<E> {
    /// The operator needs at least one item, but the producer was exhausted immediately.
    EmptyInput,
    /// The operator was given an index it cannot use. Reported before touching the producer.
    InvalidIndex(InvalidIndexError),
    /// The upstream producer emitted an error.
    Producer(E),
}

impl<E> OnceError<E> {
    /// Returns the upstream error, if that is what this is.
    pub fn into_producer_error(self) -> Option<E> {
        match self {
            OnceError::Producer(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> From<InvalidIndexError> for OnceError<E> {
    fn from(err: InvalidIndexError) -> Self {
        OnceError::InvalidIndex(err)
    }
}

impl<E> Display for OnceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnceError::EmptyInput => {
                write!(f, "Expected at least one item, but the producer emitted none")
            }
            OnceError::InvalidIndex(err) => write!(f, "Invalid index: {}", err),
            OnceError::Producer(_) => write!(f, "The producer emitted an error"),
        }
    }
}

impl<E> core::error::Error for OnceError<E>
where
    E: 'static + core::error::Error,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            OnceError::EmptyInput => None,
            OnceError::InvalidIndex(err) => Some(err),
            OnceError::Producer(err) => Some(err),
        }
    }
}
