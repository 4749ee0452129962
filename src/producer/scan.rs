use wrapper::Wrapper;

use crate::{OnceError, Producer};

/// A `Producer` adaptor that folds the items of the inner producer into an accumulator, and
/// emits the accumulator after every step.
///
/// The function receives the current accumulator, the next item, and the index of that item.
/// The initial accumulator itself is not emitted.
#[derive(Clone)]
pub struct Scan<P, F, A> {
    inner: P,
    fun: F,
    /// `None` once the sequence has ended.
    acc: Option<A>,
    index: usize,
}

impl<P: core::fmt::Debug, F, A: core::fmt::Debug> core::fmt::Debug for Scan<P, F, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scan")
            .field("inner", &self.inner)
            .field("acc", &self.acc)
            .field("index", &self.index)
            .finish()
    }
}

impl<P, F, A> Scan<P, F, A>
where
    P: Producer,
    F: FnMut(A, P::Item, usize) -> A,
    A: Clone,
{
    /// Returns a producer emitting the running accumulation of `inner`, starting from `init`.
    pub fn new(inner: P, init: A, fun: F) -> Self {
        Scan {
            inner,
            fun,
            acc: Some(init),
            index: 0,
        }
    }
}

impl<P, F, A> Wrapper<P> for Scan<P, F, A> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, F, A> Producer for Scan<P, F, A>
where
    P: Producer,
    F: FnMut(A, P::Item, usize) -> A,
    A: Clone,
{
    type Item = A;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        // Taking the accumulator up front leaves it `None` if the inner producer ends or fails.
        let Some(acc) = self.acc.take() else {
            return Ok(None);
        };

        match self.inner.produce().await? {
            Some(item) => {
                let next = (self.fun)(acc, item, self.index);
                self.index += 1;
                self.acc = Some(next.clone());
                Ok(Some(next))
            }
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone)]
enum Scan1State<T> {
    Start,
    Running(T),
    Done,
}

/// A `Producer` adaptor like [`Scan`], except that the first item of the inner producer is the
/// initial accumulator. The first item is emitted unchanged, and the function is first called
/// for the second item, with index `1`.
///
/// Fails with [`OnceError::EmptyInput`] if the inner producer emits no items at all.
#[derive(Clone)]
pub struct Scan1<P, F, T> {
    inner: P,
    fun: F,
    state: Scan1State<T>,
    index: usize,
}

impl<P: core::fmt::Debug, F, T: core::fmt::Debug> core::fmt::Debug for Scan1<P, F, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scan1")
            .field("inner", &self.inner)
            .field("state", &self.state)
            .finish()
    }
}

impl<P, F> Scan1<P, F, P::Item>
where
    P: Producer,
    P::Item: Clone,
    F: FnMut(P::Item, P::Item, usize) -> P::Item,
{
    /// Returns a producer emitting the running accumulation of `inner`, seeded by its first item.
    pub fn new(inner: P, fun: F) -> Self {
        Scan1 {
            inner,
            fun,
            state: Scan1State::Start,
            index: 1,
        }
    }
}

impl<P, F, T> Wrapper<P> for Scan1<P, F, T> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, F> Producer for Scan1<P, F, P::Item>
where
    P: Producer,
    P::Item: Clone,
    F: FnMut(P::Item, P::Item, usize) -> P::Item,
{
    type Item = P::Item;
    type Error = OnceError<P::Error>;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        let state = core::mem::replace(&mut self.state, Scan1State::Done);

        match state {
            Scan1State::Done => Ok(None),
            Scan1State::Start => match self.inner.produce().await.map_err(OnceError::Producer)? {
                Some(first) => {
                    self.state = Scan1State::Running(first.clone());
                    Ok(Some(first))
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("scan1 received an empty producer");
                    Err(OnceError::EmptyInput)
                }
            },
            Scan1State::Running(acc) => {
                match self.inner.produce().await.map_err(OnceError::Producer)? {
                    Some(item) => {
                        let next = (self.fun)(acc, item, self.index);
                        self.index += 1;
                        self.state = Scan1State::Running(next.clone());
                        Ok(Some(next))
                    }
                    None => Ok(None),
                }
            }
        }
    }
}
