use wrapper::Wrapper;

use crate::Producer;

/// A `Producer` adaptor that drops every item equal to a given value.
#[derive(Debug, Clone)]
pub struct Remove<P, T> {
    inner: P,
    value: T,
    done: bool,
}

impl<P, T> Remove<P, T> {
    /// Returns a producer that emits the items of `inner` which are not equal to `value`.
    pub fn new(inner: P, value: T) -> Self {
        Remove {
            inner,
            value,
            done: false,
        }
    }
}

impl<P, T> Wrapper<P> for Remove<P, T> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, T> Producer for Remove<P, T>
where
    P: Producer,
    P::Item: PartialEq<T>,
{
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            match self.inner.produce().await? {
                Some(item) if item == self.value => {}
                Some(item) => return Ok(Some(item)),
                None => self.done = true,
            }
        }

        Ok(None)
    }
}

/// A `Producer` adaptor that drops the first item equal to a given value.
#[derive(Debug, Clone)]
pub struct RemoveFirst<P, T> {
    inner: P,
    /// `None` once the value has been removed.
    value: Option<T>,
    done: bool,
}

impl<P, T> RemoveFirst<P, T> {
    /// Returns a producer that emits the items of `inner` except the first one equal to `value`.
    pub fn new(inner: P, value: T) -> Self {
        RemoveFirst {
            inner,
            value: Some(value),
            done: false,
        }
    }
}

impl<P, T> Wrapper<P> for RemoveFirst<P, T> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P, T> Producer for RemoveFirst<P, T>
where
    P: Producer,
    P::Item: PartialEq<T>,
{
    type Item = P::Item;
    type Error = P::Error;

    async fn produce(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        while !self.done {
            match self.inner.produce().await? {
                Some(item) => {
                    if self.value.as_ref().is_some_and(|value| item == *value) {
                        self.value = None;
                    } else {
                        return Ok(Some(item));
                    }
                }
                None => self.done = true,
            }
        }

        Ok(None)
    }
}
