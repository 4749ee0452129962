use core::cmp::Ordering;
use core::iter::{Product, Sum};
use core::ops::{Add, AsyncFnMut, Mul};

use alloc::vec::Vec;

use futures::future::join;

#[cfg(feature = "std")]
use core::hash::Hash;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::compare;
use crate::producer::{
    Chain, Concat, ExcludeFirst, ExcludeNull, Filter, Initial, Map, MapErr, Pairwise, Push,
    Remove, RemoveFirst, Scan, Scan1, SkipWhile, Slice, TakeWhile, Unshift, Zip,
};
use crate::{IntoIndex, IntoProducer, OnceError, Producer};

#[cfg(feature = "std")]
use crate::Groups;

impl<P> ProducerExt for P where P: Producer {}

/// An extension trait for [`Producer`] that provides the lazy operators and the terminal
/// operators of this crate. You never need to implement this trait yourself, it merely adds
/// methods with default implementations to existing producers.
///
/// All methods take the producer by value: a producer can be consumed only once, and after
/// handing it to an operator, nobody else can advance it.
///
/// The lazy operators return adaptors which do nothing until they are asked for an item
/// themselves. The terminal operators are `async` and drive the producer until they know their
/// result, which is often before the producer has ended.
///
/// Functions passed to operators receive the index of the item they are called with, counting
/// the items the operator examined, from zero.
pub trait ProducerExt: Producer + Sized {
    /// Transforms every item with a function.
    ///
    /// ```
    /// use async_once::prelude::*;
    /// # smol::block_on(async {
    /// let p = adapt(vec![1, 2, 3]).map(|n, _| n + 1);
    /// assert_eq!(p.to_vec().await, Ok(vec![2, 3, 4]));
    /// # });
    /// ```
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item, usize) -> B,
    {
        Map::new(self, f)
    }

    /// Emits only the items for which the predicate holds.
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        Filter::new(self, pred, true)
    }

    /// Emits only the items for which the predicate does not hold.
    fn exclude<F>(self, pred: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        Filter::new(self, pred, false)
    }

    /// Unwraps the `Some` items of a producer of `Option`s, and drops the `None` items.
    fn exclude_null<T>(self) -> ExcludeNull<Self>
    where
        Self: Producer<Item = Option<T>>,
    {
        ExcludeNull::new(self)
    }

    /// Drops the first item for which the predicate holds.
    fn exclude_first<F>(self, pred: F) -> ExcludeFirst<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        ExcludeFirst::new(self, pred)
    }

    /// Drops every item equal to `value`.
    fn remove<T>(self, value: T) -> Remove<Self, T>
    where
        Self::Item: PartialEq<T>,
    {
        Remove::new(self, value)
    }

    /// Drops the first item equal to `value`.
    fn remove_first<T>(self, value: T) -> RemoveFirst<Self, T>
    where
        Self::Item: PartialEq<T>,
    {
        RemoveFirst::new(self, value)
    }

    /// Emits the accumulator after folding in each item, starting from `init`.
    ///
    /// ```
    /// use async_once::prelude::*;
    /// # smol::block_on(async {
    /// let p = adapt([1, 2, 3]).scan(0, |acc, n, i| acc + n * i as i32);
    /// assert_eq!(p.to_vec().await, Ok(vec![0, 2, 8]));
    /// # });
    /// ```
    fn scan<A, F>(self, init: A, f: F) -> Scan<Self, F, A>
    where
        A: Clone,
        F: FnMut(A, Self::Item, usize) -> A,
    {
        Scan::new(self, init, f)
    }

    /// Like [`scan`](ProducerExt::scan), but the first item is the initial accumulator, and is
    /// emitted as is. Fails with [`OnceError::EmptyInput`] for a producer without items.
    fn scan1<F>(self, f: F) -> Scan1<Self, F, Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item, usize) -> Self::Item,
    {
        Scan1::new(self, f)
    }

    /// Emits items as long as the predicate holds. The first item for which it fails ends the
    /// sequence.
    fn take_while<F>(self, pred: F) -> TakeWhile<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        TakeWhile::new(self, pred, true)
    }

    /// Emits items until the predicate holds. The first item for which it holds ends the
    /// sequence.
    fn take_until<F>(self, pred: F) -> TakeWhile<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        TakeWhile::new(self, pred, false)
    }

    /// Drops items as long as the predicate holds, then emits all remaining items.
    fn skip_while<F>(self, pred: F) -> SkipWhile<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        SkipWhile::new(self, pred, true)
    }

    /// Drops items until the predicate holds, then emits all remaining items.
    fn skip_until<F>(self, pred: F) -> SkipWhile<Self, F>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        SkipWhile::new(self, pred, false)
    }

    /// Emits the items at positions `start..end`; an `end` of `None` is unbounded.
    ///
    /// Never pulls more than `end` items, and none at all if `end <= start`.
    ///
    /// ```
    /// use async_once::prelude::*;
    /// # smol::block_on(async {
    /// let p = adapt([1, 2, 3, 4, 5]).slice(1, Some(4));
    /// assert_eq!(p.to_vec().await, Ok(vec![2, 3, 4]));
    /// # });
    /// ```
    fn slice(self, start: usize, end: Option<usize>) -> Slice<Self> {
        Slice::new(self, start, end)
    }

    /// Emits the first `count` items.
    fn take(self, count: usize) -> Slice<Self> {
        Slice::new(self, 0, Some(count))
    }

    /// Drops the first `count` items and emits the rest.
    fn skip(self, count: usize) -> Slice<Self> {
        Slice::new(self, count, None)
    }

    /// Emits all items but the first.
    fn tail(self) -> Slice<Self> {
        Slice::new(self, 1, None)
    }

    /// Emits all items but the last.
    fn initial(self) -> Initial<Self, Self::Item> {
        Initial::new(self)
    }

    /// Emits all items, then `item`.
    fn push(self, item: Self::Item) -> Push<Self, Self::Item> {
        Push::new(self, item)
    }

    /// Emits `item`, then all items.
    fn unshift(self, item: Self::Item) -> Unshift<Self, Self::Item> {
        Unshift::new(self, item)
    }

    /// Emits every pair of consecutive items.
    fn pairwise(self) -> Pairwise<Self, Self::Item>
    where
        Self::Item: Clone,
    {
        Pairwise::new(self)
    }

    /// Emits pairs of items of `self` and `other`, until either of them ends. Both are asked for
    /// their next item at the same time.
    fn zip<O>(self, other: O) -> Zip<Self, O::IntoProducer>
    where
        O: IntoProducer<Error = Self::Error>,
    {
        Zip::new(self, other.into_producer())
    }

    /// Emits the items of every producer-like item, in order.
    ///
    /// ```
    /// use async_once::prelude::*;
    /// # smol::block_on(async {
    /// let p = adapt(vec![vec![1, 2], vec![], vec![3]]).concat();
    /// assert_eq!(p.to_vec().await, Ok(vec![1, 2, 3]));
    /// # });
    /// ```
    fn concat(self) -> Concat<Self, <Self::Item as IntoProducer>::IntoProducer>
    where
        Self::Item: IntoProducer<Error = Self::Error>,
    {
        Concat::new(self)
    }

    /// Maps every item to something producer-like, and emits the items of the results in order.
    fn concat_map<B, F>(self, f: F) -> Concat<Map<Self, F>, B::IntoProducer>
    where
        F: FnMut(Self::Item, usize) -> B,
        B: IntoProducer<Error = Self::Error>,
    {
        Concat::new(Map::new(self, f))
    }

    /// Emits all items of `self`, then all items of `other`.
    fn append<O>(self, other: O) -> Chain<Self, O::IntoProducer>
    where
        O: IntoProducer<Item = Self::Item, Error = Self::Error>,
    {
        Chain::new(self, other.into_producer())
    }

    /// Emits all items of `other`, then all items of `self`.
    fn prepend<O>(self, other: O) -> Chain<O::IntoProducer, Self>
    where
        O: IntoProducer<Item = Self::Item, Error = Self::Error>,
    {
        Chain::new(other.into_producer(), self)
    }

    /// Converts the error of the producer with a function.
    fn map_err<E, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnMut(Self::Error) -> E,
    {
        MapErr::new(self, f)
    }

    /// Collects all items into a vector.
    async fn to_vec(mut self) -> Result<Vec<Self::Item>, Self::Error> {
        let mut items = Vec::new();
        while let Some(item) = self.produce().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Collects all items into a set.
    #[cfg(feature = "std")]
    async fn to_set(mut self) -> Result<HashSet<Self::Item>, Self::Error>
    where
        Self::Item: Hash + Eq,
    {
        let mut items = HashSet::new();
        while let Some(item) = self.produce().await? {
            items.insert(item);
        }
        Ok(items)
    }

    /// Returns the first item. Pulls exactly once.
    async fn first(mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.produce().await
    }

    /// Returns the last item.
    async fn last(mut self) -> Result<Option<Self::Item>, Self::Error> {
        let mut last = None;
        while let Some(item) = self.produce().await? {
            last = Some(item);
        }
        Ok(last)
    }

    /// Returns the item if there is exactly one, and `None` if there are none or several.
    ///
    /// Pulls at most twice.
    async fn only(mut self) -> Result<Option<Self::Item>, Self::Error> {
        match self.produce().await? {
            None => Ok(None),
            Some(item) => match self.produce().await? {
                None => Ok(Some(item)),
                Some(_) => Ok(None),
            },
        }
    }

    /// Returns whether there are no items at all. Pulls exactly once.
    async fn is_empty(mut self) -> Result<bool, Self::Error> {
        Ok(self.produce().await?.is_none())
    }

    /// Returns whether there is at least one item. Pulls exactly once.
    async fn not_empty(self) -> Result<bool, Self::Error> {
        Ok(!self.is_empty().await?)
    }

    /// Returns whether `self` and `other` emit equal items, pairwise, and the same number of
    /// them. Both are asked for their next item at the same time, and nothing more is pulled
    /// after the first mismatch.
    async fn equal<O>(self, other: O) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        Self::Item: PartialEq<O::Item>,
    {
        self.equal_by(other, |a, b| a == b).await
    }

    /// Like [`equal`](ProducerExt::equal), with a custom equality function.
    async fn equal_by<O, F>(mut self, other: O, mut eq: F) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        F: FnMut(&Self::Item, &O::Item) -> bool,
    {
        let mut other = other.into_producer();
        loop {
            let (a, b) = join(self.produce(), other.produce()).await;
            match (a?, b?) {
                (Some(a), Some(b)) => {
                    if !eq(&a, &b) {
                        return Ok(false);
                    }
                }
                (None, None) => return Ok(true),
                _ => return Ok(false),
            }
        }
    }

    /// Like [`equal`](ProducerExt::equal), with an asynchronous, fallible equality function which
    /// takes the items by value. This compares producers of producers:
    ///
    /// ```
    /// use async_once::prelude::*;
    /// # smol::block_on(async {
    /// let a = adapt(vec![adapt(vec![1, 2]), adapt(vec![3])]);
    /// let b = adapt(vec![adapt(vec![1, 2]), adapt(vec![3])]);
    /// assert_eq!(a.equal_with(b, async |x, y| x.equal(y).await).await, Ok(true));
    /// # });
    /// ```
    async fn equal_with<O, F>(mut self, other: O, mut eq: F) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        F: AsyncFnMut(Self::Item, O::Item) -> Result<bool, Self::Error>,
    {
        let mut other = other.into_producer();
        loop {
            let (a, b) = join(self.produce(), other.produce()).await;
            match (a?, b?) {
                (Some(a), Some(b)) => {
                    if !eq(a, b).await? {
                        return Ok(false);
                    }
                }
                (None, None) => return Ok(true),
                _ => return Ok(false),
            }
        }
    }

    /// The negation of [`equal`](ProducerExt::equal).
    async fn not_equal<O>(self, other: O) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        Self::Item: PartialEq<O::Item>,
    {
        Ok(!self.equal(other).await?)
    }

    /// The negation of [`equal_by`](ProducerExt::equal_by).
    async fn not_equal_by<O, F>(self, other: O, eq: F) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        F: FnMut(&Self::Item, &O::Item) -> bool,
    {
        Ok(!self.equal_by(other, eq).await?)
    }

    /// The negation of [`equal_with`](ProducerExt::equal_with).
    async fn not_equal_with<O, F>(self, other: O, eq: F) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        F: AsyncFnMut(Self::Item, O::Item) -> Result<bool, Self::Error>,
    {
        Ok(!self.equal_with(other, eq).await?)
    }

    /// Returns whether the items of `prefix` are equal to the leading items of `self`.
    async fn prefix_match<O>(self, prefix: O) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        Self::Item: PartialEq<O::Item>,
    {
        self.prefix_match_by(prefix, |a, b| a == b).await
    }

    /// Like [`prefix_match`](ProducerExt::prefix_match), with a custom equality function.
    async fn prefix_match_by<O, F>(mut self, prefix: O, mut eq: F) -> Result<bool, Self::Error>
    where
        O: IntoProducer<Error = Self::Error>,
        F: FnMut(&Self::Item, &O::Item) -> bool,
    {
        let mut prefix = prefix.into_producer();
        loop {
            let (a, b) = join(self.produce(), prefix.produce()).await;
            match (a?, b?) {
                (_, None) => return Ok(true),
                (None, Some(_)) => return Ok(false),
                (Some(a), Some(b)) => {
                    if !eq(&a, &b) {
                        return Ok(false);
                    }
                }
            }
        }
    }

    /// Folds all items into an accumulator, starting from `init`.
    async fn fold<A, F>(mut self, init: A, mut f: F) -> Result<A, Self::Error>
    where
        F: FnMut(A, Self::Item, usize) -> A,
    {
        let mut acc = init;
        let mut index = 0;
        while let Some(item) = self.produce().await? {
            acc = f(acc, item, index);
            index += 1;
        }
        Ok(acc)
    }

    /// Folds all items into an accumulator, using the first item as the initial accumulator.
    /// The function is first called for the second item, with index `1`.
    ///
    /// Fails with [`OnceError::EmptyInput`] for a producer without items.
    async fn fold1<F>(mut self, mut f: F) -> Result<Self::Item, OnceError<Self::Error>>
    where
        F: FnMut(Self::Item, Self::Item, usize) -> Self::Item,
    {
        let Some(mut acc) = self.produce().await.map_err(OnceError::Producer)? else {
            #[cfg(feature = "tracing")]
            tracing::debug!("fold1 received an empty producer");
            return Err(OnceError::EmptyInput);
        };

        let mut index = 1;
        while let Some(item) = self.produce().await.map_err(OnceError::Producer)? {
            acc = f(acc, item, index);
            index += 1;
        }
        Ok(acc)
    }

    /// Returns the item at position `index`, or `None` if there are not enough items.
    ///
    /// The index is validated before the producer is touched; see [`IntoIndex`] for the values
    /// that are accepted.
    async fn index<I: IntoIndex>(
        mut self,
        index: I,
    ) -> Result<Option<Self::Item>, OnceError<Self::Error>> {
        let index = index.into_index().inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "rejected an index");
        })?;

        let mut position = 0;
        while let Some(item) = self.produce().await.map_err(OnceError::Producer)? {
            if position == index {
                return Ok(Some(item));
            }
            position += 1;
        }
        Ok(None)
    }

    /// Returns whether an item equal to `value` exists. Stops at the first match.
    async fn contains<T: ?Sized>(self, value: &T) -> Result<bool, Self::Error>
    where
        Self::Item: PartialEq<T>,
    {
        self.contains_by(value, |item, value| item == value).await
    }

    /// Like [`contains`](ProducerExt::contains), with a custom equality function.
    async fn contains_by<T: ?Sized, F>(mut self, value: &T, mut eq: F) -> Result<bool, Self::Error>
    where
        F: FnMut(&Self::Item, &T) -> bool,
    {
        while let Some(item) = self.produce().await? {
            if eq(&item, value) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns the position of the first item equal to `value`.
    async fn index_of<T: ?Sized>(self, value: &T) -> Result<Option<usize>, Self::Error>
    where
        Self::Item: PartialEq<T>,
    {
        self.find_index(|item, _| item == value).await
    }

    /// Returns the position of the first item for which the predicate holds.
    async fn find_index<F>(mut self, mut pred: F) -> Result<Option<usize>, Self::Error>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        let mut index = 0;
        while let Some(item) = self.produce().await? {
            if pred(&item, index) {
                return Ok(Some(index));
            }
            index += 1;
        }
        Ok(None)
    }

    /// Returns the first item for which the predicate holds.
    async fn find<F>(mut self, mut pred: F) -> Result<Option<Self::Item>, Self::Error>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        let mut index = 0;
        while let Some(item) = self.produce().await? {
            if pred(&item, index) {
                return Ok(Some(item));
            }
            index += 1;
        }
        Ok(None)
    }

    /// Returns the greatest item. Of several greatest items, the earliest one wins.
    async fn maximum(self) -> Result<Option<Self::Item>, Self::Error>
    where
        Self::Item: Ord,
    {
        self.maximum_by(Ord::cmp).await
    }

    /// Returns the least item. Of several least items, the earliest one wins.
    async fn minimum(self) -> Result<Option<Self::Item>, Self::Error>
    where
        Self::Item: Ord,
    {
        self.minimum_by(Ord::cmp).await
    }

    /// Returns the greatest item according to a comparator. Of several greatest items, the
    /// earliest one wins.
    async fn maximum_by<F>(mut self, mut cmp: F) -> Result<Option<Self::Item>, Self::Error>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let Some(mut best) = self.produce().await? else {
            return Ok(None);
        };

        while let Some(item) = self.produce().await? {
            if cmp(&item, &best) == Ordering::Greater {
                best = item;
            }
        }
        Ok(Some(best))
    }

    /// Returns the least item according to a comparator. Of several least items, the earliest
    /// one wins.
    async fn minimum_by<F>(self, cmp: F) -> Result<Option<Self::Item>, Self::Error>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.maximum_by(compare::reverse(cmp)).await
    }

    /// Returns the item with the greatest key. Of several such items, the earliest one wins.
    ///
    /// ```
    /// use async_once::prelude::*;
    /// # smol::block_on(async {
    /// let p = adapt(["1", "2", "3", "4"]);
    /// let max = p.maximum_by_key(|s| s.parse::<u8>().unwrap_or(0)).await;
    /// assert_eq!(max, Ok(Some("4")));
    /// # });
    /// ```
    async fn maximum_by_key<K, F>(mut self, mut key: F) -> Result<Option<Self::Item>, Self::Error>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let Some(mut best) = self.produce().await? else {
            return Ok(None);
        };

        let mut best_key = key(&best);
        while let Some(item) = self.produce().await? {
            let item_key = key(&item);
            if item_key > best_key {
                best = item;
                best_key = item_key;
            }
        }
        Ok(Some(best))
    }

    /// Returns the item with the least key. Of several such items, the earliest one wins.
    async fn minimum_by_key<K, F>(mut self, mut key: F) -> Result<Option<Self::Item>, Self::Error>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let Some(mut best) = self.produce().await? else {
            return Ok(None);
        };

        let mut best_key = key(&best);
        while let Some(item) = self.produce().await? {
            let item_key = key(&item);
            if item_key < best_key {
                best = item;
                best_key = item_key;
            }
        }
        Ok(Some(best))
    }

    /// Adds up all items. The sum of no items is the additive identity (`0` for numbers).
    async fn sum(mut self) -> Result<Self::Item, Self::Error>
    where
        Self::Item: Sum + Add<Output = Self::Item>,
    {
        let mut total = core::iter::empty::<Self::Item>().sum::<Self::Item>();
        while let Some(item) = self.produce().await? {
            total = total + item;
        }
        Ok(total)
    }

    /// Multiplies all items. The product of no items is the multiplicative identity (`1` for
    /// numbers).
    async fn product(mut self) -> Result<Self::Item, Self::Error>
    where
        Self::Item: Product + Mul<Output = Self::Item>,
    {
        let mut total = core::iter::empty::<Self::Item>().product::<Self::Item>();
        while let Some(item) = self.produce().await? {
            total = total * item;
        }
        Ok(total)
    }

    /// Returns the arithmetic mean of all items, or `None` if there are none.
    ///
    /// `Into<f64>` only covers the lossless conversions (`u8` to `u32`, `i8` to `i32`, `f32`).
    /// Map wider integers first, e.g. `.map(|n: i64, _| n as f64).average()`.
    async fn average(mut self) -> Result<Option<f64>, Self::Error>
    where
        Self::Item: Into<f64>,
    {
        let mut total = 0.0;
        let mut count = 0usize;
        while let Some(item) = self.produce().await? {
            total += item.into();
            count += 1;
        }

        if count == 0 {
            Ok(None)
        } else {
            Ok(Some(total / count as f64))
        }
    }

    /// Returns whether all items are `true`. Stops at the first `false`.
    async fn and(mut self) -> Result<bool, Self::Error>
    where
        Self: Producer<Item = bool>,
    {
        while let Some(item) = self.produce().await? {
            if !item {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns whether any item is `true`. Stops at the first `true`.
    async fn or(mut self) -> Result<bool, Self::Error>
    where
        Self: Producer<Item = bool>,
    {
        while let Some(item) = self.produce().await? {
            if item {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns whether the predicate holds for any item. Stops at the first match.
    async fn any<F>(self, pred: F) -> Result<bool, Self::Error>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        Ok(self.find_index(pred).await?.is_some())
    }

    /// Returns whether the predicate holds for all items. Stops at the first mismatch.
    async fn all<F>(self, mut pred: F) -> Result<bool, Self::Error>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        Ok(self.find_index(|item, i| !pred(item, i)).await?.is_none())
    }

    /// Collects the contents of a producer of `Option`s, or returns `None` at the first `None`
    /// item.
    async fn none_null<T>(mut self) -> Result<Option<Vec<T>>, Self::Error>
    where
        Self: Producer<Item = Option<T>>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.produce().await? {
            match item {
                Some(item) => items.push(item),
                None => return Ok(None),
            }
        }
        Ok(Some(items))
    }

    /// Calls a function with every item.
    async fn for_each<F>(mut self, mut f: F) -> Result<(), Self::Error>
    where
        F: FnMut(Self::Item, usize),
    {
        let mut index = 0;
        while let Some(item) = self.produce().await? {
            f(item, index);
            index += 1;
        }
        Ok(())
    }

    /// Groups all items by a key.
    ///
    /// ```
    /// use async_once::prelude::*;
    /// # smol::block_on(async {
    /// let groups = adapt([1, 2, 3, 4, 5]).key_by(|n, _| n % 2 == 0).await.unwrap();
    /// assert_eq!(groups.get(&false), Some(&vec![1, 3, 5]));
    /// assert_eq!(groups.get(&true), Some(&vec![2, 4]));
    /// # });
    /// ```
    #[cfg(feature = "std")]
    async fn key_by<K, F>(mut self, mut key: F) -> Result<Groups<K, Vec<Self::Item>>, Self::Error>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item, usize) -> K,
    {
        let mut groups = Groups::new();
        let mut index = 0;
        while let Some(item) = self.produce().await? {
            let k = key(&item, index);
            groups.get_or_insert_with(k, Vec::new).push(item);
            index += 1;
        }
        Ok(groups)
    }

    /// Maps every key to the first item with that key.
    #[cfg(feature = "std")]
    async fn key_first_by<K, F>(mut self, mut key: F) -> Result<Groups<K, Self::Item>, Self::Error>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item, usize) -> K,
    {
        let mut groups = Groups::new();
        let mut index = 0;
        while let Some(item) = self.produce().await? {
            let k = key(&item, index);
            if !groups.contains_key(&k) {
                groups.insert(k, item);
            }
            index += 1;
        }
        Ok(groups)
    }

    /// Maps every key to the last item with that key. Keys are still ordered by their first
    /// appearance.
    #[cfg(feature = "std")]
    async fn key_last_by<K, F>(mut self, mut key: F) -> Result<Groups<K, Self::Item>, Self::Error>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item, usize) -> K,
    {
        let mut groups = Groups::new();
        let mut index = 0;
        while let Some(item) = self.produce().await? {
            let k = key(&item, index);
            groups.insert(k, item);
            index += 1;
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::convert::Infallible;

    use alloc::vec;

    use crate::producer::{adapt, from_iter, TestProducerBuilder};
    use crate::InvalidIndexError;

    #[test]
    fn lazy_operators_compose() {
        smol::block_on(async {
            let p = from_iter(1..)
                .filter(|n: &u32, _| n % 3 != 0)
                .map(|n, i| (i, n * n))
                .take(4);
            assert_eq!(
                p.to_vec().await,
                Ok(vec![(0, 1), (1, 4), (2, 16), (3, 25)])
            );
        })
    }

    #[test]
    fn append_and_prepend() {
        smol::block_on(async {
            assert_eq!(
                adapt([1, 2]).append([3, 4]).to_vec().await,
                Ok(vec![1, 2, 3, 4])
            );
            assert_eq!(
                adapt([1, 2]).prepend([3, 4]).to_vec().await,
                Ok(vec![3, 4, 1, 2])
            );
            assert_eq!(
                adapt([1, 2]).push(3).unshift(0).to_vec().await,
                Ok(vec![0, 1, 2, 3])
            );
        })
    }

    #[test]
    fn concat_map_flattens() {
        smol::block_on(async {
            let p = adapt([1, 2, 3]).concat_map(|n, _| vec![n; n]);
            assert_eq!(p.to_vec().await, Ok(vec![1, 2, 2, 3, 3, 3]));
        })
    }

    #[test]
    fn tail_and_initial() {
        smol::block_on(async {
            assert_eq!(adapt([1, 2, 3]).tail().to_vec().await, Ok(vec![2, 3]));
            assert_eq!(adapt([1, 2, 3]).initial().to_vec().await, Ok(vec![1, 2]));
            assert_eq!(adapt([1, 2, 3, 4]).skip(1).take(2).to_vec().await, Ok(vec![2, 3]));
        })
    }

    #[test]
    fn take_pulls_at_most_n_times() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new((0..100).collect(), Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();

            assert_eq!(upstream.take(3).to_vec().await, Ok(vec![0, 1, 2]));
            assert_eq!(pulls.get(), 3);
        })
    }

    #[test]
    fn first_last_only() {
        smol::block_on(async {
            assert_eq!(adapt([3, 4, 5]).first().await, Ok(Some(3)));
            assert_eq!(adapt([3, 4, 5]).last().await, Ok(Some(5)));
            assert_eq!(adapt(Vec::<u8>::new()).last().await, Ok(None));

            assert_eq!(adapt(Vec::<u8>::new()).only().await, Ok(None));
            assert_eq!(adapt([4]).only().await, Ok(Some(4)));
            assert_eq!(adapt([3, 4, 5]).only().await, Ok(None));
        })
    }

    #[test]
    fn only_stops_after_the_second_item() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new(vec![3, 4, 5], Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();

            assert_eq!(upstream.only().await, Ok(None));
            assert_eq!(pulls.get(), 2);
        })
    }

    #[test]
    fn emptiness_pulls_once() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new(vec![1, 2], Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();

            assert_eq!(upstream.not_empty().await, Ok(true));
            assert_eq!(pulls.get(), 1);
            assert_eq!(adapt(Vec::<u8>::new()).is_empty().await, Ok(true));
        })
    }

    #[test]
    fn equality() {
        smol::block_on(async {
            assert_eq!(adapt([1, 2, 3]).equal([1, 2, 3]).await, Ok(true));
            assert_eq!(adapt([1, 2, 3]).equal([1, 2]).await, Ok(false));
            assert_eq!(adapt([1, 2]).equal([1, 2, 3]).await, Ok(false));
            assert_eq!(adapt([1, 5, 3]).not_equal([1, 2, 3]).await, Ok(true));
            assert_eq!(adapt(Vec::<u8>::new()).equal(Vec::<u8>::new()).await, Ok(true));
            assert_eq!(
                adapt(["a", "B"])
                    .equal_by(["A", "b"], |a, b| a.eq_ignore_ascii_case(b))
                    .await,
                Ok(true)
            );
        })
    }

    #[test]
    fn equality_stops_at_the_first_mismatch() {
        smol::block_on(async {
            let left = TestProducerBuilder::new(vec![1, 9, 3, 4], Ok::<(), ()>(())).build();
            let right = TestProducerBuilder::new(vec![1, 2, 3, 4], Ok(())).build();
            let (left_pulls, right_pulls) = (left.pulls(), right.pulls());

            assert_eq!(left.equal(right).await, Ok(false));
            assert_eq!(left_pulls.get(), 2);
            assert_eq!(right_pulls.get(), 2);
        })
    }

    #[test]
    fn nested_equality() {
        smol::block_on(async {
            let a = adapt(vec![adapt(vec![1, 2]), adapt(vec![3])]);
            let b = adapt(vec![adapt(vec![1, 2]), adapt(vec![3])]);
            assert_eq!(a.equal_with(b, async |x, y| x.equal(y).await).await, Ok(true));

            let a = adapt(vec![adapt(vec![1, 2]), adapt(vec![3])]);
            let b = adapt(vec![adapt(vec![1, 2]), adapt(vec![4])]);
            assert_eq!(a.not_equal_with(b, async |x, y| x.equal(y).await).await, Ok(true));
        })
    }

    #[test]
    fn prefixes() {
        smol::block_on(async {
            assert_eq!(adapt([1, 2, 3]).prefix_match([1, 2]).await, Ok(true));
            assert_eq!(adapt([1, 2, 3]).prefix_match(Vec::<i32>::new()).await, Ok(true));
            assert_eq!(adapt([1, 2]).prefix_match([1, 2, 3]).await, Ok(false));
            assert_eq!(adapt([1, 2, 3]).prefix_match([2]).await, Ok(false));
            assert_eq!(
                adapt(Vec::<u8>::new()).prefix_match(Vec::<u8>::new()).await,
                Ok(true)
            );
        })
    }

    #[test]
    fn folds() {
        smol::block_on(async {
            let f = |acc: i32, n: i32, i: usize| acc + n * i as i32;
            assert_eq!(adapt([1, 2, 3]).fold(0, f).await, Ok(8));
            assert_eq!(adapt([1, 2, 3]).fold1(f).await, Ok(9));
            assert_eq!(adapt(Vec::<i32>::new()).fold(5, f).await, Ok(5));
            assert_eq!(
                adapt(Vec::<i32>::new()).fold1(f).await,
                Err(OnceError::EmptyInput)
            );
        })
    }

    #[test]
    fn indexing() {
        smol::block_on(async {
            let items = || adapt([1, 2, 3, 4, 3, 2, 1]);
            assert_eq!(items().index(0).await, Ok(Some(1)));
            assert_eq!(items().index(3.0).await, Ok(Some(4)));
            assert_eq!(items().index(6u8).await, Ok(Some(1)));
            assert_eq!(items().index(7).await, Ok(None));
            assert_eq!(
                items().index(-1).await,
                Err(OnceError::InvalidIndex(InvalidIndexError::Negative))
            );
            assert_eq!(
                items().index(0.5).await,
                Err(OnceError::InvalidIndex(InvalidIndexError::NotInteger))
            );
        })
    }

    #[test]
    fn rejected_index_does_not_pull() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new(vec![1], Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();

            assert!(upstream.index(f64::NAN).await.is_err());
            assert_eq!(pulls.get(), 0);
        })
    }

    #[test]
    fn searching() {
        smol::block_on(async {
            assert_eq!(adapt([1, 2, 3]).contains(&2).await, Ok(true));
            assert_eq!(adapt([1, 2, 3]).contains(&7).await, Ok(false));
            assert_eq!(
                adapt([1, 2, 3]).contains_by(&4, |n, m| n * 2 == *m).await,
                Ok(true)
            );
            assert_eq!(adapt([1, 2, 3, 2]).index_of(&2).await, Ok(Some(1)));
            assert_eq!(adapt([1, 2, 3]).index_of(&7).await, Ok(None));
            assert_eq!(
                adapt([1, 2, 3, 4]).find_index(|n, _| n % 2 == 0).await,
                Ok(Some(1))
            );
            assert_eq!(adapt([1, 2, 3, 4]).find(|n, _| *n > 2).await, Ok(Some(3)));
            assert_eq!(adapt([1, 2, 3, 4]).find(|n, _| *n > 7).await, Ok(None));
        })
    }

    #[test]
    fn extremes() {
        smol::block_on(async {
            assert_eq!(adapt([3, 1, 4, 1, 5]).maximum().await, Ok(Some(5)));
            assert_eq!(adapt([3, 1, 4, 1, 5]).minimum().await, Ok(Some(1)));
            assert_eq!(adapt(Vec::<u8>::new()).maximum().await, Ok(None));

            let pairs = || adapt([(1, 'a'), (2, 'b'), (2, 'c'), (1, 'd')]);
            assert_eq!(
                pairs().maximum_by(|x, y| x.0.cmp(&y.0)).await,
                Ok(Some((2, 'b')))
            );
            assert_eq!(
                pairs().minimum_by(|x, y| x.0.cmp(&y.0)).await,
                Ok(Some((1, 'a')))
            );
            assert_eq!(pairs().maximum_by_key(|x| x.0).await, Ok(Some((2, 'b'))));
            assert_eq!(pairs().minimum_by_key(|x| x.0).await, Ok(Some((1, 'a'))));
        })
    }

    #[test]
    fn partial_orders_via_compare() {
        smol::block_on(async {
            let max = adapt([1.5, 0.5, 2.5]).maximum_by(compare::partial).await;
            assert_eq!(max, Ok(Some(2.5)));
        })
    }

    #[test]
    fn arithmetic() {
        smol::block_on(async {
            assert_eq!(adapt([1, 2, 3, 4]).sum().await, Ok(10));
            assert_eq!(adapt(Vec::<i32>::new()).sum().await, Ok(0));
            assert_eq!(adapt([1, 2, 3, 4]).product().await, Ok(24));
            assert_eq!(adapt(Vec::<i32>::new()).product().await, Ok(1));
            assert_eq!(adapt([1, 2, 3, 4]).average().await, Ok(Some(2.5)));
            assert_eq!(adapt(Vec::<i32>::new()).average().await, Ok(None));
            assert_eq!(
                adapt([1i64 << 40, 3i64 << 40])
                    .map(|n, _| n as f64)
                    .average()
                    .await,
                Ok(Some((2i64 << 40) as f64))
            );
        })
    }

    #[test]
    fn logic() {
        smol::block_on(async {
            assert_eq!(adapt([true, true]).and().await, Ok(true));
            assert_eq!(adapt([true, false]).and().await, Ok(false));
            assert_eq!(adapt(Vec::<bool>::new()).and().await, Ok(true));
            assert_eq!(adapt([false, true]).or().await, Ok(true));
            assert_eq!(adapt(Vec::<bool>::new()).or().await, Ok(false));

            assert_eq!(adapt([1, 2, 3]).any(|n, _| *n > 2).await, Ok(true));
            assert_eq!(adapt([1, 2, 3]).all(|n, _| *n > 2).await, Ok(false));
            assert_eq!(adapt(Vec::<u8>::new()).all(|_, _| false).await, Ok(true));
        })
    }

    #[test]
    fn and_short_circuits() {
        smol::block_on(async {
            let upstream =
                TestProducerBuilder::new(vec![true, false, true], Ok::<(), ()>(())).build();
            let pulls = upstream.pulls();

            assert_eq!(upstream.and().await, Ok(false));
            assert_eq!(pulls.get(), 2);
        })
    }

    #[test]
    fn none_null_and_exclude_null() {
        smol::block_on(async {
            assert_eq!(
                adapt([Some(1), Some(2)]).none_null().await,
                Ok(Some(vec![1, 2]))
            );
            assert_eq!(adapt([Some(1), None]).none_null().await, Ok(None));
            assert_eq!(
                adapt([Some(1), None, Some(3)]).exclude_null().to_vec().await,
                Ok(vec![1, 3])
            );
        })
    }

    #[test]
    fn for_each_sees_every_item() {
        smol::block_on(async {
            let mut seen = Vec::new();
            adapt(['x', 'y'])
                .for_each(|c, i| seen.push((i, c)))
                .await
                .unwrap();
            assert_eq!(seen, vec![(0, 'x'), (1, 'y')]);
        })
    }

    #[test]
    fn errors_reach_terminals() {
        smol::block_on(async {
            let upstream = TestProducerBuilder::new(vec![1, 2], Err("broken")).build();
            assert_eq!(upstream.sum().await, Err("broken"));

            let upstream = TestProducerBuilder::new(vec![1, 2], Err("broken")).build();
            assert_eq!(upstream.fold1(|a, b, _| a + b).await, Err(OnceError::Producer("broken")));
        })
    }

    #[cfg(feature = "std")]
    #[test]
    fn keying() {
        smol::block_on(async {
            let words = || adapt(["apple", "avocado", "banana", "blueberry", "cherry"]);
            let first_letter = |w: &&str, _| w.as_bytes()[0];

            let groups = words().key_by(first_letter).await.unwrap();
            assert_eq!(
                groups.into_vec(),
                vec![
                    (b'a', vec!["apple", "avocado"]),
                    (b'b', vec!["banana", "blueberry"]),
                    (b'c', vec!["cherry"]),
                ]
            );

            let groups = words().key_first_by(first_letter).await.unwrap();
            assert_eq!(groups.get(&b'b'), Some(&"banana"));

            let groups = words().key_last_by(first_letter).await.unwrap();
            assert_eq!(groups.get(&b'b'), Some(&"blueberry"));
            assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![b'a', b'b', b'c']);
        })
    }

    #[cfg(feature = "std")]
    #[test]
    fn sets() {
        smol::block_on(async {
            let set = adapt([1, 2, 2, 3]).to_set().await.unwrap();
            assert_eq!(set.len(), 3);
            assert!(set.contains(&2));
        })
    }

    #[test]
    fn infallible_producers_need_no_error_handling() {
        smol::block_on(async {
            let result: Result<Vec<u8>, Infallible> = adapt([1u8]).to_vec().await;
            let Ok(items) = result;
            assert_eq!(items, vec![1]);
        })
    }
}
