//! Every operator of [`ProducerExt`] as a function that takes the operator arguments first, and
//! returns a function which takes the producer.
//!
//! The returned functions accept anything [`IntoProducer`], and behave exactly like calling the
//! corresponding method on the adapted input. Lazy operators return a plain function, terminal
//! operators an async one:
//!
//! ```
//! use async_once::curried::{map_fn, sum_fn};
//! # smol::block_on(async {
//! let double = map_fn(|n: i32, _| n * 2);
//! let total = sum_fn();
//! assert_eq!(total(double(vec![1, 2, 3])).await, Ok(12));
//! # });
//! ```

use core::cmp::Ordering;
use core::iter::{Product, Sum};
use core::ops::{Add, AsyncFnMut, AsyncFnOnce, Mul};

use alloc::vec::Vec;

#[cfg(feature = "std")]
use core::hash::Hash;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::producer::{
    adapt, Chain, Concat, ExcludeFirst, ExcludeNull, Filter, Initial, Map, MapErr, Pairwise,
    Push, Remove, RemoveFirst, Scan, Scan1, SkipWhile, Slice, TakeWhile, Unshift, Zip,
};
use crate::{IntoIndex, IntoProducer, OnceError, ProducerExt};

#[cfg(feature = "std")]
use crate::Groups;

/// Curried [`ProducerExt::map`].
pub fn map_fn<I, B, F>(f: F) -> impl FnOnce(I) -> Map<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(I::Item, usize) -> B,
{
    move |input| adapt(input).map(f)
}

/// Curried [`ProducerExt::filter`].
pub fn filter_fn<I, F>(pred: F) -> impl FnOnce(I) -> Filter<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    move |input| adapt(input).filter(pred)
}

/// Curried [`ProducerExt::exclude`].
pub fn exclude_fn<I, F>(pred: F) -> impl FnOnce(I) -> Filter<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    move |input| adapt(input).exclude(pred)
}

/// Curried [`ProducerExt::exclude_null`].
pub fn exclude_null_fn<I, T>() -> impl FnOnce(I) -> ExcludeNull<I::IntoProducer>
where
    I: IntoProducer<Item = Option<T>>,
{
    move |input| adapt(input).exclude_null()
}

/// Curried [`ProducerExt::exclude_first`].
pub fn exclude_first_fn<I, F>(pred: F) -> impl FnOnce(I) -> ExcludeFirst<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    move |input| adapt(input).exclude_first(pred)
}

/// Curried [`ProducerExt::remove`].
pub fn remove_fn<I, T>(value: T) -> impl FnOnce(I) -> Remove<I::IntoProducer, T>
where
    I: IntoProducer,
    I::Item: PartialEq<T>,
{
    move |input| adapt(input).remove(value)
}

/// Curried [`ProducerExt::remove_first`].
pub fn remove_first_fn<I, T>(value: T) -> impl FnOnce(I) -> RemoveFirst<I::IntoProducer, T>
where
    I: IntoProducer,
    I::Item: PartialEq<T>,
{
    move |input| adapt(input).remove_first(value)
}

/// Curried [`ProducerExt::scan`].
pub fn scan_fn<I, A, F>(init: A, f: F) -> impl FnOnce(I) -> Scan<I::IntoProducer, F, A>
where
    I: IntoProducer,
    A: Clone,
    F: FnMut(A, I::Item, usize) -> A,
{
    move |input| adapt(input).scan(init, f)
}

/// Curried [`ProducerExt::scan1`].
pub fn scan1_fn<I, F>(f: F) -> impl FnOnce(I) -> Scan1<I::IntoProducer, F, I::Item>
where
    I: IntoProducer,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    move |input| adapt(input).scan1(f)
}

/// Curried [`ProducerExt::take_while`].
pub fn take_while_fn<I, F>(pred: F) -> impl FnOnce(I) -> TakeWhile<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    move |input| adapt(input).take_while(pred)
}

/// Curried [`ProducerExt::take_until`].
pub fn take_until_fn<I, F>(pred: F) -> impl FnOnce(I) -> TakeWhile<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    move |input| adapt(input).take_until(pred)
}

/// Curried [`ProducerExt::skip_while`].
pub fn skip_while_fn<I, F>(pred: F) -> impl FnOnce(I) -> SkipWhile<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    move |input| adapt(input).skip_while(pred)
}

/// Curried [`ProducerExt::skip_until`].
pub fn skip_until_fn<I, F>(pred: F) -> impl FnOnce(I) -> SkipWhile<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    move |input| adapt(input).skip_until(pred)
}

/// Curried [`ProducerExt::slice`].
pub fn slice_fn<I: IntoProducer>(
    start: usize,
    end: Option<usize>,
) -> impl FnOnce(I) -> Slice<I::IntoProducer> {
    move |input| adapt(input).slice(start, end)
}

/// Curried [`ProducerExt::take`].
pub fn take_fn<I: IntoProducer>(count: usize) -> impl FnOnce(I) -> Slice<I::IntoProducer> {
    move |input| adapt(input).take(count)
}

/// Curried [`ProducerExt::skip`].
pub fn skip_fn<I: IntoProducer>(count: usize) -> impl FnOnce(I) -> Slice<I::IntoProducer> {
    move |input| adapt(input).skip(count)
}

/// Curried [`ProducerExt::tail`].
pub fn tail_fn<I: IntoProducer>() -> impl FnOnce(I) -> Slice<I::IntoProducer> {
    move |input| adapt(input).tail()
}

/// Curried [`ProducerExt::initial`].
pub fn initial_fn<I: IntoProducer>() -> impl FnOnce(I) -> Initial<I::IntoProducer, I::Item> {
    move |input| adapt(input).initial()
}

/// Curried [`ProducerExt::push`].
pub fn push_fn<I: IntoProducer>(item: I::Item) -> impl FnOnce(I) -> Push<I::IntoProducer, I::Item> {
    move |input| adapt(input).push(item)
}

/// Curried [`ProducerExt::unshift`].
pub fn unshift_fn<I: IntoProducer>(
    item: I::Item,
) -> impl FnOnce(I) -> Unshift<I::IntoProducer, I::Item> {
    move |input| adapt(input).unshift(item)
}

/// Curried [`ProducerExt::pairwise`].
pub fn pairwise_fn<I>() -> impl FnOnce(I) -> Pairwise<I::IntoProducer, I::Item>
where
    I: IntoProducer,
    I::Item: Clone,
{
    move |input| adapt(input).pairwise()
}

/// Curried [`ProducerExt::zip`].
pub fn zip_fn<I, O>(other: O) -> impl FnOnce(I) -> Zip<I::IntoProducer, O::IntoProducer>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
{
    move |input| adapt(input).zip(other)
}

/// Curried [`ProducerExt::concat`].
pub fn concat_fn<I>(
) -> impl FnOnce(I) -> Concat<I::IntoProducer, <I::Item as IntoProducer>::IntoProducer>
where
    I: IntoProducer,
    I::Item: IntoProducer<Error = I::Error>,
{
    move |input| adapt(input).concat()
}

/// Curried [`ProducerExt::concat_map`].
pub fn concat_map_fn<I, B, F>(
    f: F,
) -> impl FnOnce(I) -> Concat<Map<I::IntoProducer, F>, B::IntoProducer>
where
    I: IntoProducer,
    F: FnMut(I::Item, usize) -> B,
    B: IntoProducer<Error = I::Error>,
{
    move |input| adapt(input).concat_map(f)
}

/// Curried [`ProducerExt::append`].
pub fn append_fn<I, O>(other: O) -> impl FnOnce(I) -> Chain<I::IntoProducer, O::IntoProducer>
where
    I: IntoProducer,
    O: IntoProducer<Item = I::Item, Error = I::Error>,
{
    move |input| adapt(input).append(other)
}

/// Curried [`ProducerExt::prepend`].
pub fn prepend_fn<I, O>(other: O) -> impl FnOnce(I) -> Chain<O::IntoProducer, I::IntoProducer>
where
    I: IntoProducer,
    O: IntoProducer<Item = I::Item, Error = I::Error>,
{
    move |input| adapt(input).prepend(other)
}

/// Curried [`ProducerExt::map_err`].
pub fn map_err_fn<I, E, F>(f: F) -> impl FnOnce(I) -> MapErr<I::IntoProducer, F>
where
    I: IntoProducer,
    F: FnMut(I::Error) -> E,
{
    move |input| adapt(input).map_err(f)
}

/// Curried [`ProducerExt::to_vec`].
pub fn to_vec_fn<I: IntoProducer>() -> impl AsyncFnOnce(I) -> Result<Vec<I::Item>, I::Error> {
    async move |input: I| adapt(input).to_vec().await
}

/// Curried [`ProducerExt::to_set`].
#[cfg(feature = "std")]
pub fn to_set_fn<I>() -> impl AsyncFnOnce(I) -> Result<HashSet<I::Item>, I::Error>
where
    I: IntoProducer,
    I::Item: Hash + Eq,
{
    async move |input: I| adapt(input).to_set().await
}

/// Curried [`ProducerExt::first`].
pub fn first_fn<I: IntoProducer>() -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error> {
    async move |input: I| adapt(input).first().await
}

/// Curried [`ProducerExt::last`].
pub fn last_fn<I: IntoProducer>() -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error> {
    async move |input: I| adapt(input).last().await
}

/// Curried [`ProducerExt::only`].
pub fn only_fn<I: IntoProducer>() -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error> {
    async move |input: I| adapt(input).only().await
}

/// Curried [`ProducerExt::is_empty`].
pub fn is_empty_fn<I: IntoProducer>() -> impl AsyncFnOnce(I) -> Result<bool, I::Error> {
    async move |input: I| adapt(input).is_empty().await
}

/// Curried [`ProducerExt::not_empty`].
pub fn not_empty_fn<I: IntoProducer>() -> impl AsyncFnOnce(I) -> Result<bool, I::Error> {
    async move |input: I| adapt(input).not_empty().await
}

/// Curried [`ProducerExt::equal`].
pub fn equal_fn<I, O>(other: O) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    I::Item: PartialEq<O::Item>,
{
    async move |input: I| adapt(input).equal(other).await
}

/// Curried [`ProducerExt::equal_by`].
pub fn equal_by_fn<I, O, F>(other: O, eq: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    F: FnMut(&I::Item, &O::Item) -> bool,
{
    async move |input: I| adapt(input).equal_by(other, eq).await
}

/// Curried [`ProducerExt::equal_with`].
pub fn equal_with_fn<I, O, F>(other: O, eq: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    F: AsyncFnMut(I::Item, O::Item) -> Result<bool, I::Error>,
{
    async move |input: I| adapt(input).equal_with(other, eq).await
}

/// Curried [`ProducerExt::not_equal`].
pub fn not_equal_fn<I, O>(other: O) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    I::Item: PartialEq<O::Item>,
{
    async move |input: I| adapt(input).not_equal(other).await
}

/// Curried [`ProducerExt::not_equal_by`].
pub fn not_equal_by_fn<I, O, F>(other: O, eq: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    F: FnMut(&I::Item, &O::Item) -> bool,
{
    async move |input: I| adapt(input).not_equal_by(other, eq).await
}

/// Curried [`ProducerExt::not_equal_with`].
pub fn not_equal_with_fn<I, O, F>(other: O, eq: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    F: AsyncFnMut(I::Item, O::Item) -> Result<bool, I::Error>,
{
    async move |input: I| adapt(input).not_equal_with(other, eq).await
}

/// Curried [`ProducerExt::prefix_match`].
pub fn prefix_match_fn<I, O>(prefix: O) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    I::Item: PartialEq<O::Item>,
{
    async move |input: I| adapt(input).prefix_match(prefix).await
}

/// Curried [`ProducerExt::prefix_match_by`].
pub fn prefix_match_by_fn<I, O, F>(prefix: O, eq: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    O: IntoProducer<Error = I::Error>,
    F: FnMut(&I::Item, &O::Item) -> bool,
{
    async move |input: I| adapt(input).prefix_match_by(prefix, eq).await
}

/// Curried [`ProducerExt::fold`].
pub fn fold_fn<I, A, F>(init: A, f: F) -> impl AsyncFnOnce(I) -> Result<A, I::Error>
where
    I: IntoProducer,
    F: FnMut(A, I::Item, usize) -> A,
{
    async move |input: I| adapt(input).fold(init, f).await
}

/// Curried [`ProducerExt::fold1`].
pub fn fold1_fn<I, F>(f: F) -> impl AsyncFnOnce(I) -> Result<I::Item, OnceError<I::Error>>
where
    I: IntoProducer,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    async move |input: I| adapt(input).fold1(f).await
}

/// Curried [`ProducerExt::index`].
pub fn index_fn<I, X>(index: X) -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, OnceError<I::Error>>
where
    I: IntoProducer,
    X: IntoIndex,
{
    async move |input: I| adapt(input).index(index).await
}

/// Curried [`ProducerExt::contains`].
pub fn contains_fn<I, T>(value: T) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    I::Item: PartialEq<T>,
{
    async move |input: I| adapt(input).contains(&value).await
}

/// Curried [`ProducerExt::contains_by`].
pub fn contains_by_fn<I, T, F>(value: T, eq: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    F: FnMut(&I::Item, &T) -> bool,
{
    async move |input: I| adapt(input).contains_by(&value, eq).await
}

/// Curried [`ProducerExt::index_of`].
pub fn index_of_fn<I, T>(value: T) -> impl AsyncFnOnce(I) -> Result<Option<usize>, I::Error>
where
    I: IntoProducer,
    I::Item: PartialEq<T>,
{
    async move |input: I| adapt(input).index_of(&value).await
}

/// Curried [`ProducerExt::find_index`].
pub fn find_index_fn<I, F>(pred: F) -> impl AsyncFnOnce(I) -> Result<Option<usize>, I::Error>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    async move |input: I| adapt(input).find_index(pred).await
}

/// Curried [`ProducerExt::find`].
pub fn find_fn<I, F>(pred: F) -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    async move |input: I| adapt(input).find(pred).await
}

/// Curried [`ProducerExt::maximum`].
pub fn maximum_fn<I>() -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error>
where
    I: IntoProducer,
    I::Item: Ord,
{
    async move |input: I| adapt(input).maximum().await
}

/// Curried [`ProducerExt::minimum`].
pub fn minimum_fn<I>() -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error>
where
    I: IntoProducer,
    I::Item: Ord,
{
    async move |input: I| adapt(input).minimum().await
}

/// Curried [`ProducerExt::maximum_by`].
pub fn maximum_by_fn<I, F>(cmp: F) -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error>
where
    I: IntoProducer,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    async move |input: I| adapt(input).maximum_by(cmp).await
}

/// Curried [`ProducerExt::minimum_by`].
pub fn minimum_by_fn<I, F>(cmp: F) -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error>
where
    I: IntoProducer,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    async move |input: I| adapt(input).minimum_by(cmp).await
}

/// Curried [`ProducerExt::maximum_by_key`].
pub fn maximum_by_key_fn<I, K, F>(key: F) -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error>
where
    I: IntoProducer,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    async move |input: I| adapt(input).maximum_by_key(key).await
}

/// Curried [`ProducerExt::minimum_by_key`].
pub fn minimum_by_key_fn<I, K, F>(key: F) -> impl AsyncFnOnce(I) -> Result<Option<I::Item>, I::Error>
where
    I: IntoProducer,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    async move |input: I| adapt(input).minimum_by_key(key).await
}

/// Curried [`ProducerExt::sum`].
pub fn sum_fn<I>() -> impl AsyncFnOnce(I) -> Result<I::Item, I::Error>
where
    I: IntoProducer,
    I::Item: Sum + Add<Output = I::Item>,
{
    async move |input: I| adapt(input).sum().await
}

/// Curried [`ProducerExt::product`].
pub fn product_fn<I>() -> impl AsyncFnOnce(I) -> Result<I::Item, I::Error>
where
    I: IntoProducer,
    I::Item: Product + Mul<Output = I::Item>,
{
    async move |input: I| adapt(input).product().await
}

/// Curried [`ProducerExt::average`].
pub fn average_fn<I>() -> impl AsyncFnOnce(I) -> Result<Option<f64>, I::Error>
where
    I: IntoProducer,
    I::Item: Into<f64>,
{
    async move |input: I| adapt(input).average().await
}

/// Curried [`ProducerExt::and`].
pub fn and_fn<I>() -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer<Item = bool>,
{
    async move |input: I| adapt(input).and().await
}

/// Curried [`ProducerExt::or`].
pub fn or_fn<I>() -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer<Item = bool>,
{
    async move |input: I| adapt(input).or().await
}

/// Curried [`ProducerExt::any`].
pub fn any_fn<I, F>(pred: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    async move |input: I| adapt(input).any(pred).await
}

/// Curried [`ProducerExt::all`].
pub fn all_fn<I, F>(pred: F) -> impl AsyncFnOnce(I) -> Result<bool, I::Error>
where
    I: IntoProducer,
    F: FnMut(&I::Item, usize) -> bool,
{
    async move |input: I| adapt(input).all(pred).await
}

/// Curried [`ProducerExt::none_null`].
pub fn none_null_fn<I, T>() -> impl AsyncFnOnce(I) -> Result<Option<Vec<T>>, I::Error>
where
    I: IntoProducer<Item = Option<T>>,
{
    async move |input: I| adapt(input).none_null().await
}

/// Curried [`ProducerExt::for_each`].
pub fn for_each_fn<I, F>(f: F) -> impl AsyncFnOnce(I) -> Result<(), I::Error>
where
    I: IntoProducer,
    F: FnMut(I::Item, usize),
{
    async move |input: I| adapt(input).for_each(f).await
}

/// Curried [`ProducerExt::key_by`].
#[cfg(feature = "std")]
pub fn key_by_fn<I, K, F>(key: F) -> impl AsyncFnOnce(I) -> Result<Groups<K, Vec<I::Item>>, I::Error>
where
    I: IntoProducer,
    K: Hash + Eq + Clone,
    F: FnMut(&I::Item, usize) -> K,
{
    async move |input: I| adapt(input).key_by(key).await
}

/// Curried [`ProducerExt::key_first_by`].
#[cfg(feature = "std")]
pub fn key_first_by_fn<I, K, F>(key: F) -> impl AsyncFnOnce(I) -> Result<Groups<K, I::Item>, I::Error>
where
    I: IntoProducer,
    K: Hash + Eq + Clone,
    F: FnMut(&I::Item, usize) -> K,
{
    async move |input: I| adapt(input).key_first_by(key).await
}

/// Curried [`ProducerExt::key_last_by`].
#[cfg(feature = "std")]
pub fn key_last_by_fn<I, K, F>(key: F) -> impl AsyncFnOnce(I) -> Result<Groups<K, I::Item>, I::Error>
where
    I: IntoProducer,
    K: Hash + Eq + Clone,
    F: FnMut(&I::Item, usize) -> K,
{
    async move |input: I| adapt(input).key_last_by(key).await
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    use crate::producer::from_iter;

    #[test]
    fn lazy_companions() {
        smol::block_on(async {
            let evens = filter_fn(|n: &i32, _| n % 2 == 0);
            let p = evens(vec![1, 2, 3, 4]);
            assert_eq!(p.to_vec().await, Ok(vec![2, 4]));

            let window = slice_fn(1, Some(4));
            assert_eq!(window([1, 2, 3, 4, 5]).to_vec().await, Ok(vec![2, 3, 4]));

            let flatten = concat_fn();
            assert_eq!(
                flatten(vec![vec![1, 2], vec![], vec![3]]).to_vec().await,
                Ok(vec![1, 2, 3])
            );

            let with_zero = prepend_fn(vec![0]);
            assert_eq!(with_zero(vec![1, 2]).to_vec().await, Ok(vec![0, 1, 2]));
        })
    }

    #[test]
    fn terminal_companions() {
        smol::block_on(async {
            let weighted = fold_fn(0, |acc: i32, n: i32, i: usize| acc + n * i as i32);
            assert_eq!(weighted(vec![1, 2, 3]).await, Ok(8));

            let single = only_fn();
            assert_eq!(single(vec![4]).await, Ok(Some(4)));

            let has_three = contains_fn(3);
            assert_eq!(has_three(from_iter(1..)).await, Ok(true));

            let at = index_fn(2.0);
            assert_eq!(at(vec!['a', 'b', 'c']).await, Ok(Some('c')));

            let mean = average_fn();
            assert_eq!(mean(Vec::<u8>::new()).await, Ok(None));
        })
    }

    #[test]
    fn terminal_companions_compose_with_lazy_ones() {
        smol::block_on(async {
            let squares = map_fn(|n: u32, _| n * n);
            let first_big = find_fn(|n: &u32, _| *n > 50);
            assert_eq!(first_big(squares(from_iter(1..))).await, Ok(Some(64)));
        })
    }

    #[cfg(feature = "std")]
    #[test]
    fn keyed_companions() {
        smol::block_on(async {
            let by_parity = key_first_by_fn(|n: &i32, _| n % 2);
            let groups = by_parity(vec![3, 4, 5, 6]).await.unwrap();
            assert_eq!(groups.into_vec(), vec![(1, 3), (0, 4)]);
        })
    }
}
