//! Helpers for building the comparators taken by
//! [`maximum_by`](crate::ProducerExt::maximum_by) and [`minimum_by`](crate::ProducerExt::minimum_by).

use core::cmp::Ordering;

/// Turns a comparator into its reverse, so that the greatest item according to `cmp` becomes
/// the least one and vice versa.
pub fn reverse<T: ?Sized, F>(mut cmp: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| cmp(a, b).reverse()
}

/// Compares two values by a key extracted from each of them.
pub fn by_key<T: ?Sized, K: Ord, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}

/// Compares two partially ordered values, treating incomparable values (such as `NaN`) as
/// equal.
pub fn partial<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversing() {
        let mut cmp = reverse(|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(cmp(&1, &2), Ordering::Greater);
        assert_eq!(cmp(&2, &2), Ordering::Equal);
    }

    #[test]
    fn keys() {
        let mut cmp = by_key(|s: &str| s.len());
        assert_eq!(cmp("abc", "de"), Ordering::Greater);
    }

    #[test]
    fn partial_orders() {
        assert_eq!(partial(&1.0, &2.0), Ordering::Less);
        assert_eq!(partial(&f64::NAN, &2.0), Ordering::Equal);
    }
}
