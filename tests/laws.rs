use std::cell::Cell;

use proptest::prelude::*;

use async_once::prelude::*;

fn items() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-1000i32..1000, 0..40)
}

proptest! {
    #[test]
    fn to_vec_returns_the_input(v in items()) {
        let out = smol::block_on(adapt(v.clone()).to_vec());
        prop_assert_eq!(out, Ok(v));
    }

    #[test]
    fn slice_is_skip_then_take(v in items(), start in 0usize..50, end in proptest::option::of(0usize..50)) {
        let sliced = smol::block_on(adapt(v.clone()).slice(start, end).to_vec()).unwrap();

        let expected: Vec<i32> = match end {
            Some(end) => v.iter().copied().skip(start).take(end.saturating_sub(start)).collect(),
            None => v.iter().copied().skip(start).collect(),
        };
        prop_assert_eq!(&sliced, &expected);

        if let Some(end) = end {
            let composed = smol::block_on(
                adapt(v.clone()).skip(start).take(end.saturating_sub(start)).to_vec(),
            )
            .unwrap();
            prop_assert_eq!(sliced, composed);
        }
    }

    #[test]
    fn take_never_pulls_more_than_asked(n in 0usize..100) {
        let pulls = Cell::new(0usize);
        let naturals = from_iter((0u64..).inspect(|_| pulls.set(pulls.get() + 1)));

        let taken = smol::block_on(naturals.take(n).to_vec()).unwrap();
        prop_assert_eq!(taken.len(), n);
        prop_assert!(pulls.get() <= n);
    }

    #[test]
    fn exhausted_producers_stay_exhausted(v in items(), extra in 1usize..5) {
        smol::block_on(async {
            let mut p = adapt(v.clone()).map(|n, _| n);
            for item in v.iter() {
                assert_eq!(p.produce().await, Ok(Some(*item)));
            }
            for _ in 0..extra {
                assert_eq!(p.produce().await, Ok(None));
            }
        });
    }

    #[test]
    fn sum_distributes_over_concat(a in items(), b in items()) {
        let expected: i32 = a.iter().sum::<i32>() + b.iter().sum::<i32>();
        let total = smol::block_on(adapt(vec![a, b]).concat().sum());
        prop_assert_eq!(total, Ok(expected));
    }

    #[test]
    fn fold_agrees_with_iterator_fold(v in items()) {
        let expected = v
            .iter()
            .enumerate()
            .fold(0i64, |acc, (i, n)| (acc * 3 + i64::from(*n) - i as i64) % 1_000_003);
        let folded = smol::block_on(
            adapt(v).fold(0i64, |acc, n, i| (acc * 3 + i64::from(n) - i as i64) % 1_000_003),
        );
        prop_assert_eq!(folded, Ok(expected));
    }

    #[test]
    fn equal_is_reflexive(v in items()) {
        let same = smol::block_on(adapt(v.clone()).equal(v));
        prop_assert_eq!(same, Ok(true));
    }

    #[test]
    fn equal_detects_any_difference(v in items(), w in items()) {
        let result = smol::block_on(adapt(v.clone()).equal(w.clone()));
        prop_assert_eq!(result, Ok(v == w));
    }

    #[test]
    fn prefix_match_agrees_with_starts_with(v in items(), len in 0usize..50) {
        let prefix: Vec<i32> = v.iter().copied().take(len).collect();
        let result = smol::block_on(adapt(v.clone()).prefix_match(prefix.clone()));
        prop_assert_eq!(result, Ok(v.starts_with(&prefix)));
    }
}

#[test]
fn empty_sum_and_average() {
    smol::block_on(async {
        assert_eq!(adapt(Vec::<i32>::new()).sum().await, Ok(0));
        assert_eq!(adapt(Vec::<i32>::new()).product().await, Ok(1));
        assert_eq!(adapt(Vec::<i32>::new()).average().await, Ok(None));
    })
}

#[test]
fn scenarios() {
    smol::block_on(async {
        assert_eq!(
            adapt([1, 2, 3]).map(|n, _| n + 1).to_vec().await,
            Ok(vec![2, 3, 4])
        );
        assert_eq!(
            adapt([1, 2, 3, 4, 5]).slice(1, Some(4)).to_vec().await,
            Ok(vec![2, 3, 4])
        );
        assert_eq!(
            adapt(["1", "2", "3", "4"])
                .maximum_by_key(|s| s.parse::<u32>().ok())
                .await,
            Ok(Some("4"))
        );
        assert_eq!(adapt(Vec::<i32>::new()).only().await, Ok(None));
        assert_eq!(adapt([4]).only().await, Ok(Some(4)));
        assert_eq!(adapt([3, 4, 5]).only().await, Ok(None));
        assert_eq!(
            adapt(vec![vec![1, 2], vec![], vec![3]]).concat().to_vec().await,
            Ok(vec![1, 2, 3])
        );
    })
}

#[test]
fn nested_producers_compare_element_wise() {
    smol::block_on(async {
        let outer = adapt(vec![vec![1, 2], vec![3]]).map(|inner, _| adapt(inner));
        let other = adapt(vec![vec![1, 2], vec![3]]).map(|inner, _| adapt(inner));

        let same = outer
            .equal_with(other, async |a, b| -> Result<bool, Infallible> {
                a.equal(b).await
            })
            .await;
        assert_eq!(same, Ok(true));
    })
}
