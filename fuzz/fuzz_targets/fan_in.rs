#![no_main]

use libfuzzer_sys::fuzz_target;

use async_once::producer::{TestProducer, TestProducerBuilder};
use async_once::ProducerExt;

fn scripted(items: &[u8], yield_pattern: &[bool]) -> TestProducer<u8, ()> {
    TestProducerBuilder::new(items.to_vec(), Ok(()))
        .yield_pattern(yield_pattern.into())
        .build()
}

fuzz_target!(|data: (Vec<u8>, Box<[bool]>, Vec<u8>, Box<[bool]>)| {
    smol::block_on(async {
        let (xs, xs_yield, ys, ys_yield) = data;

        // Zipping pairs up items until the shorter side ends.
        let zipped = scripted(&xs, &xs_yield)
            .zip(scripted(&ys, &ys_yield))
            .to_vec()
            .await;
        let model: Vec<(u8, u8)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        assert_eq!(zipped, Ok(model));

        // Equality agrees with the equality of the scripts.
        let equal = scripted(&xs, &xs_yield)
            .equal(scripted(&ys, &ys_yield))
            .await;
        assert_eq!(equal, Ok(xs == ys));

        let prefix = scripted(&xs, &xs_yield)
            .prefix_match(scripted(&ys, &ys_yield))
            .await;
        assert_eq!(prefix, Ok(xs.starts_with(&ys)));
    });
});
