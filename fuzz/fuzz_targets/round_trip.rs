#![no_main]

use libfuzzer_sys::fuzz_target;

use async_once::producer::TestProducerBuilder;
use async_once::ProducerExt;

fuzz_target!(|data: (Vec<u16>, Result<(), u16>, Box<[bool]>)| {
    smol::block_on(async {
        let (items, last, yield_pattern) = data;

        let p = TestProducerBuilder::new(items.clone(), last)
            .yield_pattern(yield_pattern)
            .build();
        let pulls = p.pulls();

        // Collecting reports the scripted items, or the scripted error once they ran out.
        match (p.to_vec().await, last) {
            (Ok(collected), Ok(())) => assert_eq!(collected, items),
            (Err(err), Err(expected)) => assert_eq!(err, expected),
            (got, _) => panic!("unexpected result {:?}", got),
        }

        assert_eq!(pulls.get(), items.len() + 1);
    });
});
