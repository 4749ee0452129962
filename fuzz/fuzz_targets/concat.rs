#![no_main]

use std::convert::Infallible;

use libfuzzer_sys::fuzz_target;

use async_once::producer::TestProducerBuilder;
use async_once::{adapt, ProducerExt};

fuzz_target!(|data: Vec<(Vec<u8>, Box<[bool]>)>| {
    smol::block_on(async {
        let expected: Vec<u8> = data.iter().flat_map(|(items, _)| items.clone()).collect();

        let inners: Vec<_> = data
            .into_iter()
            .map(|(items, yield_pattern)| {
                TestProducerBuilder::new(items, Ok::<(), Infallible>(()))
                    .yield_pattern(yield_pattern)
                    .build()
            })
            .collect();

        let flattened = adapt(inners).concat().to_vec().await;
        assert_eq!(flattened, Ok(expected));
    });
});
