#![no_main]

use libfuzzer_sys::fuzz_target;

use async_once::producer::TestProducerBuilder;
use async_once::ProducerExt;

fuzz_target!(
    |data: (Vec<u16>, Result<(), u16>, Box<[bool]>, u8, Option<u8>)| {
        smol::block_on(async {
            let (items, last, yield_pattern, start, end) = data;
            let start = start as usize;
            let end = end.map(usize::from);

            let p = TestProducerBuilder::new(items.clone(), last)
                .yield_pattern(yield_pattern)
                .build();
            let pulls = p.pulls();

            let got = p.slice(start, end).to_vec().await;

            match end {
                // Empty by construction: the upstream is never touched.
                Some(end) if end <= start => {
                    assert_eq!(got, Ok(vec![]));
                    assert_eq!(pulls.get(), 0);
                }
                // The window ends within the scripted items.
                Some(end) if end <= items.len() => {
                    assert_eq!(got, Ok(items[start..end].to_vec()));
                    assert_eq!(pulls.get(), end);
                }
                _ => {
                    let from = start.min(items.len());
                    match last {
                        Ok(()) => assert_eq!(got, Ok(items[from..].to_vec())),
                        Err(err) => assert_eq!(got, Err(err)),
                    }
                    assert_eq!(pulls.get(), items.len() + 1);
                }
            }
        });
    }
);
