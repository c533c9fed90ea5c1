#![no_main]
use huffcode::{Codec, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (corpus, garbage) = data;

    let codec = match Codec::build(&corpus) {
        Ok(codec) => codec,
        Err(Error::EmptyInput) => return,
        Err(e) => panic!("unexpected build error: {e}"),
    };

    // Arbitrary input must decode or fail cleanly.
    let _ = codec.decode(&garbage);

    if codec.tree().is_degenerate() {
        return;
    }

    let sample: String = corpus
        .to_lowercase()
        .chars()
        .filter(|c| codec.table().get(*c).is_some())
        .collect();
    let encoded = codec.encode(&sample).unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), sample);
});
