#![no_main]
use libfuzzer_sys::fuzz_target;

use caselens::summary::{NullListener, SummaryAccumulator};

fuzz_target!(|data: &[u8]| {
    let acc = SummaryAccumulator::new(NullListener);
    for chunk in data.split(|b| *b == b'\n') {
        let text = String::from_utf8_lossy(chunk);
        let out = acc.process_stream_chunk("fuzz", "model", &text);
        assert!(out.chars().count() <= 1000);
    }
});
