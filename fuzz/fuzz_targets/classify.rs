#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let c = caselens::triage::classify(data);
    assert!((0.0..=8.0).contains(&c.entropy));
    let _ = caselens::report::ReportRenderer::render(&c, caselens::report::ReportFormat::Markdown);
});
