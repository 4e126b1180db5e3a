use std::sync::Arc;
use std::thread;

use caselens::summary::{ChannelListener, NullListener, SummaryAccumulator};

use crate::common::listener::recording;

const INITIAL: &str = "Initiating analysis...";

#[test]
fn truncation_bound_holds_over_many_chunks() {
    let acc = SummaryAccumulator::new(NullListener);
    let chunk = "c".repeat(100);
    let mut exceeded = false;
    for i in 0..25 {
        let out = acc.process_stream_chunk("case-1", "model", &chunk);
        let len = out.chars().count();
        assert!(len <= 1003, "iteration {} produced {} chars", i, len);
        // untruncated length = initial + (i + 1) fragments of 108 chars
        let raw_len = INITIAL.len() + (i + 1) * (" model: ".len() + 100);
        if raw_len > 1000 {
            exceeded = true;
        }
        if exceeded {
            assert!(out.starts_with("..."));
            assert_eq!(len, 1000);
        } else {
            assert!(out.starts_with(INITIAL));
        }
    }
    assert!(exceeded);
    assert!(acc.current_summary("case-1").ends_with(&chunk));
}

#[test]
fn reset_returns_initial_text() {
    let acc = SummaryAccumulator::new(NullListener);
    acc.process_stream_chunk("c", "m", "some findings");
    acc.reset_summary("c");
    assert_eq!(acc.current_summary("c"), INITIAL);

    let out = acc.process_stream_chunk("c", "m", "again");
    assert_eq!(out, "Initiating analysis... m: again");
}

#[test]
fn current_summary_does_not_create_state() {
    let acc = SummaryAccumulator::new(NullListener);
    assert_eq!(acc.current_summary("ghost"), INITIAL);
    assert!(acc.case_ids().is_empty());
}

#[test]
fn cases_are_independent() {
    let acc = SummaryAccumulator::new(NullListener);
    acc.process_stream_chunk("a", "m1", "alpha");
    acc.process_stream_chunk("b", "m2", "beta");
    acc.reset_summary("a");
    assert_eq!(acc.current_summary("a"), INITIAL);
    assert_eq!(acc.current_summary("b"), "Initiating analysis... m2: beta");
    assert_eq!(acc.case_ids(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn chunks_apply_in_call_order() {
    let acc = SummaryAccumulator::new(NullListener);
    for word in ["one", "two", "three"] {
        acc.process_stream_chunk("c", "m", word);
    }
    assert_eq!(
        acc.current_summary("c"),
        "Initiating analysis... m: one m: two m: three"
    );
}

#[test]
fn every_chunk_and_extraction_notifies_listener() {
    let (listener, seen) = recording();
    let acc = SummaryAccumulator::new(listener);
    let first = acc.process_stream_chunk("c1", "m", "x");
    let second = acc.process_stream_chunk("c2", "m", "y");
    let fin = acc.extract_summary("c1", "complete output");
    acc.reset_summary("c1");

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        [
            ("c1".to_string(), first),
            ("c2".to_string(), second),
            ("c1".to_string(), fin),
        ]
    );
}

#[test]
fn extract_summary_is_bounded_and_stateless() {
    let acc = SummaryAccumulator::new(NullListener);
    acc.process_stream_chunk("c", "m", "streamed");
    let before = acc.current_summary("c");

    let out = acc.extract_summary("c", &"a".repeat(1000));
    assert!(out.starts_with("Final Summary: "));
    assert!(out.chars().count() < 520);
    assert!(out.ends_with("..."));
    assert_eq!(acc.current_summary("c"), before);
}

#[test]
fn channel_listener_receives_updates() {
    let (listener, mut rx) = ChannelListener::channel();
    let acc = SummaryAccumulator::new(listener);
    let out = acc.process_stream_chunk("case-9", "model", "hit");
    let update = rx.try_recv().unwrap();
    assert_eq!(update.case_id, "case-9");
    assert_eq!(update.summary, out);
}

#[test]
fn distinct_cases_progress_concurrently() {
    let acc = Arc::new(SummaryAccumulator::new(NullListener));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let acc = acc.clone();
            thread::spawn(move || {
                let case = format!("case-{}", i);
                for n in 0..50 {
                    acc.process_stream_chunk(&case, "m", &n.to_string());
                }
                case
            })
        })
        .collect();
    for h in handles {
        let case = h.join().unwrap();
        let text = acc.current_summary(&case);
        assert!(text.chars().count() <= 1000);
        assert!(text.ends_with(" m: 49"));
    }
    assert_eq!(acc.case_ids().len(), 8);
}
