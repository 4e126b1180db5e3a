use caselens::core::ArtifactClassification;
use caselens::triage::classify;

use crate::common::{headers, noise};

#[test]
fn classification_is_identical_across_runs() {
    let mut data = headers::minidump();
    data.extend(noise(50_000, 99));
    data.extend_from_slice(b"powershell -w hidden");
    let a = classify(&data);
    let b = classify(&data);
    assert_eq!(a, b);
    assert_eq!(a.to_json_string().unwrap(), b.to_json_string().unwrap());
}

#[test]
fn json_round_trip_has_stable_schema() {
    let c = classify(&headers::pcap());
    let json = c.to_json_string().unwrap();
    let back = ArtifactClassification::from_json_str(&json).unwrap();
    assert_eq!(back, c);
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["fileType"], "network");
    assert_eq!(v["mimeType"], "application/vnd.tcpdump.pcap");
}

#[test]
fn different_bytes_give_different_hashes() {
    let a = classify(b"artifact-a");
    let b = classify(b"artifact-b");
    assert_ne!(a.hash, b.hash);
    assert_eq!(a.size, b.size);
}
