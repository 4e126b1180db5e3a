use caselens::core::{FileType, OCTET_STREAM};
use caselens::entropy::EntropyLevel;
use caselens::triage::{classify, ArtifactClassifier, SignatureSniffer};

use crate::common::{headers, noise};

#[test]
fn each_family_is_recognised_with_its_mime() {
    let cases = vec![
        (headers::prefetch(), FileType::Prefetch),
        (headers::evtx(), FileType::Evtx),
        (headers::registry(), FileType::Registry),
        (headers::minidump(), FileType::Memory),
        (headers::pcap(), FileType::Network),
    ];
    for (data, expected) in cases {
        let c = classify(&data);
        assert_eq!(c.file_type, expected);
        assert_eq!(c.mime_type, expected.mime_type());
        assert_ne!(c.mime_type, OCTET_STREAM);
    }
}

#[test]
fn size_and_entropy_bounds_hold_for_varied_buffers() {
    let buffers: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0u8],
        vec![0xffu8; 4096],
        noise(1, 7),
        noise(65_536, 42),
        b"plain ascii text with nothing to see".to_vec(),
        (0..=255u8).collect(),
    ];
    for b in buffers {
        let c = classify(&b);
        assert_eq!(c.size, b.len() as u64);
        assert!((0.0..=8.0).contains(&c.entropy), "entropy {} out of range", c.entropy);
        assert_eq!(c.hash.len(), 64);
    }
}

#[test]
fn empty_buffer_has_zero_entropy() {
    let c = classify(&[]);
    assert_eq!(c.entropy, 0.0);
    assert_eq!(c.file_type, FileType::Unknown);
}

#[test]
fn entropy_covers_whole_buffer() {
    // Low-entropy header followed by a large random body
    let mut data = headers::registry();
    data.extend(noise(200_000, 3));
    let c = classify(&data);
    assert_eq!(c.file_type, FileType::Registry);
    assert_eq!(c.entropy_level(), EntropyLevel::High);
    assert!(c.summary.contains("high entropy"));
}

#[test]
fn memory_magic_anywhere_in_header_window() {
    let mut data = vec![0u8; 128];
    data.extend_from_slice(b"PAGEDUMP");
    assert_eq!(classify(&data).file_type, FileType::Memory);

    let mut late = vec![0u8; 600];
    late.extend_from_slice(b"PAGEDUMP");
    assert_eq!(classify(&late).file_type, FileType::Unknown);
}

#[test]
fn earliest_table_entry_wins_on_adversarial_header() {
    // Prefetch version byte, then an evtx-like tag and a minidump magic
    let mut data = vec![0x11];
    data.extend_from_slice(b"ElfFileMDMP");
    assert_eq!(classify(&data).file_type, FileType::Prefetch);

    // Registry magic with an embedded minidump magic
    let mut data = b"regf".to_vec();
    data.extend_from_slice(b"MDMP");
    assert_eq!(classify(&data).file_type, FileType::Registry);

    // pcap magic with an embedded minidump magic: memory precedes network
    let mut data = headers::pcap();
    data.extend_from_slice(b"PAGEDU64");
    assert_eq!(classify(&data).file_type, FileType::Memory);

    let rule = SignatureSniffer::matching_rule(&data, 512).unwrap();
    assert_eq!(rule.name, "memory-dump");
}

#[test]
fn indicators_one_per_family() {
    let mut data = headers::evtx();
    data.extend_from_slice(
        b"powershell.exe -enc AAAA; cmd.exe /c whoami; https://a.example http://b.example \
          user=Administrator group=admin",
    );
    let c = classify(&data);
    assert_eq!(c.suspicious_indicators.len(), 3);
    let mut dedup = c.suspicious_indicators.clone();
    dedup.dedup();
    assert_eq!(dedup.len(), 3);
}

#[test]
fn indicators_survive_undecodable_bytes() {
    let mut data = noise(2048, 11);
    data.extend_from_slice(b" http://c2.example/beacon ");
    data.extend(noise(2048, 12));
    let c = classify(&data);
    assert!(c
        .suspicious_indicators
        .iter()
        .any(|i| i.contains("network")));
}

#[test]
fn indicators_limited_to_scan_window() {
    let mut data = vec![b'.'; 10_000];
    data.extend_from_slice(b"cmd.exe");
    assert!(classify(&data).suspicious_indicators.is_empty());

    let mut data = vec![b'.'; 9_993];
    data.extend_from_slice(b"cmd.exe");
    assert_eq!(classify(&data).suspicious_indicators.len(), 1);
}

#[test]
fn classify_path_reads_file() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("SYSTEM");
    std::fs::write(&p, headers::registry()).unwrap();
    let c = ArtifactClassifier::new().classify_path(&p).unwrap();
    assert_eq!(c.file_type, FileType::Registry);
    assert_eq!(c.size, headers::registry().len() as u64);
}
