//! Shared builders for synthetic forensic artifacts.

/// Deterministic pseudo-random bytes (xorshift), high entropy.
pub fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Synthetic artifact headers for each recognised family.
pub mod headers {
    pub fn prefetch() -> Vec<u8> {
        let mut v = vec![0x17, 0x00, 0x00, 0x00];
        v.extend_from_slice(b"SCCA");
        v.extend_from_slice(&[0u8; 80]);
        v
    }

    pub fn evtx() -> Vec<u8> {
        let mut v = b"ElfFile\0".to_vec();
        v.extend_from_slice(&[0u8; 120]);
        v
    }

    pub fn registry() -> Vec<u8> {
        let mut v = b"regf".to_vec();
        v.extend_from_slice(&[1, 0, 0, 0, 1, 0, 0, 0]);
        v.extend_from_slice(&[0u8; 100]);
        v
    }

    pub fn minidump() -> Vec<u8> {
        let mut v = b"MDMP".to_vec();
        v.extend_from_slice(&[0x93, 0xa7, 0, 0]);
        v.extend_from_slice(&[0u8; 64]);
        v
    }

    pub fn pcap() -> Vec<u8> {
        let mut v = vec![0xd4, 0xc3, 0xb2, 0xa1, 0x02, 0x00, 0x04, 0x00];
        v.extend_from_slice(&[0u8; 16]);
        v
    }
}

/// Collector for summary updates.
pub mod listener {
    use std::sync::{Arc, Mutex};

    pub type Seen = Arc<Mutex<Vec<(String, String)>>>;

    pub fn recording() -> (impl Fn(&str, &str) + Send + Sync + 'static, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let listener = move |case_id: &str, summary: &str| {
            sink.lock()
                .unwrap()
                .push((case_id.to_string(), summary.to_string()));
        };
        (listener, seen)
    }
}
