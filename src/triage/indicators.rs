//! Suspicious-content scan over the leading text of an artifact.
//!
//! The scan window is split into maximal valid UTF-8 runs and each run is
//! searched for fixed token families. Undecodable bytes end a run; they are
//! never replaced and never take part in a match.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Default number of leading bytes scanned.
pub const DEFAULT_SCAN_WINDOW: usize = 10_000;

const FAMILY_COUNT: usize = 3;

/// Token family; each contributes at most one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorFamily {
    ProcessExecution,
    Network,
    Privilege,
}

impl IndicatorFamily {
    /// Families in reporting order.
    pub const ALL: [IndicatorFamily; FAMILY_COUNT] = [
        IndicatorFamily::ProcessExecution,
        IndicatorFamily::Network,
        IndicatorFamily::Privilege,
    ];

    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            IndicatorFamily::ProcessExecution => &["cmd.exe", "powershell"],
            IndicatorFamily::Network => &["http://", "https://"],
            IndicatorFamily::Privilege => &["admin", "administrator"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorFamily::ProcessExecution => "Contains command execution references",
            IndicatorFamily::Network => "Contains network URLs",
            IndicatorFamily::Privilege => "Contains administrative privilege references",
        }
    }

    fn index(&self) -> usize {
        match self {
            IndicatorFamily::ProcessExecution => 0,
            IndicatorFamily::Network => 1,
            IndicatorFamily::Privilege => 2,
        }
    }
}

impl fmt::Display for IndicatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

struct TokenMatcher {
    automaton: AhoCorasick,
    // pattern id -> family
    families: Vec<IndicatorFamily>,
}

static MATCHER: Lazy<TokenMatcher> = Lazy::new(|| {
    let mut patterns = Vec::new();
    let mut families = Vec::new();
    for family in IndicatorFamily::ALL {
        for token in family.tokens() {
            patterns.push(*token);
            families.push(family);
        }
    }
    let automaton = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns)
        .expect("valid indicator token set");
    TokenMatcher {
        automaton,
        families,
    }
});

/// Scan the first `window` bytes and return the families found, in reporting order.
pub fn scan_families(data: &[u8], window: usize) -> Vec<IndicatorFamily> {
    let scanned = &data[..data.len().min(window)];
    let mut seen = [false; FAMILY_COUNT];
    let mut invalid_bytes = 0usize;

    'chunks: for chunk in scanned.utf8_chunks() {
        invalid_bytes += chunk.invalid().len();
        for m in MATCHER.automaton.find_iter(chunk.valid()) {
            seen[MATCHER.families[m.pattern().as_usize()].index()] = true;
            if seen.iter().all(|s| *s) {
                break 'chunks;
            }
        }
    }

    if invalid_bytes > 0 {
        debug!(invalid_bytes, "Skipped undecodable bytes during indicator scan");
    }

    IndicatorFamily::ALL
        .into_iter()
        .filter(|f| seen[f.index()])
        .collect()
}

/// Scan and return indicator labels.
pub fn scan_indicators(data: &[u8], window: usize) -> Vec<String> {
    scan_families(data, window)
        .into_iter()
        .map(|f| f.label().to_string())
        .collect()
}
