//! Header signature sniffing for forensic artifact families.
//!
//! Signatures are checked in table order against a bounded header window;
//! the first rule that matches decides the file type.

use memchr::memmem;
use tracing::debug;

use crate::core::FileType;

/// Default header window inspected for signatures.
pub const DEFAULT_SNIFF_WINDOW: usize = 512;

/// How a signature is matched against the header window.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// First byte equals any of the listed values.
    LeadingByte(&'static [u8]),
    /// Window starts with any of the listed magics.
    Prefix(&'static [&'static [u8]]),
    /// Any of the listed magics occurs anywhere in the window.
    Contains(&'static [&'static [u8]]),
}

impl Matcher {
    pub fn matches(&self, window: &[u8]) -> bool {
        match self {
            Matcher::LeadingByte(values) => window.first().is_some_and(|b| values.contains(b)),
            Matcher::Prefix(magics) => magics.iter().any(|m| window.starts_with(m)),
            Matcher::Contains(magics) => magics.iter().any(|m| memmem::find(window, m).is_some()),
        }
    }
}

/// One entry of the signature table.
#[derive(Debug, Clone, Copy)]
pub struct SignatureRule {
    pub name: &'static str,
    pub file_type: FileType,
    pub matcher: Matcher,
}

/// Ordered signature table. Order is the tie-break policy.
pub const SIGNATURES: &[SignatureRule] = &[
    SignatureRule {
        name: "prefetch-version",
        file_type: FileType::Prefetch,
        // XP, Vista/7 and 8.x format versions
        matcher: Matcher::LeadingByte(&[0x11, 0x17, 0x1a]),
    },
    SignatureRule {
        name: "evtx-elffile",
        file_type: FileType::Evtx,
        matcher: Matcher::Prefix(&[b"ElfF"]),
    },
    SignatureRule {
        name: "registry-regf",
        file_type: FileType::Registry,
        matcher: Matcher::Prefix(&[b"regf"]),
    },
    SignatureRule {
        name: "memory-dump",
        file_type: FileType::Memory,
        matcher: Matcher::Contains(&[b"MDMP", b"PAGEDUMP", b"PAGEDU64"]),
    },
    SignatureRule {
        name: "pcap",
        file_type: FileType::Network,
        matcher: Matcher::Prefix(&[&[0xd4, 0xc3, 0xb2, 0xa1], &[0xa1, 0xb2, 0xc3, 0xd4]]),
    },
];

/// Signature-table sniffer.
pub struct SignatureSniffer;

impl SignatureSniffer {
    /// Find the first matching rule within the leading `window` bytes.
    pub fn matching_rule(data: &[u8], window: usize) -> Option<&'static SignatureRule> {
        let header = &data[..data.len().min(window)];
        SIGNATURES.iter().find(|rule| rule.matcher.matches(header))
    }

    /// Detect the file type within the leading `window` bytes.
    pub fn sniff_with_window(data: &[u8], window: usize) -> FileType {
        match Self::matching_rule(data, window) {
            Some(rule) => {
                debug!(rule = rule.name, file_type = %rule.file_type, "Signature matched");
                rule.file_type
            }
            None => {
                debug!("No signature matched in {} header bytes", data.len().min(window));
                FileType::Unknown
            }
        }
    }

    /// Detect the file type using the default 512-byte window.
    pub fn sniff_bytes(data: &[u8]) -> FileType {
        Self::sniff_with_window(data, DEFAULT_SNIFF_WINDOW)
    }
}
