//! Forensic artifact families recognised by header sniffing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaseLensError;

/// MIME type reported for anything without a dedicated mapping.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// File type detected from the header window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Windows prefetch file
    Prefetch,
    /// Windows XML event log
    Evtx,
    /// Windows registry hive
    Registry,
    /// Process or kernel memory dump
    Memory,
    /// libpcap network capture
    Network,
    /// No signature matched
    Unknown,
}

impl FileType {
    pub const ALL: [FileType; 6] = [
        FileType::Prefetch,
        FileType::Evtx,
        FileType::Registry,
        FileType::Memory,
        FileType::Network,
        FileType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Prefetch => "prefetch",
            FileType::Evtx => "evtx",
            FileType::Registry => "registry",
            FileType::Memory => "memory",
            FileType::Network => "network",
            FileType::Unknown => "unknown",
        }
    }

    /// Static one-to-one MIME mapping.
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileType::Prefetch => "application/x-ms-prefetch",
            FileType::Evtx => "application/x-ms-evtx",
            FileType::Registry => "application/x-ms-registry",
            FileType::Memory => "application/x-memory-dump",
            FileType::Network => "application/vnd.tcpdump.pcap",
            FileType::Unknown => OCTET_STREAM,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, FileType::Unknown)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = CaseLensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CaseLensError::InvalidInput(format!("unknown file type: {}", s)))
    }
}

/// MIME lookup by type name; names without an entry fall back to octet-stream.
pub fn mime_for_name(name: &str) -> &'static str {
    name.parse::<FileType>()
        .map(|t| t.mime_type())
        .unwrap_or(OCTET_STREAM)
}
