//! Entropy calculation for artifact classification.
//!
//! - Shannon entropy over the whole buffer (never a sample)
//! - Low / medium / high buckets used in summaries and reports
//!
//! # Example
//!
//! ```
//! use caselens::entropy::{shannon_entropy, EntropyLevel};
//!
//! let entropy = shannon_entropy(b"Hello, World!");
//! assert_eq!(EntropyLevel::from_entropy(entropy), EntropyLevel::Low);
//! ```

pub mod core;
pub mod level;

pub use self::core::{shannon_entropy, Histogram};
pub use self::level::{EntropyLevel, HIGH_ENTROPY_THRESHOLD, LOW_ENTROPY_THRESHOLD};
