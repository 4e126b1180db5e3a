//! Streaming summary and staging integration tests.

mod accumulator;
