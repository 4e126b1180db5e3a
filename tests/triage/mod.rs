//! Classification and report integration tests.

mod classify;
mod determinism;
