//! Integration test crate for huecam.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the core, color and engine crates to verify the whole
//! pipeline behaves as one system.

#[cfg(test)]
mod pipeline;

#[cfg(test)]
mod recognition;
