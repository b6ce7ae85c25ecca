//! # Starkseal Test Suite
//!
//! Unified test crate containing cross-layer verification flows that
//! exercise the service through its public API against scripted provider
//! doubles.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p starkseal-tests
//! ```

#![allow(dead_code)]

pub mod integration;
