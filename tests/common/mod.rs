//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Fixture lexicons and annotators
//! - Custom assertions over annotations

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
