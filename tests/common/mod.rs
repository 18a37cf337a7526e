//! Consolidated test utilities for ezgit
//!
//! Real-repository fixtures for integration tests that drive the
//! interactive shell through stdin.

pub mod repository;
