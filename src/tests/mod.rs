//! Test modules for the mansion mystery.
//!
//! This module holds the suites that cut across components:
//! - Configuration loading and validation
//! - Property-based tests for the clue registry and clue table
//! - Shared strategies and fixtures


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{clue_strategy, clue_vec_strategy, write_config_file};
