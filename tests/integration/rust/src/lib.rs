//! Integration test suite for the Quill front end
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use parser;
    pub use quill_cli;
}
