//! Shared test utilities for the cf-inset workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Locating bundled scene files under `testdata/`
//! - Synthetic coordinate axes and point scenes
//! - Common datasets with CF-style attributes
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your integration tests:
//!
//! ```ignore
//! use test_utils::{fixtures, generators};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if a data file is not found, e.g. when the crate
/// is tested outside the workspace.
///
/// ```ignore
/// use test_utils::require_test_file;
///
/// #[test]
/// fn test_real_scene() {
///     let path = require_test_file!("sla_chart_scene.json");
///     // Test code using path...
/// }
/// ```
///
/// If the file is not found, the test will print a skip message and return early.
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: Test file '{}' not found. Set TEST_DATA_DIR to run this test.",
                    $name
                );
                return;
            }
        }
    }};
}
