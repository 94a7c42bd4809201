// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains all the UI state logic separated from the main App struct,
//! following the principle of separation of concerns.

pub mod filters;
pub mod grid;
pub mod pulse;
pub mod search;

// Re-export commonly used types for convenience
pub use filters::FilterState;
pub use grid::GridGeometry;
pub use pulse::SkeletonPulse;
pub use search::{SearchMode, SearchState};
