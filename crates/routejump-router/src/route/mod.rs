//! Route classification for file-based routing
//!
//! One classifier per convention, both built on the segment rules in
//! [`pattern`]:
//! - [`nested`]: folder-based (`app/`) routing
//! - [`flat`]: file-based (`pages/`) routing

pub mod flat;
pub mod nested;
pub mod pattern;

// Re-export commonly used types
pub use pattern::{classify_segment, match_nested_file, SegmentKind};
