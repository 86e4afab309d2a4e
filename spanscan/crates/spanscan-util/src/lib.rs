//! spanscan-util - Source Locations and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the location types shared by every spanscan crate:
//! absolute positions, inclusive source ranges tagged with a file label, and
//! the per-file line table used to turn byte offsets into human-readable
//! line/column coordinates.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. COMPUTE ONCE
//!    The line table of a file is built a single time when the file is
//!    loaded. Every conversion afterwards is a binary search plus a scan of
//!    one line.
//!
//! 2. CHARACTER COORDINATES
//!    Scanners work on byte offsets, but reported positions count Unicode
//!    scalar values: `offset` is the character index into the joined file
//!    text, `line` and `column` are 1-based.
//
// ============================================================================
// POSITION CONVERSION
// ============================================================================
//
// Given the line starts L = [l₀ = 0, l₁, ..., lₙ₋₁] (byte offsets) and a byte
// offset b, the line is the largest i with lᵢ <= b. Empty lines share their
// start with the following line, so "largest" selects the line that actually
// holds the character at b.
//
// ```
// text:   a b \n \n c
// bytes:  0 1 2  3  4
// starts: [0, 3, 4]
//
// b = 4 → line 3, column 1
// b = 1 → line 1, column 2
// ```
//
// The character offset is the character start of the line plus the number of
// characters between lᵢ and b.

pub mod error;
pub mod span;

pub use error::{SourceMapError, SourceMapResult};
pub use span::{LineIndex, Position, SourceFile, SourceRange};
