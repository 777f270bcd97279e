//! Sparse luminous tile plane driven by scripted commands and production rules
//!
//! Tiles live at integer coordinates with a color and an intensity. Production
//! rules recolor tiles based on what surrounds them, while analysis passes
//! measure the blocks and cheapest routes the plane grows over time.

#![forbid(unsafe_code)]

/// Block discovery, perimeter measurement, and path search
pub mod analysis;
/// Session state binding a plane to its production rules
pub mod engine;
/// Script parsing, batch execution, rendering, and error handling
pub mod io;
/// Production rules and their application to the plane
pub mod rules;
/// Sparse plane storage and neighborhood resolution
pub mod spatial;

pub use io::error::{Result, ScriptError};
