//! # Declutter Library
//!
//! Converts HTML that relies on the `sl-details` web component and
//! Tailwind-style utility classes into self-contained semantic HTML,
//! with a single embedded stylesheet and no runtime dependencies.
//!
//! ## Module organization
//!
//! - `core` - conversion pipeline, options and error types
//! - `parsers` - HTML parsing, DOM rewriting and serialization

pub mod core;
pub mod parsers;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::parsers::*;
