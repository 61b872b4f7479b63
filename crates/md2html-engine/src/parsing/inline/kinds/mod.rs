//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Marker`**: emphasis-style delimiters (`*`, `**`, `` ` ``, `--`, ...)
//!   and the element each one renders as
//! - **`Link`**: `[`, `]`, `(`, `)` and the bracket pairing
//! - **`Reserved`**: HTML reserved characters, the escape character, and
//!   their encoded forms
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these; it never hardcodes `**` or `[`.

pub mod link;
pub mod marker;
pub mod reserved;

pub use link::Link;
pub use marker::Marker;
pub use reserved::Reserved;
