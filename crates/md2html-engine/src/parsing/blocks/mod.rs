//! # Block Handling
//!
//! The converter has exactly two block kinds: paragraphs and headings.
//!
//! ## Phases
//!
//! 1. **Paragraph assembly** (`builder`): a `ParagraphBuilder` joins
//!    consecutive non-empty lines and emits a paragraph at each empty line
//! 2. **Classification** (`types`): `BlockKind::classify` inspects the
//!    paragraph's leading `#` run to pick the wrapper element and the offset
//!    where inline content starts
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, Paragraph)
//! - **`builder`**: `ParagraphBuilder` line grouping
//! - **`types`**: `BlockKind`

pub mod builder;
pub mod kinds;
pub mod types;

pub use builder::ParagraphBuilder;
pub use types::BlockKind;
