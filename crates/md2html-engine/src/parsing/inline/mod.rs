//! # Inline Parsing
//!
//! Single-pass inline conversion with a backward "collect" step for closes.
//!
//! ## Architecture
//!
//! The scanner walks the paragraph left to right and appends fragments to a
//! [`Contents`] partition. A marker symbol is literal text, an opener or a
//! closer depending only on the whitespace around it and on the
//! [`OpenLedger`] of pending openers:
//! - an opener is pushed as its own bare fragment
//! - a closer merges everything back to the nearest bare opener into one
//!   wrapped fragment
//! - `[label](target)` pairs are collected as literal text, then merged into
//!   an anchor once both halves are complete
//!
//! Whatever is still bare when the scan ends is emitted as literal text, so
//! every input has an output.
//!
//! ## Modules
//!
//! - **`kinds`**: Delimiter-owning types (`Marker`, `Link`, `Reserved`)
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`types`**: `Fragment`
//! - **`contents`**: `Contents` partition and the collect operation
//! - **`ledger`**: `OpenLedger` of pending openers
//! - **`parser`**: `parse_inline()` and the `InlineScanner` state machine
//!
//! ## Link Target Precedence
//!
//! While a `(` is open and the scan is before the paragraph's last `)`, a
//! closing marker is collected as literal text: `(x_y_)` keeps its
//! underscores.

pub mod contents;
pub mod cursor;
pub mod kinds;
pub mod ledger;
pub mod parser;
pub mod types;

pub use contents::{Contents, Wrap};
pub use ledger::OpenLedger;
pub use parser::{InlineScanner, parse_inline};
pub use types::Fragment;
