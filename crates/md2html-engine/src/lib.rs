pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use io::{ConversionStats, IoError, convert_file, convert_reader};
pub use parsing::{convert_document, convert_paragraph};
