pub mod heading;
pub mod paragraph;

pub use heading::Heading;
pub use paragraph::Paragraph;
