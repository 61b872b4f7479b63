use crate::parsing::{blocks::BlockKind, blocks::ParagraphBuilder, convert_paragraph};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a conversion wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// Block elements written, headings included.
    pub paragraphs: usize,
    pub headings: usize,
}

impl ConversionStats {
    fn record(&mut self, paragraph: &str) {
        self.paragraphs += 1;
        if matches!(BlockKind::classify(paragraph), BlockKind::Heading { .. }) {
            self.headings += 1;
        }
    }
}

/// Streams markup from `reader` to HTML on `writer`, one paragraph at a time.
///
/// Produces the same text as [`crate::parsing::convert_document`].
pub fn convert_reader<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
) -> Result<ConversionStats, IoError> {
    let mut builder = ParagraphBuilder::new();
    let mut stats = ConversionStats::default();

    for line in reader.lines() {
        let line = line?;
        if let Some(paragraph) = builder.push(&line) {
            stats.record(&paragraph);
            writer.write_all(convert_paragraph(&paragraph).as_bytes())?;
            writer.write_all(b"\n")?;
        }
    }
    if let Some(paragraph) = builder.finish() {
        stats.record(&paragraph);
        writer.write_all(convert_paragraph(&paragraph).as_bytes())?;
    }

    writer.flush()?;
    Ok(stats)
}

/// Converts the file at `input` and writes the HTML to `output`.
///
/// Parent directories of `output` are created as needed. An existing
/// `output` is overwritten.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionStats, IoError> {
    if !input.exists() {
        return Err(IoError::NotFound(input.to_path_buf()));
    }
    let reader = BufReader::new(File::open(input)?);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(output)?);

    let stats = convert_reader(reader, writer)?;
    log::debug!(
        "converted {} -> {}: {} paragraphs, {} headings",
        input.display(),
        output.display(),
        stats.paragraphs,
        stats.headings
    );
    Ok(stats)
}
