use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    error::{Error, Result},
    indexer::FrequencyIndex,
};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    /// `word<TAB>(line, column), ...` per line
    #[default]
    Text,
    /// One JSON object keyed by word
    Json,
}

/// Writes the report to `path`, replacing any existing file.
pub fn write(path: &Path, frequency_index: &FrequencyIndex, format: ReportFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io("create output file", path, e))?;
    let mut writer = BufWriter::new(file);

    render_report(frequency_index, format, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io("write output file", path, e))
}

pub fn render_report<W: Write>(
    frequency_index: &FrequencyIndex,
    format: ReportFormat,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => render_text(frequency_index, writer),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, frequency_index)?;
            writeln!(writer)
        }
    }
}

fn render_text<W: Write>(frequency_index: &FrequencyIndex, writer: &mut W) -> io::Result<()> {
    for (word, occurrences) in frequency_index {
        write!(writer, "{word}\t")?;

        for (i, occurrence) in occurrences.iter().enumerate() {
            if i != 0 {
                write!(writer, ", ")?;
            }
            write!(writer, "({}, {})", occurrence.line, occurrence.column)?;
        }

        writeln!(writer)?;
    }

    Ok(())
}
