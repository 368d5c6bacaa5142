//! CSV output.
//!
//! Files start with a UTF-8 byte order mark so spreadsheet tools pick the
//! right encoding for accented text, followed by a fixed header row:
//!
//! ```text
//! title,link,summary,publication_date,content,author,category,reading_time_label
//! ```

use super::TabularSink;
use crate::error::SinkError;
use crate::models::NewsRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// [`TabularSink`] that creates (or truncates) a CSV file on write.
///
/// Nothing touches the file system until [`TabularSink::write_rows`] is
/// called, so a run that collected nothing leaves no file behind.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabularSink for CsvFileSink {
    #[instrument(level = "info", skip_all, fields(path = %self.path.display(), rows = rows.len()))]
    fn write_rows(&mut self, rows: &[NewsRow]) -> Result<(), SinkError> {
        let file = File::create(&self.path).map_err(|source| SinkError::Io {
            path: self.path.clone(),
            source,
        })?;
        let writer = write_csv(BufWriter::new(file), rows)?;
        writer
            .into_inner()
            .map_err(|e| SinkError::Io {
                path: self.path.clone(),
                source: e.into_error(),
            })?
            .sync_all()
            .map_err(|source| SinkError::Io {
                path: self.path.clone(),
                source,
            })?;

        info!("Wrote CSV file");
        Ok(())
    }
}

/// Write the BOM, the header row and one record per row to `writer`.
///
/// Returns the underlying writer once everything has been flushed to it.
pub fn write_csv<W: Write>(mut writer: W, rows: &[NewsRow]) -> Result<W, SinkError> {
    writer.write_all(UTF8_BOM).map_err(csv::Error::from)?;

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(NewsRow::COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    wtr.into_inner()
        .map_err(|e| SinkError::from(csv::Error::from(e.into_error())))
}
