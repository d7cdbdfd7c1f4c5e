use crate::error::ConvertError;
use crate::results::ResolvedRow;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Byte-order mark so spreadsheet tools detect UTF-8
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Header row of every output file
pub const HEADER: [&str; 2] = ["Title", "URL"];

/// Writes the BOM, header and rows to `out`, quoting every field
pub fn write_rows<W: Write>(mut out: W, rows: &[ResolvedRow]) -> Result<(), csv::Error> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row.fields())?;
    }
    wtr.flush()?;

    Ok(())
}

/// Creates (or truncates) `path` and writes the rows to it.
///
/// A failure part-way through can leave a partial file behind.
pub fn write_csv(path: impl AsRef<Path>, rows: &[ResolvedRow]) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let to_error = |source: csv::Error| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| to_error(e.into()))?;
    write_rows(BufWriter::new(file), rows).map_err(to_error)?;

    ::log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
