pub mod html;

#[cfg(test)]
mod tests;

use crate::error::ConvertError;
use crate::results::Link;
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

/// Reads a bookmark export from disk and extracts its links.
///
/// The file must be valid UTF-8; a leading byte-order mark is ignored.
pub fn read_links(path: impl AsRef<Path>) -> Result<Vec<Link>, ConvertError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ConvertError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let html = decode_utf8(&bytes).map_err(|source| ConvertError::InputDecode {
        path: path.to_path_buf(),
        source,
    })?;

    ::log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(html::extract_links(html))
}

/// Decodes strictly as UTF-8, stripping a leading BOM
pub fn decode_utf8(bytes: &[u8]) -> Result<&str, std::str::Utf8Error> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text))
}
