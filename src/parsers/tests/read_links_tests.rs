use crate::error::ConvertError;
use crate::parsers::{decode_utf8, read_links};
use crate::results::Link;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_links_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.html");
        fs::write(&path, r#"<a href="https://x.test/a">My Page</a><a>Orphan</a>"#).unwrap();

        let links = read_links(&path).unwrap();
        assert_eq!(
            links,
            vec![
                Link::new("My Page", Some("https://x.test/a".to_string())),
                Link::new("Orphan", None),
            ]
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.html");

        let err = read_links(&path).unwrap_err();
        assert!(matches!(err, ConvertError::InputRead { .. }), "got {:?}", err);
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        // "café" in Latin-1
        fs::write(&path, b"<a href=\"u\">caf\xe9</a>").unwrap();

        let err = read_links(&path).unwrap_err();
        assert!(matches!(err, ConvertError::InputDecode { .. }), "got {:?}", err);
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_utf8(b"\xef\xbb\xbf<a>x</a>").unwrap(), "<a>x</a>");
        assert_eq!(decode_utf8(b"<a>x</a>").unwrap(), "<a>x</a>");
        assert_eq!(decode_utf8("日本語".as_bytes()).unwrap(), "日本語");
    }
}
