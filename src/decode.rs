//! Encoding-fallback reading of the report file.
//!
//! PowerShell redirection writes UTF-16 with a byte order mark, so the
//! report is tried as UTF-16 first and as UTF-8 second. Only a decode
//! failure falls through to UTF-8; I/O errors (missing file, permissions)
//! surface unchanged.

use std::fs;
use std::path::Path;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure while loading the report text.
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("report is neither valid UTF-16 nor UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Read the report as text, trying UTF-16 first and UTF-8 second.
pub fn read_report(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    if let Some(text) = try_utf16(&bytes) {
        return Ok(text);
    }
    Ok(String::from_utf8(bytes)?)
}

/// Decode as UTF-16 when an explicit byte order mark is present.
///
/// Much valid UTF-8 also pairs up into valid UTF-16 code units, so the
/// UTF-16 interpretation is only trusted behind a BOM.
fn try_utf16(bytes: &[u8]) -> Option<String> {
    let big_endian = match bytes {
        [0xfe, 0xff, ..] => true,
        [0xff, 0xfe, ..] => false,
        _ => return None,
    };
    let payload = &bytes[2..];
    if payload.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn utf16le(text: &str) -> Vec<u8> {
        let mut bytes = vec![0xff, 0xfe];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    fn utf16be(text: &str) -> Vec<u8> {
        let mut bytes = vec![0xfe, 0xff];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn test_utf16le_with_bom_decodes() {
        assert_eq!(try_utf16(&utf16le("[]")).as_deref(), Some("[]"));
    }

    #[test]
    fn test_utf16be_with_bom_decodes() {
        assert_eq!(try_utf16(&utf16be("[{\"a\":1}]")).as_deref(), Some("[{\"a\":1}]"));
    }

    #[test]
    fn test_no_bom_is_not_utf16() {
        assert!(try_utf16(b"[] plain utf-8").is_none());
    }

    #[test]
    fn test_odd_length_after_bom_rejected() {
        let mut bytes = utf16le("[]");
        bytes.push(0x00);
        assert!(try_utf16(&bytes).is_none());
    }

    #[test]
    fn test_unpaired_surrogate_rejected() {
        // 0xd800 alone is not a valid UTF-16 sequence
        let bytes = vec![0xff, 0xfe, 0x00, 0xd8];
        assert!(try_utf16(&bytes).is_none());
    }

    #[test]
    fn test_read_report_utf8_fallback() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("lint-report.json");
        std::fs::write(&path, b"[{\"filePath\":\"a.js\"}]").unwrap();
        assert_eq!(read_report(&path).unwrap(), "[{\"filePath\":\"a.js\"}]");
    }

    #[test]
    fn test_read_report_utf16_first() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("lint-report.json");
        std::fs::write(&path, utf16le("[{\"filePath\":\"a.js\"}]")).unwrap();
        assert_eq!(read_report(&path).unwrap(), "[{\"filePath\":\"a.js\"}]");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = tempdir().unwrap();
        let err = read_report(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("lint-report.json");
        std::fs::write(&path, [0xc3, 0x28, 0xa0, 0xa1]).unwrap();
        let err = read_report(&path).unwrap_err();
        assert!(matches!(err, ReadError::Encoding(_)));
    }
}
