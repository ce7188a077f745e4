//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::BufRead;

/// DXF ASCII text stream reader
///
/// Consumes two lines per record. Code lines are trimmed; value lines only
/// lose their `\n` / `\r\n` terminator so leading and trailing blanks in
/// names survive.
pub struct DxfTextReader<R: BufRead> {
    reader: R,
    line_number: usize,
    peeked_pair: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: BufRead> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            peeked_pair: None,
            encoding: None,
        }
    }

    /// Read a single line, handling non-UTF8 bytes gracefully.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut bytes)
            .map_err(|e| DxfError::stream(self.line_number + 1, e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }

        self.line_number += 1;

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => {
                let bytes = err.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };
        Ok(Some(line))
    }

    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let code_line_number = self.line_number;

        let code = code_line.trim().parse::<i32>().map_err(|_| {
            DxfError::stream(
                code_line_number,
                format!("invalid group code '{}'", code_line.trim()),
            )
        })?;

        let value = self.read_line()?.ok_or_else(|| {
            DxfError::stream(
                code_line_number,
                format!("unexpected end of input after group code {}", code),
            )
        })?;

        Ok(Some(DxfCodePair::new(code, value, code_line_number)))
    }
}

impl<R: BufRead> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }
        self.read_pair_internal()
    }

    fn peek_code(&mut self) -> Result<Option<i32>> {
        if let Some(ref pair) = self.peeked_pair {
            return Ok(Some(pair.code));
        }

        match self.read_pair_internal()? {
            Some(pair) => {
                let code = pair.code;
                self.peeked_pair = Some(pair);
                Ok(Some(code))
            }
            None => Ok(None),
        }
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.peeked_pair = Some(pair);
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &str) -> DxfTextReader<Cursor<Vec<u8>>> {
        DxfTextReader::new(Cursor::new(data.as_bytes().to_vec()))
    }

    #[test]
    fn test_read_simple_pair() {
        let mut reader = reader("  0\nARC\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        assert_eq!(pair.value_string, "ARC");
        assert_eq!(pair.line, 1);
        assert!(reader.read_pair().unwrap().is_none());
    }

    #[test]
    fn test_line_numbers_advance_by_two() {
        let mut reader = reader(" 10\n1.5\n 20\n2.5\n");
        assert_eq!(reader.read_pair().unwrap().unwrap().line, 1);
        assert_eq!(reader.read_pair().unwrap().unwrap().line, 3);
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn test_crlf_and_value_blanks() {
        let mut reader = reader("  8\r\n LAYER A \r\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 8);
        assert_eq!(pair.value_string, " LAYER A ");
    }

    #[test]
    fn test_peek_code() {
        let mut reader = reader("0\nSECTION\n2\nENTITIES\n");
        assert_eq!(reader.peek_code().unwrap(), Some(0));
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        assert_eq!(reader.peek_code().unwrap(), Some(2));
        reader.read_pair().unwrap();
        assert_eq!(reader.peek_code().unwrap(), None);
    }

    #[test]
    fn test_push_back() {
        let mut reader = reader("0\nLINE\n");
        let pair = reader.read_pair().unwrap().unwrap();
        reader.push_back(pair.clone());
        assert_eq!(reader.read_pair().unwrap(), Some(pair));
    }

    #[test]
    fn test_missing_value_line_is_stream_error() {
        let mut reader = reader(" 40\n");
        match reader.read_pair() {
            Err(DxfError::Stream { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected stream error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_code_line_is_stream_error() {
        let mut reader = reader("ARC\n10\n");
        assert!(matches!(reader.read_pair(), Err(DxfError::Stream { line: 1, .. })));
    }

    #[test]
    fn test_latin1_fallback() {
        let bytes = b"  8\nCAF\xC9\n".to_vec();
        let mut reader = DxfTextReader::new(Cursor::new(bytes));
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value_string, "CAF\u{C9}");
    }

    #[test]
    fn test_configured_encoding() {
        let bytes = b"  8\n\xC4\xE5\n".to_vec();
        let mut reader = DxfTextReader::new(Cursor::new(bytes));
        reader.set_encoding(encoding_rs::WINDOWS_1251);
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value_string, "\u{0414}\u{0435}");
    }
}
