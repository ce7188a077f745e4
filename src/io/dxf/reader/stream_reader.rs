//! DXF stream reader trait and the code/value record type

use crate::error::Result;
use encoding_rs::Encoding;
use crate::io::dxf::GroupCodeValueType;
use crate::types::Handle;

/// A DXF code/value pair
///
/// The raw value is kept as text; the typed accessors parse on demand and
/// return `None` when the text does not fit the requested type.
#[derive(Debug, Clone, PartialEq)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// The value type implied by the code
    pub value_type: GroupCodeValueType,

    /// Raw value line, without its line terminator
    pub value_string: String,

    /// Line number of the code line (1-based)
    pub line: usize,
}

impl DxfCodePair {
    /// Create a new code/value pair
    pub fn new(code: i32, value_string: impl Into<String>, line: usize) -> Self {
        Self {
            code,
            value_type: GroupCodeValueType::from_code(code),
            value_string: value_string.into(),
            line,
        }
    }

    /// Get value as i16
    pub fn as_i16(&self) -> Option<i16> {
        self.value_string.trim().parse().ok()
    }

    /// Get value as i32
    pub fn as_i32(&self) -> Option<i32> {
        self.value_string.trim().parse().ok()
    }

    /// Get value as double
    pub fn as_double(&self) -> Option<f64> {
        self.value_string
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// Get value as boolean (any non-zero integer is true)
    pub fn as_bool(&self) -> Option<bool> {
        self.value_string.trim().parse::<i32>().ok().map(|v| v != 0)
    }

    /// Get value as handle (hex string)
    pub fn as_handle(&self) -> Option<Handle> {
        Handle::parse_hex(&self.value_string)
    }

    /// Is this the given `0/NAME` marker
    pub fn is_marker(&self, name: &str) -> bool {
        self.code == 0 && self.value_string.trim() == name
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair; `None` at a clean end of input
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Peek at the next code without consuming it
    fn peek_code(&mut self) -> Result<Option<i32>>;

    /// Push a pair back to be read again on next read_pair call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Number of lines consumed so far
    fn line_number(&self) -> usize;

    /// Decode non-UTF8 text with `encoding` from now on
    fn set_encoding(&mut self, encoding: &'static Encoding);
}
