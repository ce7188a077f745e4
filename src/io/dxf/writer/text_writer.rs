//! ASCII DXF writer

use super::stream_writer::DxfStreamWriter;
use crate::error::Result;
use crate::types::Handle;
use std::io::Write;

/// Largest magnitude still written in fixed notation with a `.0` suffix
const FIXED_NOTATION_LIMIT: f64 = 1e15;

/// Text form of a double that parses back to the same value.
///
/// Integral values keep one decimal place (`3.0`). Everything else uses the
/// shortest representation that round-trips.
pub fn format_double(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < FIXED_NOTATION_LIMIT {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// ASCII DXF stream writer
pub struct DxfTextWriter<W: Write> {
    writer: W,
}

impl<W: Write> DxfTextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Group code right-aligned in a 3-character field
    fn write_code(&mut self, code: i32) -> Result<()> {
        writeln!(self.writer, "{:>3}", code)?;
        Ok(())
    }

    fn write_value(&mut self, code: i32, value: impl std::fmt::Display) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_value(code, value)
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        self.write_value(code, value)
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        self.write_value(code, value)
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_value(code, format_double(value))
    }

    fn write_bool(&mut self, code: i32, value: bool) -> Result<()> {
        self.write_value(code, if value { 1 } else { 0 })
    }

    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        self.write_value(code, format_args!("{:X}", handle.value()))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
