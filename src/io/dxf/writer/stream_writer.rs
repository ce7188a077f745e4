//! DXF stream writer traits

use crate::error::Result;
use crate::types::{Color, Handle, Vector2, Vector3};

/// Sink for DXF code/value pairs
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with an i16 value
    fn write_i16(&mut self, code: i32, value: i16) -> Result<()>;

    /// Write a code/value pair with an i32 value
    fn write_i32(&mut self, code: i32, value: i32) -> Result<()>;

    /// Write a code/value pair with a double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a flag as 1 or 0
    fn write_bool(&mut self, code: i32, value: bool) -> Result<()>;

    /// Write a handle in hexadecimal
    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

/// Composite writes built from the primitive ones
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a 2D point (codes `x_code` and `x_code + 10`)
    fn write_point2d(&mut self, x_code: i32, point: Vector2) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        Ok(())
    }

    /// Write a 3D point (codes `x_code`, `+10` and `+20`)
    fn write_point3d(&mut self, x_code: i32, point: Vector3) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        self.write_double(x_code + 20, point.z)?;
        Ok(())
    }

    /// Write a color index
    fn write_color(&mut self, code: i32, color: Color) -> Result<()> {
        self.write_i16(code, color.index())
    }

    /// Write the `0/NAME` record that opens an entity
    fn write_entity_type(&mut self, entity_type: &str) -> Result<()> {
        self.write_string(0, entity_type)
    }

    /// Write a subclass marker
    fn write_subclass(&mut self, marker: &str) -> Result<()> {
        self.write_string(100, marker)
    }

    /// Write end of file
    fn write_eof(&mut self) -> Result<()> {
        self.write_string(0, "EOF")
    }
}

impl<T: DxfStreamWriter + ?Sized> DxfStreamWriterExt for T {}
