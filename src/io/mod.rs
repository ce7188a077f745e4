//! I/O module for the DXF text format

pub mod dxf;

pub use dxf::{DxfReader, DxfWriter};
