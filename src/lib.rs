//! # dxf-hatch
//!
//! Reading and writing of DXF entities in the ASCII group-code format, with
//! a complete model of HATCH boundaries.
//!
//! ## Features
//!
//! - ARC, LINE, 3DFACE, HATCH, CLASS and ENDTAB records
//! - Version-aware output from R10 (`AC1006`) through 2018 (`AC1032`)
//! - Validation before anything is written
//! - Warnings and comments collected as notifications instead of failing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_hatch::{DxfReader, DxfWriter};
//!
//! let outcome = DxfReader::from_file("sample.dxf")?.read()?;
//! for entity in &outcome.entities {
//!     println!("Entity: {}", entity.name());
//! }
//!
//! let notifications = DxfWriter::new(&outcome.entities).write_to_file("output.dxf")?;
//! # Ok::<(), dxf_hatch::error::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `EntityType` - closed set of records
//! - `EntityCodec` - decode/encode pair for one record name
//! - `EntityRegistry` - name to codec table shared by readers and writers
//! - `VersionPolicy` - which optional groups exist at a format version

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classes;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod types;

pub use error::{DxfError, Result};
pub use types::{Color, DxfVersion, Handle, Vector2, Vector3};

pub use classes::DxfClass;
pub use entities::{
    Arc, BoundaryData, BoundaryEdge, BoundaryPath, Entity, EntityType, Face3D, Hatch, Line,
    PolylineBoundary,
};

pub use io::dxf::{
    DxfReader, DxfReaderConfiguration, DxfWriter, DxfWriterConfiguration, EntityCodec,
    EntityRegistry, ReadOutcome,
};
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
