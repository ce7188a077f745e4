//! DXF (Drawing Exchange Format) group-code reading and writing

mod code_page;
mod group_code_value;
pub mod reader;
pub mod registry;
pub mod version_policy;
pub mod writer;

pub use code_page::encoding_for_code_page;
pub use group_code_value::GroupCodeValueType;
pub use reader::{DxfReader, DxfReaderConfiguration, EntityReader, ReadOutcome};
pub use registry::{standard_registry, EntityCodec, EntityRegistry};
pub use version_policy::{PolicyField, VersionPolicy};
pub use writer::{
    DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, DxfWriter, DxfWriterConfiguration,
    EntityWriter,
};
