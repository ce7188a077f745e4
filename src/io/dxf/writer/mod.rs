//! DXF writer module

mod entity_writer;
mod hatch_writer;
mod stream_writer;
mod text_writer;

pub use entity_writer::EntityWriter;
pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::{format_double, DxfTextWriter};

use crate::entities::EntityType;
use crate::error::{DxfError, Result};
use crate::io::dxf::registry::{standard_registry, EntityRegistry};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::DxfVersion;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Configuration for the DXF writer
#[derive(Debug, Clone)]
pub struct DxfWriterConfiguration {
    /// Format version that decides which optional groups are written
    ///
    /// Default: `AC1015`
    pub version: DxfVersion,

    /// When `true`, an entity that fails validation is skipped and reported
    /// as an error notification instead of aborting the write.
    ///
    /// Default: `true`
    pub failsafe: bool,
}

impl Default for DxfWriterConfiguration {
    fn default() -> Self {
        Self {
            version: DxfVersion::AC1015,
            failsafe: true,
        }
    }
}

/// DXF writer for a sequence of entities
pub struct DxfWriter<'e, 'r> {
    entities: &'e [EntityType],
    config: DxfWriterConfiguration,
    registry: &'r EntityRegistry,
}

impl<'e, 'r> DxfWriter<'e, 'r> {
    /// Create a new DXF writer
    pub fn new(entities: &'e [EntityType]) -> Self {
        Self {
            entities,
            config: DxfWriterConfiguration::default(),
            registry: standard_registry(),
        }
    }

    /// Set the writer configuration
    pub fn with_configuration(mut self, config: DxfWriterConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Encode with `registry` instead of the standard codecs
    pub fn with_registry(mut self, registry: &'r EntityRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<NotificationCollection> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    /// Write to a byte vector
    pub fn write_to_vec(&self) -> Result<(Vec<u8>, NotificationCollection)> {
        let mut buffer = Vec::new();
        let notifications = self.write_to_writer(&mut buffer)?;
        Ok((buffer, notifications))
    }

    /// Write every entity followed by `0/EOF`
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<NotificationCollection> {
        let mut stream = DxfTextWriter::new(writer);
        let mut notifications = NotificationCollection::new();
        let mut written = 0usize;

        {
            let mut entity_writer =
                EntityWriter::new(&mut stream, self.config.version, &mut notifications);

            for entity in self.entities {
                let codec = self.registry.get(entity.name()).ok_or_else(|| {
                    DxfError::InvalidEntityType(format!("no codec registered for {}", entity.name()))
                })?;

                match codec.encode(&mut entity_writer, entity) {
                    Ok(()) => written += 1,
                    Err(err) if self.config.failsafe && !err.is_fatal() => {
                        warn!(error = %err, "entity skipped");
                        entity_writer.notify(
                            NotificationType::Error,
                            format!("{} skipped: {}", entity.name(), err),
                        );
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        stream.write_eof()?;
        stream.flush()?;

        info!(
            version = %self.config.version,
            written,
            skipped = self.entities.len() - written,
            "DXF stream written"
        );
        Ok(notifications)
    }
}
