//! Entity codec registry
//!
//! Maps the name written after group code 0 to the codec that decodes and
//! encodes that record. The registry is filled once and then only read, so a
//! single instance can be shared by every reader and writer.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::classes::DxfClass;
use crate::entities::EntityType;
use crate::error::{DxfError, Result};
use crate::io::dxf::reader::EntityReader;
use crate::io::dxf::writer::EntityWriter;

/// Decoder and encoder for one record name
pub trait EntityCodec: Send + Sync {
    /// Name written after group code 0
    fn name(&self) -> &'static str;

    /// Decode the fields that follow the `0/NAME` record
    fn decode(&self, reader: &mut EntityReader<'_>) -> Result<EntityType>;

    /// Encode `entity`, including its `0/NAME` record
    fn encode(&self, writer: &mut EntityWriter<'_>, entity: &EntityType) -> Result<()>;
}

fn mismatch(codec: &'static str, entity: &EntityType) -> DxfError {
    DxfError::InvalidEntityType(format!(
        "{} codec cannot encode a {} record",
        codec,
        entity.name()
    ))
}

/// ARC
pub struct ArcCodec;

impl EntityCodec for ArcCodec {
    fn name(&self) -> &'static str {
        "ARC"
    }

    fn decode(&self, reader: &mut EntityReader<'_>) -> Result<EntityType> {
        reader.read_arc().map(EntityType::Arc)
    }

    fn encode(&self, writer: &mut EntityWriter<'_>, entity: &EntityType) -> Result<()> {
        match entity {
            EntityType::Arc(arc) => writer.write_arc(arc),
            other => Err(mismatch(self.name(), other)),
        }
    }
}

/// LINE
pub struct LineCodec;

impl EntityCodec for LineCodec {
    fn name(&self) -> &'static str {
        "LINE"
    }

    fn decode(&self, reader: &mut EntityReader<'_>) -> Result<EntityType> {
        reader.read_line().map(EntityType::Line)
    }

    fn encode(&self, writer: &mut EntityWriter<'_>, entity: &EntityType) -> Result<()> {
        match entity {
            EntityType::Line(line) => writer.write_line(line),
            other => Err(mismatch(self.name(), other)),
        }
    }
}

/// 3DFACE
pub struct Face3DCodec;

impl EntityCodec for Face3DCodec {
    fn name(&self) -> &'static str {
        "3DFACE"
    }

    fn decode(&self, reader: &mut EntityReader<'_>) -> Result<EntityType> {
        reader.read_face3d().map(EntityType::Face3D)
    }

    fn encode(&self, writer: &mut EntityWriter<'_>, entity: &EntityType) -> Result<()> {
        match entity {
            EntityType::Face3D(face) => writer.write_face3d(face),
            other => Err(mismatch(self.name(), other)),
        }
    }
}

/// HATCH
pub struct HatchCodec;

impl EntityCodec for HatchCodec {
    fn name(&self) -> &'static str {
        "HATCH"
    }

    fn decode(&self, reader: &mut EntityReader<'_>) -> Result<EntityType> {
        reader.read_hatch().map(EntityType::Hatch)
    }

    fn encode(&self, writer: &mut EntityWriter<'_>, entity: &EntityType) -> Result<()> {
        match entity {
            EntityType::Hatch(hatch) => writer.write_hatch(hatch),
            other => Err(mismatch(self.name(), other)),
        }
    }
}

/// CLASS
pub struct ClassCodec;

impl EntityCodec for ClassCodec {
    fn name(&self) -> &'static str {
        DxfClass::RECORD_NAME
    }

    fn decode(&self, reader: &mut EntityReader<'_>) -> Result<EntityType> {
        reader.read_class().map(EntityType::Class)
    }

    fn encode(&self, writer: &mut EntityWriter<'_>, entity: &EntityType) -> Result<()> {
        match entity {
            EntityType::Class(class) => writer.write_class(class),
            other => Err(mismatch(self.name(), other)),
        }
    }
}

/// ENDTAB
pub struct EndTabCodec;

impl EntityCodec for EndTabCodec {
    fn name(&self) -> &'static str {
        "ENDTAB"
    }

    fn decode(&self, reader: &mut EntityReader<'_>) -> Result<EntityType> {
        reader.read_end_tab().map(|_| EntityType::EndTab)
    }

    fn encode(&self, writer: &mut EntityWriter<'_>, entity: &EntityType) -> Result<()> {
        match entity {
            EntityType::EndTab => writer.write_end_tab(),
            other => Err(mismatch(self.name(), other)),
        }
    }
}

/// Name to codec lookup table
pub struct EntityRegistry {
    codecs: IndexMap<&'static str, Box<dyn EntityCodec>>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            codecs: IndexMap::new(),
        }
    }

    /// Registry with every built-in codec
    pub fn standard() -> Self {
        Self::new()
            .with(ArcCodec)
            .with(LineCodec)
            .with(Face3DCodec)
            .with(HatchCodec)
            .with(ClassCodec)
            .with(EndTabCodec)
    }

    /// Add a codec, builder style
    pub fn with(mut self, codec: impl EntityCodec + 'static) -> Self {
        self.register(Box::new(codec));
        self
    }

    /// Add a codec, returning the one it replaced
    pub fn register(&mut self, codec: Box<dyn EntityCodec>) -> Option<Box<dyn EntityCodec>> {
        self.codecs.insert(codec.name(), codec)
    }

    /// Codec for a record name
    pub fn get(&self, name: &str) -> Option<&dyn EntityCodec> {
        self.codecs.get(name).map(|codec| codec.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codecs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_REGISTRY: Lazy<EntityRegistry> = Lazy::new(EntityRegistry::standard);

/// Shared registry with every built-in codec
pub fn standard_registry() -> &'static EntityRegistry {
    &STANDARD_REGISTRY
}
