//! Entity model and the header shared by drawable entities

use crate::classes::DxfClass;
use crate::types::{Color, DxfVersion, Handle};

pub mod arc;
pub mod face3d;
pub mod hatch;
pub mod line;

pub use arc::Arc;
pub use face3d::{Face3D, InvisibleEdgeFlags};
pub use hatch::*;
pub use line::Line;

/// Default linetype name
pub const BYLAYER_LINETYPE: &str = "BYLAYER";

/// Default layer name
pub const DEFAULT_LAYER: &str = "0";

/// Base trait for drawable entities
pub trait Entity {
    /// Shared header fields
    fn common(&self) -> &EntityCommon;

    /// Mutable access to the shared header fields
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// Get the entity type name as written after group code 0
    fn entity_type(&self) -> &'static str;

    /// Get the entity's identifier, if one was assigned
    fn handle(&self) -> Option<Handle> {
        self.common().handle
    }

    /// Set or clear the entity's identifier
    fn set_handle(&mut self, handle: Option<Handle>) {
        self.common_mut().handle = handle;
    }

    /// Get the entity's layer name
    fn layer(&self) -> &str {
        &self.common().layer
    }

    /// Set the entity's layer name
    fn set_layer(&mut self, layer: String) {
        self.common_mut().layer = layer;
    }

    /// Get the entity's color
    fn color(&self) -> Color {
        self.common().color
    }

    /// Set the entity's color
    fn set_color(&mut self, color: Color) {
        self.common_mut().color = color;
    }
}

/// Header fields shared by all drawable entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Identifier (group 5), `None` when unassigned
    pub handle: Option<Handle>,
    /// Linetype name (group 6)
    pub linetype: String,
    /// Layer name (group 8), never empty
    pub layer: String,
    /// Color (group 62)
    pub color: Color,
    /// Lives in paper space (group 67)
    pub paperspace: bool,
    /// Thickness (group 39)
    pub thickness: f64,
    /// Format version the entity was read under or is meant for
    pub version: DxfVersion,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: None,
            linetype: BYLAYER_LINETYPE.to_string(),
            layer: DEFAULT_LAYER.to_string(),
            color: Color::ByLayer,
            paperspace: false,
            thickness: 0.0,
            version: DxfVersion::default(),
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }

    /// Create defaults tagged with a format version
    pub fn for_version(version: DxfVersion) -> Self {
        EntityCommon {
            version,
            ..Self::new()
        }
    }
}

/// Short identification of an entity for diagnostics
pub(crate) fn describe(common: &EntityCommon) -> String {
    match common.handle {
        Some(handle) => format!("{}", handle),
        None => "(no handle)".to_string(),
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// The closed set of records the codec understands
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    /// ARC
    Arc(Arc),
    /// LINE
    Line(Line),
    /// 3DFACE
    Face3D(Face3D),
    /// HATCH
    Hatch(Hatch),
    /// CLASS definition record
    Class(DxfClass),
    /// ENDTAB table terminator
    EndTab,
}

impl EntityType {
    /// Name written after group code 0
    pub fn name(&self) -> &'static str {
        match self {
            EntityType::Arc(e) => e.entity_type(),
            EntityType::Line(e) => e.entity_type(),
            EntityType::Face3D(e) => e.entity_type(),
            EntityType::Hatch(e) => e.entity_type(),
            EntityType::Class(_) => DxfClass::RECORD_NAME,
            EntityType::EndTab => "ENDTAB",
        }
    }

    /// Get a reference to the entity trait object, for records with a header
    pub fn as_entity(&self) -> Option<&dyn Entity> {
        match self {
            EntityType::Arc(e) => Some(e),
            EntityType::Line(e) => Some(e),
            EntityType::Face3D(e) => Some(e),
            EntityType::Hatch(e) => Some(e),
            EntityType::Class(_) | EntityType::EndTab => None,
        }
    }

    /// Shared header, for records that have one
    pub fn common(&self) -> Option<&EntityCommon> {
        self.as_entity().map(|e| e.common())
    }

    /// Identifier, for records that have one
    pub fn handle(&self) -> Option<Handle> {
        self.common().and_then(|c| c.handle)
    }
}

impl From<Arc> for EntityType {
    fn from(e: Arc) -> Self {
        EntityType::Arc(e)
    }
}

impl From<Line> for EntityType {
    fn from(e: Line) -> Self {
        EntityType::Line(e)
    }
}

impl From<Face3D> for EntityType {
    fn from(e: Face3D) -> Self {
        EntityType::Face3D(e)
    }
}

impl From<Hatch> for EntityType {
    fn from(e: Hatch) -> Self {
        EntityType::Hatch(e)
    }
}

impl From<DxfClass> for EntityType {
    fn from(c: DxfClass) -> Self {
        EntityType::Class(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_defaults() {
        let common = EntityCommon::new();
        assert_eq!(common.handle, None);
        assert_eq!(common.linetype, "BYLAYER");
        assert_eq!(common.layer, "0");
        assert_eq!(common.color, Color::ByLayer);
        assert!(!common.paperspace);
        assert_eq!(common.thickness, 0.0);
    }

    #[test]
    fn test_entity_type_names() {
        assert_eq!(EntityType::from(Arc::new()).name(), "ARC");
        assert_eq!(EntityType::from(Line::new()).name(), "LINE");
        assert_eq!(EntityType::from(Face3D::new()).name(), "3DFACE");
        assert_eq!(EntityType::from(Hatch::new()).name(), "HATCH");
        assert_eq!(EntityType::from(DxfClass::default()).name(), "CLASS");
        assert_eq!(EntityType::EndTab.name(), "ENDTAB");
    }

    #[test]
    fn test_header_access() {
        let mut arc = Arc::new();
        arc.set_handle(Some(Handle::new(0x10)));
        arc.set_layer("WALLS".to_string());
        let entity = EntityType::from(arc);
        assert_eq!(entity.handle(), Some(Handle::new(0x10)));
        assert_eq!(entity.common().map(|c| c.layer.as_str()), Some("WALLS"));
        assert!(EntityType::EndTab.common().is_none());
    }
}
