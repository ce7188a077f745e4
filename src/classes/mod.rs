//! DXF class definition records (CLASS)
//!
//! A class maps a DXF record name to the C++ class implementing it and the
//! application that registered it. Class records carry no entity header.

bitflags::bitflags! {
    /// Proxy capability flags (group 90)
    ///
    /// Operations allowed on proxy instances when the registering
    /// application is not available.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProxyFlags: i32 {
        const ERASE_ALLOWED = 1;
        const TRANSFORM_ALLOWED = 2;
        const COLOR_CHANGE_ALLOWED = 4;
        const LAYER_CHANGE_ALLOWED = 8;
        const LINETYPE_CHANGE_ALLOWED = 16;
        const LINETYPE_SCALE_CHANGE_ALLOWED = 32;
        const VISIBILITY_CHANGE_ALLOWED = 64;
        const CLONING_ALLOWED = 128;
        const LINEWEIGHT_CHANGE_ALLOWED = 256;
        const PLOT_STYLE_NAME_CHANGE_ALLOWED = 512;
        const DISABLES_PROXY_WARNING_DIALOG = 1024;
        const R13_FORMAT_PROXY = 32768;
    }
}

/// A single DXF class definition.
///
/// DXF group codes:
/// - 1: DXF record name (e.g. "ACDBPLACEHOLDER")
/// - 2: C++ class name (e.g. "AcDbPlaceHolder")
/// - 3: Application name (e.g. "ObjectDBX Classes")
/// - 90: Proxy capability flags
/// - 91: Instance count (AC1018 and later)
/// - 280: Was-a-proxy flag
/// - 281: Is-an-entity flag
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DxfClass {
    pub dxf_name: String,
    pub cpp_class_name: String,
    pub application_name: String,
    pub proxy_flags: ProxyFlags,
    pub instance_count: i32,
    /// Class was not loaded when the file was last saved
    pub was_a_proxy: bool,
    /// Instances may appear in ENTITIES/BLOCKS rather than OBJECTS only
    pub is_an_entity: bool,
}

impl DxfClass {
    /// Record name written after group code 0
    pub const RECORD_NAME: &'static str = "CLASS";

    /// Create a new class definition for an object type
    pub fn new(dxf_name: impl Into<String>, cpp_class_name: impl Into<String>) -> Self {
        Self {
            dxf_name: dxf_name.into(),
            cpp_class_name: cpp_class_name.into(),
            application_name: "ObjectDBX Classes".to_string(),
            ..Self::default()
        }
    }

    /// Create a class for an entity type
    pub fn new_entity(dxf_name: impl Into<String>, cpp_class_name: impl Into<String>) -> Self {
        Self {
            is_an_entity: true,
            ..Self::new(dxf_name, cpp_class_name)
        }
    }
}
