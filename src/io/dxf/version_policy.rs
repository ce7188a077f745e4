//! Format-version gates for optional group codes
//!
//! The same table answers both "may this group be read here" and "should
//! this group be written", so readers and writers stay symmetric.

use crate::types::DxfVersion;

/// Optional groups whose legality depends on the format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyField {
    /// Group 38, entity elevation. Overwrites the Z of the base point.
    Elevation,
    /// Group 100 subclass markers
    SubclassMarker,
    /// Groups 210/220/230, extrusion direction
    Extrusion,
    /// Group 91 in CLASS records
    ClassInstanceCount,
}

/// Version gate lookups
pub struct VersionPolicy;

impl VersionPolicy {
    /// Newest version that still carries group 38
    pub const LAST_ELEVATION_VERSION: DxfVersion = DxfVersion::AC1009;
    /// First version that writes subclass markers
    pub const FIRST_SUBCLASS_VERSION: DxfVersion = DxfVersion::AC1014;
    /// First version that writes extrusion directions
    pub const FIRST_EXTRUSION_VERSION: DxfVersion = DxfVersion::AC1009;
    /// First version that writes class instance counts
    pub const FIRST_INSTANCE_COUNT_VERSION: DxfVersion = DxfVersion::AC1018;

    /// Is `field` legal at `version`
    ///
    /// `Unknown` is treated as older than every known version.
    pub fn is_field_legal(field: PolicyField, version: DxfVersion) -> bool {
        match field {
            PolicyField::Elevation => version <= Self::LAST_ELEVATION_VERSION,
            PolicyField::SubclassMarker => version >= Self::FIRST_SUBCLASS_VERSION,
            PolicyField::Extrusion => version >= Self::FIRST_EXTRUSION_VERSION,
            PolicyField::ClassInstanceCount => version >= Self::FIRST_INSTANCE_COUNT_VERSION,
        }
    }
}
