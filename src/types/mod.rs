//! Core types used throughout dxf-hatch

pub mod color;
pub mod handle;
pub mod vector;

pub use color::Color;
pub use handle::Handle;
pub use vector::{Vector2, Vector3};

/// DXF format version, ordered oldest to newest
///
/// Release 11 and release 12 share the `AC1009` version string, so they map
/// to one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DxfVersion {
    /// Unknown version
    Unknown,
    /// AutoCAD R10 (AC1006)
    AC1006,
    /// AutoCAD R11 / R12 (AC1009)
    AC1009,
    /// AutoCAD R13 (AC1012)
    AC1012,
    /// AutoCAD R14 (AC1014)
    AC1014,
    /// AutoCAD 2000 (AC1015)
    #[default]
    AC1015,
    /// AutoCAD 2004 (AC1018)
    AC1018,
    /// AutoCAD 2007 (AC1021)
    AC1021,
    /// AutoCAD 2010 (AC1024)
    AC1024,
    /// AutoCAD 2013 (AC1027)
    AC1027,
    /// AutoCAD 2018 (AC1032)
    AC1032,
}

impl DxfVersion {
    /// Every known version, oldest first
    pub const ALL: [DxfVersion; 10] = [
        DxfVersion::AC1006,
        DxfVersion::AC1009,
        DxfVersion::AC1012,
        DxfVersion::AC1014,
        DxfVersion::AC1015,
        DxfVersion::AC1018,
        DxfVersion::AC1021,
        DxfVersion::AC1024,
        DxfVersion::AC1027,
        DxfVersion::AC1032,
    ];

    /// Get the version string (e.g., "AC1015")
    pub fn as_str(&self) -> &'static str {
        match self {
            DxfVersion::Unknown => "UNKNOWN",
            DxfVersion::AC1006 => "AC1006",
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Parse the `$ACADVER` value (e.g., "AC1015")
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s.trim())
    }

    /// Parse the `$ACADVER` value, falling back to `Unknown`
    pub fn from_version_string(s: &str) -> Self {
        Self::parse(s).unwrap_or(DxfVersion::Unknown)
    }

    /// Numeric format version (the digits of the version string)
    pub fn version_code(&self) -> u16 {
        match self {
            DxfVersion::Unknown => 0,
            DxfVersion::AC1006 => 1006,
            DxfVersion::AC1009 => 1009,
            DxfVersion::AC1012 => 1012,
            DxfVersion::AC1014 => 1014,
            DxfVersion::AC1015 => 1015,
            DxfVersion::AC1018 => 1018,
            DxfVersion::AC1021 => 1021,
            DxfVersion::AC1024 => 1024,
            DxfVersion::AC1027 => 1027,
            DxfVersion::AC1032 => 1032,
        }
    }

    /// Create version from numeric code
    pub fn from_version_code(code: u16) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.version_code() == code)
            .unwrap_or(DxfVersion::Unknown)
    }
}

impl std::fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
