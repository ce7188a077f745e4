//! Hatch entity and boundary path types
//!
//! A hatch is the only composite record: a list of boundary paths (each a
//! polyline or a list of edges), pattern definition lines with their dash
//! arrays, and seed points. Every list is written behind an explicit count.

use crate::entities::{Entity, EntityCommon};
use crate::types::{Handle, Vector2, Vector3};

/// Hatch pattern type (group 76)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchPatternType {
    /// User-defined pattern
    UserDefined = 0,
    /// Predefined pattern
    #[default]
    Predefined = 1,
    /// Custom pattern
    Custom = 2,
}

impl HatchPatternType {
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::UserDefined),
            1 => Some(Self::Predefined),
            2 => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Hatch style type (group 75)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchStyleType {
    /// Hatch "odd parity" area
    #[default]
    OddParity = 0,
    /// Hatch outermost area only
    OutermostOnly = 1,
    /// Hatch through entire area
    ThroughEntire = 2,
}

impl HatchStyleType {
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::OddParity),
            1 => Some(Self::OutermostOnly),
            2 => Some(Self::ThroughEntire),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Boundary path type flags (group 92)
    ///
    /// `POLYLINE` is owned by [`BoundaryData`]: it is set on the wire from the
    /// data variant and stripped when a path is read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BoundaryPathFlags: i32 {
        const EXTERNAL = 1;
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
        const NOT_CLOSED = 32;
        const SELF_INTERSECTING = 64;
        const TEXT_ISLAND = 128;
        const DUPLICATE = 256;
    }
}

/// Edge type code for boundary path edges (group 72)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeType {
    Line = 1,
    CircularArc = 2,
    EllipticArc = 3,
    Spline = 4,
}

impl EdgeType {
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Line),
            2 => Some(Self::CircularArc),
            3 => Some(Self::EllipticArc),
            4 => Some(Self::Spline),
            _ => None,
        }
    }
}

/// Line edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct LineEdge {
    /// Start point (in OCS)
    pub start: Vector2,
    /// End point (in OCS)
    pub end: Vector2,
}

/// Circular arc edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArcEdge {
    /// Center point (in OCS)
    pub center: Vector2,
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    pub counter_clockwise: bool,
}

/// Elliptic arc edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct EllipticArcEdge {
    /// Center point (in OCS)
    pub center: Vector2,
    /// Endpoint of major axis relative to center (in OCS)
    pub major_axis_endpoint: Vector2,
    /// Ratio of minor axis to major axis
    pub minor_axis_ratio: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    pub counter_clockwise: bool,
}

/// Spline edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct SplineEdge {
    pub degree: i32,
    pub rational: bool,
    pub periodic: bool,
    /// Knot values
    pub knots: Vec<f64>,
    /// Control points (X, Y, weight)
    pub control_points: Vec<Vector3>,
}

impl SplineEdge {
    /// Weight assumed for control points that carry none
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn new(degree: i32) -> Self {
        Self {
            degree,
            rational: false,
            periodic: false,
            knots: Vec::new(),
            control_points: Vec::new(),
        }
    }

    /// Add a control point with the default weight
    pub fn add_control_point(&mut self, point: Vector2) {
        self.control_points.push(point.with_z(Self::DEFAULT_WEIGHT));
    }
}

/// One geometric edge of an edge-list boundary
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryEdge {
    Line(LineEdge),
    CircularArc(CircularArcEdge),
    EllipticArc(EllipticArcEdge),
    Spline(SplineEdge),
}

impl BoundaryEdge {
    pub fn edge_type(&self) -> EdgeType {
        match self {
            BoundaryEdge::Line(_) => EdgeType::Line,
            BoundaryEdge::CircularArc(_) => EdgeType::CircularArc,
            BoundaryEdge::EllipticArc(_) => EdgeType::EllipticArc,
            BoundaryEdge::Spline(_) => EdgeType::Spline,
        }
    }
}

/// Polyline boundary
///
/// Vertices are stored once each; a closed polyline repeats its first
/// vertex only on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineBoundary {
    /// Bulge values are present on the wire (group 72)
    pub has_bulge: bool,
    /// Group 73
    pub is_closed: bool,
    /// Vertices (X, Y, bulge)
    pub vertices: Vec<Vector3>,
}

impl PolylineBoundary {
    /// Create a polyline from plain points
    pub fn new(vertices: Vec<Vector2>, is_closed: bool) -> Self {
        Self {
            has_bulge: false,
            is_closed,
            vertices: vertices.into_iter().map(|v| v.with_z(0.0)).collect(),
        }
    }

    /// Add a vertex with bulge, switching bulge output on when needed
    pub fn add_vertex(&mut self, point: Vector2, bulge: f64) {
        if bulge != 0.0 {
            self.has_bulge = true;
        }
        self.vertices.push(point.with_z(bulge));
    }
}

/// Geometry of a boundary path
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryData {
    Polyline(PolylineBoundary),
    Edges(Vec<BoundaryEdge>),
}

/// Boundary path for a hatch
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    /// Path flags other than `POLYLINE`
    pub flags: BoundaryPathFlags,
    pub data: BoundaryData,
    /// Handles of the source boundary objects (groups 97/330)
    pub source_objects: Vec<Handle>,
}

impl BoundaryPath {
    /// Create a polyline path
    pub fn polyline(polyline: PolylineBoundary) -> Self {
        Self {
            flags: BoundaryPathFlags::empty(),
            data: BoundaryData::Polyline(polyline),
            source_objects: Vec::new(),
        }
    }

    /// Create an edge-list path
    pub fn edges(edges: Vec<BoundaryEdge>) -> Self {
        Self {
            flags: BoundaryPathFlags::empty(),
            data: BoundaryData::Edges(edges),
            source_objects: Vec::new(),
        }
    }

    /// Builder-style flag setter
    pub fn with_flags(mut self, flags: BoundaryPathFlags) -> Self {
        self.flags = flags - BoundaryPathFlags::POLYLINE;
        self
    }

    /// Flags as written in group 92
    pub fn wire_flags(&self) -> BoundaryPathFlags {
        match self.data {
            BoundaryData::Polyline(_) => self.flags | BoundaryPathFlags::POLYLINE,
            BoundaryData::Edges(_) => self.flags - BoundaryPathFlags::POLYLINE,
        }
    }

    pub fn is_polyline(&self) -> bool {
        matches!(self.data, BoundaryData::Polyline(_))
    }

    /// Polyline geometry, if this is a polyline path
    pub fn as_polyline(&self) -> Option<&PolylineBoundary> {
        match &self.data {
            BoundaryData::Polyline(polyline) => Some(polyline),
            BoundaryData::Edges(_) => None,
        }
    }

    /// Edges, if this is an edge-list path
    pub fn as_edges(&self) -> Option<&[BoundaryEdge]> {
        match &self.data {
            BoundaryData::Edges(edges) => Some(edges),
            BoundaryData::Polyline(_) => None,
        }
    }
}

/// Hatch pattern definition line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HatchPatternLine {
    /// Pattern line angle in degrees (group 53)
    pub angle: f64,
    /// Pattern line base point (43/44)
    pub base_point: Vector2,
    /// Pattern line offset (45/46)
    pub offset: Vector2,
    /// Dash lengths (positive = dash, negative = space); empty = continuous
    pub dash_lengths: Vec<f64>,
}

/// Hatch entity
///
/// Represents a filled or patterned area defined by boundary paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    pub common: EntityCommon,
    /// Pattern name (group 2)
    pub pattern_name: String,
    /// Base point; its Z is the hatch elevation
    pub base_point: Vector3,
    /// Normal vector (extrusion direction)
    pub normal: Vector3,
    pub is_solid: bool,
    pub is_associative: bool,
    pub style: HatchStyleType,
    pub pattern_type: HatchPatternType,
    /// Pattern angle in degrees (pattern fill only)
    pub pattern_angle: f64,
    /// Pattern scale or spacing (pattern fill only)
    pub pattern_scale: f64,
    /// Double hatch (pattern fill only)
    pub is_double: bool,
    /// Pixel size used for intersection computations
    pub pixel_size: f64,
    pub paths: Vec<BoundaryPath>,
    /// Empty for solid fills
    pub pattern_lines: Vec<HatchPatternLine>,
    pub seed_points: Vec<Vector2>,
}

impl Hatch {
    /// Name of the solid fill pattern
    pub const SOLID_PATTERN: &'static str = "SOLID";

    /// Create a solid-fill hatch with no boundaries
    pub fn new() -> Self {
        Hatch {
            common: EntityCommon::new(),
            pattern_name: Self::SOLID_PATTERN.to_string(),
            base_point: Vector3::ZERO,
            normal: Vector3::UNIT_Z,
            is_solid: true,
            is_associative: false,
            style: HatchStyleType::OddParity,
            pattern_type: HatchPatternType::Predefined,
            pattern_angle: 0.0,
            pattern_scale: 1.0,
            is_double: false,
            pixel_size: 0.0,
            paths: Vec::new(),
            pattern_lines: Vec::new(),
            seed_points: Vec::new(),
        }
    }

    /// Create a pattern-filled hatch
    pub fn with_pattern(name: impl Into<String>, lines: Vec<HatchPatternLine>) -> Self {
        Hatch {
            pattern_name: name.into(),
            is_solid: false,
            pattern_lines: lines,
            ..Self::new()
        }
    }

    /// Add a boundary path
    pub fn add_path(&mut self, path: BoundaryPath) {
        self.paths.push(path);
    }
}

impl Default for Hatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Hatch {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "HATCH"
    }
}
