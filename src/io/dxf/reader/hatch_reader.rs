//! HATCH decoding
//!
//! The top level of a HATCH is read with the usual flat field loop. Counted
//! groups (91, 78, 98) switch to strict reads: each expected code must come
//! next, in order, and anything else aborts the decode.

use super::entity_reader::{assign, EntityReader, FieldOutcome};
use crate::entities::hatch::{
    BoundaryData, BoundaryEdge, BoundaryPath, BoundaryPathFlags, CircularArcEdge, EdgeType,
    EllipticArcEdge, Hatch, HatchPatternLine, HatchPatternType, HatchStyleType, LineEdge,
    PolylineBoundary, SplineEdge,
};
use crate::entities::{describe, EntityCommon};
use crate::error::{DxfError, Result};
use crate::types::{Vector2, Vector3};

/// Meaning of an optional group 42 after a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexContext {
    /// Bulge of a polyline boundary vertex, read only when the path says so
    PolylineBulge { has_bulge: bool },
    /// Weight of a spline control point, 1.0 when absent
    SplineWeight,
}

impl<'a> EntityReader<'a> {
    /// Read a HATCH entity
    pub fn read_hatch(&mut self) -> Result<Hatch> {
        let mut hatch = Hatch::new();
        hatch.common = EntityCommon::for_version(self.version());
        let mut elevation = None;

        self.read_fields("HATCH", |r, pair| {
            Ok(match pair.code {
                2 => {
                    hatch.pattern_name = pair.value_string.clone();
                    FieldOutcome::Assigned
                }
                10 => assign(pair.as_double(), &mut hatch.base_point.x),
                20 => assign(pair.as_double(), &mut hatch.base_point.y),
                30 => assign(pair.as_double(), &mut hatch.base_point.z),
                38 => r.read_elevation(pair, &mut elevation),
                41 => assign(pair.as_double(), &mut hatch.pattern_scale),
                47 => assign(pair.as_double(), &mut hatch.pixel_size),
                52 => assign(pair.as_double(), &mut hatch.pattern_angle),
                70 => assign(pair.as_bool(), &mut hatch.is_solid),
                71 => assign(pair.as_bool(), &mut hatch.is_associative),
                75 => assign(
                    pair.as_i16().and_then(HatchStyleType::from_code),
                    &mut hatch.style,
                ),
                76 => assign(
                    pair.as_i16().and_then(HatchPatternType::from_code),
                    &mut hatch.pattern_type,
                ),
                77 => assign(pair.as_bool(), &mut hatch.is_double),
                91 => {
                    let count = EntityReader::count_value(pair, "boundary path count")?;
                    hatch.paths = r.read_boundary_paths(count)?;
                    FieldOutcome::Assigned
                }
                78 => {
                    let count = EntityReader::count_value(pair, "pattern line count")?;
                    hatch.pattern_lines = r.read_pattern_lines(count)?;
                    FieldOutcome::Assigned
                }
                98 => {
                    let count = EntityReader::count_value(pair, "seed point count")?;
                    hatch.seed_points = r.read_seed_points(count)?;
                    FieldOutcome::Assigned
                }
                210 => assign(pair.as_double(), &mut hatch.normal.x),
                220 => assign(pair.as_double(), &mut hatch.normal.y),
                230 => assign(pair.as_double(), &mut hatch.normal.z),
                _ => r.read_common_field(&mut hatch.common, pair),
            })
        })?;

        if let Some(z) = elevation {
            hatch.base_point.z = z;
        }
        if hatch.is_solid {
            self.clear_solid_pattern(&mut hatch);
        }
        Ok(hatch)
    }

    /// A solid fill carries no pattern; values read for one are dropped
    fn clear_solid_pattern(&mut self, hatch: &mut Hatch) {
        let defaults = Hatch::new();
        let has_pattern = hatch.pattern_angle != defaults.pattern_angle
            || hatch.pattern_scale != defaults.pattern_scale
            || hatch.is_double != defaults.is_double
            || !hatch.pattern_lines.is_empty();
        if !has_pattern {
            return;
        }

        self.warn(
            format_args!("HATCH {}", describe(&hatch.common)),
            format_args!(
                "solid fill ignores pattern angle {}, scale {}, double {} and {} pattern lines",
                hatch.pattern_angle,
                hatch.pattern_scale,
                hatch.is_double,
                hatch.pattern_lines.len()
            ),
        );
        hatch.pattern_angle = defaults.pattern_angle;
        hatch.pattern_scale = defaults.pattern_scale;
        hatch.is_double = defaults.is_double;
        hatch.pattern_lines.clear();
    }

    fn read_boundary_paths(&mut self, count: usize) -> Result<Vec<BoundaryPath>> {
        let mut paths = Self::reserve(count);
        for _ in 0..count {
            let flags = BoundaryPathFlags::from_bits_retain(
                self.expect_i32(92, "boundary path type flags")?,
            );

            let data = if flags.contains(BoundaryPathFlags::POLYLINE) {
                BoundaryData::Polyline(self.read_polyline_boundary()?)
            } else {
                BoundaryData::Edges(self.read_boundary_edges()?)
            };

            let source_objects = self.read_source_objects()?;
            paths.push(BoundaryPath {
                flags: flags.difference(BoundaryPathFlags::POLYLINE),
                data,
                source_objects,
            });
        }
        Ok(paths)
    }

    fn read_polyline_boundary(&mut self) -> Result<PolylineBoundary> {
        let has_bulge = self.expect_flag(72, "polyline has-bulge flag")?;
        let is_closed = self.expect_flag(73, "polyline closed flag")?;
        let count = self.expect_count(93, "polyline vertex count")?;

        let context = VertexContext::PolylineBulge { has_bulge };
        let mut vertices = Self::reserve(count);
        for _ in 0..count {
            vertices.push(self.read_vertex(context)?);
        }

        // A closed boundary may repeat its first vertex at the end
        if is_closed && vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        Ok(PolylineBoundary {
            has_bulge,
            is_closed,
            vertices,
        })
    }

    fn read_boundary_edges(&mut self) -> Result<Vec<BoundaryEdge>> {
        let count = self.expect_count(93, "boundary edge count")?;
        let mut edges = Self::reserve(count);

        for _ in 0..count {
            let pair = self.expect(72, "edge type")?;
            let edge_type = pair.as_i16().and_then(EdgeType::from_code).ok_or_else(|| {
                DxfError::stream(
                    pair.line,
                    format!("unknown boundary edge type '{}'", pair.value_string),
                )
            })?;

            let edge = match edge_type {
                EdgeType::Line => BoundaryEdge::Line(LineEdge {
                    start: self.expect_point2(10, "line edge start")?,
                    end: self.expect_point2(11, "line edge end")?,
                }),
                EdgeType::CircularArc => BoundaryEdge::CircularArc(CircularArcEdge {
                    center: self.expect_point2(10, "arc edge center")?,
                    radius: self.expect_double(40, "arc edge radius")?,
                    start_angle: self.expect_double(50, "arc edge start angle")?,
                    end_angle: self.expect_double(51, "arc edge end angle")?,
                    counter_clockwise: self.expect_flag(73, "arc edge direction")?,
                }),
                EdgeType::EllipticArc => BoundaryEdge::EllipticArc(EllipticArcEdge {
                    center: self.expect_point2(10, "ellipse edge center")?,
                    major_axis_endpoint: self.expect_point2(11, "ellipse edge major axis")?,
                    minor_axis_ratio: self.expect_double(40, "ellipse edge axis ratio")?,
                    start_angle: self.expect_double(50, "ellipse edge start angle")?,
                    end_angle: self.expect_double(51, "ellipse edge end angle")?,
                    counter_clockwise: self.expect_flag(73, "ellipse edge direction")?,
                }),
                EdgeType::Spline => BoundaryEdge::Spline(self.read_spline_edge()?),
            };
            edges.push(edge);
        }

        Ok(edges)
    }

    fn read_spline_edge(&mut self) -> Result<SplineEdge> {
        let degree = self.expect_i32(94, "spline degree")?;
        let rational = self.expect_flag(73, "spline rational flag")?;
        let periodic = self.expect_flag(74, "spline periodic flag")?;
        let knot_count = self.expect_count(95, "spline knot count")?;
        let control_count = self.expect_count(96, "spline control point count")?;

        let mut knots = Self::reserve(knot_count);
        for _ in 0..knot_count {
            knots.push(self.expect_double(40, "spline knot value")?);
        }

        let mut control_points = Self::reserve(control_count);
        for _ in 0..control_count {
            control_points.push(self.read_vertex(VertexContext::SplineWeight)?);
        }

        Ok(SplineEdge {
            degree,
            rational,
            periodic,
            knots,
            control_points,
        })
    }

    /// X, Y and the context-dependent group 42 stored as Z
    fn read_vertex(&mut self, context: VertexContext) -> Result<Vector3> {
        let Vector2 { x, y } = self.expect_point2(10, "vertex")?;

        let z = match context {
            VertexContext::PolylineBulge { has_bulge: true } => match self.optional(42)? {
                Some(pair) => pair.as_double().unwrap_or_else(|| {
                    self.warn(
                        format_args!("line {}", pair.line),
                        format_args!("invalid bulge '{}'", pair.value_string),
                    );
                    0.0
                }),
                None => 0.0,
            },
            VertexContext::PolylineBulge { has_bulge: false } => {
                if let Some(pair) = self.optional(42)? {
                    self.warn(
                        format_args!("line {}", pair.line),
                        "bulge on a boundary without the has-bulge flag ignored",
                    );
                }
                0.0
            }
            VertexContext::SplineWeight => match self.optional(42)? {
                Some(pair) => pair.as_double().unwrap_or_else(|| {
                    self.warn(
                        format_args!("line {}", pair.line),
                        format_args!("invalid control point weight '{}'", pair.value_string),
                    );
                    SplineEdge::DEFAULT_WEIGHT
                }),
                None => SplineEdge::DEFAULT_WEIGHT,
            },
        };

        Ok(Vector3::new(x, y, z))
    }

    // Spline fit data (a 97 count after the control points, written by
    // R2010 and later) is not supported: that 97 is taken as the path's
    // source object count, and the fit points that follow break the path.
    fn read_source_objects(&mut self) -> Result<Vec<crate::types::Handle>> {
        let pair = match self.optional(97)? {
            Some(pair) => pair,
            None => return Ok(Vec::new()),
        };
        let count = Self::count_value(&pair, "source object count")?;

        let mut handles = Self::reserve(count);
        for _ in 0..count {
            let pair = self.expect(330, "source object handle")?;
            match pair.as_handle() {
                Some(handle) => handles.push(handle),
                None => self.warn(
                    format_args!("line {}", pair.line),
                    format_args!("invalid source object handle '{}' skipped", pair.value_string),
                ),
            }
        }
        Ok(handles)
    }

    fn read_pattern_lines(&mut self, count: usize) -> Result<Vec<HatchPatternLine>> {
        let mut lines = Self::reserve(count);
        for _ in 0..count {
            let angle = self.expect_double(53, "pattern line angle")?;
            let base_point = Vector2::new(
                self.expect_double(43, "pattern line base point")?,
                self.expect_double(44, "pattern line base point")?,
            );
            let offset = Vector2::new(
                self.expect_double(45, "pattern line offset")?,
                self.expect_double(46, "pattern line offset")?,
            );
            let dash_count = self.expect_count(79, "pattern dash count")?;
            let mut dash_lengths = Self::reserve(dash_count);
            for _ in 0..dash_count {
                dash_lengths.push(self.expect_double(49, "pattern dash length")?);
            }
            lines.push(HatchPatternLine {
                angle,
                base_point,
                offset,
                dash_lengths,
            });
        }
        Ok(lines)
    }

    fn read_seed_points(&mut self, count: usize) -> Result<Vec<Vector2>> {
        let mut seeds = Self::reserve(count);
        for _ in 0..count {
            seeds.push(self.expect_point2(10, "seed point")?);
        }
        Ok(seeds)
    }
}
