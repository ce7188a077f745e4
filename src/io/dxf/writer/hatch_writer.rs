//! HATCH encoding

use tracing::debug;

use super::entity_writer::{validate_header, validate_text, EntityWriter};
use super::stream_writer::DxfStreamWriterExt;
use crate::entities::describe;
use crate::entities::hatch::{
    BoundaryData, BoundaryEdge, BoundaryPath, Hatch, HatchPatternLine, PolylineBoundary,
    SplineEdge,
};
use crate::error::{DxfError, Result};
use crate::types::Vector3;

impl<'a> EntityWriter<'a> {
    /// Write a HATCH entity
    pub fn write_hatch(&mut self, hatch: &Hatch) -> Result<()> {
        validate_hatch(hatch)?;
        self.check_hatch(hatch);
        debug!(handle = ?hatch.common.handle, paths = hatch.paths.len(), "writing HATCH");

        self.stream().write_entity_type("HATCH")?;
        self.write_subclass_marker("AcDbHatch")?;
        self.stream().write_string(2, &hatch.pattern_name)?;
        self.write_header("HATCH", &hatch.common)?;
        self.stream().write_point3d(10, hatch.base_point)?;
        self.write_extrusion(hatch.normal)?;
        self.write_thickness(&hatch.common)?;
        self.write_display(&hatch.common)?;
        self.stream().write_bool(70, hatch.is_solid)?;
        self.stream().write_bool(71, hatch.is_associative)?;

        self.stream().write_i32(91, count(hatch.paths.len())?)?;
        for path in &hatch.paths {
            self.write_boundary_path(path)?;
        }

        self.stream().write_i16(75, hatch.style as i16)?;
        self.stream().write_i16(76, hatch.pattern_type as i16)?;

        if hatch.is_solid {
            self.stream().write_i16(78, 0)?;
        } else {
            self.stream().write_double(52, hatch.pattern_angle)?;
            self.stream().write_double(41, hatch.pattern_scale)?;
            self.stream().write_bool(77, hatch.is_double)?;
            self.stream().write_i16(78, count16(hatch.pattern_lines.len())?)?;
            for line in &hatch.pattern_lines {
                self.write_pattern_line(line)?;
            }
        }

        self.stream().write_double(47, hatch.pixel_size)?;
        self.stream().write_i32(98, count(hatch.seed_points.len())?)?;
        for seed in &hatch.seed_points {
            self.stream().write_point2d(10, *seed)?;
        }
        Ok(())
    }

    /// Report inconsistencies that are written anyway
    fn check_hatch(&mut self, hatch: &Hatch) {
        if hatch.is_solid && !hatch.pattern_lines.is_empty() {
            self.warn(
                format_args!("HATCH {}", describe(&hatch.common)),
                format_args!(
                    "solid fill ignores its {} pattern lines",
                    hatch.pattern_lines.len()
                ),
            );
        }

        for (index, path) in hatch.paths.iter().enumerate() {
            if let BoundaryData::Polyline(polyline) = &path.data {
                if !polyline.has_bulge && polyline.vertices.iter().any(|v| v.z != 0.0) {
                    self.warn(
                        format_args!("HATCH {}", describe(&hatch.common)),
                        format_args!(
                            "path {} has bulges but its has-bulge flag is clear, bulges dropped",
                            index
                        ),
                    );
                }
            }
        }
    }

    fn write_boundary_path(&mut self, path: &BoundaryPath) -> Result<()> {
        self.stream().write_i32(92, path.wire_flags().bits())?;

        match &path.data {
            BoundaryData::Polyline(polyline) => self.write_polyline_boundary(polyline)?,
            BoundaryData::Edges(edges) => {
                self.stream().write_i32(93, count(edges.len())?)?;
                for edge in edges {
                    self.write_edge(edge)?;
                }
            }
        }

        self.stream().write_i32(97, count(path.source_objects.len())?)?;
        for handle in &path.source_objects {
            self.stream().write_handle(330, *handle)?;
        }
        Ok(())
    }

    /// Closed boundaries repeat their first vertex; the count includes it
    fn write_polyline_boundary(&mut self, polyline: &PolylineBoundary) -> Result<()> {
        let closing = if polyline.is_closed {
            polyline.vertices.first()
        } else {
            None
        };

        self.stream().write_bool(72, polyline.has_bulge)?;
        self.stream().write_bool(73, polyline.is_closed)?;
        self.stream()
            .write_i32(93, count(polyline.vertices.len() + closing.iter().count())?)?;

        for vertex in polyline.vertices.iter().chain(closing) {
            self.stream().write_point2d(10, vertex.xy())?;
            if polyline.has_bulge {
                self.stream().write_double(42, vertex.z)?;
            }
        }
        Ok(())
    }

    fn write_edge(&mut self, edge: &BoundaryEdge) -> Result<()> {
        self.stream().write_i16(72, edge.edge_type() as i16)?;

        match edge {
            BoundaryEdge::Line(line) => {
                self.stream().write_point2d(10, line.start)?;
                self.stream().write_point2d(11, line.end)?;
            }
            BoundaryEdge::CircularArc(arc) => {
                self.stream().write_point2d(10, arc.center)?;
                self.stream().write_double(40, arc.radius)?;
                self.stream().write_double(50, arc.start_angle)?;
                self.stream().write_double(51, arc.end_angle)?;
                self.stream().write_bool(73, arc.counter_clockwise)?;
            }
            BoundaryEdge::EllipticArc(ellipse) => {
                self.stream().write_point2d(10, ellipse.center)?;
                self.stream().write_point2d(11, ellipse.major_axis_endpoint)?;
                self.stream().write_double(40, ellipse.minor_axis_ratio)?;
                self.stream().write_double(50, ellipse.start_angle)?;
                self.stream().write_double(51, ellipse.end_angle)?;
                self.stream().write_bool(73, ellipse.counter_clockwise)?;
            }
            BoundaryEdge::Spline(spline) => self.write_spline_edge(spline)?,
        }
        Ok(())
    }

    fn write_spline_edge(&mut self, spline: &SplineEdge) -> Result<()> {
        self.stream().write_i32(94, spline.degree)?;
        self.stream().write_bool(73, spline.rational)?;
        self.stream().write_bool(74, spline.periodic)?;
        self.stream().write_i32(95, count(spline.knots.len())?)?;
        self.stream().write_i32(96, count(spline.control_points.len())?)?;

        for knot in &spline.knots {
            self.stream().write_double(40, *knot)?;
        }
        for point in &spline.control_points {
            self.write_control_point(spline, *point)?;
        }
        Ok(())
    }

    /// X and Y, then the weight when it matters
    fn write_control_point(&mut self, spline: &SplineEdge, point: Vector3) -> Result<()> {
        self.stream().write_point2d(10, point.xy())?;
        if spline.rational || point.z != SplineEdge::DEFAULT_WEIGHT {
            self.stream().write_double(42, point.z)?;
        }
        Ok(())
    }

    fn write_pattern_line(&mut self, line: &HatchPatternLine) -> Result<()> {
        self.stream().write_double(53, line.angle)?;
        self.stream().write_double(43, line.base_point.x)?;
        self.stream().write_double(44, line.base_point.y)?;
        self.stream().write_double(45, line.offset.x)?;
        self.stream().write_double(46, line.offset.y)?;
        self.stream().write_i16(79, count16(line.dash_lengths.len())?)?;
        for dash in &line.dash_lengths {
            self.stream().write_double(49, *dash)?;
        }
        Ok(())
    }
}

fn count(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| DxfError::Custom(format!("list of {} items is too long", len)))
}

fn count16(len: usize) -> Result<i16> {
    i16::try_from(len).map_err(|_| DxfError::Custom(format!("list of {} items is too long", len)))
}

fn validate_hatch(hatch: &Hatch) -> Result<()> {
    validate_header("HATCH", &hatch.common)?;
    validate_text("HATCH", hatch.common.handle, "pattern_name", &hatch.pattern_name)?;
    for (index, path) in hatch.paths.iter().enumerate() {
        if let BoundaryData::Polyline(polyline) = &path.data {
            if polyline.vertices.is_empty() {
                return Err(DxfError::validation(
                    "HATCH",
                    hatch.common.handle,
                    "paths",
                    format!("polyline boundary {} has no vertices", index),
                ));
            }
        }
    }
    Ok(())
}
