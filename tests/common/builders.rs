//! Entity builders shared by the integration tests.
//!
//! `two_path_hatch()` is the canonical composite fixture: a closed triangle
//! polyline and a line+arc edge list.

#![allow(dead_code)]

use dxf_hatch::entities::hatch::*;
use dxf_hatch::entities::*;
use dxf_hatch::classes::DxfClass;
use dxf_hatch::types::{Color, Handle, Vector2, Vector3};

/// Arc on layer WALLS with a handle, quarter circle
pub fn sample_arc() -> Arc {
    let mut arc = Arc::from_center_radius_angles(Vector3::new(10.0, 5.0, 0.0), 2.5, 0.0, 90.0);
    arc.common.handle = Some(Handle::new(0x2F));
    arc.common.layer = "WALLS".to_string();
    arc.common.color = Color::YELLOW;
    arc
}

/// Closed triangle, no bulges
pub fn triangle_path() -> BoundaryPath {
    BoundaryPath::polyline(PolylineBoundary::new(
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(2.0, 3.0),
        ],
        true,
    ))
    .with_flags(BoundaryPathFlags::EXTERNAL)
}

/// One line edge and one counter-clockwise arc edge
pub fn line_arc_path() -> BoundaryPath {
    BoundaryPath::edges(vec![
        BoundaryEdge::Line(LineEdge {
            start: Vector2::new(10.0, 0.0),
            end: Vector2::new(14.0, 0.0),
        }),
        BoundaryEdge::CircularArc(CircularArcEdge {
            center: Vector2::new(12.0, 0.0),
            radius: 2.0,
            start_angle: 0.0,
            end_angle: 180.0,
            counter_clockwise: true,
        }),
    ])
}

/// Solid hatch with the triangle and the line+arc paths
pub fn two_path_hatch() -> Hatch {
    let mut hatch = Hatch::new();
    hatch.common.handle = Some(Handle::new(0x40));
    hatch.common.layer = "FILL".to_string();
    hatch.add_path(triangle_path());
    hatch.add_path(line_arc_path());
    hatch.seed_points.push(Vector2::new(2.0, 1.0));
    hatch
}

/// Cubic spline edge with `knots` knot values and four control points
pub fn spline_edge(knots: usize) -> SplineEdge {
    let mut spline = SplineEdge::new(3);
    spline.knots = (0..knots).map(|i| i as f64).collect();
    for (x, y) in [(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)] {
        spline.add_control_point(Vector2::new(x, y));
    }
    spline
}

/// ANSI31-style pattern hatch with one bulged polyline path
pub fn pattern_hatch() -> Hatch {
    let mut hatch = Hatch::with_pattern(
        "ANSI31",
        vec![HatchPatternLine {
            angle: 45.0,
            base_point: Vector2::ZERO,
            offset: Vector2::new(-2.245, 2.245),
            dash_lengths: vec![],
        }],
    );
    hatch.pattern_angle = 15.0;
    hatch.pattern_scale = 2.0;

    let mut polyline = PolylineBoundary::new(Vec::new(), true);
    polyline.add_vertex(Vector2::new(0.0, 0.0), 0.0);
    polyline.add_vertex(Vector2::new(5.0, 0.0), 0.4142135623730951);
    polyline.add_vertex(Vector2::new(5.0, 5.0), 0.0);
    hatch.add_path(BoundaryPath::polyline(polyline));
    hatch
}

/// One of every record kind
pub fn all_entities() -> Vec<EntityType> {
    let mut line = Line::from_points(Vector3::new(0.0, 0.0, 0.0), Vector3::new(10.0, 10.0, 0.0));
    line.common.color = Color::GREEN;
    line.common.thickness = 0.5;

    let mut face = Face3D::triangle(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 1.0),
    );
    face.invisible_edges = InvisibleEdgeFlags::THIRD;
    face.common.paperspace = true;

    vec![
        EntityType::Class(DxfClass::new_entity("WIPEOUT", "AcDbWipeout")),
        EntityType::EndTab,
        EntityType::Arc(sample_arc()),
        EntityType::Line(line),
        EntityType::Face3D(face),
        EntityType::Hatch(two_path_hatch()),
        EntityType::Hatch(pattern_hatch()),
    ]
}
