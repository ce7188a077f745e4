//! Integration tests for the flat entity codecs and the common header

mod common;

use common::builders::*;
use common::*;
use dxf_hatch::classes::DxfClass;
use dxf_hatch::entities::*;
use dxf_hatch::error::DxfError;
use dxf_hatch::io::dxf::{DxfWriter, DxfWriterConfiguration};
use dxf_hatch::notification::NotificationType;
use dxf_hatch::types::{Color, DxfVersion, Handle, Vector3};

// ===========================================================================
// Unknown tag tolerance
// ===========================================================================

fn arc_records_with(extra: (i32, &str)) -> String {
    records(&[
        (0, "ARC"),
        (5, "A1"),
        (8, "0"),
        (10, "1.5"),
        (20, "2.5"),
        extra,
        (30, "0.0"),
        (40, "3.0"),
        (50, "30.0"),
        (51, "120.0"),
        (0, "EOF"),
    ])
}

fn assert_arc_fields(entities: &[EntityType]) {
    assert_eq!(entities.len(), 1);
    match &entities[0] {
        EntityType::Arc(arc) => {
            assert_eq!(arc.common.handle, Some(Handle::new(0xA1)));
            assert_eq!(arc.center, Vector3::new(1.5, 2.5, 0.0));
            assert_eq!(arc.radius, 3.0);
            assert_eq!(arc.start_angle, 30.0);
            assert_eq!(arc.end_angle, 120.0);
        }
        other => panic!("expected an arc, got {:?}", other),
    }
}

#[test]
fn test_arc_with_undefined_group_code() {
    let outcome = read_text(&arc_records_with((9999, "junk")), DxfVersion::AC1015).unwrap();
    assert_arc_fields(&outcome.entities);
    assert_eq!(outcome.notifications.len(), 1);
    assert!(outcome.notifications.has_type(NotificationType::Warning));
}

#[test]
fn test_arc_with_comment_record() {
    let outcome = read_text(&arc_records_with((999, "drawn by hand")), DxfVersion::AC1015).unwrap();
    assert_arc_fields(&outcome.entities);
    assert_eq!(outcome.notifications.len(), 1);
    assert_eq!(outcome.notifications.comments().collect::<Vec<_>>(), vec!["drawn by hand"]);
}

#[test]
fn test_unparseable_value_is_warning() {
    let outcome = read_text(&arc_records_with((62, "red")), DxfVersion::AC1015).unwrap();
    assert_arc_fields(&outcome.entities);
    let warnings = outcome.notifications.of_type(NotificationType::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("'red'"));
}

// ===========================================================================
// Validation
// ===========================================================================

#[test]
fn test_arc_equal_angles_rejected() {
    let mut arc = sample_arc();
    arc.end_angle = arc.start_angle;
    let entities = vec![EntityType::Arc(arc)];
    let config = DxfWriterConfiguration {
        failsafe: false,
        ..Default::default()
    };

    match DxfWriter::new(&entities).with_configuration(config).write_to_vec() {
        Err(DxfError::Validation { entity, handle, field, .. }) => {
            assert_eq!(entity, "ARC");
            assert_eq!(handle, Some(Handle::new(0x2F)));
            assert_eq!(field, "end_angle");
        }
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_arc_zero_radius_skipped_in_failsafe_mode() {
    let mut arc = sample_arc();
    arc.radius = 0.0;
    let entities = vec![EntityType::Arc(arc), EntityType::Line(Line::new())];

    let (bytes, notifications) = DxfWriter::new(&entities).write_to_vec().unwrap();
    let outcome = read_text(&String::from_utf8(bytes).unwrap(), DxfVersion::AC1015).unwrap();

    assert_eq!(outcome.entities.len(), 1);
    assert_eq!(outcome.entities[0].name(), "LINE");
    let errors = notifications.of_type(NotificationType::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("radius"));
}

#[test]
fn test_arc_empty_layer_defaults_with_warning() {
    let mut arc = sample_arc();
    arc.common.layer = String::new();
    let (text, notifications) = write_text(&[EntityType::Arc(arc)], DxfVersion::AC1015);

    assert!(text.contains("  8\n0\n"));
    assert_eq!(notifications.len(), 1);
    assert!(notifications.has_type(NotificationType::Warning));

    let outcome = read_text(&text, DxfVersion::AC1015).unwrap();
    assert_eq!(outcome.entities[0].common().unwrap().layer, "0");
}

// ===========================================================================
// Header defaults and field order
// ===========================================================================

#[test]
fn test_defaults_are_omitted() {
    let line = Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
    let (text, _) = write_text(&[EntityType::Line(line)], DxfVersion::AC1015);
    assert_eq!(
        codes(&text),
        vec![0, 100, 8, 10, 20, 30, 11, 21, 31, 210, 220, 230, 0]
    );
}

#[test]
fn test_arc_order_with_every_header_field() {
    let mut arc = sample_arc();
    arc.common.linetype = "HIDDEN".to_string();
    arc.common.thickness = 1.25;
    arc.common.paperspace = true;
    let (text, _) = write_text(&[EntityType::Arc(arc)], DxfVersion::AC1015);
    assert_eq!(
        codes(&text),
        vec![0, 100, 5, 6, 8, 10, 20, 30, 210, 220, 230, 39, 40, 100, 50, 51, 62, 67, 0]
    );
}

// ===========================================================================
// Elevation (group 38)
// ===========================================================================

#[test]
fn test_elevation_read_in_r12() {
    let text = records(&[
        (0, "LINE"),
        (38, "12.0"),
        (10, "0.0"),
        (20, "0.0"),
        (11, "5.0"),
        (21, "5.0"),
        (0, "EOF"),
    ]);
    let outcome = read_text(&text, DxfVersion::AC1009).unwrap();
    match &outcome.entities[0] {
        EntityType::Line(line) => {
            assert_eq!(line.start.z, 12.0);
            assert_eq!(line.end.z, 12.0);
        }
        other => panic!("expected a line, got {:?}", other),
    }
    assert!(outcome.notifications.is_empty());
}

#[test]
fn test_elevation_ignored_after_r12() {
    let text = records(&[(0, "ARC"), (38, "12.0"), (30, "1.0"), (0, "EOF")]);
    let outcome = read_text(&text, DxfVersion::AC1012).unwrap();
    match &outcome.entities[0] {
        EntityType::Arc(arc) => assert_eq!(arc.center.z, 1.0),
        other => panic!("expected an arc, got {:?}", other),
    }
    assert_eq!(outcome.notifications.of_type(NotificationType::Warning).len(), 1);
}

#[test]
fn test_elevation_never_written() {
    for version in GATE_VERSIONS {
        let (text, _) = write_text(&[EntityType::Arc(sample_arc())], version);
        assert!(!codes(&text).contains(&38), "38 written at {}", version);
    }
}

// ===========================================================================
// Version gates on flat records
// ===========================================================================

#[test]
fn test_subclass_and_extrusion_gates() {
    let arc = EntityType::Arc(sample_arc());

    let (r10, _) = write_text(std::slice::from_ref(&arc), DxfVersion::AC1006);
    assert!(!codes(&r10).contains(&100));
    assert!(!codes(&r10).contains(&210));

    let (r12, _) = write_text(std::slice::from_ref(&arc), DxfVersion::AC1009);
    assert!(!codes(&r12).contains(&100));
    assert!(codes(&r12).contains(&210));

    let (r14, _) = write_text(std::slice::from_ref(&arc), DxfVersion::AC1014);
    assert_eq!(codes(&r14).iter().filter(|&&c| c == 100).count(), 2);
}

#[test]
fn test_missing_extrusion_defaults_to_z() {
    let mut arc = sample_arc();
    arc.normal = Vector3::new(0.0, 0.0, -1.0);
    let outcome = roundtrip(&[EntityType::Arc(arc)], DxfVersion::AC1006);
    match &outcome.entities[0] {
        EntityType::Arc(arc) => assert_eq!(arc.normal, Vector3::UNIT_Z),
        other => panic!("expected an arc, got {:?}", other),
    }
}

#[test]
fn test_class_instance_count_round_trip() {
    let mut class = dxf_hatch::classes::DxfClass::new("ACDBPLACEHOLDER", "AcDbPlaceHolder");
    class.instance_count = 7;
    let entities = vec![EntityType::Class(class)];

    let modern = roundtrip(&entities, DxfVersion::AC1018);
    assert_eq!(modern.entities, entities);

    let older = roundtrip(&entities, DxfVersion::AC1015);
    match &older.entities[0] {
        EntityType::Class(class) => assert_eq!(class.instance_count, 0),
        other => panic!("expected a class, got {:?}", other),
    }
}

#[test]
fn test_face_and_end_tab_round_trip() {
    let entities = tagged(all_entities(), DxfVersion::AC1018);
    let outcome = roundtrip(&entities, DxfVersion::AC1018);
    assert_eq!(outcome.entities, entities);
    assert!(outcome.notifications.is_empty());
}

// ===========================================================================
// Stream errors
// ===========================================================================

#[test]
fn test_truncated_entity_is_stream_error() {
    let result = read_text(" 0\nARC\n 40\n", DxfVersion::AC1015);
    assert!(matches!(result, Err(DxfError::Stream { line: 3, .. })));
}

#[test]
fn test_file_round_trip() {
    let path = std::env::temp_dir().join(format!("dxf_hatch_{}.dxf", std::process::id()));
    let entities = all_entities();
    DxfWriter::new(&entities).write_to_file(&path).unwrap();
    let outcome = dxf_hatch::DxfReader::from_file(&path).unwrap().read().unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(outcome.entities.len(), entities.len());
}

// ===========================================================================
// Color sentinels
// ===========================================================================

#[test]
fn test_bylayer_index_is_omitted_and_round_trips() {
    let mut line = Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
    line.common.color = Color::Index(256);
    let entities = tagged(vec![EntityType::Line(line)], DxfVersion::AC1015);

    let (text, _) = write_text(&entities, DxfVersion::AC1015);
    assert!(!codes(&text).contains(&62));
    assert_eq!(roundtrip(&entities, DxfVersion::AC1015).entities, entities);
}

#[test]
fn test_byblock_index_round_trips() {
    let mut line = Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
    line.common.color = Color::Index(0);
    let entities = tagged(vec![EntityType::Line(line)], DxfVersion::AC1015);

    let (text, _) = write_text(&entities, DxfVersion::AC1015);
    assert!(text.contains(" 62\n0\n"));
    let outcome = roundtrip(&entities, DxfVersion::AC1015);
    assert_eq!(outcome.entities, entities);
    match &outcome.entities[0] {
        EntityType::Line(decoded) => assert!(matches!(decoded.common.color, Color::ByBlock)),
        other => panic!("expected a line, got {:?}", other),
    }
}

// ===========================================================================
// Line breaks in string values
// ===========================================================================

#[test]
fn test_layer_with_line_break_rejected() {
    let mut line = Line::new();
    line.common.layer = "WALLS\nDOORS".to_string();
    let entities = vec![EntityType::Line(line), EntityType::Arc(sample_arc())];

    let config = DxfWriterConfiguration {
        version: DxfVersion::AC1015,
        failsafe: false,
    };
    let result = DxfWriter::new(&entities).with_configuration(config).write_to_vec();
    assert!(matches!(result, Err(DxfError::Validation { entity: "LINE", field: "layer", .. })));

    let (bytes, notifications) = DxfWriter::new(&entities).write_to_vec().unwrap();
    let outcome = read_text(&String::from_utf8(bytes).unwrap(), DxfVersion::AC1015).unwrap();
    assert_eq!(outcome.entities.len(), 1);
    assert!(matches!(outcome.entities[0], EntityType::Arc(_)));
    assert!(notifications.has_type(NotificationType::Error));
}

// ===========================================================================
// Class section framing
// ===========================================================================

#[test]
fn test_class_section_closed_by_endsec() {
    let classes = vec![
        EntityType::Class(DxfClass::new("ACDBDICTIONARYWDFLT", "AcDbDictionaryWithDefault")),
        EntityType::Class(DxfClass::new_entity("WIPEOUT", "AcDbWipeout")),
    ];
    let (body, _) = write_text(&classes, DxfVersion::AC1018);
    let body = body.strip_suffix("  0\nEOF\n").expect("stream ends with EOF");
    let text = format!("  0\nSECTION\n  2\nCLASSES\n{}  0\nENDSEC\n  0\nEOF\n", body);

    let outcome = read_text(&text, DxfVersion::AC1018).unwrap();
    assert_eq!(outcome.entities, classes);
    assert!(outcome.notifications.is_empty());
}
