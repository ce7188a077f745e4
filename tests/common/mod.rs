//! Shared test utilities for dxf-hatch integration tests.
//!
//! Read/write helpers and version tables that all test crates import via
//! `mod common;`.

#![allow(dead_code)]

pub mod builders;

use dxf_hatch::entities::EntityType;
use dxf_hatch::io::dxf::{
    DxfReader, DxfReaderConfiguration, DxfWriter, DxfWriterConfiguration, ReadOutcome,
};
use dxf_hatch::notification::NotificationCollection;
use dxf_hatch::types::DxfVersion;
use std::io::Cursor;

// ===========================================================================
// Version constants
// ===========================================================================

/// Versions just below and at each gate threshold.
pub const GATE_VERSIONS: [DxfVersion; 5] = [
    DxfVersion::AC1006,
    DxfVersion::AC1009,
    DxfVersion::AC1012,
    DxfVersion::AC1014,
    DxfVersion::AC1018,
];

// ===========================================================================
// Read / write helpers
// ===========================================================================

/// Decode `text` assuming `version` until a header says otherwise.
pub fn read_text(text: &str, version: DxfVersion) -> dxf_hatch::Result<ReadOutcome> {
    let config = DxfReaderConfiguration {
        version,
        ..Default::default()
    };
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec()))
        .with_configuration(config)
        .read()
}

/// Encode `entities` strictly at `version`, returning the text and notifications.
pub fn write_text(entities: &[EntityType], version: DxfVersion) -> (String, NotificationCollection) {
    let config = DxfWriterConfiguration {
        version,
        failsafe: false,
    };
    let (bytes, notifications) = DxfWriter::new(entities)
        .with_configuration(config)
        .write_to_vec()
        .expect("encode failed");
    (String::from_utf8(bytes).expect("output is not UTF-8"), notifications)
}

/// Encode then decode at the same version.
pub fn roundtrip(entities: &[EntityType], version: DxfVersion) -> ReadOutcome {
    let (text, _) = write_text(entities, version);
    read_text(&text, version).expect("decode of encoded output failed")
}

/// Build a record stream from `(code, value)` pairs.
pub fn records(pairs: &[(i32, &str)]) -> String {
    pairs
        .iter()
        .map(|(code, value)| format!("{:>3}\n{}\n", code, value))
        .collect()
}

/// Group codes of an encoded stream, in order.
pub fn codes(text: &str) -> Vec<i32> {
    text.lines()
        .step_by(2)
        .map(|line| line.trim().parse().expect("bad code line"))
        .collect()
}

/// Tag every entity header with `version`, as a decode at that version would.
pub fn tagged(mut entities: Vec<EntityType>, version: DxfVersion) -> Vec<EntityType> {
    for entity in &mut entities {
        match entity {
            EntityType::Arc(e) => e.common.version = version,
            EntityType::Line(e) => e.common.version = version,
            EntityType::Face3D(e) => e.common.version = version,
            EntityType::Hatch(e) => e.common.version = version,
            EntityType::Class(_) | EntityType::EndTab => {}
        }
    }
    entities
}
