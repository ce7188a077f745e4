//! DXF entity stream reader

mod entity_reader;
mod hatch_reader;
mod stream_reader;
mod text_reader;

pub use entity_reader::{EntityReader, FieldOutcome};
pub use stream_reader::{DxfCodePair, DxfStreamReader};
pub use text_reader::DxfTextReader;

use crate::entities::EntityType;
use crate::error::Result;
use crate::io::dxf::code_page::encoding_for_code_page;
use crate::io::dxf::registry::{standard_registry, EntityRegistry};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::DxfVersion;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Configuration for the DXF reader
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// Version assumed until a HEADER section says otherwise
    ///
    /// Default: `AC1015`
    pub version: DxfVersion,

    /// Encoding for non-UTF8 text. `None` lets `$DWGCODEPAGE` decide for
    /// pre-2007 files and falls back to Latin-1 otherwise.
    pub encoding: Option<&'static Encoding>,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self {
            version: DxfVersion::AC1015,
            encoding: None,
        }
    }
}

/// Everything a read produced
#[derive(Debug)]
pub struct ReadOutcome {
    /// Version the entities were decoded under
    pub version: DxfVersion,
    /// Decoded entities in stream order
    pub entities: Vec<EntityType>,
    /// Warnings, comments and skipped records
    pub notifications: NotificationCollection,
}

/// DXF reader
///
/// Accepts either a bare sequence of entities or entities wrapped in
/// `SECTION` / `ENDSEC` records. Reading stops at `0/EOF` or a clean end of
/// input.
pub struct DxfReader<'r> {
    reader: Box<dyn DxfStreamReader>,
    config: DxfReaderConfiguration,
    registry: &'r EntityRegistry,
}

impl<'r> DxfReader<'r> {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(DxfTextReader::new(BufReader::new(reader))),
            config: DxfReaderConfiguration::default(),
            registry: standard_registry(),
        }
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }

    /// Set the reader configuration
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Decode with `registry` instead of the standard codecs
    pub fn with_registry(mut self, registry: &'r EntityRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Read the whole stream
    pub fn read(mut self) -> Result<ReadOutcome> {
        if let Some(encoding) = self.config.encoding {
            self.reader.set_encoding(encoding);
        }

        let registry = self.registry;
        let mut version = self.config.version;
        let mut notifications = NotificationCollection::new();
        let mut entities = Vec::new();

        while let Some(pair) = self.reader.read_pair()? {
            match pair.code {
                0 => {}
                999 => {
                    notifications.comment(pair.value_string);
                    continue;
                }
                code => {
                    notifications.warn(
                        format_args!("line {}", pair.line),
                        format_args!("group code {} outside of any entity skipped", code),
                    );
                    continue;
                }
            }

            let name = pair.value_string.trim().to_string();
            match name.as_str() {
                "EOF" => break,
                "ENDSEC" => {}
                "SECTION" => {
                    if self.read_section_name()?.as_deref() == Some("HEADER") {
                        version = self.read_header(version, &mut notifications)?;
                    }
                }
                _ => match registry.get(&name) {
                    Some(codec) => {
                        let mut entity_reader =
                            EntityReader::new(self.reader.as_mut(), version, &mut notifications);
                        entities.push(codec.decode(&mut entity_reader)?);
                    }
                    None => {
                        notifications.notify(
                            NotificationType::NotImplemented,
                            format!("{} at line {} skipped", name, pair.line),
                        );
                        self.skip_record()?;
                    }
                },
            }
        }

        info!(
            %version,
            entities = entities.len(),
            notifications = notifications.len(),
            "DXF stream read"
        );

        Ok(ReadOutcome {
            version,
            entities,
            notifications,
        })
    }

    /// Consume the `2/NAME` record that follows `0/SECTION`
    fn read_section_name(&mut self) -> Result<Option<String>> {
        if self.reader.peek_code()? != Some(2) {
            return Ok(None);
        }
        Ok(self
            .reader
            .read_pair()?
            .map(|pair| pair.value_string.trim().to_string()))
    }

    /// Scan a HEADER section for `$ACADVER` and `$DWGCODEPAGE`
    fn read_header(
        &mut self,
        mut version: DxfVersion,
        notifications: &mut NotificationCollection,
    ) -> Result<DxfVersion> {
        let mut code_page = None;

        while let Some(pair) = self.reader.read_pair()? {
            if pair.code == 0 {
                self.reader.push_back(pair);
                break;
            }
            if pair.code != 9 {
                continue;
            }

            let variable = pair.value_string.trim().to_string();
            let value = match self.reader.peek_code()? {
                Some(0) | Some(9) | None => continue,
                Some(_) => self.reader.read_pair()?,
            };
            let value = match value {
                Some(value) => value,
                None => continue,
            };

            match variable.as_str() {
                "$ACADVER" => match DxfVersion::parse(&value.value_string) {
                    Some(v) => version = v,
                    None => notifications.warn(
                        format_args!("line {}", value.line),
                        format_args!(
                            "unknown version '{}', keeping {}",
                            value.value_string, version
                        ),
                    ),
                },
                "$DWGCODEPAGE" => code_page = Some(value.value_string),
                _ => {}
            }
        }

        if self.config.encoding.is_none() && version < DxfVersion::AC1021 {
            if let Some(encoding) = code_page.as_deref().and_then(encoding_for_code_page) {
                debug!(encoding = encoding.name(), "using header code page");
                self.reader.set_encoding(encoding);
            }
        }

        Ok(version)
    }

    /// Skip to the next `0` record of an entity without a codec
    fn skip_record(&mut self) -> Result<()> {
        while let Some(code) = self.reader.peek_code()? {
            if code == 0 {
                break;
            }
            self.reader.read_pair()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(data: &str) -> Result<ReadOutcome> {
        DxfReader::from_reader(Cursor::new(data.as_bytes().to_vec())).read()
    }

    #[test]
    fn test_bare_entity_sequence() {
        let outcome = read("  0\nLINE\n  8\n0\n 11\n1.0\n  0\nARC\n 40\n2.0\n 51\n45.0\n  0\nEOF\n").unwrap();
        assert_eq!(outcome.entities.len(), 2);
        assert_eq!(outcome.entities[0].name(), "LINE");
        assert_eq!(outcome.entities[1].name(), "ARC");
        assert_eq!(outcome.version, DxfVersion::AC1015);
    }

    #[test]
    fn test_sections_and_header_version() {
        let data = "  0\nSECTION\n  2\nHEADER\n  9\n$ACADVER\n  1\nAC1009\n  0\nENDSEC\n\
  0\nSECTION\n  2\nENTITIES\n  0\nLINE\n 10\n1.0\n 38\n4.0\n  0\nENDSEC\n  0\nEOF\n";
        let outcome = read(data).unwrap();
        assert_eq!(outcome.version, DxfVersion::AC1009);
        match &outcome.entities[0] {
            EntityType::Line(line) => {
                assert_eq!(line.start.z, 4.0);
                assert_eq!(line.common.version, DxfVersion::AC1009);
            }
            other => panic!("expected a line, got {:?}", other),
        }
        assert!(outcome.notifications.is_empty());
    }

    #[test]
    fn test_unknown_entity_is_skipped() {
        let outcome = read("  0\nCIRCLE\n 40\n1.0\n 10\n0.0\n  0\nLINE\n  0\nEOF\n").unwrap();
        assert_eq!(outcome.entities.len(), 1);
        assert!(outcome.notifications.has_type(NotificationType::NotImplemented));
    }

    #[test]
    fn test_clean_end_without_eof() {
        let outcome = read("  0\nENDTAB\n").unwrap();
        assert_eq!(outcome.entities, vec![EntityType::EndTab]);
    }

    #[test]
    fn test_configured_version() {
        let config = DxfReaderConfiguration {
            version: DxfVersion::AC1006,
            ..Default::default()
        };
        let outcome = DxfReader::from_reader(Cursor::new(b"  0\nARC\n 38\n2.0\n  0\nEOF\n".to_vec()))
            .with_configuration(config)
            .read()
            .unwrap();
        match &outcome.entities[0] {
            EntityType::Arc(arc) => assert_eq!(arc.center.z, 2.0),
            other => panic!("expected an arc, got {:?}", other),
        }
    }

    #[test]
    fn test_header_code_page_applies_to_old_files() {
        let mut data = b"  0\nSECTION\n  2\nHEADER\n  9\n$ACADVER\n  1\nAC1015\n  9\n$DWGCODEPAGE\n  3\nANSI_1251\n  0\nENDSEC\n  0\nLINE\n  8\n".to_vec();
        data.extend_from_slice(b"\xC4\xE5\n  0\nEOF\n");
        let outcome = DxfReader::from_reader(Cursor::new(data)).read().unwrap();
        assert_eq!(outcome.entities[0].common().unwrap().layer, "\u{0414}\u{0435}");
    }
}
