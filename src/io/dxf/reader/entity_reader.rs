//! Field-level entity decoding
//!
//! An `EntityReader` is handed the stream right after the caller consumed
//! the `0/NAME` record of an entity. It reads records until the next group
//! code 0, which it leaves in the stream for the caller.

use tracing::{debug, trace};

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::classes::{DxfClass, ProxyFlags};
use crate::entities::{
    Arc, EntityCommon, Face3D, InvisibleEdgeFlags, Line, DEFAULT_LAYER,
};
use crate::error::{DxfError, Result};
use crate::io::dxf::version_policy::{PolicyField, VersionPolicy};
use crate::notification::NotificationCollection;
use crate::types::{DxfVersion, Vector2};

/// Upper bound on capacity reserved up front for count-prefixed lists
const MAX_PREALLOCATION: usize = 1024;

/// Progress of a single entity decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    AwaitingFirstField,
    ReadingFields,
    Terminated,
}

/// What an entity's code table did with one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The value was parsed and stored
    Assigned,
    /// The code is not part of this entity's table
    Unknown,
    /// The code is known but its value did not parse
    Invalid,
}

/// Store `value` into `target`, or report it as unparseable
pub(crate) fn assign<T>(value: Option<T>, target: &mut T) -> FieldOutcome {
    match value {
        Some(v) => {
            *target = v;
            FieldOutcome::Assigned
        }
        None => FieldOutcome::Invalid,
    }
}

/// Decodes entities from a group-code stream
pub struct EntityReader<'a> {
    reader: &'a mut dyn DxfStreamReader,
    version: DxfVersion,
    notifications: &'a mut NotificationCollection,
}

impl<'a> EntityReader<'a> {
    pub fn new(
        reader: &'a mut dyn DxfStreamReader,
        version: DxfVersion,
        notifications: &'a mut NotificationCollection,
    ) -> Self {
        Self {
            reader,
            version,
            notifications,
        }
    }

    /// Format version the stream is decoded under
    pub fn version(&self) -> DxfVersion {
        self.version
    }

    pub(crate) fn allows(&self, field: PolicyField) -> bool {
        VersionPolicy::is_field_legal(field, self.version)
    }

    pub(crate) fn warn(&mut self, context: impl std::fmt::Display, message: impl std::fmt::Display) {
        self.notifications.warn(context, message);
    }

    /// Run the decode loop for one entity.
    ///
    /// Each record other than a terminator, a comment or a subclass marker
    /// is offered to `on_field`. Unknown codes and unparseable values are
    /// reported as warnings and skipped. End of input before the terminator
    /// is a stream error.
    pub fn read_fields<F>(&mut self, entity: &'static str, mut on_field: F) -> Result<()>
    where
        F: FnMut(&mut Self, &DxfCodePair) -> Result<FieldOutcome>,
    {
        let mut state = DecodeState::AwaitingFirstField;
        let mut fields = 0usize;

        while state != DecodeState::Terminated {
            let pair = match self.reader.read_pair()? {
                Some(pair) => pair,
                None => {
                    return Err(DxfError::stream(
                        self.reader.line_number(),
                        format!("unexpected end of input while reading {}", entity),
                    ))
                }
            };

            if pair.code == 0 {
                self.reader.push_back(pair);
                state = DecodeState::Terminated;
                trace!(entity, ?state, "terminator reached");
                continue;
            }

            if state == DecodeState::AwaitingFirstField {
                state = DecodeState::ReadingFields;
                trace!(entity, ?state, line = pair.line, "first field");
            }
            fields += 1;

            match pair.code {
                999 => self.notifications.comment(pair.value_string.clone()),
                // Subclass markers carry no data at any version
                100 => {}
                _ => match on_field(self, &pair)? {
                    FieldOutcome::Assigned => {}
                    FieldOutcome::Unknown => self.warn(
                        format_args!("{} line {}", entity, pair.line),
                        format_args!(
                            "unknown group code {} (value '{}') skipped",
                            pair.code, pair.value_string
                        ),
                    ),
                    FieldOutcome::Invalid => self.warn(
                        format_args!("{} line {}", entity, pair.line),
                        format_args!(
                            "invalid {} value '{}' for group code {} skipped",
                            pair.value_type, pair.value_string, pair.code
                        ),
                    ),
                },
            }
        }

        debug!(entity, fields, "entity decoded");
        Ok(())
    }

    /// Header fields shared by all drawable entities (5, 6, 8, 39, 62, 67)
    pub fn read_common_field(&mut self, common: &mut EntityCommon, pair: &DxfCodePair) -> FieldOutcome {
        match pair.code {
            5 => match pair.as_handle() {
                Some(handle) => {
                    common.handle = Some(handle);
                    FieldOutcome::Assigned
                }
                None => FieldOutcome::Invalid,
            },
            6 => {
                common.linetype = pair.value_string.clone();
                FieldOutcome::Assigned
            }
            8 => {
                if pair.value_string.is_empty() {
                    self.warn(
                        format_args!("line {}", pair.line),
                        format_args!("empty layer name replaced by '{}'", DEFAULT_LAYER),
                    );
                    common.layer = DEFAULT_LAYER.to_string();
                } else {
                    common.layer = pair.value_string.clone();
                }
                FieldOutcome::Assigned
            }
            39 => assign(pair.as_double(), &mut common.thickness),
            62 => match pair.as_i16() {
                Some(index) => {
                    common.color = crate::types::Color::from_index(index);
                    FieldOutcome::Assigned
                }
                None => FieldOutcome::Invalid,
            },
            67 => assign(pair.as_bool(), &mut common.paperspace),
            _ => FieldOutcome::Unknown,
        }
    }

    /// Group 38, when the format version still carries it
    pub(crate) fn read_elevation(&self, pair: &DxfCodePair, elevation: &mut Option<f64>) -> FieldOutcome {
        if !self.allows(PolicyField::Elevation) {
            return FieldOutcome::Unknown;
        }
        match pair.as_double() {
            Some(z) => {
                *elevation = Some(z);
                FieldOutcome::Assigned
            }
            None => FieldOutcome::Invalid,
        }
    }

    /// Read an ARC entity
    pub fn read_arc(&mut self) -> Result<Arc> {
        let mut arc = Arc::new();
        arc.common = EntityCommon::for_version(self.version);
        let mut elevation = None;

        self.read_fields("ARC", |r, pair| {
            Ok(match pair.code {
                10 => assign(pair.as_double(), &mut arc.center.x),
                20 => assign(pair.as_double(), &mut arc.center.y),
                30 => assign(pair.as_double(), &mut arc.center.z),
                38 => r.read_elevation(pair, &mut elevation),
                40 => assign(pair.as_double(), &mut arc.radius),
                50 => assign(pair.as_double(), &mut arc.start_angle),
                51 => assign(pair.as_double(), &mut arc.end_angle),
                210 => assign(pair.as_double(), &mut arc.normal.x),
                220 => assign(pair.as_double(), &mut arc.normal.y),
                230 => assign(pair.as_double(), &mut arc.normal.z),
                _ => r.read_common_field(&mut arc.common, pair),
            })
        })?;

        if let Some(z) = elevation {
            arc.center.z = z;
        }
        Ok(arc)
    }

    /// Read a LINE entity
    pub fn read_line(&mut self) -> Result<Line> {
        let mut line = Line::new();
        line.common = EntityCommon::for_version(self.version);
        let mut elevation = None;

        self.read_fields("LINE", |r, pair| {
            Ok(match pair.code {
                10 => assign(pair.as_double(), &mut line.start.x),
                20 => assign(pair.as_double(), &mut line.start.y),
                30 => assign(pair.as_double(), &mut line.start.z),
                11 => assign(pair.as_double(), &mut line.end.x),
                21 => assign(pair.as_double(), &mut line.end.y),
                31 => assign(pair.as_double(), &mut line.end.z),
                38 => r.read_elevation(pair, &mut elevation),
                210 => assign(pair.as_double(), &mut line.normal.x),
                220 => assign(pair.as_double(), &mut line.normal.y),
                230 => assign(pair.as_double(), &mut line.normal.z),
                _ => r.read_common_field(&mut line.common, pair),
            })
        })?;

        if let Some(z) = elevation {
            line.set_elevation(z);
        }
        Ok(line)
    }

    /// Read a 3DFACE entity
    pub fn read_face3d(&mut self) -> Result<Face3D> {
        let mut face = Face3D::new();
        face.common = EntityCommon::for_version(self.version);

        self.read_fields("3DFACE", |r, pair| {
            Ok(match pair.code {
                10 => assign(pair.as_double(), &mut face.first_corner.x),
                20 => assign(pair.as_double(), &mut face.first_corner.y),
                30 => assign(pair.as_double(), &mut face.first_corner.z),
                11 => assign(pair.as_double(), &mut face.second_corner.x),
                21 => assign(pair.as_double(), &mut face.second_corner.y),
                31 => assign(pair.as_double(), &mut face.second_corner.z),
                12 => assign(pair.as_double(), &mut face.third_corner.x),
                22 => assign(pair.as_double(), &mut face.third_corner.y),
                32 => assign(pair.as_double(), &mut face.third_corner.z),
                13 => assign(pair.as_double(), &mut face.fourth_corner.x),
                23 => assign(pair.as_double(), &mut face.fourth_corner.y),
                33 => assign(pair.as_double(), &mut face.fourth_corner.z),
                70 => assign(
                    pair.as_i16().map(InvisibleEdgeFlags::from_bits_retain),
                    &mut face.invisible_edges,
                ),
                _ => r.read_common_field(&mut face.common, pair),
            })
        })?;

        Ok(face)
    }

    /// Read a CLASS record
    pub fn read_class(&mut self) -> Result<DxfClass> {
        let mut class = DxfClass::default();

        self.read_fields(DxfClass::RECORD_NAME, |_, pair| {
            Ok(match pair.code {
                1 => {
                    class.dxf_name = pair.value_string.clone();
                    FieldOutcome::Assigned
                }
                2 => {
                    class.cpp_class_name = pair.value_string.clone();
                    FieldOutcome::Assigned
                }
                3 => {
                    class.application_name = pair.value_string.clone();
                    FieldOutcome::Assigned
                }
                90 => assign(
                    pair.as_i32().map(ProxyFlags::from_bits_retain),
                    &mut class.proxy_flags,
                ),
                91 => assign(pair.as_i32(), &mut class.instance_count),
                280 => assign(pair.as_bool(), &mut class.was_a_proxy),
                281 => assign(pair.as_bool(), &mut class.is_an_entity),
                _ => FieldOutcome::Unknown,
            })
        })?;

        Ok(class)
    }

    /// Read an ENDTAB marker, which has no fields of its own
    pub fn read_end_tab(&mut self) -> Result<()> {
        self.read_fields("ENDTAB", |_, _| Ok(FieldOutcome::Unknown))
    }

    // --- strict primitives for count-prefixed structures -----------------

    /// Next record, which must carry `code`.
    ///
    /// Comments are passed to diagnostics. Any other code, including a
    /// terminator, or end of input is a stream error.
    pub(crate) fn expect(&mut self, code: i32, what: &str) -> Result<DxfCodePair> {
        loop {
            let pair = self.reader.read_pair()?.ok_or_else(|| {
                DxfError::stream(
                    self.reader.line_number(),
                    format!("unexpected end of input, expected group code {} ({})", code, what),
                )
            })?;

            if pair.code == code {
                return Ok(pair);
            }
            if pair.code == 999 {
                self.notifications.comment(pair.value_string);
                continue;
            }
            return Err(DxfError::stream(
                pair.line,
                format!(
                    "expected group code {} ({}), found {} '{}'",
                    code, what, pair.code, pair.value_string
                ),
            ));
        }
    }

    /// Consume the next record only if it carries `code`
    pub(crate) fn optional(&mut self, code: i32) -> Result<Option<DxfCodePair>> {
        loop {
            match self.reader.peek_code()? {
                Some(999) => {
                    if let Some(comment) = self.reader.read_pair()? {
                        self.notifications.comment(comment.value_string);
                    }
                }
                Some(next) if next == code => return self.reader.read_pair(),
                _ => return Ok(None),
            }
        }
    }

    fn invalid_in_structure(&mut self, pair: &DxfCodePair, what: &str) {
        self.warn(
            format_args!("line {}", pair.line),
            format_args!(
                "invalid {} value '{}' for {} (group code {})",
                pair.value_type, pair.value_string, what, pair.code
            ),
        );
    }

    pub(crate) fn expect_double_or(&mut self, code: i32, what: &str, default: f64) -> Result<f64> {
        let pair = self.expect(code, what)?;
        Ok(match pair.as_double() {
            Some(v) => v,
            None => {
                self.invalid_in_structure(&pair, what);
                default
            }
        })
    }

    pub(crate) fn expect_double(&mut self, code: i32, what: &str) -> Result<f64> {
        self.expect_double_or(code, what, 0.0)
    }

    pub(crate) fn expect_i32(&mut self, code: i32, what: &str) -> Result<i32> {
        let pair = self.expect(code, what)?;
        Ok(match pair.as_i32() {
            Some(v) => v,
            None => {
                self.invalid_in_structure(&pair, what);
                0
            }
        })
    }

    pub(crate) fn expect_flag(&mut self, code: i32, what: &str) -> Result<bool> {
        let pair = self.expect(code, what)?;
        Ok(match pair.as_bool() {
            Some(v) => v,
            None => {
                self.invalid_in_structure(&pair, what);
                false
            }
        })
    }

    /// Two doubles at `x_code` and `x_code + 10`
    pub(crate) fn expect_point2(&mut self, x_code: i32, what: &str) -> Result<Vector2> {
        let x = self.expect_double(x_code, what)?;
        let y = self.expect_double(x_code + 10, what)?;
        Ok(Vector2::new(x, y))
    }

    /// A count value; counts drive later reads so a bad one is fatal
    pub(crate) fn count_value(pair: &DxfCodePair, what: &str) -> Result<usize> {
        pair.as_i32()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                DxfError::stream(
                    pair.line,
                    format!("invalid {} '{}' (group code {})", what, pair.value_string, pair.code),
                )
            })
    }

    pub(crate) fn expect_count(&mut self, code: i32, what: &str) -> Result<usize> {
        let pair = self.expect(code, what)?;
        Self::count_value(&pair, what)
    }

    pub(crate) fn reserve<T>(count: usize) -> Vec<T> {
        Vec::with_capacity(count.min(MAX_PREALLOCATION))
    }
}
