//! Entity encoding
//!
//! Each `write_*` method validates the entity before emitting anything, so a
//! rejected entity leaves no partial record in the output.

use tracing::debug;

use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::classes::DxfClass;
use crate::entities::{
    describe, Arc, EntityCommon, Face3D, Line, BYLAYER_LINETYPE, DEFAULT_LAYER,
};
use crate::error::{DxfError, Result};
use crate::io::dxf::version_policy::{PolicyField, VersionPolicy};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Color, DxfVersion, Handle, Vector3};

/// Encodes entities into a group-code stream
pub struct EntityWriter<'a> {
    writer: &'a mut dyn DxfStreamWriter,
    version: DxfVersion,
    notifications: &'a mut NotificationCollection,
}

impl<'a> EntityWriter<'a> {
    pub fn new(
        writer: &'a mut dyn DxfStreamWriter,
        version: DxfVersion,
        notifications: &'a mut NotificationCollection,
    ) -> Self {
        Self {
            writer,
            version,
            notifications,
        }
    }

    /// Target format version
    pub fn version(&self) -> DxfVersion {
        self.version
    }

    pub(crate) fn stream(&mut self) -> &mut dyn DxfStreamWriter {
        &mut *self.writer
    }

    pub(crate) fn allows(&self, field: PolicyField) -> bool {
        VersionPolicy::is_field_legal(field, self.version)
    }

    pub(crate) fn warn(&mut self, context: impl std::fmt::Display, message: impl std::fmt::Display) {
        self.notifications.warn(context, message);
    }

    pub(crate) fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.notifications.notify(notification_type, message);
    }

    pub(crate) fn write_subclass_marker(&mut self, marker: &str) -> Result<()> {
        if self.allows(PolicyField::SubclassMarker) {
            self.writer.write_subclass(marker)?;
        }
        Ok(())
    }

    pub(crate) fn write_extrusion(&mut self, normal: Vector3) -> Result<()> {
        if self.allows(PolicyField::Extrusion) {
            self.writer.write_point3d(210, normal)?;
        }
        Ok(())
    }

    /// Groups 5, 6 and 8
    pub(crate) fn write_header(&mut self, entity: &str, common: &EntityCommon) -> Result<()> {
        if let Some(handle) = common.handle {
            self.writer.write_handle(5, handle)?;
        }
        if common.linetype != BYLAYER_LINETYPE {
            self.writer.write_string(6, &common.linetype)?;
        }
        if common.layer.is_empty() {
            self.warn(
                format_args!("{} {}", entity, describe(common)),
                format_args!("empty layer name written as '{}'", DEFAULT_LAYER),
            );
            self.writer.write_string(8, DEFAULT_LAYER)?;
        } else {
            self.writer.write_string(8, &common.layer)?;
        }
        Ok(())
    }

    pub(crate) fn write_thickness(&mut self, common: &EntityCommon) -> Result<()> {
        if common.thickness != 0.0 {
            self.writer.write_double(39, common.thickness)?;
        }
        Ok(())
    }

    /// Groups 62 and 67, written only when they differ from the default
    pub(crate) fn write_display(&mut self, common: &EntityCommon) -> Result<()> {
        if common.color.index() != Color::BYLAYER_INDEX {
            self.writer.write_color(62, common.color)?;
        }
        if common.paperspace {
            self.writer.write_bool(67, true)?;
        }
        Ok(())
    }

    /// Write an ARC entity
    pub fn write_arc(&mut self, arc: &Arc) -> Result<()> {
        validate_arc(arc)?;
        validate_header("ARC", &arc.common)?;
        debug!(handle = ?arc.common.handle, "writing ARC");

        self.writer.write_entity_type("ARC")?;
        self.write_subclass_marker("AcDbCircle")?;
        self.write_header("ARC", &arc.common)?;
        self.writer.write_point3d(10, arc.center)?;
        self.write_extrusion(arc.normal)?;
        self.write_thickness(&arc.common)?;
        self.writer.write_double(40, arc.radius)?;
        self.write_subclass_marker("AcDbArc")?;
        self.writer.write_double(50, arc.start_angle)?;
        self.writer.write_double(51, arc.end_angle)?;
        self.write_display(&arc.common)
    }

    /// Write a LINE entity
    pub fn write_line(&mut self, line: &Line) -> Result<()> {
        validate_header("LINE", &line.common)?;
        debug!(handle = ?line.common.handle, "writing LINE");

        self.writer.write_entity_type("LINE")?;
        self.write_subclass_marker("AcDbLine")?;
        self.write_header("LINE", &line.common)?;
        self.writer.write_point3d(10, line.start)?;
        self.writer.write_point3d(11, line.end)?;
        self.write_extrusion(line.normal)?;
        self.write_thickness(&line.common)?;
        self.write_display(&line.common)
    }

    /// Write a 3DFACE entity
    pub fn write_face3d(&mut self, face: &Face3D) -> Result<()> {
        validate_header("3DFACE", &face.common)?;
        debug!(handle = ?face.common.handle, "writing 3DFACE");

        self.writer.write_entity_type("3DFACE")?;
        self.write_subclass_marker("AcDbFace")?;
        self.write_header("3DFACE", &face.common)?;
        self.writer.write_point3d(10, face.first_corner)?;
        self.writer.write_point3d(11, face.second_corner)?;
        self.writer.write_point3d(12, face.third_corner)?;
        self.writer.write_point3d(13, face.fourth_corner)?;
        self.write_thickness(&face.common)?;
        self.write_display(&face.common)?;
        if !face.invisible_edges.is_empty() {
            self.writer.write_i16(70, face.invisible_edges.bits())?;
        }
        Ok(())
    }

    /// Write a CLASS record
    pub fn write_class(&mut self, class: &DxfClass) -> Result<()> {
        validate_text(DxfClass::RECORD_NAME, None, "dxf_name", &class.dxf_name)?;
        validate_text(DxfClass::RECORD_NAME, None, "cpp_class_name", &class.cpp_class_name)?;
        validate_text(DxfClass::RECORD_NAME, None, "application_name", &class.application_name)?;
        self.writer.write_entity_type(DxfClass::RECORD_NAME)?;
        self.writer.write_string(1, &class.dxf_name)?;
        self.writer.write_string(2, &class.cpp_class_name)?;
        self.writer.write_string(3, &class.application_name)?;
        self.writer.write_i32(90, class.proxy_flags.bits())?;
        if self.allows(PolicyField::ClassInstanceCount) {
            self.writer.write_i32(91, class.instance_count)?;
        }
        self.writer.write_bool(280, class.was_a_proxy)?;
        self.writer.write_bool(281, class.is_an_entity)
    }

    /// Write an ENDTAB marker
    pub fn write_end_tab(&mut self) -> Result<()> {
        self.writer.write_entity_type("ENDTAB")
    }
}

/// String values occupy one line each; a line break would shift every
/// record after it
pub(crate) fn validate_text(
    entity: &'static str,
    handle: Option<Handle>,
    field: &'static str,
    value: &str,
) -> Result<()> {
    if value.contains(|c| c == '\n' || c == '\r') {
        return Err(DxfError::validation(
            entity,
            handle,
            field,
            format!("{:?} contains a line break", value),
        ));
    }
    Ok(())
}

pub(crate) fn validate_header(entity: &'static str, common: &EntityCommon) -> Result<()> {
    validate_text(entity, common.handle, "linetype", &common.linetype)?;
    validate_text(entity, common.handle, "layer", &common.layer)
}

fn validate_arc(arc: &Arc) -> Result<()> {
    let handle = arc.common.handle;

    if !(arc.radius > 0.0) {
        return Err(DxfError::validation(
            "ARC",
            handle,
            "radius",
            format!("radius must be positive, got {}", arc.radius),
        ));
    }

    for (field, angle) in [("start_angle", arc.start_angle), ("end_angle", arc.end_angle)] {
        if !(0.0..=360.0).contains(&angle) {
            return Err(DxfError::validation(
                "ARC",
                handle,
                field,
                format!("angle {} is outside [0, 360]", angle),
            ));
        }
    }

    if arc.start_angle == arc.end_angle {
        return Err(DxfError::validation(
            "ARC",
            handle,
            "end_angle",
            format!("start and end angle are both {}", arc.start_angle),
        ));
    }

    Ok(())
}
