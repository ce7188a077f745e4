//! Face3D entity (3D face)

use crate::entities::{Entity, EntityCommon};
use crate::types::Vector3;

bitflags::bitflags! {
    /// Invisible edge flags for Face3D (group 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InvisibleEdgeFlags: i16 {
        const FIRST = 1;
        const SECOND = 2;
        const THIRD = 4;
        const FOURTH = 8;
    }
}

/// Face3D entity - a 3D face with 3 or 4 vertices
///
/// A triangle repeats its third corner as the fourth.
#[derive(Debug, Clone, PartialEq)]
pub struct Face3D {
    pub common: EntityCommon,
    /// First corner point (10/20/30)
    pub first_corner: Vector3,
    /// Second corner point (11/21/31)
    pub second_corner: Vector3,
    /// Third corner point (12/22/32)
    pub third_corner: Vector3,
    /// Fourth corner point (13/23/33)
    pub fourth_corner: Vector3,
    /// Invisible edge flags
    pub invisible_edges: InvisibleEdgeFlags,
}

impl Face3D {
    pub fn new() -> Self {
        Face3D {
            common: EntityCommon::new(),
            first_corner: Vector3::ZERO,
            second_corner: Vector3::ZERO,
            third_corner: Vector3::ZERO,
            fourth_corner: Vector3::ZERO,
            invisible_edges: InvisibleEdgeFlags::empty(),
        }
    }

    /// Create a face from four corners
    pub fn from_corners(first: Vector3, second: Vector3, third: Vector3, fourth: Vector3) -> Self {
        Face3D {
            first_corner: first,
            second_corner: second,
            third_corner: third,
            fourth_corner: fourth,
            ..Self::new()
        }
    }

    /// Create a triangular face
    pub fn triangle(first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self::from_corners(first, second, third, third)
    }

    /// True when the fourth corner repeats the third
    pub fn is_triangle(&self) -> bool {
        self.third_corner == self.fourth_corner
    }
}

impl Default for Face3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Face3D {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "3DFACE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        let face = Face3D::triangle(
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        assert!(face.is_triangle());
    }

    #[test]
    fn test_invisible_edges_bits() {
        let flags = InvisibleEdgeFlags::FIRST | InvisibleEdgeFlags::FOURTH;
        assert_eq!(flags.bits(), 9);
        assert_eq!(InvisibleEdgeFlags::from_bits_retain(9), flags);
    }
}
