//! Color index carried by group code 62

use std::fmt;

/// An AutoCAD Color Index value
///
/// - By layer (256): use the layer's color, the default
/// - By block (0): use the containing block's color
/// - Index: any other value, kept verbatim. Negative values mean the layer
///   is switched off and are preserved as such.
///
/// Colors compare by their group 62 value, so `Index(256)` equals `ByLayer`
/// and `Index(0)` equals `ByBlock`.
#[derive(Debug, Clone, Copy, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// Explicit color index
    Index(i16),
}

impl Color {
    /// Wire value for BYLAYER
    pub const BYLAYER_INDEX: i16 = 256;
    /// Wire value for BYBLOCK
    pub const BYBLOCK_INDEX: i16 = 0;

    /// Create a color from its group 62 value
    pub fn from_index(index: i16) -> Self {
        match index {
            Self::BYBLOCK_INDEX => Color::ByBlock,
            Self::BYLAYER_INDEX => Color::ByLayer,
            _ => Color::Index(index),
        }
    }

    /// Group 62 value of this color
    pub fn index(&self) -> i16 {
        match self {
            Color::ByLayer => Self::BYLAYER_INDEX,
            Color::ByBlock => Self::BYBLOCK_INDEX,
            Color::Index(i) => *i,
        }
    }

    /// The same color with sentinel indices folded into their variants
    pub fn canonical(self) -> Self {
        Self::from_index(self.index())
    }

    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}
