//! Entity styles for the single-line drawing
//!
//! Every emitted entity carries its own [`EntityStyle`]; nothing relies on a
//! "current" color or lineweight set on the writer beforehand.

use std::fmt;

use crate::core::EquipmentKind;

/// Lineweight of the bus bar stroke, in hundredths of a millimetre
pub const BUS_LINEWEIGHT: i16 = 50;

/// Style class assigned to a drawn entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Transformer symbol
    A,
    /// Breaker symbol
    B,
    /// Bus bar symbol
    C,
    /// Fallback symbol
    D,
    /// Connector between consecutive symbols
    E,
    /// Text labels
    Label,
}

impl StyleClass {
    /// Style class for the symbol of an equipment kind
    pub fn for_kind(kind: &EquipmentKind) -> Self {
        match kind {
            EquipmentKind::Transformer => StyleClass::A,
            EquipmentKind::Breaker => StyleClass::B,
            EquipmentKind::Bus => StyleClass::C,
            EquipmentKind::Generic(_) => StyleClass::D,
        }
    }

    /// Concrete pen settings for this class
    pub fn style(&self) -> EntityStyle {
        match self {
            StyleClass::A => EntityStyle::colored(1),
            StyleClass::B => EntityStyle::colored(3),
            StyleClass::C => EntityStyle::colored(5).with_lineweight(BUS_LINEWEIGHT),
            StyleClass::D => EntityStyle::colored(6),
            StyleClass::E => EntityStyle::colored(7),
            StyleClass::Label => EntityStyle::default(),
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleClass::A => write!(f, "A"),
            StyleClass::B => write!(f, "B"),
            StyleClass::C => write!(f, "C"),
            StyleClass::D => write!(f, "D"),
            StyleClass::E => write!(f, "E"),
            StyleClass::Label => write!(f, "label"),
        }
    }
}

/// Pen settings applied to one entity
///
/// `None` leaves the attribute at the drawing default (BYLAYER).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityStyle {
    /// AutoCAD color index
    pub color: Option<u8>,
    /// Lineweight in hundredths of a millimetre
    pub lineweight: Option<i16>,
}

impl EntityStyle {
    pub const fn colored(color: u8) -> Self {
        Self {
            color: Some(color),
            lineweight: None,
        }
    }

    pub const fn with_lineweight(mut self, lineweight: i16) -> Self {
        self.lineweight = Some(lineweight);
        self
    }
}
