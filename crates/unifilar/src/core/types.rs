//! Core type definitions for equipment processing
//!
//! This module contains the fundamental types used throughout Unifilar:
//! equipment kinds, equipment records, drawing coordinates, and the
//! render configuration shared by both output documents.

use serde::Serialize;
use std::fmt;

/// Kind of substation equipment
///
/// Only the three exact English names are recognized. Any other text maps
/// to [`EquipmentKind::Generic`], which keeps the caller's original label so
/// the report can print it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum EquipmentKind {
    /// Power transformer
    Transformer,
    /// Circuit breaker
    Breaker,
    /// Bus bar
    Bus,
    /// Anything else, with the text the caller supplied
    Generic(String),
}

impl EquipmentKind {
    /// Parse a kind from table text (exact, case-sensitive)
    pub fn parse(text: &str) -> Self {
        match text {
            "Transformer" => EquipmentKind::Transformer,
            "Breaker" => EquipmentKind::Breaker,
            "Bus" => EquipmentKind::Bus,
            other => EquipmentKind::Generic(other.to_string()),
        }
    }

    /// Returns true for the fallback variant
    pub fn is_generic(&self) -> bool {
        matches!(self, EquipmentKind::Generic(_))
    }

    /// The text this kind is displayed as
    pub fn label(&self) -> &str {
        match self {
            EquipmentKind::Transformer => "Transformer",
            EquipmentKind::Breaker => "Breaker",
            EquipmentKind::Bus => "Bus",
            EquipmentKind::Generic(label) => label,
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<EquipmentKind> for String {
    fn from(kind: EquipmentKind) -> Self {
        kind.label().to_string()
    }
}

/// One row of the equipment table
///
/// Numeric ratings are optional: `None` means the cell was empty, which is
/// a different state from a rating of zero. NaN values handed to the
/// builder methods are normalized to `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentRecord {
    /// Display label
    #[serde(rename = "Equipo")]
    pub name: String,
    /// Equipment kind, selects the diagram symbol
    #[serde(rename = "Tipo")]
    pub kind: EquipmentKind,
    /// Rated power in MVA
    #[serde(rename = "Potencia (MVA)")]
    pub power_mva: Option<f64>,
    /// Rated voltage in kV
    #[serde(rename = "Tensión (kV)")]
    pub voltage_kv: Option<f64>,
}

impl EquipmentRecord {
    /// Create a record without ratings
    pub fn new(name: impl Into<String>, kind: &str) -> Self {
        Self {
            name: name.into(),
            kind: EquipmentKind::parse(kind),
            power_mva: None,
            voltage_kv: None,
        }
    }

    /// Set the power rating
    pub fn with_power(self, power_mva: f64) -> Self {
        self.with_optional_power(Some(power_mva))
    }

    /// Set the voltage rating
    pub fn with_voltage(self, voltage_kv: f64) -> Self {
        self.with_optional_voltage(Some(voltage_kv))
    }

    /// Set or clear the power rating
    pub fn with_optional_power(mut self, power_mva: Option<f64>) -> Self {
        self.power_mva = power_mva.filter(|v| !v.is_nan());
        self
    }

    /// Set or clear the voltage rating
    pub fn with_optional_voltage(mut self, voltage_kv: Option<f64>) -> Self {
        self.voltage_kv = voltage_kv.filter(|v| !v.is_nan());
        self
    }

    /// Diagram label for the power rating, e.g. `"10 MVA"`
    pub fn power_label(&self) -> Option<String> {
        self.power_mva
            .map(|value| format!("{} MVA", format_value(value)))
    }

    /// Diagram label for the voltage rating, e.g. `"115 kV"`
    pub fn voltage_label(&self) -> Option<String> {
        self.voltage_kv
            .map(|value| format!("{} kV", format_value(value)))
    }
}

/// Format a rating using the shortest representation that round-trips
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// How absent ratings are printed in the report table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MissingValuePolicy {
    /// Print the literal placeholder `nan`
    #[default]
    RenderRawPlaceholder,
    /// Leave the cell empty
    RenderBlank,
}

impl MissingValuePolicy {
    /// Placeholder text for an absent value
    pub const RAW_PLACEHOLDER: &'static str = "nan";

    /// Render an optional rating as cell text
    pub fn render(&self, value: Option<f64>) -> String {
        match (value, self) {
            (Some(v), _) => format_value(v),
            (None, MissingValuePolicy::RenderRawPlaceholder) => Self::RAW_PLACEHOLDER.to_string(),
            (None, MissingValuePolicy::RenderBlank) => String::new(),
        }
    }
}

impl fmt::Display for MissingValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingValuePolicy::RenderRawPlaceholder => write!(f, "raw"),
            MissingValuePolicy::RenderBlank => write!(f, "blank"),
        }
    }
}

/// Configuration shared by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// Text used for absent ratings in the report
    pub missing_values: MissingValuePolicy,
}

impl RenderConfig {
    pub fn new(missing_values: MissingValuePolicy) -> Self {
        Self { missing_values }
    }
}

/// A point in drawing units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by an offset
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
