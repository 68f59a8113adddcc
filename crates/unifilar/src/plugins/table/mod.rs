//! Equipment table plugin
//!
//! Adapts the caller's tabular input into ordered [`EquipmentRecord`]s.
//!
//! Input example:
//! ```text
//! [
//!   {"Equipo": "T1", "Tipo": "Transformer", "Potencia (MVA)": 10, "Tensión (kV)": 115},
//!   {"Equipo": "52-1", "Tipo": "Breaker", "Tensión (kV)": 115}
//! ]
//! ```
//!
//! [`EquipmentRecord`]: crate::core::EquipmentRecord

mod database;
mod parser;

pub use database::EquipmentDatabase;
pub use parser::{
    TableParser, COLUMNS, KIND_COLUMN, NAME_COLUMN, POWER_COLUMN, VOLTAGE_COLUMN,
};
