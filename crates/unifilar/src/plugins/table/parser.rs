//! Equipment table parser
//!
//! Reads a JSON array of row objects keyed by the spreadsheet column names
//! (`Equipo`, `Tipo`, `Potencia (MVA)`, `Tensión (kV)`). Name and kind are
//! required; a row without either is rejected rather than guessed at.

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::{debug, info, span, trace, Level};

use super::EquipmentDatabase;
use crate::core::{Database, EquipmentRecord, Parser, UnifilarError};

/// Column holding the equipment name
pub const NAME_COLUMN: &str = "Equipo";
/// Column holding the equipment kind
pub const KIND_COLUMN: &str = "Tipo";
/// Column holding the power rating
pub const POWER_COLUMN: &str = "Potencia (MVA)";
/// Column holding the voltage rating
pub const VOLTAGE_COLUMN: &str = "Tensión (kV)";

/// All columns in report order
pub const COLUMNS: [&str; 4] = [NAME_COLUMN, KIND_COLUMN, POWER_COLUMN, VOLTAGE_COLUMN];

/// Parser for JSON equipment tables
#[derive(Debug, Default, Clone, Copy)]
pub struct TableParser;

impl TableParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an already decoded JSON value into the database
    pub fn parse_value(&self, value: &Value, database: &mut EquipmentDatabase) -> Result<()> {
        let rows = value.as_array().ok_or_else(|| {
            UnifilarError::malformed_input(format!(
                "expected an array of rows, found {}",
                json_type(value)
            ))
        })?;

        debug!(row_count = rows.len(), "Decoding rows");
        for (index, row) in rows.iter().enumerate() {
            let object = row.as_object().ok_or_else(|| {
                UnifilarError::malformed_row(
                    index,
                    format!("expected an object, found {}", json_type(row)),
                )
            })?;
            let record = self.record_from_row(index, object)?;
            database.add_record(record)?;
        }
        Ok(())
    }

    /// Convert one row object into a record
    pub fn record_from_row(
        &self,
        index: usize,
        row: &Map<String, Value>,
    ) -> Result<EquipmentRecord, UnifilarError> {
        let name = required_text(index, row, NAME_COLUMN)?;
        let kind = required_text(index, row, KIND_COLUMN)?;
        let power = optional_number(index, row, POWER_COLUMN)?;
        let voltage = optional_number(index, row, VOLTAGE_COLUMN)?;

        trace!(row = index, %name, %kind, ?power, ?voltage, "Decoded row");

        Ok(EquipmentRecord::new(name, &kind)
            .with_optional_power(power)
            .with_optional_voltage(voltage))
    }
}

impl Parser<EquipmentDatabase> for TableParser {
    fn parse(&self, input: &str, database: &mut EquipmentDatabase) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_table", input_len = input.len());
        let _enter = parse_span.enter();

        let value: Value = serde_json::from_str(input).map_err(|e| {
            UnifilarError::malformed_input(format!("invalid JSON table: {}", e))
        })?;
        self.parse_value(&value, database)?;

        info!(record_count = database.record_count(), "Table parsed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json-table"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.trim_start().starts_with('[')
    }
}

fn required_text(
    index: usize,
    row: &Map<String, Value>,
    column: &str,
) -> Result<String, UnifilarError> {
    match row.get(column) {
        None | Some(Value::Null) => Err(UnifilarError::malformed_row(
            index,
            format!("missing required column '{}'", column),
        )),
        Some(Value::String(text)) if text.trim().is_empty() => Err(UnifilarError::malformed_row(
            index,
            format!("column '{}' is empty", column),
        )),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(Value::Bool(flag)) => Ok(flag.to_string()),
        Some(other) => Err(UnifilarError::malformed_row(
            index,
            format!("column '{}' must be text, found {}", column, json_type(other)),
        )),
    }
}

fn optional_number(
    index: usize,
    row: &Map<String, Value>,
    column: &str,
) -> Result<Option<f64>, UnifilarError> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number.as_f64().map(Some).ok_or_else(|| {
            UnifilarError::malformed_row(
                index,
                format!("column '{}' holds an unrepresentable number", column),
            )
        }),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() || text.eq_ignore_ascii_case("nan") {
                return Ok(None);
            }
            text.parse::<f64>().map(Some).map_err(|_| {
                UnifilarError::malformed_row(
                    index,
                    format!("column '{}' is not a number: '{}'", column, text),
                )
            })
        }
        Some(other) => Err(UnifilarError::malformed_row(
            index,
            format!("column '{}' must be a number, found {}", column, json_type(other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
