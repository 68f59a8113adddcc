//! Core parser trait for tabular input
//!
//! This trait defines the interface for turning a serialized equipment table
//! into records stored in a database.

use anyhow::Result;

use super::Database;

/// Core trait for table parsers
///
/// # Example
/// ```
/// use unifilar::core::{Database, Parser};
/// use unifilar::plugins::table::{EquipmentDatabase, TableParser};
///
/// let parser = TableParser::new();
/// let mut db = EquipmentDatabase::new();
/// parser
///     .parse(r#"[{"Equipo": "T1", "Tipo": "Transformer"}]"#, &mut db)
///     .unwrap();
/// assert_eq!(db.record_count(), 1);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse the input into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input looks like something this parser accepts
    fn can_parse(&self, input: &str) -> bool;
}
