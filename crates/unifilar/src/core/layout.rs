//! Core layout trait for document positioning
//!
//! This trait defines the interface for computing where every element of an
//! output document goes, before any document writer is involved.

use anyhow::Result;

use super::Database;

/// Core trait for layout algorithms
///
/// A layout algorithm is a pure function of the database: it produces
/// positioned primitives that a renderer later turns into document entities.
///
/// # Example
/// ```
/// use unifilar::core::{Database, LayoutAlgorithm};
/// use unifilar::plugins::single_line::SingleLineLayoutAlgorithm;
/// use unifilar::plugins::table::EquipmentDatabase;
///
/// let db = EquipmentDatabase::new();
/// let layout = SingleLineLayoutAlgorithm::new();
/// let positioned = layout.layout(&db).unwrap();
/// assert!(positioned.symbols.is_empty());
/// ```
pub trait LayoutAlgorithm<D: Database>: Send + Sync {
    /// The output type of this layout algorithm
    type Output;

    /// Arrange the records in the database
    fn layout(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this layout algorithm
    fn name(&self) -> &'static str;

    /// Get the version of this layout algorithm
    fn version(&self) -> &'static str;

    /// Get the layout direction (LR, TB, etc.)
    fn direction(&self) -> &'static str;
}
