//! Core database trait for equipment storage
//!
//! This trait defines the interface for storing the ordered equipment rows
//! that every generator reads from.

use anyhow::Result;

/// Core trait for record databases
///
/// A database holds records in insertion order. Insertion order is drawing
/// order, so implementations must never reorder, merge, or deduplicate.
pub trait Database: Send + Sync {
    /// The record type for this database
    type Record: Clone + Send + Sync;

    /// Append a record
    fn add_record(&mut self, record: Self::Record) -> Result<()>;

    /// Get a record by position
    fn get_record(&self, index: usize) -> Option<&Self::Record>;

    /// Iterate over all records in insertion order
    fn records(&self) -> impl Iterator<Item = &Self::Record>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of records
    fn record_count(&self) -> usize;

    /// Returns true when no records are stored
    fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
