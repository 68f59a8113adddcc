//! Equipment database implementation
//!
//! Stores equipment records in the order they were read from the table.

use anyhow::Result;
use tracing::{debug, trace};

use crate::core::{Database, EquipmentRecord};

/// Ordered store of equipment records
#[derive(Debug, Default, Clone)]
pub struct EquipmentDatabase {
    records: Vec<EquipmentRecord>,
}

impl EquipmentDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from records, keeping their order
    pub fn from_records(records: impl IntoIterator<Item = EquipmentRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// All records as a slice
    pub fn as_slice(&self) -> &[EquipmentRecord] {
        &self.records
    }
}

impl Database for EquipmentDatabase {
    type Record = EquipmentRecord;

    fn add_record(&mut self, record: EquipmentRecord) -> Result<()> {
        trace!(name = %record.name, kind = %record.kind, "Adding record to database");
        self.records.push(record);
        debug!(record_count = self.records.len(), "Record added");
        Ok(())
    }

    fn get_record(&self, index: usize) -> Option<&EquipmentRecord> {
        self.records.get(index)
    }

    fn records(&self) -> impl Iterator<Item = &EquipmentRecord> {
        self.records.iter()
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut db = EquipmentDatabase::new();
        db.add_record(EquipmentRecord::new("B", "Breaker")).unwrap();
        db.add_record(EquipmentRecord::new("A", "Transformer")).unwrap();

        let names: Vec<_> = db.records().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(db.get_record(1).unwrap().name, "A");
        assert!(db.get_record(2).is_none());
    }

    #[test]
    fn test_duplicates_are_not_merged() {
        let db = EquipmentDatabase::from_records(vec![
            EquipmentRecord::new("T1", "Transformer"),
            EquipmentRecord::new("T1", "Transformer"),
        ]);
        assert_eq!(db.record_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut db = EquipmentDatabase::from_records(vec![EquipmentRecord::new("X", "Bus")]);
        assert!(!db.is_empty());
        db.clear();
        assert!(db.is_empty());
        assert_eq!(db.as_slice().len(), 0);
    }
}
