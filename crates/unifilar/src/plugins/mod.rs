//! Pipeline plugins
//!
//! `table` adapts caller input into records; `single_line` and `report`
//! each turn those records into one output document; the orchestrator runs
//! the whole pipeline.

pub mod orchestrator;
pub mod report;
pub mod single_line;
pub mod table;

pub use orchestrator::*;
pub use report::{PdfRenderer, ReportLayoutAlgorithm};
pub use single_line::{DxfRenderer, SingleLineLayoutAlgorithm};
pub use table::{EquipmentDatabase, TableParser};
