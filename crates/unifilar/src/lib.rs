//! Unifilar - Turn substation equipment tables into drawings and reports
//!
//! A library that reads a list of equipment (transformers, breakers, bus
//! bars) and produces two documents from it: a single-line diagram as DXF
//! and a technical report as PDF.
//!
//! # Quick Start
//!
//! ```rust
//! use unifilar::generate;
//!
//! let table = r#"[{"Equipo": "T1", "Tipo": "Transformer", "Potencia (MVA)": 10, "Tensión (kV)": 115}]"#;
//! let artifacts = generate(table).unwrap();
//! assert_eq!(artifacts.diagram.file_name, "unifilar_generado.dxf");
//! assert!(artifacts.report.bytes.starts_with(b"%PDF-"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use unifilar::prelude::*;
//!
//! let records = vec![
//!     EquipmentRecord::new("T1", "Transformer").with_power(10.0).with_voltage(115.0),
//!     EquipmentRecord::new("52-1", "Breaker").with_voltage(115.0),
//! ];
//!
//! // Compute positions without writing any document
//! let layout = SingleLineLayoutAlgorithm::new().layout_records(&records);
//! assert_eq!(layout.symbols[1].center, Point::new(40.0, 0.0));
//! assert_eq!(layout.connectors.len(), 1);
//!
//! // Render to DXF
//! let database = EquipmentDatabase::from_records(records);
//! let dxf = DxfRenderer::new().render(&database).unwrap();
//! assert!(!dxf.is_empty());
//! ```

pub mod core;
pub mod plugins;

pub use core::*;
pub use plugins::orchestrator::{Artifact, GeneratedArtifacts, Orchestrator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Database, EquipmentKind, EquipmentRecord, LayoutAlgorithm, MissingValuePolicy, Parser,
        Point, RenderConfig, Renderer, UnifilarError,
    };
    pub use crate::plugins::orchestrator::{Artifact, GeneratedArtifacts, Orchestrator};
    pub use crate::plugins::report::{PdfRenderer, ReportLayoutAlgorithm};
    pub use crate::plugins::single_line::{DxfRenderer, SingleLineLayoutAlgorithm};
    pub use crate::plugins::table::{EquipmentDatabase, TableParser};
}

/// Generate the single-line diagram for a sequence of records
///
/// Records are drawn left to right in the order given. The result is a
/// complete DXF document held in memory.
///
/// # Example
/// ```rust
/// use unifilar::{generate_diagram, EquipmentRecord};
///
/// let dxf = generate_diagram(&[EquipmentRecord::new("BB1", "Bus")]).unwrap();
/// let text = String::from_utf8(dxf).unwrap();
/// assert!(text.contains("LINE"));
/// ```
pub fn generate_diagram(records: &[EquipmentRecord]) -> anyhow::Result<Vec<u8>> {
    use crate::core::Renderer as _;
    use crate::plugins::single_line::DxfRenderer;
    use crate::plugins::table::EquipmentDatabase;

    let database = EquipmentDatabase::from_records(records.iter().cloned());
    DxfRenderer::new().render(&database)
}

/// Generate the technical report for a sequence of records
///
/// Absent ratings are printed according to `policy`.
///
/// # Example
/// ```rust
/// use unifilar::{generate_report, EquipmentRecord, MissingValuePolicy};
///
/// let records = [EquipmentRecord::new("B1", "Breaker")];
/// let pdf = generate_report(&records, MissingValuePolicy::RenderBlank).unwrap();
/// assert!(pdf.starts_with(b"%PDF-"));
/// ```
pub fn generate_report(
    records: &[EquipmentRecord],
    policy: MissingValuePolicy,
) -> anyhow::Result<Vec<u8>> {
    use crate::core::Renderer as _;
    use crate::plugins::report::PdfRenderer;
    use crate::plugins::table::EquipmentDatabase;

    let database = EquipmentDatabase::from_records(records.iter().cloned());
    PdfRenderer::with_policy(policy).render(&database)
}

/// Parse a JSON equipment table into a database without rendering
///
/// # Example
/// ```rust
/// use unifilar::parse;
/// use unifilar::prelude::Database;
///
/// let db = parse(r#"[{"Equipo": "52-1", "Tipo": "Breaker"}]"#).unwrap();
/// assert_eq!(db.record_count(), 1);
/// ```
pub fn parse(input: &str) -> anyhow::Result<plugins::table::EquipmentDatabase> {
    Orchestrator::new().parse(input)
}

/// Parse a JSON equipment table and produce both documents
pub fn generate(input: &str) -> anyhow::Result<GeneratedArtifacts> {
    Orchestrator::new().process(input)
}

/// Like [`generate`], with an explicit render config
pub fn generate_with_config(
    input: &str,
    config: RenderConfig,
) -> anyhow::Result<GeneratedArtifacts> {
    Orchestrator::with_config(config).process(input)
}
