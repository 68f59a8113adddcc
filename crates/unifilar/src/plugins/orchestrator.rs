//! Plugin orchestrator for the generation pipeline
//!
//! The orchestrator manages the flow of data through all plugins:
//! Parser → Database → (Layout → Renderer) × 2
//!
//! The two generators never exchange data; each reads the same database.

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{Database, Parser, RenderConfig, Renderer};
use crate::plugins::report::PdfRenderer;
use crate::plugins::single_line::DxfRenderer;
use crate::plugins::table::{EquipmentDatabase, TableParser};

/// Default download name of the diagram
pub const DEFAULT_DIAGRAM_FILE_NAME: &str = "unifilar_generado.dxf";
/// Default download name of the report
pub const DEFAULT_REPORT_FILE_NAME: &str = "memoria_tecnica.pdf";

/// A generated document ready to hand to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Both documents produced from one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub diagram: Artifact,
    pub report: Artifact,
}

/// Plugin orchestrator that coordinates the entire pipeline
#[derive(Debug, Default, Clone, Copy)]
pub struct Orchestrator {
    parser: TableParser,
    diagram_renderer: DxfRenderer,
    report_renderer: PdfRenderer,
}

impl Orchestrator {
    /// Create an orchestrator with the default render config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orchestrator with a specific render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            parser: TableParser::new(),
            diagram_renderer: DxfRenderer::new(),
            report_renderer: PdfRenderer::with_policy(config.missing_values),
        }
    }

    /// Parse a serialized table into a database
    pub fn parse(&self, input: &str) -> Result<EquipmentDatabase> {
        let mut database = EquipmentDatabase::new();
        self.parser.parse(input, &mut database)?;
        Ok(database)
    }

    /// Produce the single-line diagram
    pub fn generate_diagram(&self, database: &EquipmentDatabase) -> Result<Artifact> {
        let bytes = self.diagram_renderer.render(database)?;
        Ok(Artifact {
            file_name: DEFAULT_DIAGRAM_FILE_NAME.to_string(),
            mime_type: self.diagram_renderer.mime_type(),
            bytes,
        })
    }

    /// Produce the technical report
    pub fn generate_report(&self, database: &EquipmentDatabase) -> Result<Artifact> {
        let bytes = self.report_renderer.render(database)?;
        Ok(Artifact {
            file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            mime_type: self.report_renderer.mime_type(),
            bytes,
        })
    }

    /// Run both generators over an existing database
    pub fn generate(&self, database: &EquipmentDatabase) -> Result<GeneratedArtifacts> {
        let diagram = self.generate_diagram(database)?;
        let report = self.generate_report(database)?;
        Ok(GeneratedArtifacts { diagram, report })
    }

    /// Process input through the complete pipeline
    pub fn process(&self, input: &str) -> Result<GeneratedArtifacts> {
        let process_span = span!(Level::INFO, "process_table", input_len = input.len());
        let _enter = process_span.enter();

        info!("Starting generation pipeline");

        let parse_span = span!(Level::DEBUG, "pipeline_parse");
        let _parse_enter = parse_span.enter();
        let database = self.parse(input)?;
        debug!(record_count = database.record_count(), "Parsing completed");
        drop(_parse_enter);

        let render_span = span!(Level::DEBUG, "pipeline_render");
        let _render_enter = render_span.enter();
        let artifacts = self.generate(&database)?;
        debug!(
            diagram_len = artifacts.diagram.bytes.len(),
            report_len = artifacts.report.bytes.len(),
            "Rendering completed"
        );
        drop(_render_enter);

        info!("Pipeline completed successfully");
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MissingValuePolicy, UnifilarError};

    fn entity_count(artifact: &Artifact) -> usize {
        let mut reader = artifact.bytes.as_slice();
        dxf::Drawing::load(&mut reader).unwrap().entities().count()
    }

    const TABLE: &str = r#"[
        {"Equipo": "T1", "Tipo": "Transformer", "Potencia (MVA)": 10, "Tensión (kV)": 115},
        {"Equipo": "52-1", "Tipo": "Breaker", "Tensión (kV)": 115}
    ]"#;

    #[test]
    fn test_process_produces_both_artifacts() {
        let artifacts = Orchestrator::new().process(TABLE).unwrap();

        assert_eq!(artifacts.diagram.file_name, "unifilar_generado.dxf");
        assert_eq!(artifacts.diagram.mime_type, "application/dxf");
        assert!(!artifacts.diagram.bytes.is_empty());

        assert_eq!(artifacts.report.file_name, "memoria_tecnica.pdf");
        assert_eq!(artifacts.report.mime_type, "application/pdf");
        assert!(artifacts.report.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_generators_are_independent_of_order() {
        let orchestrator = Orchestrator::new();
        let db = orchestrator.parse(TABLE).unwrap();

        let report_first = orchestrator.generate_report(&db).unwrap();
        let diagram_second = orchestrator.generate_diagram(&db).unwrap();
        let both = orchestrator.generate(&db).unwrap();

        assert_eq!(report_first, both.report);
        assert_eq!(diagram_second.file_name, both.diagram.file_name);
        assert_eq!(entity_count(&diagram_second), entity_count(&both.diagram));
        // 2 symbols, 2 names, 1 power, 2 voltages, 1 connector
        assert_eq!(entity_count(&both.diagram), 8);
    }

    #[test]
    fn test_malformed_input_stops_pipeline() {
        let err = Orchestrator::new()
            .process(r#"[{"Tipo": "Bus"}]"#)
            .unwrap_err();
        let err = err.downcast_ref::<UnifilarError>().unwrap();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_config_reaches_report() {
        let blank = Orchestrator::with_config(RenderConfig::new(MissingValuePolicy::RenderBlank));
        let raw = Orchestrator::new();
        let db = raw.parse(TABLE).unwrap();

        let raw_report = raw.generate_report(&db).unwrap();
        let blank_report = blank.generate_report(&db).unwrap();
        assert_ne!(raw_report.bytes, blank_report.bytes);
        assert_eq!(
            entity_count(&raw.generate_diagram(&db).unwrap()),
            entity_count(&blank.generate_diagram(&db).unwrap())
        );
    }
}
