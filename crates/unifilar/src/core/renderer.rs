//! Core renderer trait for document output
//!
//! This trait defines the interface for rendering equipment data into a
//! complete output document held in memory.

use anyhow::Result;

use super::Database;

/// Core trait for document renderers
///
/// Renderers return a complete document or an error, never a truncated
/// buffer. They must not touch the file system.
///
/// # Example
/// ```
/// use unifilar::core::Renderer;
/// use unifilar::plugins::single_line::DxfRenderer;
/// use unifilar::plugins::table::EquipmentDatabase;
///
/// let db = EquipmentDatabase::new();
/// let renderer = DxfRenderer::new();
/// let bytes = renderer.render(&db).unwrap();
/// assert!(!bytes.is_empty());
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;

    /// MIME type of the produced document
    fn mime_type(&self) -> &'static str;

    /// Default file extension, without the dot
    fn file_extension(&self) -> &'static str;
}
