//! DXF renderer for single-line diagrams
//!
//! Turns a [`SingleLineLayoutResult`] into a complete R2010 DXF document
//! written straight into memory.

use anyhow::Result;
use dxf::entities::{Circle, Entity, EntityType, Line, LwPolyline, Text};
use dxf::enums::AcadVersion;
use dxf::{Color, Drawing, LwPolylineVertex};
use tracing::{debug, info, span, Level};

use super::layout::{
    PositionedConnector, PositionedLabel, PositionedSymbol, SingleLineLayoutAlgorithm,
    SingleLineLayoutResult, SymbolShape,
};
use super::style::{EntityStyle, StyleClass};
use crate::core::{Database, LayoutAlgorithm, Point, Renderer, UnifilarError};
use crate::plugins::table::EquipmentDatabase;

/// MIME type of DXF output
pub const DXF_MIME_TYPE: &str = "application/dxf";

/// Renders equipment tables as DXF single-line diagrams
#[derive(Debug, Default, Clone, Copy)]
pub struct DxfRenderer {
    layout: SingleLineLayoutAlgorithm,
}

impl DxfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the in-memory drawing for a finished layout
    pub fn build_drawing(&self, layout: &SingleLineLayoutResult) -> Drawing {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2010;

        for symbol in &layout.symbols {
            emit_symbol(&mut drawing, symbol);
        }
        for label in &layout.labels {
            emit_label(&mut drawing, label);
        }
        for connector in &layout.connectors {
            emit_connector(&mut drawing, connector);
        }

        drawing
    }

    /// Serialize a layout to DXF bytes
    pub fn render_layout(&self, layout: &SingleLineLayoutResult) -> Result<Vec<u8>> {
        let drawing = self.build_drawing(layout);
        let mut buffer = Vec::new();
        drawing
            .save(&mut buffer)
            .map_err(|e| UnifilarError::serialization_failure("dxf", e.to_string()))?;
        Ok(buffer)
    }
}

fn emit(drawing: &mut Drawing, specific: EntityType, style: EntityStyle) {
    let mut entity = Entity::new(specific);
    if let Some(color) = style.color {
        entity.common.color = Color::from_index(color);
    }
    if let Some(lineweight) = style.lineweight {
        entity.common.lineweight_enum_value = lineweight;
    }
    drawing.add_entity(entity);
}

fn emit_symbol(drawing: &mut Drawing, symbol: &PositionedSymbol) {
    let center = symbol.center;
    let specific = match symbol.shape {
        SymbolShape::Circle { radius } => EntityType::Circle(Circle::new(dxf_point(center), radius)),
        SymbolShape::SquareOutline { half_extent } => {
            let mut outline = LwPolyline::default();
            outline.vertices = SymbolShape::square_corners(center, half_extent)
                .iter()
                .map(|corner| LwPolylineVertex {
                    x: corner.x,
                    y: corner.y,
                    ..Default::default()
                })
                .collect();
            outline.set_is_closed(true);
            EntityType::LwPolyline(outline)
        }
        SymbolShape::VerticalBar { half_length } => EntityType::Line(Line::new(
            dxf_point(center.offset(0.0, -half_length)),
            dxf_point(center.offset(0.0, half_length)),
        )),
    };
    emit(drawing, specific, symbol.style.style());
}

fn emit_label(drawing: &mut Drawing, label: &PositionedLabel) {
    let mut text = Text::default();
    text.location = dxf_point(label.insertion);
    text.text_height = label.height;
    text.value = label.text.clone();
    emit(drawing, EntityType::Text(text), StyleClass::Label.style());
}

fn emit_connector(drawing: &mut Drawing, connector: &PositionedConnector) {
    let line = Line::new(dxf_point(connector.start), dxf_point(connector.end));
    emit(drawing, EntityType::Line(line), connector.style.style());
}

fn dxf_point(point: Point) -> dxf::Point {
    dxf::Point::new(point.x, point.y, 0.0)
}

impl Renderer<EquipmentDatabase> for DxfRenderer {
    type Output = Vec<u8>;

    fn render(&self, database: &EquipmentDatabase) -> Result<Self::Output> {
        let render_span = span!(
            Level::INFO,
            "render_dxf",
            record_count = database.record_count()
        );
        let _enter = render_span.enter();

        let layout = self.layout.layout(database)?;
        let bytes = self.render_layout(&layout)?;

        debug!(entity_count = layout.entity_count(), "Drawing entities emitted");
        info!(output_len = bytes.len(), "DXF document written");
        Ok(bytes)
    }

    fn name(&self) -> &'static str {
        "dxf"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "dxf"
    }

    fn mime_type(&self) -> &'static str {
        DXF_MIME_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "dxf"
    }
}
