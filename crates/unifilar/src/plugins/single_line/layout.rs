//! Single-line diagram layout
//!
//! Places one symbol group per record along a single row at a fixed pitch.
//! There is no wrapping: a long table gives a long row.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::style::StyleClass;
use crate::core::{Database, EquipmentKind, EquipmentRecord, LayoutAlgorithm, Point};
use crate::plugins::table::EquipmentDatabase;

/// Horizontal distance between consecutive symbols
pub const PITCH: f64 = 40.0;
/// Y coordinate of the row
pub const ROW_Y: f64 = 0.0;
/// Half-size of the transformer, breaker and bus symbols
pub const SYMBOL_HALF_EXTENT: f64 = 5.0;
/// Radius of the fallback symbol
pub const GENERIC_RADIUS: f64 = 3.0;
/// Gap left between a connector end and the symbol center
pub const CONNECTOR_CLEARANCE: f64 = 5.0;
/// Horizontal offset of every label from the symbol center
pub const LABEL_INSET: f64 = 5.0;
/// Glyph height of the name label
pub const NAME_HEIGHT: f64 = 2.5;
/// Glyph height of the rating labels
pub const RATING_HEIGHT: f64 = 2.0;

/// Center of the symbol for the record at `index`
pub fn placement(index: usize) -> Point {
    Point::new(index as f64 * PITCH, ROW_Y)
}

/// Geometry of a symbol, relative to its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolShape {
    /// Full circle
    Circle { radius: f64 },
    /// Closed square outline
    SquareOutline { half_extent: f64 },
    /// Vertical stroke through the center
    VerticalBar { half_length: f64 },
}

impl SymbolShape {
    /// Shape drawn for an equipment kind
    pub fn for_kind(kind: &EquipmentKind) -> Self {
        match kind {
            EquipmentKind::Transformer => SymbolShape::Circle {
                radius: SYMBOL_HALF_EXTENT,
            },
            EquipmentKind::Breaker => SymbolShape::SquareOutline {
                half_extent: SYMBOL_HALF_EXTENT,
            },
            EquipmentKind::Bus => SymbolShape::VerticalBar {
                half_length: SYMBOL_HALF_EXTENT,
            },
            EquipmentKind::Generic(_) => SymbolShape::Circle {
                radius: GENERIC_RADIUS,
            },
        }
    }

    /// Corners of a square outline, counter-clockwise from bottom-left
    pub fn square_corners(center: Point, half_extent: f64) -> [Point; 4] {
        [
            center.offset(-half_extent, -half_extent),
            center.offset(half_extent, -half_extent),
            center.offset(half_extent, half_extent),
            center.offset(-half_extent, half_extent),
        ]
    }
}

/// A symbol with its final position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedSymbol {
    pub index: usize,
    pub center: Point,
    pub shape: SymbolShape,
    pub style: StyleClass,
}

/// Which line of a symbol group a label is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Name,
    Power,
    Voltage,
}

/// A text label with its insertion point
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLabel {
    pub index: usize,
    pub kind: LabelKind,
    pub text: String,
    pub insertion: Point,
    pub height: f64,
}

/// A horizontal link between two consecutive symbols
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedConnector {
    /// Index of the left-hand record
    pub from_index: usize,
    pub start: Point,
    pub end: Point,
    pub style: StyleClass,
}

/// Layout output containing positioned primitives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleLineLayoutResult {
    pub symbols: Vec<PositionedSymbol>,
    pub labels: Vec<PositionedLabel>,
    pub connectors: Vec<PositionedConnector>,
}

impl SingleLineLayoutResult {
    /// Number of drawing entities the layout turns into
    pub fn entity_count(&self) -> usize {
        self.symbols.len() + self.labels.len() + self.connectors.len()
    }

    /// Labels belonging to one record
    pub fn labels_for(&self, index: usize) -> impl Iterator<Item = &PositionedLabel> + '_ {
        self.labels.iter().filter(move |l| l.index == index)
    }

    /// Horizontal extent covered by the symbols
    pub fn width(&self) -> f64 {
        match self.symbols.last() {
            Some(last) => last.center.x + 2.0 * SYMBOL_HALF_EXTENT,
            None => 0.0,
        }
    }
}

/// Fixed-pitch single-row layout
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleLineLayoutAlgorithm;

impl SingleLineLayoutAlgorithm {
    pub fn new() -> Self {
        Self
    }

    /// Lay out a slice of records
    pub fn layout_records(&self, records: &[EquipmentRecord]) -> SingleLineLayoutResult {
        let mut result = SingleLineLayoutResult::default();
        let count = records.len();

        for (index, record) in records.iter().enumerate() {
            let center = placement(index);
            self.place_group(&mut result, index, center, record);

            if index + 1 < count {
                result.connectors.push(PositionedConnector {
                    from_index: index,
                    start: center.offset(CONNECTOR_CLEARANCE, 0.0),
                    end: center.offset(PITCH - CONNECTOR_CLEARANCE, 0.0),
                    style: StyleClass::E,
                });
            }
        }

        result
    }

    fn place_group(
        &self,
        result: &mut SingleLineLayoutResult,
        index: usize,
        center: Point,
        record: &EquipmentRecord,
    ) {
        let shape = SymbolShape::for_kind(&record.kind);
        trace!(index, name = %record.name, ?shape, x = center.x, "Placing symbol");

        result.symbols.push(PositionedSymbol {
            index,
            center,
            shape,
            style: StyleClass::for_kind(&record.kind),
        });

        result.labels.push(PositionedLabel {
            index,
            kind: LabelKind::Name,
            text: record.name.clone(),
            insertion: center.offset(-LABEL_INSET, -10.0),
            height: NAME_HEIGHT,
        });

        if let Some(text) = record.power_label() {
            result.labels.push(PositionedLabel {
                index,
                kind: LabelKind::Power,
                text,
                insertion: center.offset(-LABEL_INSET, -15.0),
                height: RATING_HEIGHT,
            });
        }

        if let Some(text) = record.voltage_label() {
            result.labels.push(PositionedLabel {
                index,
                kind: LabelKind::Voltage,
                text,
                insertion: center.offset(-LABEL_INSET, -20.0),
                height: RATING_HEIGHT,
            });
        }
    }
}

impl LayoutAlgorithm<EquipmentDatabase> for SingleLineLayoutAlgorithm {
    type Output = SingleLineLayoutResult;

    fn layout(&self, database: &EquipmentDatabase) -> Result<Self::Output> {
        let layout_span = span!(
            Level::INFO,
            "layout_single_line",
            record_count = database.record_count()
        );
        let _enter = layout_span.enter();

        let result = self.layout_records(database.as_slice());
        debug!(
            symbols = result.symbols.len(),
            labels = result.labels.len(),
            connectors = result.connectors.len(),
            width = result.width(),
            "Single-line layout completed"
        );
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "fixed-pitch"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn direction(&self) -> &'static str {
        "LR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t1() -> EquipmentRecord {
        EquipmentRecord::new("T1", "Transformer")
            .with_power(10.0)
            .with_voltage(115.0)
    }

    #[test]
    fn test_placement_is_pure() {
        assert_eq!(placement(0), Point::new(0.0, 0.0));
        assert_eq!(placement(3), Point::new(120.0, 0.0));
    }

    #[test]
    fn test_empty_layout() {
        let result = SingleLineLayoutAlgorithm::new().layout_records(&[]);
        assert_eq!(result.entity_count(), 0);
        assert_eq!(result.width(), 0.0);
    }

    #[test]
    fn test_single_transformer() {
        let result = SingleLineLayoutAlgorithm::new().layout_records(&[t1()]);

        assert_eq!(result.symbols.len(), 1);
        let symbol = &result.symbols[0];
        assert_eq!(symbol.center, Point::new(0.0, 0.0));
        assert_eq!(symbol.shape, SymbolShape::Circle { radius: 5.0 });
        assert_eq!(symbol.style, StyleClass::A);

        let texts: Vec<_> = result.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["T1", "10 MVA", "115 kV"]);
        assert!(result.connectors.is_empty());
    }

    #[test]
    fn test_label_positions_and_heights() {
        let result = SingleLineLayoutAlgorithm::new()
            .layout_records(&[EquipmentRecord::new("X", "Bus"), t1()]);
        let labels: Vec<_> = result.labels_for(1).collect();

        assert_eq!(labels[0].kind, LabelKind::Name);
        assert_eq!(labels[0].insertion, Point::new(35.0, -10.0));
        assert_eq!(labels[0].height, 2.5);
        assert_eq!(labels[1].kind, LabelKind::Power);
        assert_eq!(labels[1].insertion, Point::new(35.0, -15.0));
        assert_eq!(labels[1].height, 2.0);
        assert_eq!(labels[2].kind, LabelKind::Voltage);
        assert_eq!(labels[2].insertion, Point::new(35.0, -20.0));
    }

    #[test]
    fn test_absent_power_skips_label_but_keeps_voltage_slot() {
        let record = EquipmentRecord::new("B1", "Breaker").with_voltage(13.8);
        let result = SingleLineLayoutAlgorithm::new().layout_records(&[record]);

        assert!(result.labels.iter().all(|l| l.kind != LabelKind::Power));
        let voltage = result
            .labels
            .iter()
            .find(|l| l.kind == LabelKind::Voltage)
            .unwrap();
        assert_eq!(voltage.insertion, Point::new(-5.0, -20.0));
    }

    #[test]
    fn test_connectors_between_neighbours() {
        let records = vec![t1(), EquipmentRecord::new("B", "Breaker"), EquipmentRecord::new("C", "Bus")];
        let result = SingleLineLayoutAlgorithm::new().layout_records(&records);

        assert_eq!(result.connectors.len(), 2);
        assert_eq!(result.connectors[0].start, Point::new(5.0, 0.0));
        assert_eq!(result.connectors[0].end, Point::new(35.0, 0.0));
        assert_eq!(result.connectors[1].start, Point::new(45.0, 0.0));
        assert_eq!(result.connectors[1].end, Point::new(75.0, 0.0));
        assert!(result.connectors.iter().all(|c| c.style == StyleClass::E));
    }

    #[test]
    fn test_shapes_per_kind() {
        let records = vec![
            EquipmentRecord::new("B", "Breaker"),
            EquipmentRecord::new("C", "Bus"),
            EquipmentRecord::new("D", "Reactor"),
        ];
        let result = SingleLineLayoutAlgorithm::new().layout_records(&records);

        assert_eq!(result.symbols[0].shape, SymbolShape::SquareOutline { half_extent: 5.0 });
        assert_eq!(result.symbols[1].shape, SymbolShape::VerticalBar { half_length: 5.0 });
        assert_eq!(result.symbols[2].shape, SymbolShape::Circle { radius: 3.0 });
        assert_eq!(result.symbols[2].style, StyleClass::D);
    }

    #[test]
    fn test_square_corners() {
        let corners = SymbolShape::square_corners(Point::new(40.0, 0.0), 5.0);
        assert_eq!(
            corners,
            [
                Point::new(35.0, -5.0),
                Point::new(45.0, -5.0),
                Point::new(45.0, 5.0),
                Point::new(35.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_layout_trait_metadata() {
        let layout = SingleLineLayoutAlgorithm::new();
        assert_eq!(layout.name(), "fixed-pitch");
        assert_eq!(layout.direction(), "LR");
    }
}
