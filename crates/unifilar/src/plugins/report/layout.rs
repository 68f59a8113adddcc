//! Technical report layout
//!
//! Positions the title and the bordered table rows on A4 pages. All sizes
//! are fixed constants in millimetres; nothing depends on cell content
//! except the centering of the title.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::text::helvetica_width;
use crate::core::{Database, EquipmentRecord, LayoutAlgorithm, MissingValuePolicy};
use crate::plugins::table::EquipmentDatabase;

/// Report title
pub const TITLE: &str = "Technical Report — Single-Line Diagram";
/// Column headers, in order
pub const HEADERS: [&str; 4] = ["Equipment", "Type", "Power (MVA)", "Voltage (kV)"];
/// Column widths
pub const COLUMN_WIDTHS: [f64; 4] = [40.0, 30.0, 40.0, 40.0];

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
/// Left, top and right page margin
pub const MARGIN: f64 = 10.0;
/// Distance from the bottom edge at which a new page starts
pub const BREAK_MARGIN: f64 = 20.0;
pub const TITLE_WIDTH: f64 = 200.0;
pub const TITLE_HEIGHT: f64 = 10.0;
/// Blank space between title and table
pub const TITLE_GAP: f64 = 10.0;
pub const ROW_HEIGHT: f64 = 10.0;
/// Inner horizontal padding of a cell
pub const CELL_PADDING: f64 = 1.0;
/// Title font size in points
pub const TITLE_FONT_SIZE: f64 = 12.0;
/// Table font size in points
pub const TABLE_FONT_SIZE: f64 = 10.0;

/// Millimetres per point
const MM_PER_PT: f64 = 25.4 / 72.0;

/// The centered title line
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedTitle {
    pub text: String,
    pub page: usize,
    /// Left edge of the title cell
    pub x: f64,
    /// Top edge of the title cell
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Left edge of the text once centered in the cell
    pub text_x: f64,
}

/// Header or body row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Header,
    Body,
}

/// A bordered table cell
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCell {
    pub x: f64,
    pub width: f64,
    pub text: String,
}

/// A table row with its page and vertical position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedRow {
    pub kind: RowKind,
    pub page: usize,
    /// Top edge of the row
    pub y: f64,
    pub height: f64,
    pub cells: [ReportCell; 4],
}

/// Layout output for the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayoutResult {
    pub title: PositionedTitle,
    /// Header row followed by one row per record
    pub rows: Vec<PositionedRow>,
    pub page_count: usize,
}

impl ReportLayoutResult {
    /// Rows placed on one page
    pub fn rows_on_page(&self, page: usize) -> impl Iterator<Item = &PositionedRow> + '_ {
        self.rows.iter().filter(move |row| row.page == page)
    }

    /// Body rows only
    pub fn body_rows(&self) -> impl Iterator<Item = &PositionedRow> + '_ {
        self.rows.iter().filter(|row| row.kind == RowKind::Body)
    }
}

/// Fixed-grid report layout
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportLayoutAlgorithm {
    missing_values: MissingValuePolicy,
}

impl ReportLayoutAlgorithm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layout that renders absent ratings with `policy`
    pub fn with_policy(missing_values: MissingValuePolicy) -> Self {
        Self { missing_values }
    }

    /// Cell texts for one record, in column order
    pub fn row_texts(&self, record: &EquipmentRecord) -> [String; 4] {
        [
            record.name.clone(),
            record.kind.to_string(),
            self.missing_values.render(record.power_mva),
            self.missing_values.render(record.voltage_kv),
        ]
    }

    /// Lay out a slice of records
    pub fn layout_records(&self, records: &[EquipmentRecord]) -> ReportLayoutResult {
        let title_text_width = helvetica_width(TITLE, TITLE_FONT_SIZE) * MM_PER_PT;
        let title = PositionedTitle {
            text: TITLE.to_string(),
            page: 0,
            x: MARGIN,
            y: MARGIN,
            width: TITLE_WIDTH,
            height: TITLE_HEIGHT,
            text_x: MARGIN + (TITLE_WIDTH - title_text_width) / 2.0,
        };

        let mut cursor = PageCursor {
            page: 0,
            y: MARGIN + TITLE_HEIGHT + TITLE_GAP,
        };
        let mut rows = Vec::with_capacity(records.len() + 1);

        rows.push(cursor.place(RowKind::Header, HEADERS.map(str::to_string)));
        for record in records {
            let row = cursor.place(RowKind::Body, self.row_texts(record));
            trace!(page = row.page, y = row.y, name = %record.name, "Placed report row");
            rows.push(row);
        }

        ReportLayoutResult {
            title,
            rows,
            page_count: cursor.page + 1,
        }
    }
}

/// Vertical write position with automatic page breaks
struct PageCursor {
    page: usize,
    y: f64,
}

impl PageCursor {
    fn place(&mut self, kind: RowKind, texts: [String; 4]) -> PositionedRow {
        if self.y + ROW_HEIGHT > PAGE_HEIGHT - BREAK_MARGIN {
            self.page += 1;
            self.y = MARGIN;
        }

        let mut x = MARGIN;
        let mut column = 0;
        let cells = texts.map(|text| {
            let width = COLUMN_WIDTHS[column];
            let cell = ReportCell { x, width, text };
            x += width;
            column += 1;
            cell
        });

        let row = PositionedRow {
            kind,
            page: self.page,
            y: self.y,
            height: ROW_HEIGHT,
            cells,
        };
        self.y += ROW_HEIGHT;
        row
    }
}

impl LayoutAlgorithm<EquipmentDatabase> for ReportLayoutAlgorithm {
    type Output = ReportLayoutResult;

    fn layout(&self, database: &EquipmentDatabase) -> Result<Self::Output> {
        let layout_span = span!(
            Level::INFO,
            "layout_report",
            record_count = database.record_count(),
            missing_values = %self.missing_values
        );
        let _enter = layout_span.enter();

        let result = self.layout_records(database.as_slice());
        debug!(
            rows = result.rows.len(),
            pages = result.page_count,
            "Report layout completed"
        );
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "fixed-grid"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn direction(&self) -> &'static str {
        "TB"
    }
}
