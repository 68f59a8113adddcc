//! PDF renderer for technical reports
//!
//! Writes a [`ReportLayoutResult`] as a PDF using the standard Helvetica
//! faces. Every text run selects its font explicitly, so nothing depends on
//! the order in which cells are emitted.

use anyhow::Result;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::{debug, info, span, Level};

use super::layout::{
    PositionedRow, PositionedTitle, ReportLayoutAlgorithm, ReportLayoutResult, RowKind,
    CELL_PADDING, PAGE_HEIGHT, PAGE_WIDTH, TABLE_FONT_SIZE, TITLE_FONT_SIZE,
};
use super::text::encode_win_ansi;
use crate::core::{Database, LayoutAlgorithm, MissingValuePolicy, Renderer};
use crate::plugins::table::EquipmentDatabase;

/// MIME type of PDF output
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Points per millimetre
const PT_PER_MM: f32 = 72.0 / 25.4;
/// Cell border width in points
const BORDER_WIDTH: f32 = 0.567;

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Font selection for one text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Name<'static>,
    pub size: f32,
}

impl TextStyle {
    pub const TITLE: Self = Self {
        font: REGULAR_FONT,
        size: TITLE_FONT_SIZE as f32,
    };
    pub const HEADER: Self = Self {
        font: BOLD_FONT,
        size: TABLE_FONT_SIZE as f32,
    };
    pub const BODY: Self = Self {
        font: REGULAR_FONT,
        size: TABLE_FONT_SIZE as f32,
    };

    /// Style used for the cells of a row
    pub fn for_row(kind: RowKind) -> Self {
        match kind {
            RowKind::Header => Self::HEADER,
            RowKind::Body => Self::BODY,
        }
    }
}

/// Renders equipment tables as PDF technical reports
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderer {
    layout: ReportLayoutAlgorithm,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that prints absent ratings with `policy`
    pub fn with_policy(policy: MissingValuePolicy) -> Self {
        Self {
            layout: ReportLayoutAlgorithm::with_policy(policy),
        }
    }

    /// Serialize a layout to PDF bytes
    pub fn render_layout(&self, layout: &ReportLayoutResult) -> Result<Vec<u8>> {
        let mut refs = RefAllocator::default();
        let catalog_id = refs.next();
        let page_tree_id = refs.next();
        let info_id = refs.next();
        let regular_id = refs.next();
        let bold_id = refs.next();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.document_info(info_id)
            .title(TextStr(&layout.title.text))
            .producer(TextStr("unifilar"));
        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let mut page_ids = Vec::with_capacity(layout.page_count);
        for page_index in 0..layout.page_count {
            let page_id = refs.next();
            let content_id = refs.next();
            page_ids.push(page_id);

            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(
                0.0,
                0.0,
                PAGE_WIDTH as f32 * PT_PER_MM,
                PAGE_HEIGHT as f32 * PT_PER_MM,
            ));
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources()
                .fonts()
                .pair(REGULAR_FONT, regular_id)
                .pair(BOLD_FONT, bold_id);
            page.finish();

            let mut content = Content::new();
            if layout.title.page == page_index {
                draw_title(&mut content, &layout.title);
            }
            for row in layout.rows_on_page(page_index) {
                draw_row(&mut content, row);
            }
            pdf.stream(content_id, &content.finish());
        }

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        Ok(pdf.finish())
    }
}

/// Sequential indirect object ids
#[derive(Debug)]
struct RefAllocator {
    next: i32,
}

impl Default for RefAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl RefAllocator {
    fn next(&mut self) -> Ref {
        let id = Ref::new(self.next);
        self.next += 1;
        id
    }
}

fn draw_title(content: &mut Content, title: &PositionedTitle) {
    let baseline = baseline(title.y, title.height, TextStyle::TITLE.size);
    show_text(content, TextStyle::TITLE, title.text_x, baseline, &title.text);
}

fn draw_row(content: &mut Content, row: &PositionedRow) {
    let style = TextStyle::for_row(row.kind);

    content.set_line_width(BORDER_WIDTH);
    for cell in &row.cells {
        content.rect(
            mm(cell.x),
            mm(PAGE_HEIGHT - row.y - row.height),
            mm(cell.width),
            mm(row.height),
        );
    }
    content.stroke();

    let baseline = baseline(row.y, row.height, style.size);
    for cell in &row.cells {
        show_text(content, style, cell.x + CELL_PADDING, baseline, &cell.text);
    }
}

fn show_text(content: &mut Content, style: TextStyle, x: f64, baseline: f64, text: &str) {
    if text.is_empty() {
        return;
    }
    let encoded = encode_win_ansi(text);
    content.begin_text();
    content.set_font(style.font, style.size);
    content.next_line(mm(x), mm(PAGE_HEIGHT - baseline));
    content.show(Str(&encoded));
    content.end_text();
}

/// Baseline (distance from the top of the page) of text vertically centered
/// in a cell
fn baseline(top: f64, height: f64, font_size: f32) -> f64 {
    let font_size_mm = f64::from(font_size) * 25.4 / 72.0;
    top + 0.5 * height + 0.3 * font_size_mm
}

fn mm(value: f64) -> f32 {
    value as f32 * PT_PER_MM
}

impl Renderer<EquipmentDatabase> for PdfRenderer {
    type Output = Vec<u8>;

    fn render(&self, database: &EquipmentDatabase) -> Result<Self::Output> {
        let render_span = span!(
            Level::INFO,
            "render_pdf",
            record_count = database.record_count()
        );
        let _enter = render_span.enter();

        let layout = self.layout.layout(database)?;
        let bytes = self.render_layout(&layout)?;

        debug!(pages = layout.page_count, rows = layout.rows.len(), "Report pages emitted");
        info!(output_len = bytes.len(), "PDF document written");
        Ok(bytes)
    }

    fn name(&self) -> &'static str {
        "pdf"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "pdf"
    }

    fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }
}
