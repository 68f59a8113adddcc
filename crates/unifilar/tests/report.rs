//! Technical report tests
//!
//! Layout is checked structurally; the PDF bytes are checked for the text
//! operators each cell produces (content streams are not compressed).

use unifilar::plugins::report::{
    ReportLayoutAlgorithm, RowKind, BREAK_MARGIN, HEADERS, PAGE_HEIGHT, ROW_HEIGHT, TITLE,
};
use unifilar::{generate_report, EquipmentRecord, MissingValuePolicy};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn scenario_b() -> Vec<EquipmentRecord> {
    vec![
        EquipmentRecord::new("T1", "Transformer")
            .with_power(10.0)
            .with_voltage(115.0),
        EquipmentRecord::new("B2", "Breaker").with_voltage(13.8),
    ]
}

#[test]
fn test_single_record_has_two_rows() {
    let result = ReportLayoutAlgorithm::new()
        .layout_records(&[EquipmentRecord::new("T1", "Transformer").with_power(10.0)]);
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].kind, RowKind::Header);
    assert_eq!(result.rows[1].kind, RowKind::Body);
}

#[test]
fn test_missing_power_prints_nan() {
    let result = ReportLayoutAlgorithm::new().layout_records(&scenario_b());
    let row = &result.rows[2];
    assert_eq!(row.cells[0].text, "B2");
    assert_eq!(row.cells[2].text, "nan");
    assert_eq!(row.cells[3].text, "13.8");

    let pdf = generate_report(&scenario_b(), MissingValuePolicy::default()).unwrap();
    assert!(contains(&pdf, b"(nan) Tj"));
    assert!(contains(&pdf, b"(13.8) Tj"));
}

#[test]
fn test_blank_policy_leaves_cell_empty() {
    let result = ReportLayoutAlgorithm::with_policy(MissingValuePolicy::RenderBlank)
        .layout_records(&scenario_b());
    assert_eq!(result.rows[2].cells[2].text, "");
}

#[test]
fn test_every_row_has_four_columns() {
    let records: Vec<_> = (0..12)
        .map(|i| EquipmentRecord::new(format!("E{i}"), "Bus"))
        .collect();
    let result = ReportLayoutAlgorithm::new().layout_records(&records);
    assert_eq!(result.rows.len(), 13);
    for row in &result.rows {
        assert_eq!(row.cells.len(), 4);
        assert_eq!(row.height, ROW_HEIGHT);
    }
}

#[test]
fn test_header_and_title_text_in_document() {
    let pdf = generate_report(&[], MissingValuePolicy::default()).unwrap();
    assert!(contains(&pdf, b"(Equipment) Tj"));
    assert!(contains(&pdf, b"(Type) Tj"));

    // title plus one run per header cell
    let runs = pdf.windows(3).filter(|w| *w == b" Tj").count();
    assert_eq!(runs, 1 + HEADERS.len());
    assert!(TITLE.starts_with("Technical Report"));
}

#[test]
fn test_pagination_keeps_rows_inside_margin() {
    let records: Vec<_> = (0..75)
        .map(|i| EquipmentRecord::new(format!("E{i}"), "Breaker"))
        .collect();
    let result = ReportLayoutAlgorithm::new().layout_records(&records);

    assert!(result.page_count >= 3);
    for row in &result.rows {
        assert!(row.y + row.height <= PAGE_HEIGHT - BREAK_MARGIN);
    }
    let total: usize = (0..result.page_count)
        .map(|page| result.rows_on_page(page).count())
        .sum();
    assert_eq!(total, 76);

    // rows keep table order across pages
    let names: Vec<_> = result.body_rows().map(|r| r.cells[0].text.clone()).collect();
    let expected: Vec<_> = (0..75).map(|i| format!("E{i}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_page_count_in_document() {
    let records: Vec<_> = (0..30)
        .map(|i| EquipmentRecord::new(format!("E{i}"), "Breaker"))
        .collect();
    let pdf = generate_report(&records, MissingValuePolicy::default()).unwrap();
    assert!(contains(&pdf, b"/Count 2"));
}

#[test]
fn test_unsupported_glyphs_are_replaced() {
    let pdf = generate_report(
        &[EquipmentRecord::new("⚡T1", "Transformer")],
        MissingValuePolicy::default(),
    )
    .unwrap();
    assert!(contains(&pdf, b"(?T1) Tj"));
}
