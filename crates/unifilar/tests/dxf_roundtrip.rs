//! DXF output tests
//!
//! Generated drawings are read back with the `dxf` crate and compared with
//! the entity counts the layout predicts.

use dxf::entities::EntityType;
use dxf::Drawing;
use unifilar::plugins::single_line::SingleLineLayoutAlgorithm;
use unifilar::{generate_diagram, EquipmentRecord};

fn reload(records: &[EquipmentRecord]) -> Drawing {
    let bytes = generate_diagram(records).unwrap();
    let mut reader = bytes.as_slice();
    Drawing::load(&mut reader).unwrap()
}

#[derive(Debug, Default, PartialEq)]
struct Counts {
    circles: usize,
    lines: usize,
    outlines: usize,
    texts: usize,
}

fn count(drawing: &Drawing) -> Counts {
    let mut counts = Counts::default();
    for entity in drawing.entities() {
        match entity.specific {
            EntityType::Circle(_) => counts.circles += 1,
            EntityType::Line(_) => counts.lines += 1,
            EntityType::LwPolyline(_) => counts.outlines += 1,
            EntityType::Text(_) => counts.texts += 1,
            _ => {}
        }
    }
    counts
}

#[test]
fn test_empty_input_gives_valid_drawing() {
    let drawing = reload(&[]);
    assert_eq!(drawing.entities().count(), 0);
}

#[test]
fn test_single_transformer_entities() {
    let drawing = reload(&[EquipmentRecord::new("T1", "Transformer")
        .with_power(10.0)
        .with_voltage(115.0)]);

    assert_eq!(
        count(&drawing),
        Counts {
            circles: 1,
            lines: 0,
            outlines: 0,
            texts: 3,
        }
    );

    let circle = drawing
        .entities()
        .find_map(|e| match e.specific {
            EntityType::Circle(ref c) => Some(c.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(circle.radius, 5.0);
    assert_eq!((circle.center.x, circle.center.y), (0.0, 0.0));
}

#[test]
fn test_mixed_table_entities() {
    let records = vec![
        EquipmentRecord::new("T1", "Transformer")
            .with_power(10.0)
            .with_voltage(115.0),
        EquipmentRecord::new("52-1", "Breaker").with_voltage(115.0),
        EquipmentRecord::new("BB", "Bus").with_voltage(115.0),
        EquipmentRecord::new("SW", "Switch"),
    ];
    let drawing = reload(&records);

    // bus bar plus three connectors
    assert_eq!(
        count(&drawing),
        Counts {
            circles: 2,
            lines: 4,
            outlines: 1,
            texts: 4 + 1 + 3,
        }
    );

    let layout = SingleLineLayoutAlgorithm::new().layout_records(&records);
    assert_eq!(drawing.entities().count(), layout.entity_count());
}

#[test]
fn test_label_text_and_height() {
    let drawing = reload(&[
        EquipmentRecord::new("A", "Bus"),
        EquipmentRecord::new("T2", "Transformer").with_power(0.0),
    ]);

    let texts: Vec<_> = drawing
        .entities()
        .filter_map(|e| match e.specific {
            EntityType::Text(ref t) => Some(t.clone()),
            _ => None,
        })
        .collect();

    let power = texts.iter().find(|t| t.value == "0 MVA").unwrap();
    assert_eq!(power.text_height, 2.0);
    assert_eq!((power.location.x, power.location.y), (35.0, -15.0));

    let name = texts.iter().find(|t| t.value == "T2").unwrap();
    assert_eq!(name.text_height, 2.5);
    assert_eq!((name.location.x, name.location.y), (35.0, -10.0));
}

#[test]
fn test_connector_endpoints() {
    let drawing = reload(&[
        EquipmentRecord::new("A", "Transformer"),
        EquipmentRecord::new("B", "Transformer"),
        EquipmentRecord::new("C", "Transformer"),
    ]);

    let mut spans: Vec<_> = drawing
        .entities()
        .filter_map(|e| match e.specific {
            EntityType::Line(ref l) => Some((l.p1.x, l.p2.x, l.p1.y, l.p2.y)),
            _ => None,
        })
        .collect();
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));

    assert_eq!(spans, vec![(5.0, 35.0, 0.0, 0.0), (45.0, 75.0, 0.0, 0.0)]);
}

#[test]
fn test_non_ascii_names_survive() {
    let drawing = reload(&[EquipmentRecord::new("Transformador Norte Ñ", "Transformer")]);
    let found = drawing.entities().any(|e| {
        matches!(e.specific, EntityType::Text(ref t) if t.value.contains("Norte"))
    });
    assert!(found);
}
