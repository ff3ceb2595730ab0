//! Builder tests through the public API

use email_presets::{
    create_canvas, create_column, create_row, create_section, create_text_row, Canvas,
    TextOverrides,
};
use serde_json::json;

#[test]
fn test_default_property_bag() {
    let leaf = create_text_row("X", TextOverrides::new());
    let props = serde_json::to_value(leaf.props()).expect("failed to serialize TextProps");
    assert_eq!(
        props,
        json!({
            "title": "X",
            "text": "X",
            "color": "#111827",
            "fontSize": 16,
            "bold": false,
            "italic": false,
            "underline": false
        })
    );
}

#[test]
fn test_overridden_property_bag() {
    let leaf = create_text_row("X", TextOverrides::new().bold(true).font_size(30));
    let props = serde_json::to_value(leaf.props()).expect("failed to serialize TextProps");
    assert_eq!(
        props,
        json!({
            "title": "X",
            "text": "X",
            "color": "#111827",
            "fontSize": 30,
            "bold": true,
            "italic": false,
            "underline": false
        })
    );
}

#[test]
fn test_hand_built_tree_has_derived_counts() {
    let wide = create_row(vec![
        create_column(vec![create_text_row("left", TextOverrides::new())]),
        create_column(vec![create_text_row("right", TextOverrides::new())]),
    ]);
    let narrow = create_row(vec![create_column(Vec::new())]);
    let canvas = create_canvas(vec![create_section(vec![wide, narrow])]);

    let counts: Vec<usize> = canvas.rows().map(|row| row.num_of_columns()).collect();
    assert_eq!(counts, vec![2, 1]);

    let stats = canvas.stats();
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.columns, 3);
    assert_eq!(stats.text_rows, 2);
}

#[test]
fn test_into_sections_transfers_children() {
    let canvas: Canvas = create_canvas(vec![create_section(Vec::new())]);
    let section_id = canvas.children()[0].id().clone();
    let sections = canvas.into_sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id(), &section_id);
}
