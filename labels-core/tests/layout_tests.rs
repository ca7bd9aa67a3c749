//! Placement and pagination tests for the label grid.

use std::collections::HashMap;

use labels_core::{
    FilterCriteria, LabelPlan, LayoutOptions, PageGeometry, PaperSize, SetRecord, Template,
    VariantTag, layout, paginate,
};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn record(code: &str, name: &str) -> SetRecord {
    SetRecord {
        code: code.into(),
        name: name.into(),
        release_date: None,
        card_count: 250,
        category: "expansion".into(),
        is_digital_only: false,
        icon: format!("https://svgs.example/{code}.svg"),
    }
}

fn records(n: usize) -> Vec<SetRecord> {
    (0..n).map(|i| record(&format!("s{i}"), &format!("Set {i}"))).collect()
}

fn no_renames() -> HashMap<String, String> {
    HashMap::new()
}

/// A full grid stays on one page; one more item opens page 1 at the margin.
#[test]
fn test_full_page_then_overflow() {
    let g = PageGeometry::new(2790.0, 2160.0, 200.0, 4, 15).unwrap();
    let full = layout(&records(60), &no_renames(), &g, &LayoutOptions::default());
    assert!(full.iter().all(|it| it.page_index == 0));

    let over = layout(&records(61), &no_renames(), &g, &LayoutOptions::default());
    let last = over.last().unwrap();
    assert_eq!(last.page_index, 1);
    assert!((last.x - 200.0).abs() < EPS);
    assert!((last.y - 200.0).abs() < EPS);
}

#[test]
fn test_first_item_at_margin() {
    let g = PageGeometry::for_paper(PaperSize::A4, Template::Dividers, None, None, None).unwrap();
    let items = layout(&records(3), &no_renames(), &g, &LayoutOptions::default());
    assert_eq!((items[0].x, items[0].y), (100.0, 100.0));
}

/// Down the column first, then one column to the right.
#[test]
fn test_column_major_order() {
    let g = PageGeometry::new(2790.0, 2160.0, 200.0, 4, 15).unwrap();
    let items = layout(&records(20), &no_renames(), &g, &LayoutOptions::default());
    for i in 1..15 {
        assert!((items[i].x - items[0].x).abs() < EPS);
        assert!((items[i].y - items[i - 1].y - g.cell_height()).abs() < EPS);
    }
    assert!((items[15].x - items[14].x - g.cell_width()).abs() < EPS);
    assert!((items[15].y - g.margin()).abs() < EPS);
}

#[test]
fn test_empty_input_has_no_pages() {
    let g = PageGeometry::new(2790.0, 2160.0, 200.0, 4, 15).unwrap();
    let items = layout(&[], &no_renames(), &g, &LayoutOptions::default());
    assert!(items.is_empty());
    assert!(paginate(items).is_empty());
}

#[test]
fn test_last_page_not_padded() {
    let g = PageGeometry::new(1000.0, 1000.0, 100.0, 2, 2).unwrap();
    let pages = paginate(layout(&records(9), &no_renames(), &g, &LayoutOptions::default()));
    let sizes: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
    assert_eq!(sizes, [4, 4, 1]);
    assert_eq!(pages[2].number(), 3);
}

/// 3 records x 5 pips = 15 items, grouped by record, pips in given order.
#[test]
fn test_variant_expansion() {
    let g = PageGeometry::new(2790.0, 2160.0, 200.0, 4, 15).unwrap();
    let pips = vec![
        VariantTag::White,
        VariantTag::Blue,
        VariantTag::Black,
        VariantTag::Red,
        VariantTag::Green,
    ];
    let items = layout(
        &records(3),
        &no_renames(),
        &g,
        &LayoutOptions::with_variants(pips.clone()),
    );
    assert_eq!(items.len(), 15);
    for (i, it) in items.iter().enumerate() {
        assert_eq!(it.code, format!("s{}", i / 5));
        assert_eq!(it.variant, Some(pips[i % 5]));
        assert_eq!(it.icon, format!("https://svgs.example/s{}.svg", i / 5));
    }
}

#[test]
fn test_expansion_with_no_variants_places_nothing() {
    let g = PageGeometry::new(2790.0, 2160.0, 200.0, 4, 15).unwrap();
    let items = layout(&records(3), &no_renames(), &g, &LayoutOptions::with_variants(vec![]));
    assert!(items.is_empty());
}

#[test]
fn test_display_names_are_normalized() {
    let g = PageGeometry::new(2790.0, 2160.0, 200.0, 4, 15).unwrap();
    let renames = HashMap::from([("Long Name".to_string(), "Short".to_string())]);
    let recs = vec![record("a", "Long Name"), record("b", "Other")];
    let items = layout(&recs, &renames, &g, &LayoutOptions::default());
    assert_eq!(items[0].display_name, "Short");
    assert_eq!(items[1].display_name, "Other");
}

/// Newest-first catalog in, oldest-first labels out.
#[test]
fn test_plan_orders_oldest_first() {
    let g = PageGeometry::new(2790.0, 2160.0, 200.0, 4, 15).unwrap();
    let catalog = vec![record("new", "Newest"), record("mid", "Middle"), record("old", "Oldest")];
    let plan = LabelPlan::build(
        &catalog,
        &FilterCriteria::default(),
        &no_renames(),
        &g,
        &LayoutOptions::default(),
    );
    assert_eq!(plan.pages.len(), 1);
    let codes: Vec<&str> = plan.pages[0].items.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, ["old", "mid", "new"]);
    assert_eq!(plan.item_count(), 3);
}

proptest! {
    #[test]
    fn prop_slots_match_modular_position(
        columns in 1usize..6,
        rows in 1usize..20,
        n in 0usize..200,
    ) {
        let g = PageGeometry::new(2790.0, 2160.0, 200.0, columns, rows).unwrap();
        let items = layout(&records(n), &no_renames(), &g, &LayoutOptions::default());
        prop_assert_eq!(items.len(), n);
        let per_page = columns * rows;
        for (i, it) in items.iter().enumerate() {
            let slot = i % per_page;
            prop_assert_eq!(it.page_index, i / per_page);
            let x = g.margin() + (slot / rows) as f64 * g.cell_width();
            let y = g.margin() + (slot % rows) as f64 * g.cell_height();
            prop_assert!((it.x - x).abs() < EPS);
            prop_assert!((it.y - y).abs() < EPS);
            prop_assert!(it.x + g.cell_width() <= g.page_width() - g.margin() + EPS);
            prop_assert!(it.y + g.cell_height() <= g.page_height() - g.margin() + EPS);
        }
        let pages = paginate(items);
        prop_assert_eq!(pages.len(), n.div_ceil(per_page));
    }

    #[test]
    fn prop_expansion_multiplies_count(n in 0usize..30, k in 0usize..7) {
        let g = PageGeometry::new(2970.0, 2100.0, 100.0, 4, 2).unwrap();
        let tags = VariantTag::DEFAULT_ORDER[..k].to_vec();
        let items = layout(&records(n), &no_renames(), &g, &LayoutOptions::with_variants(tags));
        prop_assert_eq!(items.len(), n * k);
    }
}
