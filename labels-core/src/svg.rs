//! SVG document for one printed page.
//!
//! The document is sized in millimetres with a viewBox in tenths of a
//! millimetre, so item coordinates from the layout are used as-is.

use std::fmt::Write;

use crate::geometry::PageGeometry;
use crate::guides::CuttingGuides;
use crate::models::{Page, PlacedItem};

/// Box inside a cell that holds the icon and text: the whole cell for
/// labels, a strip along the top edge for tall dividers.
fn content_band(geometry: &PageGeometry) -> (f64, f64, f64) {
    let w = geometry.cell_width();
    let h = geometry.cell_height();
    let band = h.min(w * 0.2);
    let pad = band * 0.08;
    (w, band, pad)
}

/// Build the page. `icon_href` maps an item's icon reference to something
/// an `<image>` can load; items it returns `None` for are drawn without icon.
pub fn build_page_svg<F>(
    page: &Page,
    guides: &CuttingGuides,
    geometry: &PageGeometry,
    icon_href: F,
) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let w = geometry.page_width();
    let h = geometry.page_height();
    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        s,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{}mm\" height=\"{}mm\" viewBox=\"0 0 {} {}\" font-family=\"sans-serif\">",
        fmt_mm(w / 10.0),
        fmt_mm(h / 10.0),
        fmt_mm(w),
        fmt_mm(h)
    );
    s.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    s.push_str("<g stroke=\"#888\" stroke-width=\"2\">\n");
    for g in guides.all() {
        let _ = writeln!(
            s,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
            g.x1, g.y1, g.x2, g.y2
        );
    }
    s.push_str("</g>\n");

    for item in &page.items {
        let href = if item.icon.is_empty() {
            None
        } else {
            icon_href(&item.icon)
        };
        push_item(&mut s, item, geometry, href.as_deref());
    }

    s.push_str("</svg>\n");
    s
}

fn push_item(s: &mut String, item: &PlacedItem, geometry: &PageGeometry, href: Option<&str>) {
    let (cell_w, band, pad) = content_band(geometry);
    let icon = band - 2.0 * pad;
    let name_size = band * 0.26;
    let detail_size = band * 0.2;

    let _ = writeln!(s, "<g transform=\"translate({:.2} {:.2})\">", item.x, item.y);
    if let Some(href) = href {
        let _ = writeln!(
            s,
            "<image x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" preserveAspectRatio=\"xMidYMid meet\" xlink:href=\"{}\"/>",
            pad,
            pad,
            icon,
            icon,
            svg_escape(href)
        );
    }
    let text_x = pad * 2.0 + icon;
    let _ = writeln!(
        s,
        "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" fill=\"#222\">{}</text>",
        text_x,
        band * 0.45,
        name_size,
        svg_escape(&item.display_name)
    );
    let _ = writeln!(
        s,
        "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" fill=\"#555\">{}</text>",
        text_x,
        band * 0.8,
        detail_size,
        svg_escape(&detail_line(item))
    );
    if let Some(tag) = item.variant {
        let r = band * 0.2;
        let cx = cell_w - pad - r;
        let cy = band / 2.0;
        let _ = writeln!(
            s,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"#333\" stroke-width=\"2\"/>",
            cx,
            cy,
            r,
            tag.fill()
        );
        let _ = writeln!(
            s,
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" text-anchor=\"middle\" fill=\"#222\">{}</text>",
            cx,
            cy + r * 0.4,
            r * 1.1,
            tag.symbol()
        );
    }
    s.push_str("</g>\n");
}

/// `NEO · Feb 2022`, or just the code when the date is unknown.
pub fn detail_line(item: &PlacedItem) -> String {
    let code = item.code.to_uppercase();
    match item.release_date {
        Some(d) => format!("{code} \u{b7} {}", d.format("%b %Y")),
        None => code,
    }
}

// Near-integers print without decimals, anything else with at most three.
fn fmt_mm(v: f64) -> String {
    if (v - v.round()).abs() < 1e-6 {
        format!("{:.0}", v)
    } else {
        format!("{:.3}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
