use std::f64::consts::{FRAC_PI_2, TAU};

use crate::models::SummaryItem;

pub const PIE_CENTER: f64 = 100.0;
pub const PIE_RADIUS: f64 = 90.0;

const PALETTE: [&str; 8] = [
    "#173E63", "#1D617A", "#3B82F6", "#F59E0B", "#10B981", "#EF4444", "#8B5CF6", "#64748B",
];

#[derive(Clone, Debug, PartialEq)]
pub enum SliceShape {
    /// The only non-empty slice; drawn as a circle since an arc can't close on itself.
    Full,
    Arc(String),
    /// Zero or negative totals take no area.
    Hidden,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub category: String,
    pub total: f64,
    pub percent: i64,
    pub color: &'static str,
    pub shape: SliceShape,
}

pub fn grand_total(items: &[SummaryItem]) -> f64 {
    items.iter().map(|item| item.total).sum()
}

/// `Math.round(total / grand_total * 100)`; ties round towards +∞ like the
/// browser does. Percentages are rounded independently and need not sum to 100.
pub fn percentage(total: f64, grand_total: f64) -> i64 {
    if grand_total == 0.0 || !grand_total.is_finite() {
        return 0;
    }
    (total / grand_total * 100.0 + 0.5).floor() as i64
}

pub fn slice_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn layout_slices(items: &[SummaryItem]) -> Vec<Slice> {
    let grand = grand_total(items);
    let drawable: f64 = items.iter().map(|i| i.total).filter(|t| *t > 0.0).sum();
    let visible = items.iter().filter(|i| i.total > 0.0).count();

    let mut angle = -FRAC_PI_2;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let shape = if item.total <= 0.0 || drawable <= 0.0 {
                SliceShape::Hidden
            } else if visible == 1 {
                SliceShape::Full
            } else {
                let sweep = item.total / drawable * TAU;
                let path = arc_path(angle, angle + sweep);
                angle += sweep;
                SliceShape::Arc(path)
            };
            Slice {
                index,
                category: item.category.clone(),
                total: item.total,
                percent: percentage(item.total, grand),
                color: slice_color(index),
                shape,
            }
        })
        .collect()
}

fn arc_path(start: f64, end: f64) -> String {
    let (x0, y0) = point_at(start);
    let (x1, y1) = point_at(end);
    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "M {c:.3} {c:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z",
        c = PIE_CENTER,
        r = PIE_RADIUS,
    )
}

fn point_at(angle: f64) -> (f64, f64) {
    (
        PIE_CENTER + PIE_RADIUS * angle.cos(),
        PIE_CENTER + PIE_RADIUS * angle.sin(),
    )
}

/// Keeps a slice selection only while it still points at data.
pub fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    selected.filter(|index| *index < len)
}

/// Clicking the selected slice again clears the selection.
pub fn toggle_selection(selected: Option<usize>, clicked: usize) -> Option<usize> {
    if selected == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}
