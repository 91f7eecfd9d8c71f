//! Default grid placement for slices without a stored position.

use std::collections::BTreeMap;

use super::payload::RawSlice;
use crate::config::LayoutConfig;
use crate::dashboard::{LayoutItem, Position, SliceId};

/// Position of the `index`-th slice when none is stored.
///
/// `col = (index * width + 1) mod columns`, `row = (index / per_row) * height`.
/// Zero dimensions fall back to their defaults; rows past `u32::MAX` saturate.
pub fn default_position(index: usize, slice_id: SliceId, layout: &LayoutConfig) -> Position {
    let layout = layout.sanitized();
    let i = u64::try_from(index).unwrap_or(u64::MAX);
    let col = i
        .saturating_mul(u64::from(layout.width))
        .saturating_add(1)
        % u64::from(layout.columns);
    let row = (i / u64::from(layout.per_row)).saturating_mul(u64::from(layout.height));
    Position {
        slice_id,
        col: u32::try_from(col).unwrap_or(u32::MAX),
        row: u32::try_from(row).unwrap_or(u32::MAX),
        size_x: layout.width,
        size_y: layout.height,
    }
}

/// Layout items for `slices` in order, plus the position used for each.
/// Stored positions always override the default.
pub fn compute_layout(
    slices: &[RawSlice],
    stored: &[Position],
    layout: &LayoutConfig,
) -> (Vec<LayoutItem>, BTreeMap<SliceId, Position>) {
    let stored: BTreeMap<SliceId, &Position> = stored.iter().map(|p| (p.slice_id, p)).collect();

    let min_width = layout.sanitized().min_width;
    let mut items = Vec::with_capacity(slices.len());
    let mut positions = BTreeMap::new();
    for (index, slice) in slices.iter().enumerate() {
        let position = match stored.get(&slice.slice_id) {
            Some(p) => (*p).clone(),
            None => default_position(index, slice.slice_id, layout),
        };
        items.push(LayoutItem {
            i: slice.slice_id.to_string(),
            x: position.col.saturating_sub(1),
            y: position.row,
            w: position.size_x,
            h: position.size_y,
            min_w: min_width,
        });
        positions.insert(slice.slice_id, position);
    }

    (items, positions)
}
