use crate::dashboard::catalog::Footprint;
use crate::dashboard::model::LayoutItem;

/// Rows inspected before giving up and stacking below everything.
pub const MAX_ROWS_SCANNED: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

/// First collision-free cell for `footprint`, scanning row-major over the
/// first [`MAX_ROWS_SCANNED`] rows.
pub fn find_slot(existing: &[LayoutItem], footprint: Footprint, grid_width: u32) -> GridPos {
    find_slot_within(existing, footprint, grid_width, MAX_ROWS_SCANNED)
}

/// Like [`find_slot`] with an explicit scan bound. When nothing fits the
/// result sits at column 0 below every existing item and never above
/// `max_rows`.
pub fn find_slot_within(
    existing: &[LayoutItem],
    footprint: Footprint,
    grid_width: u32,
    max_rows: u32,
) -> GridPos {
    let w = footprint.w.max(1);
    let h = footprint.h.max(1);
    if w <= grid_width {
        for y in 0..max_rows {
            for x in 0..=grid_width - w {
                if !existing.iter().any(|item| item.collides_with(x, y, w, h)) {
                    return GridPos { x, y };
                }
            }
        }
    }
    let lowest = existing.iter().map(LayoutItem::bottom).max().unwrap_or(0);
    GridPos {
        x: 0,
        y: max_rows.max(lowest),
    }
}
