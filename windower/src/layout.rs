use alloc::vec::Vec;
use core::cmp;

use crate::{Align, LayoutError, RowSlot, Window};

/// Fixed-row list geometry.
///
/// A `Layout` pairs a row height with a viewport capacity (the number of
/// whole rows the visible scroll region holds) and answers every windowing
/// question as pure arithmetic: no interior state, no measurement, identical
/// inputs always produce identical outputs.
///
/// Both values are validated once at construction; see [`LayoutError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    row_height: u32,
    viewport_rows: usize,
}

impl Layout {
    pub fn new(row_height: u32, viewport_rows: usize) -> Result<Self, LayoutError> {
        if row_height == 0 {
            return Err(LayoutError::ZeroRowHeight);
        }
        if viewport_rows == 0 {
            return Err(LayoutError::ZeroViewportRows);
        }
        wdebug!(row_height, viewport_rows, "Layout::new");
        Ok(Self {
            row_height,
            viewport_rows,
        })
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Fixed pixel height of the scroll region: `viewport_rows * row_height`.
    pub fn viewport_extent(&self) -> u64 {
        self.viewport_rows as u64 * self.row_height as u64
    }

    /// Height the dataset would occupy with every row laid out.
    pub fn total_extent(&self, count: usize) -> u64 {
        count as u64 * self.row_height as u64
    }

    /// Top edge of the row at `index`.
    pub fn row_top(&self, index: usize) -> u64 {
        index as u64 * self.row_height as u64
    }

    /// Maps an offset in the scroll axis to the row containing it.
    ///
    /// Returns `None` when the dataset is empty; offsets past the end clamp
    /// to the last row.
    pub fn index_at_offset(&self, offset: u64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let index = cmp::min(offset / u64::from(self.row_height), count as u64 - 1);
        Some(index as usize)
    }

    /// The largest offset that still keeps a full viewport of content.
    pub fn max_scroll_offset(&self, count: usize) -> u64 {
        self.total_extent(count).saturating_sub(self.viewport_extent())
    }

    pub fn clamp_scroll_offset(&self, offset: u64, count: usize) -> u64 {
        offset.min(self.max_scroll_offset(count))
    }

    /// Computes the render window for a scroll offset.
    ///
    /// The window runs from the first row intersecting the offset through the
    /// viewport capacity plus one extra trailing row, so a partially scrolled
    /// row at the bottom edge is never left unrendered. Offsets past the end
    /// of the dataset clamp to an empty window at `count` rather than an
    /// out-of-range slice.
    pub fn window(&self, scroll_offset: u64, count: usize) -> Window {
        let start = cmp::min(scroll_offset / u64::from(self.row_height), count as u64) as usize;
        let end = cmp::min(
            start.saturating_add(self.viewport_rows).saturating_add(1),
            count,
        );
        Window {
            start_index: start,
            end_index: end,
            total_extent: self.total_extent(count),
        }
    }

    /// Emits a [`RowSlot`] for every row in the window at `scroll_offset`.
    pub fn for_each_slot(&self, scroll_offset: u64, count: usize, mut f: impl FnMut(RowSlot)) {
        let window = self.window(scroll_offset, count);
        for index in window.start_index..window.end_index {
            f(RowSlot {
                index,
                top: self.row_top(index),
                height: self.row_height,
            });
        }
    }

    /// Collects slots into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_slot`]. For
    /// maximum performance, prefer `for_each_slot` and reuse a scratch buffer
    /// in your adapter.
    pub fn collect_slots(&self, scroll_offset: u64, count: usize, out: &mut Vec<RowSlot>) {
        out.clear();
        self.for_each_slot(scroll_offset, count, |slot| out.push(slot));
    }

    /// Computes the (clamped) scroll offset that brings `index` into view.
    ///
    /// `current_offset` is only consulted for [`Align::Auto`], which keeps the
    /// offset unchanged when the row is already fully visible and otherwise
    /// scrolls the minimal distance.
    pub fn scroll_to_offset(
        &self,
        index: usize,
        align: Align,
        count: usize,
        current_offset: u64,
    ) -> u64 {
        if count == 0 {
            return 0;
        }
        let index = index.min(count - 1);
        let top = self.row_top(index);
        let bottom = top.saturating_add(self.row_height as u64);
        let view = self.viewport_extent();
        wtrace!(index, count, current_offset, "scroll_to_offset");

        let target = match align {
            Align::Start => top,
            Align::End => bottom.saturating_sub(view),
            Align::Center => {
                let center = top.saturating_add(self.row_height as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let current_end = current_offset.saturating_add(view);
                if top >= current_offset && bottom <= current_end {
                    current_offset
                } else if top < current_offset {
                    top
                } else {
                    bottom.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target, count)
    }
}
