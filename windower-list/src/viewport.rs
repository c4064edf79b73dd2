use alloc::vec::Vec;

use windower::{Align, Layout, LayoutError, RowSlot, Window};

use crate::Row;

/// A scrollable viewport over a fixed-row dataset.
///
/// The viewport is the only owner of the scroll offset: scroll events arrive
/// through [`Self::on_scroll`], the window is rederived from the offset on
/// every read, and each rendered row is positioned at the coordinates it
/// would occupy if the whole dataset were laid out in normal flow. Dataset
/// and geometry are fixed for the life of the instance; changing either means
/// constructing a new viewport (which also resets the offset to 0).
///
/// `S` is an opaque styling hook carried through to the render list. The
/// viewport never interprets it, and never inspects row payloads; the render
/// callback passed to [`Self::render_with`] is the sole place presentation
/// enters.
#[derive(Clone, Debug)]
pub struct Viewport<R, S = ()> {
    layout: Layout,
    rows: Vec<R>,
    style: Option<S>,
    row_style: Option<S>,
    scroll_offset: u64,
}

impl<R, S> Viewport<R, S> {
    /// Creates a viewport showing `visible_rows` whole rows of `row_height`
    /// pixels each.
    ///
    /// Zero geometry is rejected here so malformed configuration surfaces at
    /// mount, never during scrolling.
    pub fn new(row_height: u32, visible_rows: usize, rows: Vec<R>) -> Result<Self, LayoutError> {
        let layout = Layout::new(row_height, visible_rows)?;
        ldebug!(row_height, visible_rows, rows = rows.len(), "Viewport::new");
        Ok(Self {
            layout,
            rows,
            style: None,
            row_style: None,
            scroll_offset: 0,
        })
    }

    pub fn with_style(mut self, style: S) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_row_style(mut self, row_style: S) -> Self {
        self.row_style = Some(row_style);
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Recovers the dataset, consuming the viewport (reconfiguration path).
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Fixed pixel height of the scroll region.
    pub fn viewport_extent(&self) -> u64 {
        self.layout.viewport_extent()
    }

    /// Height of the spacer standing in for the full dataset.
    pub fn total_extent(&self) -> u64 {
        self.layout.total_extent(self.rows.len())
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.layout.max_scroll_offset(self.rows.len())
    }

    /// Applies a scroll position change.
    ///
    /// The offset is clamped to [`Self::max_scroll_offset`] and the window is
    /// rederived on the next read, synchronously with respect to the event:
    /// no debouncing, no asynchronous transitions, no stale window between
    /// event and recompute. Returns the stored (clamped) offset.
    pub fn on_scroll(&mut self, offset: u64) -> u64 {
        let clamped = self.layout.clamp_scroll_offset(offset, self.rows.len());
        ltrace!(offset, clamped, "on_scroll");
        self.scroll_offset = clamped;
        clamped
    }

    /// Scrolls so the row at `index` satisfies `align`.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_row(&mut self, index: usize, align: Align) -> u64 {
        let target =
            self.layout
                .scroll_to_offset(index, align, self.rows.len(), self.scroll_offset);
        ltrace!(index, target, "scroll_to_row");
        self.scroll_offset = target;
        target
    }

    /// The render window for the current scroll offset.
    pub fn window(&self) -> Window {
        self.layout.window(self.scroll_offset, self.rows.len())
    }

    /// Calls `f` with each windowed record and the pixel slot it occupies.
    ///
    /// Zero-allocation path for adapters that draw in place; see
    /// [`Self::render_with`] for the materialized form.
    pub fn for_each_visible(&self, mut f: impl FnMut(&R, RowSlot)) {
        self.layout
            .for_each_slot(self.scroll_offset, self.rows.len(), |slot| {
                f(&self.rows[slot.index], slot);
            });
    }
}

impl<R: Row, S: Clone> Viewport<R, S> {
    /// Materializes the current window as a render list.
    ///
    /// `render_row` receives each windowed record with its dataset index and
    /// produces the row content. An empty dataset renders an empty spacer
    /// with zero rows.
    pub fn render_with<C>(
        &self,
        mut render_row: impl FnMut(&R, usize) -> C,
    ) -> RenderedList<R::Key, C, S> {
        let window = self.window();
        let mut rows = Vec::with_capacity(window.len());
        self.for_each_visible(|record, slot| {
            rows.push(RenderedRow {
                key: record.key(),
                index: slot.index,
                top: slot.top,
                height: slot.height,
                style: self.row_style.clone(),
                content: render_row(record, slot.index),
            });
        });
        RenderedList {
            viewport_extent: self.viewport_extent(),
            spacer_extent: window.total_extent,
            style: self.style.clone(),
            rows,
        }
    }
}

/// The materialized output of [`Viewport::render_with`].
///
/// `viewport_extent` is the fixed height of the outer scroll region;
/// `spacer_extent` is the height of the inner spacer, which keeps the native
/// scrollbar's thumb size and travel proportional to the full dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedList<K, C, S = ()> {
    pub viewport_extent: u64,
    pub spacer_extent: u64,
    pub style: Option<S>,
    pub rows: Vec<RenderedRow<K, C, S>>,
}

/// One absolutely positioned row: `top = index * row_height` inside the
/// spacer, content produced by the render callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow<K, C, S = ()> {
    pub key: K,
    pub index: usize,
    pub top: u64,
    pub height: u32,
    pub style: Option<S>,
    pub content: C,
}
