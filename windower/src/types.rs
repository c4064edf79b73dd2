/// Alignment for programmatic scroll targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// The contiguous slice of the dataset that must be materialized for a scroll
/// offset, plus the full extent the dataset would occupy if laid out in
/// normal flow.
///
/// Derived on every query, never stored: `start_index <= end_index <= count`
/// holds for all inputs, and `total_extent` does not depend on the offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    /// Height of the spacer that stands in for the full dataset; drives the
    /// native scrollbar's thumb size and travel.
    pub total_extent: u64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    /// Number of rows to materialize.
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// The pixel rectangle a windowed row occupies in the scrollable area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSlot {
    pub index: usize,
    /// Top edge in the scroll axis, same coordinate the row would have in
    /// normal flow.
    pub top: u64,
    pub height: u32,
}

impl RowSlot {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}
