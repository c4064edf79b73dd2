#[cfg(feature = "std")]
pub trait RowKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> RowKey for T {}

#[cfg(not(feature = "std"))]
pub trait RowKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> RowKey for T {}

/// A dataset record with a stable unique key.
///
/// The key exists only to keep render-list identity stable across re-renders;
/// vertical position comes from the dataset index alone, and the windowing
/// math never inspects it. Duplicate keys are a caller data-quality issue:
/// the render list carries the duplicates as-is (which of them a consumer
/// treats as "the same row" is unspecified, nothing crashes).
pub trait Row {
    type Key: RowKey;

    fn key(&self) -> Self::Key;
}
