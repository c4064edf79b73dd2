/// Rejected list geometry.
///
/// Construction is the only place configuration can fail: once a
/// [`Layout`](crate::Layout) exists, every windowing query is total and the
/// engine can run on every scroll tick without a failure path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("row height must be greater than zero")]
    ZeroRowHeight,
    #[error("viewport must hold at least one full row")]
    ZeroViewportRows,
}
