//! List components for the `windower` crate.
//!
//! The `windower` crate is pure math. This crate provides the stateful and
//! presentational halves of a virtual list, still framework-neutral (nothing
//! here draws; everything produces data describing what to draw):
//!
//! - [`Viewport`]: owns the scroll offset, drives the windowing engine on
//!   every scroll event, and maps the resulting window to absolutely
//!   positioned rows through a caller-supplied render callback.
//! - [`Header`]: a static row of column titles composed above the viewport.
//!
//! The two are independent: neither holds state or layout belonging to the
//! other, and composing them is nothing more than rendering one above the
//! other (see `examples/tickets.rs`).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod header;
mod row;
mod viewport;

#[cfg(test)]
mod tests;

pub use header::{Header, HeaderCell};
pub use row::{Row, RowKey};
pub use viewport::{RenderedList, RenderedRow, Viewport};
