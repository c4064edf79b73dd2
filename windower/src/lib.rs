//! A headless windowing engine for fixed-row-height lists.
//!
//! For the scrollable viewport and header components, see the `windower-list` crate.
//!
//! This crate focuses on the core math needed to scroll massive uniform lists at
//! interactive frame rates: given a scroll offset, a row height, and a viewport
//! capacity, [`Layout`] computes which contiguous slice of the dataset must be
//! materialized, at which pixel offsets, and how tall the scrollable area must
//! pretend to be so native scrollbars keep correct proportions.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the scroll offset (wheel/drag/programmatic)
//! - the dataset length
//! - per-row rendering (the engine never sees row payloads)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod layout;
mod types;


pub use error::LayoutError;
pub use layout::Layout;
pub use types::{Align, RowSlot, Window};
