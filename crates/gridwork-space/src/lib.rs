//! Bounded 2D grids for Gridwork.
//!
//! This crate defines [`Grid`], a dense, bounds-checked, mutable 2D
//! container, together with the algorithms that operate on it:
//!
//! - point access and equality-based search ([`Grid::find_items`])
//! - 4-connected region growing ([`Grid::find_connected_region`])
//! - perimeter extraction for arbitrary point sets
//!   ([`Grid::calculate_region_perimeter`])
//! - clamped rectangle queries ([`Grid::get_area`], [`Grid::all_in_area`])
//! - enclosed-region classification and fill
//!   ([`Grid::fill_enclosed_regions`])
//!
//! The multi-source boundary flood fill behind the last of these lives in
//! [`flood`] so that other crates can run it over their own masks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod flood;
pub mod grid;
mod rect;
mod region;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::Grid;
