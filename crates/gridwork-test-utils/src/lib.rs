//! Test fixtures for Gridwork development.
//!
//! Parses the small text formats used throughout the test suites
//! (character grids, `x,y` vertex lists) and provides canned polygons.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod polygons;

use gridwork_core::{GridError, Point};
use gridwork_space::Grid;

/// Parse a block of text into a character grid.
///
/// Leading and trailing blank lines are ignored and each remaining line
/// is trimmed, so fixtures can be written as indented raw strings.
pub fn char_grid(text: &str) -> Result<Grid<char>, GridError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();
    Grid::new(rows)
}

/// Parse a block of decimal digits into a numeric grid.
///
/// Non-digit characters map to `u8::MAX`.
pub fn digit_grid(text: &str) -> Result<Grid<u8>, GridError> {
    Ok(char_grid(text)?.map(|c| c.to_digit(10).map_or(u8::MAX, |d| d as u8)))
}

/// Parse `x,y` lines into points, skipping blank or malformed lines.
pub fn parse_vertices(text: &str) -> Vec<Point> {
    text.lines()
        .filter_map(|line| {
            let (x, y) = line.trim().split_once(',')?;
            Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
        })
        .collect()
}
