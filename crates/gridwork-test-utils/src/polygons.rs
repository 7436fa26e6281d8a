//! Canned rectilinear polygons.

use gridwork_core::Point;

fn path(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Axis-aligned square with corners `(0, 0)` and `(side, side)`.
pub fn square(side: i64) -> Vec<Point> {
    path(&[(0, 0), (side, 0), (side, side), (0, side)])
}

/// 7x7 square with the 3x3 corner block beyond `(4, 4)` removed.
pub fn l_shape() -> Vec<Point> {
    path(&[(0, 0), (6, 0), (6, 3), (3, 3), (3, 6), (0, 6)])
}

/// 9x7 "U" with a 3x3 notch open towards high `y`.
pub fn u_shape() -> Vec<Point> {
    path(&[(0, 0), (8, 0), (8, 6), (6, 6), (6, 3), (2, 3), (2, 6), (0, 6)])
}

/// The eight-vertex red-tile loop from the 2025 day 9 puzzle example.
///
/// Largest raw rectangle between two vertices: 50. Largest fully filled
/// one: 24.
pub fn tile_loop() -> Vec<Point> {
    path(&[
        (7, 1),
        (11, 1),
        (11, 7),
        (9, 7),
        (9, 5),
        (2, 5),
        (2, 3),
        (7, 3),
    ])
}

/// Shift every vertex by `offset`.
pub fn translate(vertices: &[Point], offset: Point) -> Vec<Point> {
    vertices.iter().map(|&v| v + offset).collect()
}

/// Multiply every coordinate by `factor`.
pub fn scale(vertices: &[Point], factor: i64) -> Vec<Point> {
    vertices
        .iter()
        .map(|v| Point::new(v.x * factor, v.y * factor))
        .collect()
}
