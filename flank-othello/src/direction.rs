//! The eight flanking-scan directions.

/// A unit step on the board as `(d_row, d_col)`.
pub type Direction = (i8, i8);

/// Every direction a capture can run in: the four diagonals, the two
/// verticals and the two horizontals. All eight must be scanned every time.
pub const DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
