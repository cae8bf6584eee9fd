use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use super::dir::Dir;
use crate::basic::Point;
use Dir::*;

/// A cell of the playing grid, column `h`, row `v`
#[derive(Eq, PartialEq, Copy, Clone, Hash)]
pub struct GridPoint {
    pub h: isize,
    pub v: isize,
}

pub type GridDim = GridPoint;

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.h, self.v)
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major order, the same order basic::board indexes cells in
impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.v.cmp(&other.v) {
            Ordering::Equal => self.h.cmp(&other.h),
            ord => ord,
        }
    }
}

impl GridPoint {
    /// Top-left corner of the cell in screen space
    pub fn to_point(self, cell_side: f32) -> Point {
        Point {
            x: self.h as f32 * cell_side,
            y: self.v as f32 * cell_side,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let d = dist as isize;
        let mut new_pos = self;
        match dir {
            U => new_pos.v -= d,
            D => new_pos.v += d,
            L => new_pos.h -= d,
            R => new_pos.h += d,
        }
        new_pos
    }

    // None if the two points are farther than 1 unit apart
    pub fn dir_to_1(self, other: Self) -> Option<Dir> {
        Dir::iter().find(|dir| self.translate(*dir, 1) == other)
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.h).contains(&pos.h) && (0..self.v).contains(&pos.v)
    }
}

#[test]
fn test_translate() {
    let test_moves = [
        ((5, 5), U, 1, (5, 4)),
        ((5, 5), D, 1, (5, 6)),
        ((5, 5), L, 1, (4, 5)),
        ((5, 5), R, 1, (6, 5)),
        ((0, 0), L, 3, (-3, 0)),
        ((2, 7), U, 10, (2, -3)),
    ];

    for &((h, v), dir, dist, (eh, ev)) in &test_moves {
        assert_eq!(
            GridPoint { h, v }.translate(dir, dist),
            GridPoint { h: eh, v: ev }
        );
    }
}

#[test]
fn test_dir_to_1() {
    let origin = GridPoint { h: 3, v: 3 };

    for dir in Dir::iter() {
        assert_eq!(origin.dir_to_1(origin.translate(dir, 1)), Some(dir));
    }

    assert_eq!(origin.dir_to_1(origin), None);
    assert_eq!(origin.dir_to_1(GridPoint { h: 4, v: 4 }), None);
    assert_eq!(origin.dir_to_1(GridPoint { h: 3, v: 5 }), None);
}

#[test]
fn test_contains() {
    let board_dim = GridDim { h: 32, v: 24 };

    assert!(board_dim.contains(GridPoint { h: 0, v: 0 }));
    assert!(board_dim.contains(GridPoint { h: 31, v: 23 }));
    assert!(!board_dim.contains(GridPoint { h: -1, v: 5 }));
    assert!(!board_dim.contains(GridPoint { h: 32, v: 5 }));
    assert!(!board_dim.contains(GridPoint { h: 5, v: -1 }));
    assert!(!board_dim.contains(GridPoint { h: 5, v: 24 }));
}
