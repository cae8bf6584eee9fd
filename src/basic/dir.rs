use std::ops::Neg;

use Dir::*;

/// The four cardinal directions on the grid
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }
}

#[test]
fn test_opposites() {
    let test_neg = [(U, D), (D, U), (L, R), (R, L)];

    for &(dir, opposite) in &test_neg {
        assert_eq!(-dir, opposite);
        assert_eq!(-(-dir), dir);
    }
}
