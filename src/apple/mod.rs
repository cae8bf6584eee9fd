use rand::Rng;

use crate::basic::board::random_free_cell;
use crate::basic::{GridDim, GridPoint};

/// The apple, a single cell kept disjoint from the snake
pub struct Apple {
    pos: GridPoint,
}

impl Apple {
    pub fn at(pos: GridPoint) -> Self {
        Self { pos }
    }

    /// Place a new apple on a random free cell, `None` if the board is full
    pub fn spawn(
        occupied_cells: &[GridPoint],
        board_dim: GridDim,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        random_free_cell(occupied_cells, board_dim, rng).map(Self::at)
    }

    /// Move the apple to a random cell outside `occupied_cells`. Returns
    /// `false` and leaves the position unchanged when the board has no free
    /// cell left.
    pub fn relocate(
        &mut self,
        occupied_cells: &[GridPoint],
        board_dim: GridDim,
        rng: &mut impl Rng,
    ) -> bool {
        match random_free_cell(occupied_cells, board_dim, rng) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn pos(&self) -> GridPoint {
        self.pos
    }
}

#[test]
fn test_relocate_avoids_occupied_cells() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board_dim = GridDim { h: 6, v: 6 };
    let mut rng = StdRng::seed_from_u64(7);
    let mut apple = Apple::at(GridPoint { h: 0, v: 0 });

    let occupied: Vec<_> = (0..board_dim.h).map(|h| GridPoint { h, v: 2 }).collect();

    for _ in 0..50 {
        assert!(apple.relocate(&occupied, board_dim, &mut rng));
        assert!(!occupied.contains(&apple.pos()));
        assert!(board_dim.contains(apple.pos()));
    }
}

#[test]
fn test_relocate_on_full_board_keeps_position() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board_dim = GridDim { h: 3, v: 2 };
    let mut rng = StdRng::seed_from_u64(7);

    let mut occupied: Vec<_> = (0..board_dim.v)
        .flat_map(|v| (0..board_dim.h).map(move |h| GridPoint { h, v }))
        .collect();
    occupied.sort_unstable();

    let mut apple = Apple::at(GridPoint { h: 1, v: 1 });
    assert!(!apple.relocate(&occupied, board_dim, &mut rng));
    assert_eq!(apple.pos(), GridPoint { h: 1, v: 1 });
}
