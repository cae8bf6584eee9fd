use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{GridDim, GridPoint};
use crate::snake::Snake;

/// The cells covered by the snake, in row-major order without duplicates
pub fn occupied_cells(snake: &Snake) -> Vec<GridPoint> {
    let mut occupied_cells: Vec<_> = snake.cells().collect();
    occupied_cells.sort_unstable();
    occupied_cells.dedup();
    occupied_cells
}

/// Draw a uniformly random cell that isn't in `occupied_cells`, `None` if
/// the board is completely covered. `occupied_cells` must be sorted.
///
/// The free cells are indexed directly so a single draw always suffices,
/// regardless of how full the board is.
pub fn random_free_cell(
    occupied_cells: &[GridPoint],
    board_dim: GridDim,
    rng: &mut impl Rng,
) -> Option<GridPoint> {
    let num_cells = (board_dim.h * board_dim.v) as usize;
    let free_cells = num_cells - occupied_cells.len();
    if free_cells == 0 {
        return None;
    }

    let mut new_idx = (0..free_cells).sample_single(rng);
    for GridPoint { h, v } in occupied_cells {
        let idx = (v * board_dim.h + h) as usize;
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < num_cells);
    Some(GridPoint {
        h: new_idx as isize % board_dim.h,
        v: new_idx as isize / board_dim.h,
    })
}

#[test]
fn test_random_free_cell_avoids_occupied() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board_dim = GridDim { h: 4, v: 3 };
    let mut rng = StdRng::seed_from_u64(7);

    // all cells except <2, 1> are occupied
    let mut occupied: Vec<_> = (0..board_dim.v)
        .flat_map(|v| (0..board_dim.h).map(move |h| GridPoint { h, v }))
        .filter(|cell| *cell != GridPoint { h: 2, v: 1 })
        .collect();
    occupied.sort_unstable();

    for _ in 0..20 {
        let free = random_free_cell(&occupied, board_dim, &mut rng);
        assert_eq!(free, Some(GridPoint { h: 2, v: 1 }));
    }
}

#[test]
fn test_random_free_cell_on_full_board() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board_dim = GridDim { h: 3, v: 3 };
    let mut rng = StdRng::seed_from_u64(7);

    let mut occupied: Vec<_> = (0..board_dim.v)
        .flat_map(|v| (0..board_dim.h).map(move |h| GridPoint { h, v }))
        .collect();
    occupied.sort_unstable();

    assert_eq!(random_free_cell(&occupied, board_dim, &mut rng), None);
}

#[test]
fn test_random_free_cell_is_in_bounds() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board_dim = GridDim { h: 5, v: 4 };
    let mut rng = StdRng::seed_from_u64(7);

    let occupied = [
        GridPoint { h: 0, v: 0 },
        GridPoint { h: 4, v: 0 },
        GridPoint { h: 2, v: 2 },
        GridPoint { h: 4, v: 3 },
    ];

    for _ in 0..100 {
        let free = random_free_cell(&occupied, board_dim, &mut rng).unwrap();
        assert!(board_dim.contains(free), "{:?} out of bounds", free);
        assert!(!occupied.contains(&free), "{:?} is occupied", free);
    }
}
