use static_assertions::const_assert;

use crate::basic::{GridDim, Point};

pub use game::Game;
pub use palette::Palette;

pub mod control;
mod game;
pub mod game_context;
mod palette;

/// Window size in pixels
pub const WINDOW_DIM: Point = Point { x: 640., y: 480. };

/// Pixel side length of one grid cell
pub const CELL_SIDE: f32 = 20.;

/// Size of the playing grid in cells, fixed for the lifetime of the process
pub const GRID_DIM: GridDim = GridDim {
    h: (WINDOW_DIM.x / CELL_SIDE) as isize,
    v: (WINDOW_DIM.y / CELL_SIDE) as isize,
};

const_assert!(GRID_DIM.h > 0);
const_assert!(GRID_DIM.v > 0);
