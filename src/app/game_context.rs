use crate::app::Palette;
use crate::basic::GridDim;

/// Read-only context shared between the game loop and rendering
pub struct GameContext {
    pub board_dim: GridDim,
    pub cell_side: f32,
    pub palette: Palette,
}
