use ggez::graphics::Color;

use crate::app::Palette;
use crate::apple::Apple;
use crate::basic::GridPoint;
use crate::snake::Snake;

pub use shape_mesh::shape_mesh;

mod shape_mesh;

/// Anything drawn on the grid: a set of occupied cells and a fill color
pub trait CellShape {
    fn cells(&self) -> Vec<GridPoint>;
    fn fill_color(&self, palette: &Palette) -> Color;
}

impl CellShape for Snake {
    fn cells(&self) -> Vec<GridPoint> {
        Snake::cells(self).collect()
    }

    fn fill_color(&self, palette: &Palette) -> Color {
        palette.snake_color
    }
}

impl CellShape for Apple {
    fn cells(&self) -> Vec<GridPoint> {
        vec![self.pos()]
    }

    fn fill_color(&self, palette: &Palette) -> Color {
        palette.apple_color
    }
}
