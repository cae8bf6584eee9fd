use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::{Context, GameResult};

use crate::app::game_context::GameContext;
use crate::basic::Point;
use crate::rendering::CellShape;

/// One grid-aligned filled square plus a border outline per occupied cell
pub fn shape_mesh(
    shape: &impl CellShape,
    gtx: &GameContext,
    ctx: &mut Context,
) -> GameResult<Mesh> {
    let mut builder = MeshBuilder::new();

    let fill_color = shape.fill_color(&gtx.palette);
    for cell in shape.cells() {
        let Point { x, y } = cell.to_point(gtx.cell_side);
        let rect = Rect::new(x, y, gtx.cell_side, gtx.cell_side);
        builder.rectangle(DrawMode::fill(), rect, fill_color)?;
        builder.rectangle(
            DrawMode::stroke(gtx.palette.border_thickness),
            rect,
            gtx.palette.border_color,
        )?;
    }

    builder.build(ctx)
}
