#[macro_use]
extern crate derive_more;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::app::{Game, Palette, WINDOW_DIM};
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod apple;
mod basic;
mod error;
mod rendering;
mod snake;

/// Game updates per second
const DEFAULT_FPS: f64 = 10.;

fn main() -> Result {
    let wm = WindowMode::default().dimensions(WINDOW_DIM.x, WINDOW_DIM.y);

    let ws = WindowSetup::default().title("Snake").vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "grid_snake")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    let game = Game::new(DEFAULT_FPS, Palette::dark());
    event::run(ctx, event_loop, game)
}
