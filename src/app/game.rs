use ggez::event::{self, EventHandler, KeyCode, KeyMods};
use ggez::graphics::{self, DrawParam};
use ggez::{Context, GameResult};
use rand::prelude::*;

use crate::app::control::{Cause, Control, State};
use crate::app::game_context::GameContext;
use crate::app::{Palette, CELL_SIDE, GRID_DIM, WINDOW_DIM};
use crate::apple::Apple;
use crate::basic::{board, Dir, GridPoint, Point};
use crate::rendering;
use crate::snake::Snake;

pub struct Game {
    control: Control,
    gtx: GameContext,

    /// Offset to center the grid in the window
    offset: Point,

    snake: Snake,
    apple: Apple,

    rng: ThreadRng,
}

impl Game {
    pub fn new(fps: f64, palette: Palette) -> Self {
        let gtx = GameContext {
            board_dim: GRID_DIM,
            cell_side: CELL_SIDE,
            palette,
        };

        let board_px = Point {
            x: gtx.board_dim.h as f32 * gtx.cell_side,
            y: gtx.board_dim.v as f32 * gtx.cell_side,
        };
        let offset = (WINDOW_DIM - board_px) / 2.;

        let start = GridPoint {
            h: gtx.board_dim.h / 2,
            v: gtx.board_dim.v / 2,
        };
        let snake = Snake::new(start, Dir::R);

        let mut rng = thread_rng();
        let apple = Apple::spawn(&board::occupied_cells(&snake), gtx.board_dim, &mut rng)
            .expect("no free cell for the first apple");

        Self {
            control: Control::new(fps),
            gtx,
            offset,
            snake,
            apple,
            rng,
        }
    }

    /// One tick of the simulation: commit the buffered direction, move the
    /// head one cell, detect wall and tail collisions, handle eating
    fn advance_snake(&mut self) {
        let candidate = self.snake.advance();

        // checked before the candidate is committed, a snake that hits the
        // wall keeps the body it had before the tick
        if !self.gtx.board_dim.contains(candidate) {
            self.game_over(Cause::HitWall);
            return;
        }

        let eaten = candidate == self.apple.pos();
        if eaten {
            self.snake.mark_growth();
        }

        self.snake.commit(candidate);

        if self.snake.self_collides() {
            self.game_over(Cause::HitTail);
            return;
        }

        if eaten {
            let occupied_cells = board::occupied_cells(&self.snake);
            if !self
                .apple
                .relocate(&occupied_cells, self.gtx.board_dim, &mut self.rng)
            {
                self.game_over(Cause::BoardFull);
            }
        }
    }

    fn game_over(&mut self, cause: Cause) {
        self.control.game_over(cause);
        println!("Game over: {}", cause);
    }
}

impl EventHandler<ggez::GameError> for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while self.control.can_update() {
            self.advance_snake();
        }

        // both loss states are terminal, the window closes with the session
        if let State::GameOver(_) = self.control.state() {
            event::quit(ctx);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, self.gtx.palette.background_color);

        let snake_mesh = rendering::shape_mesh(&self.snake, &self.gtx, ctx)?;
        let apple_mesh = rendering::shape_mesh(&self.apple, &self.gtx, ctx)?;

        let draw_param = DrawParam::default().dest(self.offset);
        graphics::draw(ctx, &snake_mesh, draw_param)?;
        graphics::draw(ctx, &apple_mesh, draw_param)?;

        graphics::present(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, key: KeyCode, _mods: KeyMods, _repeat: bool) {
        use KeyCode::*;

        let dir = match key {
            Up => Dir::U,
            Down => Dir::D,
            Left => Dir::L,
            Right => Dir::R,
            Escape => {
                event::quit(ctx);
                return;
            }
            _ => return,
        };

        // key events are drained as they arrive, within one tick the last
        // applicable one wins
        if self.control.state() == State::Playing {
            self.snake.set_pending_dir(dir);
        }
    }
}

#[cfg(test)]
fn gp(h: isize, v: isize) -> GridPoint {
    GridPoint { h, v }
}

#[test]
fn test_first_tick_from_center() {
    let mut game = Game::new(10., Palette::dark());
    game.apple = Apple::at(gp(0, 0));

    assert_eq!(game.snake.head(), gp(16, 12));
    game.advance_snake();

    assert_eq!(game.control.state(), State::Playing);
    assert_eq!(game.snake.head(), gp(17, 12));
    assert_eq!(game.snake.len(), 1);
}

#[test]
fn test_wall_collision_leaves_body_unchanged() {
    let mut game = Game::new(10., Palette::dark());
    game.snake = Snake::from_cells([gp(0, 5)], Dir::L);
    game.apple = Apple::at(gp(9, 9));

    game.advance_snake();

    assert_eq!(game.control.state(), State::GameOver(Cause::HitWall));
    assert_eq!(game.snake.cells().collect::<Vec<_>>(), vec![gp(0, 5)]);
}

#[test]
fn test_eating_grows_and_relocates_the_apple() {
    let mut game = Game::new(10., Palette::dark());
    game.snake = Snake::from_cells([gp(5, 5), gp(4, 5), gp(3, 5)], Dir::R);
    game.apple = Apple::at(gp(6, 5));

    game.advance_snake();

    assert_eq!(game.control.state(), State::Playing);
    assert_eq!(
        game.snake.cells().collect::<Vec<_>>(),
        vec![gp(6, 5), gp(5, 5), gp(4, 5), gp(3, 5)]
    );
    assert!(game.snake.cells().all(|cell| cell != game.apple.pos()));
}

#[test]
fn test_tail_collision() {
    let mut game = Game::new(10., Palette::dark());
    game.snake = Snake::from_cells(
        [gp(5, 5), gp(5, 6), gp(6, 6), gp(6, 5), gp(7, 5)],
        Dir::R,
    );
    game.apple = Apple::at(gp(9, 9));

    game.advance_snake();

    assert_eq!(game.control.state(), State::GameOver(Cause::HitTail));
}

#[test]
fn test_length_changes_by_at_most_one_per_tick() {
    let mut game = Game::new(10., Palette::dark());
    game.apple = Apple::at(gp(20, 12));

    // run straight into the apple and then up to the wall
    for _ in 0..10 {
        let len_before = game.snake.len();
        game.advance_snake();
        let len_after = game.snake.len();
        assert!(len_after == len_before || len_after == len_before + 1);

        if let State::GameOver(cause) = game.control.state() {
            assert_eq!(cause, Cause::HitWall);
            break;
        }
    }
}
