use std::collections::VecDeque;

use itertools::Itertools;

use crate::basic::{Dir, GridPoint};

/// The snake, an ordered sequence of grid cells with the head at the front
pub struct Snake {
    cells: VecDeque<GridPoint>,

    /// Direction the snake is currently going
    dir: Dir,

    /// Buffered direction change, applied by the next `advance`. Key events
    /// within one tick overwrite each other, only the latest one counts.
    pending_dir: Option<Dir>,

    /// Whether the next `commit` lengthens the snake instead of moving it
    grow: bool,
}

impl Snake {
    pub fn new(pos: GridPoint, dir: Dir) -> Self {
        Self::from_cells([pos], dir)
    }

    pub fn from_cells(cells: impl IntoIterator<Item = GridPoint>, dir: Dir) -> Self {
        let cells: VecDeque<_> = cells.into_iter().collect();
        assert!(!cells.is_empty(), "snake without cells");
        Self {
            cells,
            dir,
            pending_dir: None,
            grow: false,
        }
    }

    pub fn head(&self) -> GridPoint {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.cells.iter().copied()
    }

    /// Buffer a direction change for the next `advance`. A request to
    /// reverse into the snake's own neck is ignored.
    pub fn set_pending_dir(&mut self, dir: Dir) {
        if dir != -self.dir {
            self.pending_dir = Some(dir);
        }
    }

    /// Commit the buffered direction and return the cell the head would move
    /// into. The cell sequence is left untouched so the caller can check the
    /// candidate against the board bounds before `commit`.
    pub fn advance(&mut self) -> GridPoint {
        if let Some(dir) = self.pending_dir.take() {
            self.dir = dir;
        }
        self.head().translate(self.dir, 1)
    }

    /// Insert `new_head` at the front, dropping the tail cell unless growth
    /// is pending. The only mutator of the cell sequence.
    pub fn commit(&mut self, new_head: GridPoint) {
        self.cells.push_front(new_head);
        if self.grow {
            self.grow = false;
        } else {
            self.cells.pop_back();
        }

        debug_assert!(
            self.cells
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.dir_to_1(*b).is_some()),
            "snake body is not contiguous: {:?}",
            self.cells
        );
    }

    /// Idempotent until the next `commit` consumes the flag
    pub fn mark_growth(&mut self) {
        self.grow = true;
    }

    /// Whether the head overlaps any other cell, checked on the
    /// post-`commit` sequence
    pub fn self_collides(&self) -> bool {
        let head = self.head();
        self.cells.iter().skip(1).any(|&cell| cell == head)
    }
}

#[cfg(test)]
fn gp(h: isize, v: isize) -> GridPoint {
    GridPoint { h, v }
}

#[test]
fn test_advance_moves_one_cell() {
    // length-1 snake at the center of a 32x24 board
    let mut snake = Snake::new(gp(16, 12), Dir::R);

    let candidate = snake.advance();
    assert_eq!(candidate, gp(17, 12));

    snake.commit(candidate);
    assert_eq!(snake.head(), gp(17, 12));
    assert_eq!(snake.len(), 1);
}

#[test]
fn test_reverse_request_is_ignored() {
    let mut snake = Snake::from_cells([gp(5, 5), gp(4, 5)], Dir::R);

    snake.set_pending_dir(Dir::L);
    let candidate = snake.advance();

    assert_eq!(snake.dir(), Dir::R);
    assert_eq!(candidate, gp(6, 5));
}

#[test]
fn test_last_buffered_direction_wins() {
    let mut snake = Snake::from_cells([gp(5, 5), gp(4, 5)], Dir::R);

    snake.set_pending_dir(Dir::U);
    snake.set_pending_dir(Dir::D);
    assert_eq!(snake.advance(), gp(5, 6));
    assert_eq!(snake.dir(), Dir::D);
}

#[test]
fn test_reverse_request_leaves_buffer_intact() {
    let mut snake = Snake::from_cells([gp(5, 5), gp(4, 5)], Dir::R);

    // the reversal is rejected against the current direction,
    // not against the buffered one
    snake.set_pending_dir(Dir::U);
    snake.set_pending_dir(Dir::L);
    assert_eq!(snake.advance(), gp(5, 4));
    assert_eq!(snake.dir(), Dir::U);
}

#[test]
fn test_growth_applies_to_one_commit() {
    let mut snake = Snake::from_cells([gp(5, 5), gp(4, 5), gp(3, 5)], Dir::R);

    snake.mark_growth();
    snake.mark_growth();
    let candidate = snake.advance();
    snake.commit(candidate);
    assert_eq!(
        snake.cells().collect::<Vec<_>>(),
        vec![gp(6, 5), gp(5, 5), gp(4, 5), gp(3, 5)]
    );

    // the flag was consumed, the next commit moves without growing
    let candidate = snake.advance();
    snake.commit(candidate);
    assert_eq!(snake.len(), 4);
    assert_eq!(snake.head(), gp(7, 5));
}

#[test]
fn test_self_collision() {
    // u-turn into the back of the body
    let mut snake = Snake::from_cells(
        [gp(5, 5), gp(5, 6), gp(6, 6), gp(6, 5), gp(7, 5)],
        Dir::R,
    );

    let candidate = snake.advance();
    snake.commit(candidate);
    assert_eq!(snake.head(), gp(6, 5));
    assert!(snake.self_collides());
}

#[test]
fn test_moving_into_vacated_tail_cell_is_allowed() {
    // same u-turn but the tail cell moves out of the way this tick
    let mut snake = Snake::from_cells([gp(5, 5), gp(5, 6), gp(6, 6), gp(6, 5)], Dir::R);

    let candidate = snake.advance();
    snake.commit(candidate);
    assert_eq!(snake.head(), gp(6, 5));
    assert!(!snake.self_collides());
}
