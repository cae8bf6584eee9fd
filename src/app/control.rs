use std::fmt;
use std::time::{Duration, Instant};

/// Why the session ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cause {
    HitWall,
    HitTail,
    /// The snake covers every cell, there is nowhere left to put an apple
    BoardFull,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Cause::HitWall => "you hit the wall",
            Cause::HitTail => "you collided with your tail",
            Cause::BoardFull => "you filled the whole board",
        };
        write!(f, "{}", text)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    GameOver(Cause),
}

/// Combines fixed-rate update pacing with session state management
pub struct Control {
    game_frame_duration: Duration,
    last_update: Instant,

    // amount of time which game frames have not yet
    // been accounted for (will be included next time
    // this is done)
    remainder: f64, // secs

    // number of game frames that still need to be
    // performed to catch up with the current time
    missed_updates: Option<usize>,

    game_state: State,
}

impl Control {
    pub fn new(fps: f64) -> Self {
        Self {
            game_frame_duration: Duration::from_nanos((1_000_000_000.0 / fps) as u64),
            last_update: Instant::now(),
            remainder: 0.,
            missed_updates: None,
            game_state: State::Playing,
        }
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                // calculate how many game frames should have occurred
                // since the last call to can_update
                let game_frames = self.last_update.elapsed().as_secs_f64()
                    / self.game_frame_duration.as_secs_f64()
                    + self.remainder;
                let missed_updates = game_frames as usize;

                if missed_updates > 0 {
                    self.remainder = game_frames % 1.;
                    self.last_update = Instant::now();
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    /// Terminal, there is no path back to `Playing`
    pub fn game_over(&mut self, cause: Cause) {
        self.game_state = State::GameOver(cause);
        self.missed_updates = None;
    }
}

#[test]
fn test_updates_accumulate_over_time() {
    let mut control = Control::new(1000.);
    std::thread::sleep(Duration::from_millis(10));
    assert!(control.can_update());
}

#[test]
fn test_no_updates_before_frame_elapses() {
    let mut control = Control::new(0.001);
    assert!(!control.can_update());
}

#[test]
fn test_no_updates_after_game_over() {
    let mut control = Control::new(1000.);
    std::thread::sleep(Duration::from_millis(10));
    control.game_over(Cause::HitWall);
    assert!(!control.can_update());
    assert_eq!(control.state(), State::GameOver(Cause::HitWall));
}
