use super::direction::Direction;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Size;
use std::collections::VecDeque;

/// A grid cell.  `(0, 0)` is the top-left corner of the board, including
/// the wall ring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Coordinate {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Coordinate {
    pub(crate) const fn new(x: u16, y: u16) -> Coordinate {
        Coordinate { x, y }
    }
}

/// Board dimensions.  The outermost ring of cells is a wall; the snake may
/// only occupy the open interior `1 ..= width - 2`, `1 ..= height - 2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Is `pos` strictly inside the wall ring?
    pub(crate) fn is_interior(self, pos: Coordinate) -> bool {
        (1..self.width.saturating_sub(1)).contains(&pos.x)
            && (1..self.height.saturating_sub(1)).contains(&pos.y)
    }

    fn interior_cells(self) -> impl Iterator<Item = Coordinate> {
        (1..self.height.saturating_sub(1)).flat_map(move |y| {
            (1..self.width.saturating_sub(1)).map(move |x| Coordinate::new(x, y))
        })
    }

    /// Pick a food cell uniformly at random from the interior cells not in
    /// `occupied`.  Returns `None` when the snake has filled the entire
    /// interior; the caller decides what to do with a full board.
    pub(crate) fn spawn_food<R: Rng>(
        self,
        occupied: &VecDeque<Coordinate>,
        rng: &mut R,
    ) -> Option<Coordinate> {
        self.interior_cells()
            .filter(|pos| !occupied.contains(pos))
            .choose(rng)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(consts::GRID_WIDTH, consts::GRID_HEIGHT)
    }
}

/// Lifecycle of a game session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RunState {
    Idle,
    Started,
    Paused,
}

/// An immutable snapshot of one moment of play.  Ticks, direction changes,
/// and lifecycle events all replace the whole snapshot rather than mutating
/// it in place; the UI layer only ever reads the current snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) grid: Grid,
    pub(crate) direction: Direction,
    /// The cells of the snake, head first.  Never empty.
    pub(crate) snake: VecDeque<Coordinate>,
    pub(crate) food: Coordinate,
    pub(crate) game_over: bool,
    pub(crate) run_state: RunState,
}

impl GameState {
    /// A fresh session: a length-1 snake at the spawn cell, heading right,
    /// with food placed at random in the unoccupied interior.
    pub(crate) fn new<R: Rng>(grid: Grid, rng: &mut R) -> GameState {
        let snake = VecDeque::from([consts::SNAKE_SPAWN]);
        let food = grid.spawn_food(&snake, rng).unwrap_or(consts::SNAKE_SPAWN);
        GameState {
            grid,
            direction: consts::SPAWN_DIRECTION,
            snake,
            food,
            game_over: false,
            run_state: RunState::Idle,
        }
    }

    pub(crate) fn head(&self) -> Coordinate {
        self.snake
            .front()
            .copied()
            .expect("snake should be non-empty")
    }

    pub(crate) fn with_direction(&self, direction: Direction) -> GameState {
        GameState {
            direction,
            ..self.clone()
        }
    }

    pub(crate) fn with_run_state(&self, run_state: RunState) -> GameState {
        GameState {
            run_state,
            ..self.clone()
        }
    }

    /// The terminal snapshot: everything as-is, with `game_over` raised
    pub(crate) fn ended(&self) -> GameState {
        GameState {
            game_over: true,
            ..self.clone()
        }
    }
}
