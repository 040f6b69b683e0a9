//! The per-tick update rule and the tap-to-direction mapper.
//!
//! Everything here is a total function from one [`GameState`] snapshot to
//! the next; the only mutable input is the RNG used to place food.

use super::direction::Direction;
use super::state::GameState;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;
use std::time::Duration;

/// Advance the game by one tick.
///
/// Game-over states are fixed points.  Otherwise the head moves one cell in
/// the current direction; running into the wall ring or the snake's own
/// body ends the game with the body and food untouched.  Landing on the
/// food grows the snake by one cell and respawns the food on a free
/// interior cell (if the snake has filled the board, the food stays put and
/// the next tick necessarily ends the game).
pub(super) fn advance<R: Rng>(state: &GameState, rng: &mut R) -> GameState {
    if state.game_over {
        return state.clone();
    }
    let new_head = state
        .direction
        .step(state.head())
        .filter(|&pos| state.grid.is_interior(pos));
    let Some(new_head) = new_head else {
        return state.ended();
    };
    if state.snake.contains(&new_head) {
        return state.ended();
    }
    let mut snake = state.snake.clone();
    snake.push_front(new_head);
    let food = if new_head == state.food {
        state.grid.spawn_food(&snake, rng).unwrap_or(state.food)
    } else {
        let _ = snake.pop_back();
        state.food
    };
    GameState {
        snake,
        food,
        ..state.clone()
    }
}

/// Map a click on the board to a new heading.
///
/// The click offset (relative to the board's top-left corner) is converted
/// to a grid cell by integer division and clamped onto the grid.  Turns are
/// restricted to the axis perpendicular to the current heading, so the
/// result can never be the reverse of the current direction and the snake
/// cannot double back into its own neck.
pub(super) fn retarget(tap: Position, canvas_width: u16, state: &GameState) -> Direction {
    let cell = (canvas_width / state.grid.width.max(1)).max(1);
    let tap_x = (tap.x / cell).min(state.grid.width.saturating_sub(1));
    let tap_y = (tap.y / cell).min(state.grid.height.saturating_sub(1));
    let head = state.head();
    if state.direction.is_vertical() {
        if tap_x < head.x {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if tap_y < head.y {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Time until the next tick, recomputed from the current snake length at
/// the top of every cycle.  Longer snakes tick faster.
pub(super) fn tick_period(snake_length: usize) -> Duration {
    match snake_length {
        0..=5 => consts::TICK_PERIOD_SLOW,
        6..=10 => consts::TICK_PERIOD_MEDIUM,
        _ => consts::TICK_PERIOD_FAST,
    }
}
