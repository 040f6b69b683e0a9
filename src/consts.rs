//! Assorted constants & hard-coded configuration
use crate::game::{Coordinate, Direction};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default number of cells across the board, wall ring included
pub(crate) const GRID_WIDTH: u16 = 20;

/// Default number of cells down the board, wall ring included
pub(crate) const GRID_HEIGHT: u16 = 30;

/// Smallest configurable board dimension.  Keeps the spawn cell inside the
/// interior and leaves room for food.
pub(crate) const MIN_GRID_SIZE: u16 = 8;

/// Where the snake's head starts after a restart
pub(crate) const SNAKE_SPAWN: Coordinate = Coordinate::new(5, 5);

/// Which way the snake faces after a restart
pub(crate) const SPAWN_DIRECTION: Direction = Direction::Right;

/// Time between ticks while the snake is 1-5 cells long
pub(crate) const TICK_PERIOD_SLOW: Duration = Duration::from_millis(120);

/// Time between ticks while the snake is 6-10 cells long
pub(crate) const TICK_PERIOD_MEDIUM: Duration = Duration::from_millis(110);

/// Time between ticks once the snake is longer than 10 cells
pub(crate) const TICK_PERIOD_FAST: Duration = Duration::from_millis(100);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 35,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head once it has hit a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the length bar at the top of the game screen
pub(crate) const LENGTH_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected pause-menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
