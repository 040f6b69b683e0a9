mod direction;
mod engine;
mod event;
mod paused;
mod state;
pub(crate) use self::direction::Direction;
pub(crate) use self::state::{Coordinate, Grid};
use self::state::{GameState, RunState};
use self::event::GameEvent;
use self::paused::{PauseOpt, Paused};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event, MouseButton, MouseEventKind};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// One game session: the current [`GameState`] snapshot plus the tick
/// deadline and UI trimmings.  The session is the single writer of the
/// snapshot; rendering only ever reads it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
    menu: Paused,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid) -> Self {
        Game::new_with_rng(grid, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(grid: Grid, mut rng: R) -> Game<R> {
        let state = GameState::new(grid, &mut rng);
        Game {
            rng,
            state,
            menu: Paused::new(),
            next_tick: None,
        }
    }

    /// Wait for the next input event or tick deadline, whichever comes
    /// first, and act on it.  The deadline is recomputed from the current
    /// snake length each time a tick fires, and no ticks are scheduled
    /// unless the session is running (game-over states only tick into
    /// themselves, so they are not scheduled either).
    pub(crate) fn process_input(&mut self, area: Rect) -> io::Result<Option<Screen>> {
        if self.state.run_state == RunState::Started && !self.state.game_over {
            if self.next_tick.is_none() {
                self.next_tick =
                    Some(Instant::now() + engine::tick_period(self.state.snake.len()));
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.state = engine::advance(&self.state, &mut self.rng);
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?, area))
            }
        } else {
            Ok(self.handle_event(read()?, area))
        }
    }

    fn handle_event(&mut self, event: Event, area: Rect) -> Option<Screen> {
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                self.tap(Position::new(mouse.column, mouse.row), area);
            }
            return None;
        }
        if event == Event::FocusLost {
            if self.state.run_state == RunState::Started && !self.state.game_over {
                self.pause();
            }
            return None;
        }
        if self.state.game_over {
            match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => self.apply(GameEvent::Restart),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            }
            return None;
        }
        match self.state.run_state {
            RunState::Idle => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::S | Command::Enter | Command::Space => self.apply(GameEvent::Start),
                Command::R => self.apply(GameEvent::Restart),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
            RunState::Started => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::P | Command::Esc | Command::Space => self.pause(),
                Command::R => self.apply(GameEvent::Restart),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
            RunState::Paused => match self.menu.handle_event(event)? {
                PauseOpt::Resume => self.apply(GameEvent::Start),
                PauseOpt::Restart => self.apply(GameEvent::Restart),
                PauseOpt::Quit => return Some(Screen::Quit),
            },
        }
        None
    }

    /// Feed one of the four session events into the state machine.  Every
    /// arm swaps in a whole new snapshot.
    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Start => {
                self.state = self.state.with_run_state(RunState::Started);
            }
            GameEvent::Pause => {
                self.state = self.state.with_run_state(RunState::Paused);
                self.next_tick = None;
            }
            GameEvent::Restart => {
                self.state = GameState::new(self.state.grid, &mut self.rng);
                self.next_tick = None;
            }
            GameEvent::Tap {
                offset,
                canvas_width,
            } => {
                if !self.state.game_over {
                    let direction = engine::retarget(offset, canvas_width, &self.state);
                    self.state = self.state.with_direction(direction);
                }
            }
        }
    }

    fn tap(&mut self, click: Position, area: Rect) {
        let board = self.board_rect(area);
        let offset = Position::new(
            click.x.saturating_sub(board.x),
            click.y.saturating_sub(board.y),
        );
        self.apply(GameEvent::Tap {
            offset,
            canvas_width: board.width,
        });
    }

    fn pause(&mut self) {
        self.menu = Paused::new();
        self.apply(GameEvent::Pause);
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Where the board (wall ring included) lands on screen.  Mouse
    /// handling recomputes this with the same layout the renderer uses.
    fn board_rect(&self, area: Rect) -> Rect {
        let display = get_display_area(area);
        let [_, board_area, _, _] = screen_areas(display);
        center_rect(board_area, self.state.grid.size())
    }

    fn head_symbol(&self) -> char {
        match self.state.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }
}

fn screen_areas(display: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(display)
}

fn key_hints<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut line = Line::default();
    for (i, &(label, key)) in hints.iter().enumerate() {
        if i == 0 {
            line.push_span(" ");
        } else {
            line.push_span(" / ");
        }
        line.push_span(label);
        line.push_span(" (");
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [length_area, board_area, msg1_area, msg2_area] = screen_areas(display);
        Line::styled(
            format!(" Length: {}", self.state.snake.len()),
            consts::LENGTH_BAR_STYLE,
        )
        .render(length_area, buf);

        let board = center_rect(board_area, self.state.grid.size());
        Block::bordered().render(board, buf);
        let mut canvas = Canvas { area: board, buf };
        for &pos in self.state.snake.iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(self.state.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.state.game_over {
            canvas.draw_cell(
                self.state.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(self.state.head(), self.head_symbol(), consts::SNAKE_STYLE);
        }

        if self.state.game_over {
            Span::from(" GAME OVER").render(msg1_area, buf);
            key_hints(&[("Restart", "r"), ("Quit", "q")]).render(msg2_area, buf);
        } else {
            match self.state.run_state {
                RunState::Idle => {
                    Span::from(" Click the board to steer").render(msg1_area, buf);
                    key_hints(&[("Start", "s"), ("Restart", "r"), ("Quit", "q")])
                        .render(msg2_area, buf);
                }
                RunState::Started => {
                    key_hints(&[("Pause", "p"), ("Restart", "r"), ("Quit", "q")])
                        .render(msg2_area, buf);
                }
                RunState::Paused => {
                    let pause_area = center_rect(
                        display,
                        Size {
                            width: Paused::WIDTH,
                            height: Paused::HEIGHT,
                        },
                    );
                    self.menu.render(pause_area, buf);
                }
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Coordinate, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
