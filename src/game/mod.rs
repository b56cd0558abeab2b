mod direction;
mod grid;
mod sim;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid};
pub(crate) use self::sim::{CollisionPolicy, Simulation, Status, TickResult};
use crate::app::Screen;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::{Duration, Instant};
use tracing::info;

/// The game screen: a [`Simulation`] plus the clock & keyboard plumbing that
/// drive it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    sim: Simulation<R>,
    /// The most recent direction requested since the last tick
    pending: Option<Direction>,
    /// Highest score reached since the program started
    best: usize,
    tick_period: Duration,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: &Config, rng: R) -> Game<R> {
        let grid = Grid::new(config.grid_width, config.grid_height);
        info!(
            width = grid.width(),
            height = grid.height(),
            speed = config.speed.get(),
            on_collision = ?config.on_collision,
            "Starting game"
        );
        Game {
            sim: Simulation::new(grid, config.on_collision, rng),
            pending: None,
            best: 0,
            tick_period: config.tick_period(),
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            let period = self.tick_period;
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn advance(&mut self) {
        if self.sim.tick(self.pending.take()) == TickResult::AteFood {
            self.best = self.best.max(self.sim.score());
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        match (self.sim.status(), cmd) {
            (_, Command::Quit | Command::Esc) => return Some(Screen::Quit),
            (Status::Running, Command::Up) => self.pending = Some(Direction::Up),
            (Status::Running, Command::Down) => self.pending = Some(Direction::Down),
            (Status::Running, Command::Left) => self.pending = Some(Direction::Left),
            (Status::Running, Command::Right) => self.pending = Some(Direction::Right),
            (Status::Ended, Command::R) => self.restart(),
            (Status::Ended, Command::Q) => return Some(Screen::Quit),
            _ => (),
        }
        None
    }

    fn restart(&mut self) {
        self.sim.reset();
        self.pending = None;
        self.next_tick = None;
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn running(&self) -> bool {
        self.sim.status() == Status::Running
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.sim.grid();
        let board_size = Size {
            width: grid.width().saturating_add(2),
            height: grid.height().saturating_add(2),
        };
        let display_size = Size {
            width: board_size.width.max(consts::MIN_DISPLAY_WIDTH),
            height: board_size.height.saturating_add(consts::STATUS_ROWS),
        };
        if area.width < display_size.width || area.height < display_size.height {
            Line::from("Terminal too small").render(area, buf);
            return;
        }
        let display = center_rect(area, display_size);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(board_size.height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}  Best: {}", self.sim.score(), self.best),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board_area = center_rect(board_area, board_size);
        Block::bordered().render(board_area, buf);
        let mut board = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        for cell in self.sim.body() {
            board.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.sim.food() {
            board.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite the
        // body cell it ran into
        if self.running() {
            board.draw_cell(
                self.sim.head(),
                head_symbol(self.sim.direction()),
                consts::SNAKE_STYLE,
            );
        } else {
            board.draw_cell(
                self.sim.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
            Span::from(" — GAME OVER —").render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(cell.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cell.y) else {
            return;
        };
        if let Some(c) = self.buf.cell_mut((x, y)) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }
}
