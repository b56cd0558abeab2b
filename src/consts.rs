//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::num::{NonZeroU16, NonZeroU32};

/// Default board width in cells (a 640-pixel screen of 20-pixel cells)
pub(crate) const DEFAULT_GRID_WIDTH: NonZeroU16 = match NonZeroU16::new(32) {
    Some(n) => n,
    None => panic!("DEFAULT_GRID_WIDTH should be nonzero"),
};

/// Default board height in cells (a 480-pixel screen of 20-pixel cells)
pub(crate) const DEFAULT_GRID_HEIGHT: NonZeroU16 = match NonZeroU16::new(24) {
    Some(n) => n,
    None => panic!("DEFAULT_GRID_HEIGHT should be nonzero"),
};

/// Default number of times per second that the snake moves
pub(crate) const DEFAULT_SPEED: NonZeroU32 = match NonZeroU32::new(8) {
    Some(n) => n,
    None => panic!("DEFAULT_SPEED should be nonzero"),
};

/// Length of a freshly-spawned snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 1;

/// How many cells the snake's target length increases by upon eating
pub(crate) const SNAKE_GROWTH: usize = 1;

/// How many random cells to try when placing food before falling back to
/// choosing among the free cells directly
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

/// The game display is never drawn narrower than this, so that the score bar
/// and the game-over prompt fit even on small boards.
pub(crate) const MIN_DISPLAY_WIDTH: u16 = 24;

/// Rows used by the score bar and the two message lines under the board
pub(crate) const STATUS_ROWS: u16 = 3;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it has run into itself
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

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Environment variable holding the log filter directives
pub(crate) const LOG_FILTER_VAR: &str = "GRIDSNAKE_LOG";

/// Log filter used when [`LOG_FILTER_VAR`] is unset or invalid
pub(crate) const DEFAULT_LOG_FILTER: &str = "gridsnake=info";
