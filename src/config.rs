use ratatui::symbols::border;

use crate::grid::GridSize;

/// Side length of the square play grid, in cells.
pub const GRID_SIDE: u16 = 20;

/// Grid dimensions used for every session.
pub const BOARD: GridSize = GridSize {
    width: GRID_SIDE,
    height: GRID_SIDE,
};

/// Points awarded per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Score needed per speed level increase.
pub const POINTS_PER_SPEED_LEVEL: u32 = 30;

/// Highest reachable speed level.
pub const MAX_SPEED_LEVEL: u32 = 10;

/// Tick interval at speed level 1, in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 200;

/// Hard floor for the tick interval, in milliseconds.
///
/// Never reached through normal play: the level cap yields 92ms at
/// level 10. Kept as a guard in the interval formula all the same.
pub const MIN_TICK_INTERVAL_MS: u64 = 80;

/// Milliseconds shaved off the tick interval per speed level.
pub const TICK_INTERVAL_STEP_MS: u64 = 12;

/// How long the input poll waits between loop iterations.
pub const INPUT_POLL_MS: u64 = 16;

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "●";

/// Glyph for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Direction-aware snake head glyphs.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Head glyph before the first move, when velocity is still zero.
pub const GLYPH_SNAKE_HEAD_IDLE: &str = "■";

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
