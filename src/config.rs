use ratatui::style::Color;

/// Logical grid dimensions, wall ring included.
///
/// Replaces the anonymous `(u16, u16)` tuple that would otherwise be used
/// for bounds, making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the number of walkable cells inside the wall ring.
    #[must_use]
    pub fn playable_cells(self) -> usize {
        usize::from(self.width.saturating_sub(2)) * usize::from(self.height.saturating_sub(2))
    }
}

/// Snake head glyph.
pub const GLYPH_SNAKE_HEAD: &str = "◉";

/// Snake body glyph.
pub const GLYPH_SNAKE_BODY: &str = "●";

/// Food glyph.
pub const GLYPH_FOOD: &str = "◆";

/// Snake color.
pub const COLOR_SNAKE: Color = Color::Green;

/// Food color.
pub const COLOR_FOOD: Color = Color::Red;

/// Status-line text color.
pub const COLOR_STATUS: Color = Color::Yellow;

/// Border color.
pub const COLOR_BORDER: Color = Color::Cyan;

/// Base tick interval in milliseconds at score zero.
pub const BASE_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Score points that shave one millisecond off the tick interval.
pub const SCORE_PER_SPEEDUP_MS: u32 = 50;

/// Points granted per food item eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Driver sleep between loop iterations, in milliseconds. Input is polled
/// every iteration; the simulation only advances on tick boundaries.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Minimum terminal width required to start.
pub const MIN_TERMINAL_WIDTH: u16 = 40;

/// Minimum terminal height required to start.
pub const MIN_TERMINAL_HEIGHT: u16 = 10;

/// Terminal rows reserved below the grid for the score and status lines.
pub const STATUS_LINES: u16 = 2;

#[cfg(test)]
mod tests {
    use super::GridSize;

    #[test]
    fn playable_cells_excludes_wall_ring() {
        let bounds = GridSize {
            width: 10,
            height: 6,
        };
        assert_eq!(bounds.playable_cells(), 8 * 4);
    }

    #[test]
    fn degenerate_grid_has_no_playable_cells() {
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        assert_eq!(bounds.playable_cells(), 0);
    }
}
