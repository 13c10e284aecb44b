use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit `(dx, dy)` step for this direction. The y axis grows
    /// downward, matching terminal rows.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the 180° reversal of this direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Commands consumed by the game loop. Keys with no mapping never produce a
/// command; the adapter swallows them before they reach the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Maps one key event to a command.
///
/// Arrow keys and WASD (case-insensitive) steer, `q` quits, `r` restarts.
/// Ctrl-C is treated as quit since raw mode suppresses the usual SIGINT.
#[must_use]
pub fn command_from_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return (c == 'c').then_some(Command::Quit);
            }
            match c.to_ascii_lowercase() {
                'w' => Some(Command::Move(Direction::Up)),
                's' => Some(Command::Move(Direction::Down)),
                'a' => Some(Command::Move(Direction::Left)),
                'd' => Some(Command::Move(Direction::Right)),
                'q' => Some(Command::Quit),
                'r' => Some(Command::Restart),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Returns the next pending command without blocking.
///
/// Drains unmapped events (resize, unrecognized keys) so they cannot pile
/// up, and stops at the first event that maps to a command. Returns
/// `Ok(None)` when no mapped key is pending.
pub fn poll_command() -> io::Result<Option<Command>> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if let Some(command) = command_from_key(key) {
                return Ok(Some(command));
            }
        }
    }
    Ok(None)
}
