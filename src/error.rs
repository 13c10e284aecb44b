use std::io;

use thiserror::Error;

/// Failures the binary can exit with.
#[derive(Debug, Error)]
pub enum Error {
    /// The terminal is below the minimum playable size. Reported once at
    /// startup, before raw mode is entered.
    #[error(
        "Terminal window too small ({width}x{height})! \
         Please resize to at least {min_width}x{min_height} characters."
    )]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    /// Terminal or drawing-surface failure; unrecoverable mid-session.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn too_small_message_names_both_sizes() {
        let error = Error::TerminalTooSmall {
            width: 30,
            height: 8,
            min_width: 40,
            min_height: 10,
        };

        let message = error.to_string();
        assert!(message.contains("30x8"));
        assert!(message.contains("40x10"));
    }
}
