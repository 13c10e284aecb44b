//! Classic snake in the terminal: a growing snake chases food around a
//! bordered grid, steered with the arrow keys or WASD.
//!
//! The crate is split along the game/presentation seam: [`game`] owns the
//! full simulation and performs no I/O, while [`input`] and [`renderer`]
//! adapt crossterm key events and ratatui frames to the engine's command
//! and view types. The binary in `main.rs` wires the two together in a
//! fixed-cadence loop.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod view;
