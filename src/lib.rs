//! Grid-based terminal Snake with a score-driven speed ramp.
//!
//! The simulation (`game`, `snake`, `food`, `difficulty`, `scheduler`) is a
//! pure state machine over a fixed 20×20 grid; rendering, input, audio, and
//! high-score persistence are collaborators wired up by the binary.

pub mod config;
pub mod difficulty;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod sound;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
