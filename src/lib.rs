//! Snake on a fixed grid.
//!
//! The game logic ([`game::GameSession`] and the models it owns) knows nothing
//! about the terminal. [`scheduler::FrameScheduler`] turns per-frame callbacks
//! into fixed-rate steps and hands the result to a [`scheduler::Frontend`];
//! [`app::App`] wires all of it to a crossterm terminal.

pub mod app;
pub mod collision;
pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod position;
pub mod scheduler;
pub mod scoring;
pub mod snake;
pub mod term;
