//! # Connect Four
//!
//! A two-player Connect Four game on the classic 7×6 board, playable from a
//! line-based console or a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, players, game session
//! - [`console`] — Line-based driver reading column numbers from a reader
//! - [`ui`] — Terminal UI with a column selector
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
