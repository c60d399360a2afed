//! # Connect Four vs. an oracle
//!
//! A Connect Four game where the opposing side is played by a remote
//! move-suggestion service (the "oracle"). The crate separates the board
//! state machine and win detection from the turn-sequencing session that
//! mediates between human input and asynchronous oracle answers, with
//! generation tokens guarding against responses that outlive their game.
//!
//! ## Modules
//!
//! - [`game`] — Grid with gravity placement, win/tie detection, board state
//! - [`session`] — Turn sequencing, configuration, oracle request lifecycle
//! - [`oracle`] — The oracle contract, its wire format, and implementations
//! - [`render`] — Snapshot type and renderer contract
//! - [`ui`] — Terminal front end built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod oracle;
pub mod render;
pub mod session;
pub mod ui;
