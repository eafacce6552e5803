//! Core game logic (pure data and arithmetic, no raylib calls).
//!
//! Re-exports:
//! - `config`: Tuning constants and viewport state
//! - `actor`: The mouse character (position, facing, animation)
//! - `maze`: Fixed wall layout and the key rectangle
//! - `motion`: Cursor-pursuit movement
//! - `collision`: Center-point wall/key collision tests
//! - `session`: Game state machine driven by per-frame input events

pub mod actor;
pub mod collision;
pub mod config;
pub mod maze;
pub mod motion;
pub mod session;
