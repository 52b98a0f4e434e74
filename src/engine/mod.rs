//! The engine module: rules, state machine, and construction.

pub mod game;

pub use game::{GameEngine, GameEngineBuilder};
