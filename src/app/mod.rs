//! Terminal front end: prompts, rendering and the match flow around the engine.

pub mod game;
pub mod presenter;
pub mod prompter;
