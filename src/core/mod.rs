//! Core interfaces and types.

pub mod component;
pub mod input;
pub mod keybindings;
pub mod output;
pub mod terminal;
pub mod text;
