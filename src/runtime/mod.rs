//! Menu runtime.

pub mod menu;

pub use menu::{MenuRequest, MenuSelection, SelectionSurface, TerminalMenu, DEFAULT_PREVIEW_ROWS};
