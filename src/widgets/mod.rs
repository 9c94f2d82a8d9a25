//! Widgets used by the menu runtime.

pub mod preview;
pub mod select_list;

pub use preview::PreviewPane;
pub use select_list::{AcceptKind, SelectList, SelectListEvent, SelectListTheme};
