//! Terminal toolkit for the Lemmy browser.
//!
//! Invariant: single output gate: only `core::output::OutputGate::flush(..)` writes to the
//! terminal.
//!
//! # Public API Overview
//! - Present a list and block for a choice with [`TerminalMenu`], or swap in any other
//!   [`SelectionSurface`].
//! - Parse and match keys with [`parse_key`] and [`matches_key`]; rebind menu actions with
//!   [`MenuKeybindingsConfig`].
//! - Measure, truncate and wrap text with the width helpers.
//! - Route `log` records to a file with [`logging::init_from_env`].

pub mod config;
pub mod logging;

pub mod core;
pub mod platform;
pub mod runtime;
pub mod widgets;

/// Built-in UI components.
pub use crate::widgets::{
    AcceptKind, PreviewPane, SelectList, SelectListEvent, SelectListTheme,
};

/// Blocking menu and the surface abstraction it implements.
pub use crate::runtime::{MenuRequest, MenuSelection, SelectionSurface, TerminalMenu};

/// Keybinding configuration and default mappings.
pub use crate::core::keybindings::{
    KeyBinding, KeyId, MenuAction, MenuKeybindingsConfig, MenuKeybindingsManager,
    DEFAULT_MENU_KEYBINDINGS,
};

/// Keyboard input parsing and matching helpers.
pub use crate::core::input::{matches_key, parse_key, split_key_sequences};

/// Terminal interfaces and process-backed implementation.
pub use crate::core::output::{OutputGate, TerminalCmd};
pub use crate::core::terminal::{Terminal, TerminalGuard};
pub use crate::platform::process_terminal::ProcessTerminal;

/// Runtime component trait.
pub use crate::core::component::Component;

/// Environment configuration.
pub use crate::config::EnvConfig;

/// Truncation and wrapping helpers.
pub use crate::core::text::utils::{normalize_to_single_line, truncate_to_width, wrap_to_width};
/// Visible width helper.
pub use crate::core::text::width::visible_width;
