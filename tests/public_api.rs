#![allow(unused_imports)]

use lemmy_tui::{
    matches_key, normalize_to_single_line, parse_key, split_key_sequences, truncate_to_width,
    visible_width, wrap_to_width, AcceptKind, Component, EnvConfig, KeyBinding, KeyId, MenuAction,
    MenuKeybindingsConfig, MenuKeybindingsManager, MenuRequest, MenuSelection, OutputGate,
    PreviewPane, ProcessTerminal, SelectList, SelectListEvent, SelectListTheme, SelectionSurface,
    Terminal, TerminalCmd, TerminalGuard, TerminalMenu, DEFAULT_MENU_KEYBINDINGS,
};

#[test]
fn public_api_exports_compile() {}
