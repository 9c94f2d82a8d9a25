//! Menu keybindings.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::input::matches_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SelectUp,
    SelectDown,
    SelectPageUp,
    SelectPageDown,
    SelectFirst,
    SelectLast,
    /// Accept the highlighted entry as a normal selection.
    SelectConfirm,
    /// Accept the highlighted entry as a request to go back.
    SelectBack,
    /// Close the menu without a selection.
    SelectCancel,
}

pub type KeyId = String;

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<String> for KeyBinding {
    fn from(value: String) -> Self {
        KeyBinding::Single(value)
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(|item| item.to_string()).collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuKeybindingsConfig {
    entries: HashMap<MenuAction, KeyBinding>,
}

impl MenuKeybindingsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K: Into<KeyBinding>>(&mut self, action: MenuAction, keys: K) {
        self.entries.insert(action, keys.into());
    }
}

pub static DEFAULT_MENU_KEYBINDINGS: LazyLock<HashMap<MenuAction, Vec<KeyId>>> =
    LazyLock::new(|| {
        use MenuAction::*;

        let keys = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();

        let mut map = HashMap::new();
        map.insert(SelectUp, keys(&["up", "k"]));
        map.insert(SelectDown, keys(&["down", "j"]));
        map.insert(SelectPageUp, keys(&["pageUp"]));
        map.insert(SelectPageDown, keys(&["pageDown"]));
        map.insert(SelectFirst, keys(&["home", "g"]));
        map.insert(SelectLast, keys(&["end", "shift+g"]));
        map.insert(SelectConfirm, keys(&["enter", "alt+d"]));
        map.insert(SelectBack, keys(&["backspace", "left"]));
        map.insert(SelectCancel, keys(&["escape", "q", "ctrl+c"]));
        map
    });

#[derive(Debug, Clone)]
pub struct MenuKeybindingsManager {
    action_to_keys: HashMap<MenuAction, Vec<KeyId>>,
}

impl Default for MenuKeybindingsManager {
    fn default() -> Self {
        Self::new(MenuKeybindingsConfig::default())
    }
}

impl MenuKeybindingsManager {
    pub fn new(config: MenuKeybindingsConfig) -> Self {
        let mut manager = Self {
            action_to_keys: HashMap::new(),
        };
        manager.build_maps(&config);
        manager
    }

    fn build_maps(&mut self, config: &MenuKeybindingsConfig) {
        self.action_to_keys = DEFAULT_MENU_KEYBINDINGS.clone();

        for (action, binding) in &config.entries {
            let key_list = match binding {
                KeyBinding::Single(key) => vec![key.clone()],
                KeyBinding::Multiple(keys) => keys.clone(),
            };
            self.action_to_keys.insert(*action, key_list);
        }
    }

    pub fn matches(&self, data: &str, action: MenuAction) -> bool {
        self.action_to_keys
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|key| matches_key(data, key)))
    }

    /// First action bound to `data`, checked in a fixed priority order.
    pub fn action_for(&self, data: &str) -> Option<MenuAction> {
        use MenuAction::*;

        [
            SelectConfirm,
            SelectBack,
            SelectCancel,
            SelectUp,
            SelectDown,
            SelectPageUp,
            SelectPageDown,
            SelectFirst,
            SelectLast,
        ]
        .into_iter()
        .find(|action| self.matches(data, *action))
    }

    pub fn get_keys(&self, action: MenuAction) -> Vec<KeyId> {
        self.action_to_keys.get(&action).cloned().unwrap_or_default()
    }

    pub fn set_config(&mut self, config: MenuKeybindingsConfig) {
        self.build_maps(&config);
    }
}
