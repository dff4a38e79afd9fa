use std::collections::HashMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Reset` → `"KeyR"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Reset, "KeyR".into()),
            (KeyAction::ClearSelection, "Escape".into()),
            (KeyAction::ToggleSticks, "KeyS".into()),
            (KeyAction::ToggleCartoon, "KeyC".into()),
            (KeyAction::ToggleBaseColors, "KeyB".into()),
            (KeyAction::CycleCartoonColor, "KeyP".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: &str) {
        let _ = self.bindings.insert(action, key.to_owned());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
