//! Input routing
//!
//! Builds the key -> action map from the `[keybinds]` config table and
//! resolves key presses against it.

use crate::core::actions::{normalize_key, parse_key_string, Action};
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

pub type KeybindMap = HashMap<(KeyCode, KeyModifiers), Action>;

/// Build the keybind map. Entries that fail to parse are skipped with a warning.
///
/// Entries are applied in sorted order, so when two spellings name the same
/// key the result does not depend on hash order.
pub fn build_keybind_map(keybinds: &HashMap<String, String>) -> KeybindMap {
    let mut map = HashMap::new();

    let mut entries: Vec<(&String, &String)> = keybinds.iter().collect();
    entries.sort();

    for (combo, action_name) in entries {
        let Some(key) = parse_key_string(combo) else {
            tracing::warn!("Skipping keybind with unrecognized key '{}'", combo);
            continue;
        };
        let Some(action) = Action::from_name(action_name) else {
            tracing::warn!(
                "Skipping keybind '{}' with unknown action '{}'",
                combo,
                action_name
            );
            continue;
        };
        map.insert(key, action);
    }

    tracing::debug!("Built keybind map with {} entries", map.len());
    map
}

/// Resolve a key press to an action
pub fn route_key(map: &KeybindMap, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    map.get(&normalize_key(code, modifiers)).copied()
}
