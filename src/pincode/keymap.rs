//! Key bindings for the pincode component.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// KeyMap is the set of key bindings for acting on a pincode field.
///
/// Printable characters are not bound; any character key without ctrl or
/// alt is offered to the field for insertion.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Delete the last entered character.
    pub delete_character_backward: Binding,
    /// Send a line break, which asks the delegate whether to return.
    pub submit: Binding,
    /// Release focus.
    pub dismiss: Binding,
    /// Paste from clipboard.
    pub paste: Binding,
}

/// Default bindings for a pincode field.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        delete_character_backward: new_binding(vec![
            with_keys_str(&["backspace", "ctrl+h"]),
            with_help("backspace", "delete"),
        ]),
        submit: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "submit")]),
        dismiss: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "done")]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"]), with_help("ctrl+v", "paste")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.delete_character_backward, &self.submit]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.delete_character_backward, &self.paste],
            vec![&self.submit, &self.dismiss],
        ]
    }
}
