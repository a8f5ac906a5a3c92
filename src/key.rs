//! Type-safe key bindings for components.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the help text shown to users. Components expose their bindings
//! through a keymap struct that implements [`KeyMap`], so help views can list
//! them without knowing the component.
//!
//! ```rust
//! use bubbletea_pincode::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! let submit = Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit");
//! let delete = key::new_binding(vec![
//!     key::with_keys_str(&["backspace", "ctrl+h"]),
//!     key::with_help("⌫", "delete"),
//! ]);
//! assert_eq!(submit.help().key, "enter");
//! assert_eq!(delete.keys().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys, e.g. `"enter"`.
    pub key: String,
    /// Description of the action, e.g. `"submit"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Bindings without keys are never enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the binding's keys from names such as `"enter"` or `"ctrl+h"`.
///
/// Names that cannot be parsed are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether a key message triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether a key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by component keymaps so help views can render them.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings shown in the expanded help, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut parts: Vec<&str> = s.split('+').collect();
    // "ctrl++" style names are not supported; a trailing empty part means a bad name.
    let name = parts.pop().filter(|n| !n.is_empty())?;
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyPress { code, mods })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        assert_eq!(parse_key("enter"), Some(KeyPress::from(KeyCode::Enter)));
        assert_eq!(
            parse_key("ctrl+h"),
            Some(KeyPress::from((KeyCode::Char('h'), KeyModifiers::CONTROL)))
        );
        assert_eq!(parse_key("ctrl+"), None);
        assert_eq!(parse_key("hyper+x"), None);
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let b = new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]);
        assert!(matches_binding(&key(KeyCode::Backspace, KeyModifiers::NONE), &b));
        assert!(matches_binding(&key(KeyCode::Char('h'), KeyModifiers::CONTROL), &b));
        assert!(!matches_binding(&key(KeyCode::Char('h'), KeyModifiers::NONE), &b));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Esc]).with_help("esc", "dismiss");
        assert!(b.enabled());
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Esc, KeyModifiers::NONE)));

        let d = new_binding(vec![with_keys_str(&["esc"]), with_disabled()]);
        assert!(!d.enabled());
        assert!(!new_binding(vec![]).enabled());
    }
}
