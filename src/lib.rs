#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pincode/")]

//! # bubbletea-pincode
//!
//! A pin-code / one-time-passcode input component for terminal applications
//! built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs), in the
//! style of the [bubbles](https://github.com/charmbracelet/bubbles) widgets.
//!
//! ## Overview
//!
//! The field is a fixed number of slots drawn in a row. Each slot shows at
//! most one character over an underline or inside a box. Entered characters
//! can be masked, unfilled slots can show placeholder characters, and the
//! set of accepted characters is configurable. The component follows the Elm
//! Architecture with `update()` and `view()` methods.
//!
//! ## Features
//!
//! - **Fixed-length input** bounded by a character limit and an allowed set
//! - **Secure entry** with a configurable mask glyph
//! - **Per-slot placeholders**
//! - **Lifecycle delegate** with optional callbacks that default to "allow"
//! - **Focus management** through the [`Component`] trait
//! - **Type-safe key bindings** with help text
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_pincode::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     code: PinCode,
//!     entered: Option<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut code = pincode_new()
//!             .with_char_limit(6)
//!             .with_allowed_characters(CharacterSet::Digits)
//!             .with_placeholder("······");
//!         code.request_focus();
//!         (Self { code, entered: None }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
//!             self.entered = Some(done.value.clone());
//!             return None;
//!         }
//!         self.code.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Enter the code we sent you:\n\n{}", self.code.view())
//!     }
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! bubbletea-pincode = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```

pub mod key;
pub mod pincode;
pub mod runeutil;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - **Focused**: the component receives keyboard input
/// - **Blurred**: the component ignores keyboard input
///
/// ```rust
/// use bubbletea_pincode::prelude::*;
///
/// let mut code = pincode_new();
/// assert!(!Component::focused(&code));
///
/// Component::focus(&mut code);
/// assert!(Component::focused(&code));
///
/// Component::blur(&mut code);
/// assert!(!Component::focused(&code));
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the runtime, for example to start a
    /// cursor animation.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use pincode::{
    default_key_map as pincode_default_key_map, new as pincode_new, ActivateMsg, CharacterSet,
    CharacterSource, CompletedMsg, FillState, KeyMap as PinCodeKeyMap, Model as PinCode,
    PinCodeDelegate, PinCodeOption, SlotDecoration,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pincode::prelude::*;
///
/// let mut code = pincode_new().with_char_limit(4);
/// code.insert_str("ab12");
/// assert_eq!(code.fill_state(), FillState::Filled);
/// ```
pub mod prelude {
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::pincode::{
        default_key_map as pincode_default_key_map, new as pincode_new, ActivateMsg,
        CharacterSet, CharacterSource, CompletedMsg, FillState, KeyMap as PinCodeKeyMap,
        Model as PinCode, PinCodeDelegate, PinCodeOption, SlotDecoration,
    };
    pub use crate::Component;
}
