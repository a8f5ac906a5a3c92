//! Pin-code / one-time-passcode input component for Bubble Tea applications.
//!
//! A pincode field is a fixed number of slots drawn in a row, each showing at
//! most one character above an underline (or inside a box). Typing fills the
//! slots left to right, backspace empties them right to left, and filling the
//! last slot ends editing.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pincode::pincode::{self, CharacterSet};
//!
//! let mut field = pincode::new()
//!     .with_char_limit(6)
//!     .with_allowed_characters(CharacterSet::Digits)
//!     .with_placeholder("······");
//! field.request_focus();
//! field.insert_str("123456");
//!
//! assert!(field.is_filled());
//! assert!(!field.focused()); // filling the last slot released focus
//! ```
//!
//! # Secure Entry
//!
//! ```rust
//! use bubbletea_pincode::pincode;
//!
//! let mut field = pincode::new().with_secure_text_entry(true).with_mask_character('*');
//! field.insert('7');
//! assert_eq!(field.character_at(0), Some('*'));
//! assert_eq!(field.value(), "7");
//! ```
//!
//! # Lifecycle Callbacks
//!
//! Attach a [`PinCodeDelegate`] to observe changes or veto focus changes.
//! Without a delegate every query is answered with "yes".
//!
//! # Slot Counting
//!
//! Every Unicode scalar value takes one slot. A character written with a
//! combining mark, such as `"e\u{301}"`, therefore takes two.

pub mod charset;
pub mod delegate;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod source;
pub mod types;
pub mod view;


// Re-export main types and functions for public API
pub use charset::CharacterSet;
pub use delegate::{BoxedDelegate, PinCodeDelegate};
pub use keymap::{default_key_map, KeyMap};
pub use model::{completed, new, new_with_options, paste, Model, PinCodeOption};
pub use source::CharacterSource;
pub use types::{
    ActivateMsg, CompletedMsg, FillState, PasteErrMsg, PasteMsg, SlotDecoration, SlotKind,
    DEFAULT_CHAR_LIMIT, DEFAULT_MASK_CHARACTER,
};
pub use view::Slot;
