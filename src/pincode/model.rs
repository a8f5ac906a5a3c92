//! Core model implementation for the pincode component.

use super::charset::CharacterSet;
use super::delegate::{BoxedDelegate, PinCodeDelegate};
use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{
    CompletedMsg, PasteErrMsg, SlotDecoration, DEFAULT_CHAR_LIMIT, DEFAULT_MASK_CHARACTER,
};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::fmt;
use std::time::Duration;

/// A fixed-length pin-code / one-time-passcode field.
///
/// The field shows `char_limit` slots in a row, one glyph per slot, each
/// decorated with an underline or a background box. The model owns the
/// entered text and is the only thing that mutates it: characters go in via
/// [`insert`](Model::insert) and come out via
/// [`delete_last`](Model::delete_last). Invalid input is ignored rather than
/// reported, and lifecycle events are passed to an optional
/// [`PinCodeDelegate`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_pincode::pincode::{self, CharacterSet, FillState};
///
/// let mut field = pincode::new()
///     .with_char_limit(6)
///     .with_allowed_characters(CharacterSet::Digits)
///     .with_placeholder("------")
///     .with_secure_text_entry(true);
///
/// field.request_focus();
/// for ch in "12a3".chars() {
///     field.insert(ch);
/// }
/// assert_eq!(field.value(), "123");
/// assert_eq!(field.fill_state(), FillState::PartiallyFilled);
/// assert_eq!(field.character_at(0), Some('•'));
/// assert_eq!(field.character_at(3), Some('-'));
/// ```
pub struct Model {
    /// Err is the last clipboard error, if any.
    pub err: Option<String>,

    /// Style for entered characters.
    pub text_style: Style,
    /// Style for placeholder characters.
    pub placeholder_style: Style,
    /// Style for underlines of slots still to be filled.
    pub underline_style: Style,
    /// Style for underlines of filled slots and the highlighted active slot.
    pub filled_underline_style: Style,
    /// Colour painted behind each slot when the decoration includes a box.
    pub slot_background: Color,

    /// Decoration drawn for each slot.
    pub decoration: SlotDecoration,
    /// When false every underline keeps `underline_style`.
    pub recolor_underlines: bool,
    /// Highlight the underline of the next slot to be filled.
    pub highlight_active_slot: bool,

    /// Width of one slot in cells.
    pub slot_width: usize,
    /// Cells between neighbouring slots.
    pub slot_spacing: usize,
    /// Total width the slot block is centred in. 0 means no centring.
    pub width: usize,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    pub(super) text: Option<Vec<char>>,
    pub(super) placeholder: Option<Vec<char>>,
    pub(super) char_limit: usize,
    pub(super) allowed_characters: CharacterSet,
    pub(super) secure_text_entry: bool,
    pub(super) mask_character: char,
    pub(super) focus: bool,
    pub(super) delegate: Option<BoxedDelegate>,
}

/// Creates a new pincode field with default settings.
///
/// The field starts unfocused with no text, a limit of four alphanumeric
/// characters, no placeholder and secure entry off.
pub fn new() -> Model {
    Model {
        err: None,
        text_style: Style::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        underline_style: Style::new().foreground(Color::from("240")),
        filled_underline_style: Style::new().foreground(Color::from("62")),
        slot_background: Color::from("236"),
        decoration: SlotDecoration::Underline,
        recolor_underlines: true,
        highlight_active_slot: false,
        slot_width: 3,
        slot_spacing: 1,
        width: 0,
        key_map: default_key_map(),
        text: None,
        placeholder: None,
        char_limit: DEFAULT_CHAR_LIMIT,
        allowed_characters: CharacterSet::default(),
        secure_text_entry: false,
        mask_character: DEFAULT_MASK_CHARACTER,
        focus: false,
        delegate: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("text", &self.text)
            .field("placeholder", &self.placeholder)
            .field("char_limit", &self.char_limit)
            .field("allowed_characters", &self.allowed_characters)
            .field("secure_text_entry", &self.secure_text_entry)
            .field("mask_character", &self.mask_character)
            .field("focus", &self.focus)
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}

/// Configuration applied by [`new_with_options`].
#[derive(Debug, Clone)]
pub enum PinCodeOption {
    /// Number of slots.
    CharLimit(usize),
    /// Characters accepted on insert.
    AllowedCharacters(CharacterSet),
    /// Show the mask character instead of entered characters.
    SecureTextEntry(bool),
    /// Glyph used for masking.
    MaskCharacter(char),
    /// Hint text shown in unfilled slots.
    Placeholder(String),
    /// Per-slot decoration.
    Decoration(SlotDecoration),
}

impl PinCodeOption {
    fn apply(&self, m: &mut Model) {
        match self {
            PinCodeOption::CharLimit(limit) => m.set_char_limit(*limit),
            PinCodeOption::AllowedCharacters(set) => m.set_allowed_characters(set.clone()),
            PinCodeOption::SecureTextEntry(on) => m.set_secure_text_entry(*on),
            PinCodeOption::MaskCharacter(ch) => m.set_mask_character(*ch),
            PinCodeOption::Placeholder(p) => m.set_placeholder(p),
            PinCodeOption::Decoration(d) => m.decoration = *d,
        }
    }
}

/// Creates a new pincode field and applies `opts` in order.
///
/// ```rust
/// use bubbletea_pincode::pincode::{new_with_options, CharacterSet, PinCodeOption};
///
/// let field = new_with_options(&[
///     PinCodeOption::CharLimit(6),
///     PinCodeOption::AllowedCharacters(CharacterSet::Digits),
///     PinCodeOption::Placeholder("000000".into()),
/// ]);
/// assert_eq!(field.char_limit(), 6);
/// ```
pub fn new_with_options(opts: &[PinCodeOption]) -> Model {
    let mut m = new();
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Model {
    /// Sets the number of slots, builder style.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.set_char_limit(limit);
        self
    }

    /// Sets the accepted characters, builder style.
    pub fn with_allowed_characters(mut self, set: CharacterSet) -> Self {
        self.set_allowed_characters(set);
        self
    }

    /// Turns secure entry on or off, builder style.
    pub fn with_secure_text_entry(mut self, on: bool) -> Self {
        self.set_secure_text_entry(on);
        self
    }

    /// Sets the mask glyph, builder style.
    pub fn with_mask_character(mut self, ch: char) -> Self {
        self.set_mask_character(ch);
        self
    }

    /// Sets the placeholder, builder style.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.set_placeholder(placeholder);
        self
    }

    /// Sets the slot decoration, builder style.
    pub fn with_decoration(mut self, decoration: SlotDecoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Attaches a delegate, builder style.
    pub fn with_delegate<D>(mut self, delegate: D) -> Self
    where
        D: PinCodeDelegate + Send + 'static,
    {
        self.set_delegate(delegate);
        self
    }
}

/// Creates a command that reads the system clipboard.
///
/// The command yields `PasteMsg` with the clipboard text, or `PasteErrMsg`
/// when the clipboard cannot be read or support is compiled out.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

/// Creates a command that delivers a [`CompletedMsg`] carrying `value`.
pub fn completed(value: String) -> Cmd {
    Box::pin(async move { Some(Box::new(CompletedMsg { value }) as Msg) })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
