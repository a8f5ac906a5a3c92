//! Core types for the pincode component.

use bubbletea_rs::Msg;

/// Default character limit for a new field.
pub const DEFAULT_CHAR_LIMIT: usize = 4;

/// Default glyph shown in place of real characters in secure mode.
pub const DEFAULT_MASK_CHARACTER: char = '•';

/// How full the field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    /// No text, or text of zero length.
    Empty,
    /// Some characters entered, fewer than the limit.
    PartiallyFilled,
    /// Exactly `char_limit` characters entered.
    Filled,
}

impl FillState {
    /// Classifies a text length against a limit.
    pub fn of(len: usize, limit: usize) -> Self {
        if len == 0 {
            FillState::Empty
        } else if len >= limit {
            FillState::Filled
        } else {
            FillState::PartiallyFilled
        }
    }
}

/// What a slot is showing, used to pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// The slot holds an entered character (possibly masked).
    Input,
    /// The slot is not filled yet; it shows a placeholder glyph or nothing.
    Placeholder,
}

/// Decoration drawn for each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotDecoration {
    /// A line under every slot.
    #[default]
    Underline,
    /// A filled box behind every slot, painted with `slot_background`.
    Background,
    /// Both a box and an underline.
    Both,
}

impl SlotDecoration {
    pub(super) fn has_underline(self) -> bool {
        matches!(self, SlotDecoration::Underline | SlotDecoration::Both)
    }

    pub(super) fn has_background(self) -> bool {
        matches!(self, SlotDecoration::Background | SlotDecoration::Both)
    }
}

/// Tap or click on the field forwarded by the host application.
///
/// Handled even while the field is unfocused; it asks to begin editing.
#[derive(Debug, Clone, Copy)]
pub struct ActivateMsg;

/// Sent after an update fills every slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedMsg {
    /// The complete value.
    pub value: String,
}

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<ActivateMsg> for Msg {
    fn from(msg: ActivateMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<CompletedMsg> for Msg {
    fn from(msg: CompletedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
