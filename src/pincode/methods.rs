//! Controller methods for the Model struct.

use super::charset::CharacterSet;
use super::delegate::{BoxedDelegate, PinCodeDelegate};
use super::model::{completed, paste, Model};
use super::source::CharacterSource;
use super::types::{ActivateMsg, FillState, PasteErrMsg, PasteMsg};
use crate::runeutil::{contains_line_break, is_only_line_breaks, sanitize_value};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// Returns the entered text, or an empty string when nothing was entered.
    pub fn value(&self) -> String {
        self.text.iter().flatten().collect()
    }

    /// Returns the entered text, distinguishing "never entered" (`None`)
    /// from "entered and deleted" (`Some("")`).
    pub fn text(&self) -> Option<String> {
        self.text.as_ref().map(|t| t.iter().collect())
    }

    /// Reports whether any characters are entered.
    pub fn has_text(&self) -> bool {
        self.text_len() > 0
    }

    /// Number of entered characters, in Unicode scalars.
    pub fn text_len(&self) -> usize {
        self.text.as_ref().map_or(0, Vec::len)
    }

    /// Returns the placeholder text, if any.
    pub fn placeholder(&self) -> Option<String> {
        self.placeholder.as_ref().map(|p| p.iter().collect())
    }

    /// How full the field is.
    pub fn fill_state(&self) -> FillState {
        FillState::of(self.text_len(), self.char_limit)
    }

    /// Reports whether every slot is filled.
    pub fn is_filled(&self) -> bool {
        self.fill_state() == FillState::Filled
    }

    /// Maximum number of characters, which is also the number of slots.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Characters accepted on insert.
    pub fn allowed_characters(&self) -> &CharacterSet {
        &self.allowed_characters
    }

    /// Whether entered characters are masked.
    pub fn secure_text_entry(&self) -> bool {
        self.secure_text_entry
    }

    /// Glyph shown in place of entered characters in secure mode.
    pub fn mask_character(&self) -> char {
        self.mask_character
    }

    /// Whether the field has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Builds the glyph lookup for the current state.
    pub fn character_source(&self) -> CharacterSource<'_> {
        CharacterSource::new(
            self.text.as_deref(),
            self.placeholder.as_deref(),
            self.secure_text_entry,
            self.mask_character,
        )
    }

    /// Glyph shown at slot `i`. See [`CharacterSource::character_at`].
    pub fn character_at(&self, i: usize) -> Option<char> {
        self.character_source().character_at(i)
    }

    /// Sets the number of slots.
    ///
    /// A limit of zero is raised to one. Text longer than the new limit is
    /// truncated without notifying the delegate.
    pub fn set_char_limit(&mut self, limit: usize) {
        if limit == 0 {
            log::warn!("pincode: character limit must be positive, using 1");
        }
        self.char_limit = limit.max(1);
        if let Some(text) = self.text.as_mut() {
            if text.len() > self.char_limit {
                log::trace!("pincode: truncating text to {} characters", self.char_limit);
                text.truncate(self.char_limit);
            }
        }
    }

    /// Sets the characters accepted on insert. Text already entered is kept.
    pub fn set_allowed_characters(&mut self, set: CharacterSet) {
        self.allowed_characters = set;
    }

    /// Turns secure (masked) entry on or off.
    pub fn set_secure_text_entry(&mut self, on: bool) {
        self.secure_text_entry = on;
    }

    /// Sets the glyph used for masking.
    pub fn set_mask_character(&mut self, ch: char) {
        self.mask_character = ch;
    }

    /// Sets the placeholder. An empty string removes it.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = if placeholder.is_empty() {
            None
        } else {
            Some(placeholder.chars().collect())
        };
    }

    /// Replaces the text without notifying the delegate.
    ///
    /// Line breaks are dropped and the result is cut to the character limit.
    /// The allowed character set is not applied.
    pub fn set_value(&mut self, s: &str) {
        self.text = Some(sanitize_value(s, self.char_limit));
    }

    /// Clears the text back to the never-entered state.
    pub fn reset(&mut self) {
        self.text = None;
    }

    /// Attaches a delegate, replacing any previous one.
    pub fn set_delegate<D>(&mut self, delegate: D)
    where
        D: PinCodeDelegate + Send + 'static,
    {
        self.delegate = Some(Box::new(delegate));
    }

    /// Detaches and returns the delegate.
    pub fn take_delegate(&mut self) -> Option<BoxedDelegate> {
        self.delegate.take()
    }

    /// Offers one character to the field.
    ///
    /// A line break is a return signal: the delegate is asked
    /// `should_return` and focus is released if it agrees. Any other
    /// character is appended only if it is allowed and fits, after which
    /// `value_changed` fires; filling the last slot then asks
    /// `should_end_editing`. Anything else is ignored.
    pub fn insert(&mut self, ch: char) {
        self.insert_runes(&[ch]);
    }

    /// Offers a whole string at once, as delivered by paste or autofill.
    ///
    /// The string is applied atomically: either every character is appended
    /// with a single `value_changed`, or nothing changes. A string made only
    /// of line breaks is a return signal. An empty string is ignored.
    pub fn insert_str(&mut self, s: &str) {
        let runes: Vec<char> = s.chars().collect();
        self.insert_runes(&runes);
    }

    fn insert_runes(&mut self, runes: &[char]) {
        if runes.is_empty() {
            return;
        }

        if is_only_line_breaks(runes) {
            log::debug!("pincode: line break entered, asking delegate to return");
            if self.ask(|d, m| d.should_return(m)) {
                self.yield_focus();
            }
            return;
        }

        if !self.can_insert(runes) {
            return;
        }

        self.text.get_or_insert_with(Vec::new).extend_from_slice(runes);
        log::trace!("pincode: text length now {}", self.text_len());
        self.notify(|d, m| d.value_changed(m));

        if self.is_filled() {
            log::trace!("pincode: all {} slots filled", self.char_limit);
            if self.ask(|d, m| d.should_end_editing(m)) {
                self.yield_focus();
            }
        }
    }

    fn can_insert(&self, runes: &[char]) -> bool {
        if contains_line_break(runes) {
            log::debug!("pincode: rejected input containing a line break");
            return false;
        }
        if !self.allowed_characters.contains_all(runes) {
            log::debug!("pincode: rejected characters outside the allowed set");
            return false;
        }
        if self.text_len() + runes.len() > self.char_limit {
            log::debug!(
                "pincode: rejected {} character(s), limit {} reached",
                runes.len(),
                self.char_limit
            );
            return false;
        }
        true
    }

    /// Removes the last character and fires `value_changed`.
    /// Does nothing when there is no text.
    pub fn delete_last(&mut self) {
        let removed = self.text.as_mut().and_then(Vec::pop);
        if removed.is_some() {
            log::trace!("pincode: deleted, text length now {}", self.text_len());
            self.notify(|d, m| d.value_changed(m));
        }
    }

    /// Asks the delegate `should_begin_editing`; if allowed, takes focus and
    /// fires `did_begin_editing`.
    pub fn request_focus(&mut self) {
        if self.ask(|d, m| d.should_begin_editing(m)) {
            log::trace!("pincode: focus acquired");
            self.focus = true;
            self.notify(|d, m| d.did_begin_editing(m));
        }
    }

    /// Fires `did_end_editing` and releases focus.
    pub fn yield_focus(&mut self) {
        self.notify(|d, m| d.did_end_editing(m));
        log::trace!("pincode: focus released");
        self.focus = false;
    }

    // The delegate is moved out for the duration of the call so it can be
    // handed a shared borrow of the model.
    fn ask<F>(&mut self, query: F) -> bool
    where
        F: FnOnce(&mut (dyn PinCodeDelegate + Send), &Model) -> bool,
    {
        match self.delegate.take() {
            Some(mut delegate) => {
                let answer = query(delegate.as_mut(), self);
                self.delegate = Some(delegate);
                answer
            }
            None => true,
        }
    }

    fn notify<F>(&mut self, event: F)
    where
        F: FnOnce(&mut (dyn PinCodeDelegate + Send), &Model),
    {
        if let Some(mut delegate) = self.delegate.take() {
            event(delegate.as_mut(), self);
            self.delegate = Some(delegate);
        }
    }

    /// Processes a message and updates the field.
    ///
    /// [`ActivateMsg`] is handled in any state. Key presses and pastes are
    /// only handled while focused. When the update fills the last slot, the
    /// returned command delivers a
    /// [`CompletedMsg`](super::types::CompletedMsg).
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<ActivateMsg>().is_some() {
            self.request_focus();
            return None;
        }

        if !self.focus {
            return None;
        }

        let was_filled = self.is_filled();

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.paste.matches(key_msg) {
                return Some(paste());
            }
            self.handle_key(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.err = None;
            self.insert_str(&paste_msg.0);
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            log::debug!("pincode: paste failed: {}", paste_err.0);
            self.err = Some(paste_err.0.clone());
        }

        if !was_filled && self.is_filled() {
            return Some(completed(self.value()));
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        if self.key_map.delete_character_backward.matches(key_msg) {
            self.delete_last();
        } else if self.key_map.submit.matches(key_msg) {
            self.insert('\n');
        } else if self.key_map.dismiss.matches(key_msg) {
            self.yield_focus();
        } else if let KeyCode::Char(ch) = key_msg.key {
            // Shift is folded into the character's case.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert(ch);
            }
        }
    }
}

impl Component for Model {
    /// Requests focus through the delegate. No command is needed.
    fn focus(&mut self) -> Option<Cmd> {
        self.request_focus();
        None
    }

    fn blur(&mut self) {
        self.yield_focus()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
