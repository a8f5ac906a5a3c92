//! View rendering methods for the pincode component.

use super::model::Model;
use super::types::SlotKind;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

const UNDERLINE: &str = "─";

/// Everything needed to draw one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Position of the slot, starting at 0.
    pub index: usize,
    /// Glyph to show, if any.
    pub glyph: Option<char>,
    /// Whether the slot holds input or is still a placeholder.
    pub kind: SlotKind,
    /// Whether this is the next slot to be filled.
    pub active: bool,
}

impl Model {
    /// Number of slots to draw. Always equal to the character limit.
    pub fn slot_count(&self) -> usize {
        self.char_limit
    }

    /// Describes every slot for the current state.
    pub fn slots(&self) -> Vec<Slot> {
        let source = self.character_source();
        let len = source.text_len();
        (0..self.slot_count())
            .map(|index| Slot {
                index,
                glyph: source.character_at(index),
                kind: if source.is_placeholder(index) {
                    SlotKind::Placeholder
                } else {
                    SlotKind::Input
                },
                active: index == len,
            })
            .collect()
    }

    /// Width in cells of the row of slots, spacing included.
    pub fn block_width(&self) -> usize {
        let n = self.slot_count();
        n * self.slot_width + n.saturating_sub(1) * self.slot_spacing
    }

    /// Cells left of the first slot so the row is centred within `width`.
    pub fn left_margin(&self) -> usize {
        self.width.saturating_sub(self.block_width()) / 2
    }

    /// View renders the field: one row of glyphs and, when the decoration
    /// includes it, one row of underlines.
    pub fn view(&self) -> String {
        let slots = self.slots();
        let margin = " ".repeat(self.left_margin());
        let gap = " ".repeat(self.slot_spacing);

        let glyphs: Vec<String> = slots.iter().map(|s| self.render_glyph_cell(s)).collect();
        let mut out = format!("{}{}", margin, glyphs.join(&gap));

        if self.decoration.has_underline() {
            let lines: Vec<String> = slots.iter().map(|s| self.render_underline(s)).collect();
            out.push('\n');
            out.push_str(&margin);
            out.push_str(&lines.join(&gap));
        }

        out
    }

    fn render_glyph_cell(&self, slot: &Slot) -> String {
        let glyph = slot.glyph.map(String::from).unwrap_or_default();
        let glyph_width = slot.glyph.and_then(|c| c.width()).unwrap_or(0);
        let free = self.slot_width.saturating_sub(glyph_width);
        // Odd leftovers go to the right, matching a rounded-down centre.
        let left = " ".repeat(free / 2);
        let right = " ".repeat(free - free / 2);

        let style = match slot.kind {
            SlotKind::Input => &self.text_style,
            SlotKind::Placeholder => &self.placeholder_style,
        };

        if self.decoration.has_background() {
            let boxed = Style::new().background(self.slot_background.clone());
            let styled = style.clone().background(self.slot_background.clone());
            format!(
                "{}{}{}",
                boxed.render(&left),
                styled.render(&glyph),
                boxed.render(&right)
            )
        } else {
            format!("{}{}{}", left, style.render(&glyph), right)
        }
    }

    fn render_underline(&self, slot: &Slot) -> String {
        let line = UNDERLINE.repeat(self.slot_width);
        let plain = slot.kind == SlotKind::Placeholder && !(self.highlight_active_slot && slot.active);
        if !self.recolor_underlines || plain {
            self.underline_style.render(&line)
        } else {
            self.filled_underline_style.render(&line)
        }
    }
}
