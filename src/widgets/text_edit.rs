//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::{Font, InputState, KeyCode};

/// Bounded undo/redo history of text snapshots.
///
/// Every edit pushes the text as it was before the edit. Pushing a snapshot equal to
/// the newest one is ignored, and any new edit discards the redo history.
#[derive(Clone, Debug)]
pub struct UndoStack {
    past: Vec<String>,
    future: Vec<String>,
    capacity: usize,
}

impl Default for UndoStack {
    fn default() -> Self { Self::new(Self::DEFAULT_CAPACITY) }
}

impl UndoStack {
    /// Number of snapshots kept by default.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Creates an empty history keeping at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self { Self { past: Vec::new(), future: Vec::new(), capacity: capacity.max(1) } }

    /// Records the text as it was before an edit.
    pub fn push(&mut self, before: String) {
        self.future.clear();
        if self.past.last() == Some(&before) {
            return;
        }
        if self.past.len() == self.capacity {
            self.past.remove(0);
        }
        self.past.push(before);
    }

    /// Steps back. `current` moves to the redo history; returns the text to restore.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.past.pop()?;
        self.future.push(current.to_string());
        Some(previous)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.future.pop()?;
        self.past.push(current.to_string());
        Some(next)
    }

    /// Returns `true` when [`UndoStack::undo`] has something to restore.
    pub fn can_undo(&self) -> bool { !self.past.is_empty() }

    /// Returns `true` when [`UndoStack::redo`] has something to restore.
    pub fn can_redo(&self) -> bool { !self.future.is_empty() }

    /// Number of undo steps available.
    pub fn len(&self) -> usize { self.past.len() }

    /// Returns `true` when there is nothing to undo.
    pub fn is_empty(&self) -> bool { self.past.is_empty() }

    /// Forgets the whole history.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

/// Persistent state of a text input. Positions count Unicode scalar values, not bytes.
///
/// `selection_start` is the anchor and `selection_end` the moving end of the
/// selection; the cursor always sits at `selection_end`.
#[derive(Clone, Debug, Default)]
pub struct TextEditState {
    /// Cursor position.
    pub cursor: usize,
    /// Selection anchor.
    pub selection_start: usize,
    /// Moving end of the selection.
    pub selection_end: usize,
    /// The widget is in editing mode.
    pub editing: bool,
    /// Horizontal scroll of the text inside the widget, in pixels.
    pub scroll_x: i32,
    /// Edit history.
    pub undo: UndoStack,
}

/// Result of applying one frame of input to a text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TextEditOutcome {
    /// The text was modified.
    pub changed: bool,
    /// The cursor or selection moved.
    pub moved: bool,
    /// Return was pressed.
    pub submit: bool,
    /// Escape was pressed.
    pub cancel: bool,
}

fn rune_count(text: &str) -> usize { text.chars().count() }

fn byte_offset(text: &str, rune: usize) -> usize { text.char_indices().nth(rune).map_or(text.len(), |(b, _)| b) }

impl TextEditState {
    /// Selection as `(min, max)` regardless of the direction it was made in.
    pub fn selected_range(&self) -> (usize, usize) { (self.selection_start.min(self.selection_end), self.selection_start.max(self.selection_end)) }

    /// Returns `true` when a non-empty range is selected.
    pub fn has_selection(&self) -> bool { self.selection_start != self.selection_end }

    /// Clamps every position into `text`.
    pub fn clamp(&mut self, text: &str) {
        let len = rune_count(text);
        self.cursor = self.cursor.min(len);
        self.selection_start = self.selection_start.min(len);
        self.selection_end = self.selection_end.min(len);
    }

    /// Moves the cursor to `pos`, extending the selection when `extend` is set.
    pub fn set_cursor(&mut self, pos: usize, extend: bool) {
        self.cursor = pos;
        self.selection_end = pos;
        if !extend {
            self.selection_start = pos;
        }
    }

    /// Selects the whole text.
    pub fn select_all(&mut self, text: &str) {
        self.selection_start = 0;
        self.set_cursor(rune_count(text), true);
    }

    /// Replaces the selection (or inserts at the cursor) with `insert`, recording the
    /// previous text for undo. Returns `false` when nothing changed.
    pub fn replace_selection(&mut self, text: &mut String, insert: &str) -> bool {
        let (start, end) = self.selected_range();
        if start == end && insert.is_empty() {
            return false;
        }
        self.undo.push(text.clone());
        let (bs, be) = (byte_offset(text, start), byte_offset(text, end));
        text.replace_range(bs..be, insert);
        self.set_cursor(start + rune_count(insert), false);
        true
    }

    /// Deletes the selection, or the code point before the cursor.
    pub fn backspace(&mut self, text: &mut String) -> bool {
        if !self.has_selection() {
            if self.cursor == 0 {
                return false;
            }
            self.selection_start = self.cursor - 1;
            self.selection_end = self.cursor;
        }
        self.replace_selection(text, "")
    }

    /// Deletes the selection, or the code point after the cursor.
    pub fn delete(&mut self, text: &mut String) -> bool {
        if !self.has_selection() {
            if self.cursor >= rune_count(text) {
                return false;
            }
            self.selection_start = self.cursor;
            self.selection_end = self.cursor + 1;
        }
        self.replace_selection(text, "")
    }

    /// Moves one code point to the left. Without `extend`, an existing selection
    /// collapses to its start instead.
    pub fn move_left(&mut self, extend: bool) {
        let pos = if !extend && self.has_selection() { self.selected_range().0 } else { self.cursor.saturating_sub(1) };
        self.set_cursor(pos, extend);
    }

    /// Moves one code point to the right. Without `extend`, an existing selection
    /// collapses to its end instead.
    pub fn move_right(&mut self, text: &str, extend: bool) {
        let pos = if !extend && self.has_selection() { self.selected_range().1 } else { (self.cursor + 1).min(rune_count(text)) };
        self.set_cursor(pos, extend);
    }

    /// Restores the previous snapshot. Returns `false` when the history is empty.
    pub fn undo(&mut self, text: &mut String) -> bool {
        match self.undo.undo(text) {
            Some(previous) => {
                *text = previous;
                self.set_cursor(rune_count(text), false);
                true
            }
            None => false,
        }
    }

    /// Re-applies an undone edit.
    pub fn redo(&mut self, text: &mut String) -> bool {
        match self.undo.redo(text) {
            Some(next) => {
                *text = next;
                self.set_cursor(rune_count(text), false);
                true
            }
            None => false,
        }
    }
}

/// Applies one frame of keyboard and text input to `text`.
pub(crate) fn apply_text_input(text: &mut String, state: &mut TextEditState, input: &InputState) -> TextEditOutcome {
    let mut out = TextEditOutcome::default();
    state.clamp(text);
    let mods = input.modifiers();
    let shift = mods.is_shift();

    if mods.is_command() {
        if input.key_pressed(KeyCode::A) {
            state.select_all(text);
            out.moved = true;
        }
        if input.key_pressed(KeyCode::Z) {
            out.changed |= if shift { state.redo(text) } else { state.undo(text) };
        }
        if input.key_pressed(KeyCode::Y) {
            out.changed |= state.redo(text);
        }
    } else {
        let typed: String = input.text().chars().filter(|c| !c.is_control()).collect();
        if !typed.is_empty() {
            out.changed |= state.replace_selection(text, &typed);
        }
    }

    if input.key_pressed(KeyCode::BACKSPACE) {
        out.changed |= state.backspace(text);
    }
    if input.key_pressed(KeyCode::DELETE) {
        out.changed |= state.delete(text);
    }
    if input.key_pressed(KeyCode::LEFT) {
        state.move_left(shift);
        out.moved = true;
    }
    if input.key_pressed(KeyCode::RIGHT) {
        state.move_right(text, shift);
        out.moved = true;
    }
    if input.key_pressed(KeyCode::HOME) {
        state.set_cursor(0, shift);
        out.moved = true;
    }
    if input.key_pressed(KeyCode::END) {
        state.set_cursor(rune_count(text), shift);
        out.moved = true;
    }
    out.submit = input.key_pressed(KeyCode::RETURN);
    out.cancel = input.key_pressed(KeyCode::ESCAPE);
    out
}

/// Pixel offset of the code point boundary `rune` within `text`.
pub(crate) fn cursor_x(font: &dyn Font, text: &str, rune: usize) -> i32 { font.text_width(&text[..byte_offset(text, rune)]) }

/// Code point boundary closest to the pixel offset `x`.
pub(crate) fn cursor_from_x(font: &dyn Font, text: &str, x: i32) -> usize {
    let mut pen = 0;
    for (idx, c) in text.chars().enumerate() {
        let advance = font.glyph(c).map_or(0, |g| g.advance);
        if x < pen + advance / 2 {
            return idx;
        }
        pen += advance;
    }
    rune_count(text)
}
