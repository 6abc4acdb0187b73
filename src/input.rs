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
use super::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as reported by the input system.
    pub struct MouseButton : u32 {
        /// Forward side button.
        const FORWARD = 16;
        /// Back side button.
        const BACK = 8;
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the left mouse button is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no mouse buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Modifier keys held during the frame.
    pub struct Modifiers : u32 {
        /// Super/command key held.
        const SUPER = 8;
        /// Alt key held.
        const ALT = 4;
        /// Control key held.
        const CTRL = 2;
        /// Shift key held.
        const SHIFT = 1;
        /// No modifiers active.
        const NONE = 0;
    }
}

impl Modifiers {
    /// Returns `true` if Control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
    /// Returns `true` if Control or Super is held, the usual shortcut chord.
    pub fn is_command(&self) -> bool { self.intersects(Self::CTRL | Self::SUPER) }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Logical keys recognized by the widgets.
    pub struct KeyCode : u32 {
        /// Y key, used by the redo shortcut.
        const Y = 1 << 16;
        /// Z key, used by the undo shortcut.
        const Z = 1 << 15;
        /// A key, used by the select-all shortcut.
        const A = 1 << 14;
        /// Page down key.
        const PAGE_DOWN = 1 << 13;
        /// Page up key.
        const PAGE_UP = 1 << 12;
        /// Tab key.
        const TAB = 1 << 11;
        /// Escape key.
        const ESCAPE = 1 << 10;
        /// Return/Enter key.
        const RETURN = 1 << 9;
        /// Backspace key.
        const BACKSPACE = 1 << 8;
        /// Home key.
        const HOME = 1 << 7;
        /// Delete key.
        const DELETE = 32;
        /// End key.
        const END = 16;
        /// Right arrow key.
        const RIGHT = 8;
        /// Left arrow key.
        const LEFT = 4;
        /// Down arrow key.
        const DOWN = 2;
        /// Up arrow key.
        const UP = 1;
        /// No keys pressed.
        const NONE = 0;
    }
}

#[derive(Clone, Debug)]
/// Complete input state of one frame, produced by the windowing adapter.
pub struct InputSnapshot {
    /// Absolute mouse position in display coordinates.
    pub mouse_pos: Vec2i,
    /// Currently held mouse buttons.
    pub mouse_down: MouseButton,
    /// Currently held logical keys.
    pub keys_down: KeyCode,
    /// Text entered since the previous frame.
    pub text: String,
    /// Scroll wheel movement since the previous frame. Positive `y` scrolls toward the top.
    pub scroll: Vec2i,
    /// Held modifier keys.
    pub modifiers: Modifiers,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2i::default(),
            mouse_down: MouseButton::NONE,
            keys_down: KeyCode::NONE,
            text: String::new(),
            scroll: Vec2i::default(),
            modifiers: Modifiers::NONE,
        }
    }
}

/// Accumulates adapter events between frames and turns them into [`InputSnapshot`]s.
///
/// A button pressed and released before the next snapshot is reported as held for one
/// snapshot so quick clicks are not lost.
#[derive(Clone, Debug)]
pub struct Input {
    mouse_pos: Vec2i,
    mouse_down: MouseButton,
    mouse_pressed: MouseButton,
    keys_down: KeyCode,
    keys_pressed: KeyCode,
    modifiers: Modifiers,
    scroll_delta: Vec2i,
    text: String,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2i::default(),
            mouse_down: MouseButton::NONE,
            mouse_pressed: MouseButton::NONE,
            keys_down: KeyCode::NONE,
            keys_pressed: KeyCode::NONE,
            modifiers: Modifiers::NONE,
            scroll_delta: Vec2i::default(),
            text: String::new(),
        }
    }
}

impl Input {
    /// Creates an empty accumulator.
    pub fn new() -> Self { Self::default() }

    /// Updates the current mouse pointer position.
    pub fn mousemove(&mut self, x: i32, y: i32) { self.mouse_pos = vec2(x, y); }

    /// Records that the specified mouse button was pressed.
    pub fn mousedown(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down |= btn;
        self.mouse_pressed |= btn;
    }

    /// Records that the specified mouse button was released.
    pub fn mouseup(&mut self, x: i32, y: i32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down &= !btn;
    }

    /// Accumulates scroll wheel movement.
    pub fn scroll(&mut self, x: i32, y: i32) {
        self.scroll_delta.x += x;
        self.scroll_delta.y += y;
    }

    /// Records that a logical key was pressed.
    pub fn keydown(&mut self, key: KeyCode) {
        self.keys_down |= key;
        self.keys_pressed |= key;
    }

    /// Records that a logical key was released.
    pub fn keyup(&mut self, key: KeyCode) { self.keys_down &= !key; }

    /// Replaces the held modifier set.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) { self.modifiers = modifiers; }

    /// Appends UTF-8 text to the input buffer.
    pub fn text(&mut self, text: &str) { self.text.push_str(text); }

    /// Produces the snapshot for the next frame and clears the per-frame accumulators.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            mouse_pos: self.mouse_pos,
            mouse_down: self.mouse_down | self.mouse_pressed,
            keys_down: self.keys_down | self.keys_pressed,
            text: std::mem::take(&mut self.text),
            scroll: self.scroll_delta,
            modifiers: self.modifiers,
        };
        self.mouse_pressed = MouseButton::NONE;
        self.keys_pressed = KeyCode::NONE;
        self.scroll_delta = vec2(0, 0);
        snapshot
    }
}

/// Current and previous snapshots of the frame being built. Edges are derived by
/// diffing the two.
pub struct InputState {
    current: InputSnapshot,
    previous: InputSnapshot,
    scroll_consumed: bool,
}

impl Default for InputState {
    fn default() -> Self { Self { current: InputSnapshot::default(), previous: InputSnapshot::default(), scroll_consumed: false } }
}

impl InputState {
    /// Rolls the snapshots forward. A missing snapshot yields a frame without
    /// interaction: the pointer stays where it was and no edges are produced.
    pub(crate) fn advance(&mut self, next: Option<InputSnapshot>) {
        match next {
            Some(next) => {
                self.previous = std::mem::replace(&mut self.current, next);
            }
            None => {
                let idle = InputSnapshot { mouse_pos: self.current.mouse_pos, ..InputSnapshot::default() };
                self.previous = idle.clone();
                self.current = idle;
            }
        }
        self.scroll_consumed = false;
    }

    /// Snapshot of the current frame.
    pub fn snapshot(&self) -> &InputSnapshot { &self.current }

    /// Current pointer position.
    pub fn mouse_pos(&self) -> Vec2i { self.current.mouse_pos }

    /// Pointer movement since the previous frame.
    pub fn mouse_delta(&self) -> Vec2i {
        vec2(self.current.mouse_pos.x - self.previous.mouse_pos.x, self.current.mouse_pos.y - self.previous.mouse_pos.y)
    }

    /// Returns `true` while `btn` is held.
    pub fn mouse_down(&self, btn: MouseButton) -> bool { self.current.mouse_down.intersects(btn) }

    /// Returns `true` while any button is held.
    pub fn any_mouse_down(&self) -> bool { !self.current.mouse_down.is_empty() }

    /// Returns `true` on the frame `btn` went down.
    pub fn mouse_pressed(&self, btn: MouseButton) -> bool { self.pressed_buttons().intersects(btn) }

    /// Returns `true` on the frame `btn` went up.
    pub fn mouse_released(&self, btn: MouseButton) -> bool { (self.previous.mouse_down & !self.current.mouse_down).intersects(btn) }

    /// Buttons that went down this frame.
    pub fn pressed_buttons(&self) -> MouseButton { self.current.mouse_down & !self.previous.mouse_down }

    /// Returns `true` while `key` is held.
    pub fn key_down(&self, key: KeyCode) -> bool { self.current.keys_down.intersects(key) }

    /// Returns `true` on the frame `key` went down.
    pub fn key_pressed(&self, key: KeyCode) -> bool { (self.current.keys_down & !self.previous.keys_down).intersects(key) }

    /// Held modifiers.
    pub fn modifiers(&self) -> Modifiers { self.current.modifiers }

    /// Text entered this frame.
    pub fn text(&self) -> &str { &self.current.text }

    /// Wheel delta not yet claimed by a scroll area this frame.
    pub fn pending_scroll(&self) -> Vec2i { if self.scroll_consumed { Vec2i::default() } else { self.current.scroll } }

    /// Claims the wheel delta so enclosing scroll areas ignore it.
    pub(crate) fn consume_scroll(&mut self) { self.scroll_consumed = true; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_click_survives_one_snapshot() {
        let mut input = Input::new();
        input.mousedown(10, 10, MouseButton::LEFT);
        input.mouseup(10, 10, MouseButton::LEFT);
        let first = input.snapshot();
        assert!(first.mouse_down.is_left());
        let second = input.snapshot();
        assert!(second.mouse_down.is_none());
    }

    #[test]
    fn edges_come_from_diffing_snapshots() {
        let mut state = InputState::default();
        let down = InputSnapshot { mouse_down: MouseButton::LEFT, keys_down: KeyCode::RETURN, ..InputSnapshot::default() };
        state.advance(Some(down.clone()));
        assert!(state.mouse_pressed(MouseButton::LEFT));
        assert!(state.key_pressed(KeyCode::RETURN));
        state.advance(Some(down));
        assert!(!state.mouse_pressed(MouseButton::LEFT));
        assert!(state.mouse_down(MouseButton::LEFT));
        assert!(!state.key_pressed(KeyCode::RETURN));
        state.advance(Some(InputSnapshot::default()));
        assert!(state.mouse_released(MouseButton::LEFT));
    }

    #[test]
    fn missing_snapshot_produces_no_edges() {
        let mut state = InputState::default();
        state.advance(Some(InputSnapshot { mouse_pos: vec2(40, 50), mouse_down: MouseButton::LEFT, ..InputSnapshot::default() }));
        state.advance(None);
        assert!(!state.mouse_released(MouseButton::LEFT));
        assert!(!state.any_mouse_down());
        assert_eq!(state.mouse_pos().x, 40);
    }

    #[test]
    fn scroll_is_consumed_once() {
        let mut state = InputState::default();
        state.advance(Some(InputSnapshot { scroll: vec2(0, -2), ..InputSnapshot::default() }));
        assert_eq!(state.pending_scroll().y, -2);
        state.consume_scroll();
        assert_eq!(state.pending_scroll().y, 0);
    }
}
