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
use crate::*;

use super::text_edit::{apply_text_input, cursor_from_x, cursor_x};

impl Context {
    /// Single line text field bound to `buf`.
    ///
    /// A click (or `opt::FOCUS`) enters editing mode; return submits and leaves it,
    /// escape or a click elsewhere leaves it. Returns [`ResourceState::CHANGE`] when the
    /// text changed and [`ResourceState::SUBMIT`] when return was pressed.
    pub fn text_input(&mut self, label: &str, buf: &mut String, opts: &Options) -> ResourceState {
        let id = self.widget_id(label, opts);
        let mut state = self.store_mut().get(id, TextEditState::default());
        let natural = vec2(self.style().default_cell_width * 3, self.widget_height());
        let r = self.item_rect(opts, natural);
        let control = self.update_control(id, r, opts, true);
        let pad = self.style().padding;
        state.clamp(buf);

        let mut res = ResourceState::NONE;
        if control.focused && !state.editing {
            log::trace!("text input {:?} enters editing", id);
            state.editing = true;
            let end = buf.chars().count();
            state.set_cursor(end, false);
        } else if !control.focused && state.editing {
            log::trace!("text input {:?} leaves editing", id);
            state.editing = false;
        }

        if state.editing {
            let origin = r.x + pad - state.scroll_x;
            if control.clicked || control.active {
                let pos = cursor_from_x(self.font(), buf, self.input().mouse_pos().x - origin);
                let extend = !control.clicked || self.input().modifiers().is_shift();
                state.set_cursor(pos, extend);
            }
            let outcome = apply_text_input(buf, &mut state, &self.input);
            if outcome.changed {
                res |= ResourceState::CHANGE;
            }
            if outcome.submit {
                res |= ResourceState::SUBMIT;
            }
            if outcome.submit || outcome.cancel {
                log::trace!("text input {:?} leaves editing", id);
                state.editing = false;
                self.set_focus(None);
            }
        }

        let inner = (r.width - 2 * pad).max(0);
        if state.editing {
            let caret = cursor_x(self.font(), buf, state.cursor);
            if caret - state.scroll_x > inner {
                state.scroll_x = caret - inner;
            } else if caret < state.scroll_x {
                state.scroll_x = caret;
            }
        } else {
            state.scroll_x = 0;
        }

        self.draw_widget_frame(&control, r, ControlColor::Base);
        let origin = vec2(r.x + pad - state.scroll_x, r.y + (r.height - self.font().line_height()) / 2);
        let line = self.font().line_height();
        self.push_clip_rect(r);
        if buf.is_empty() && !state.editing {
            if let Some(placeholder) = opts.get(&opt::PLACEHOLDER) {
                let faded = self.style().color(ControlColor::Text).fade(0.5);
                self.draw_text(&placeholder, origin, faded);
            }
        }
        if state.editing && state.has_selection() {
            let (start, end) = state.selected_range();
            let x0 = cursor_x(self.font(), buf, start);
            let x1 = cursor_x(self.font(), buf, end);
            let selection = self.style().color(ControlColor::Selection);
            self.draw_rect(rect(origin.x + x0, origin.y, x1 - x0, line), selection);
        }
        let text_color = self.style().color(ControlColor::Text);
        self.draw_text(buf, origin, text_color);
        if state.editing {
            let caret = cursor_x(self.font(), buf, state.cursor);
            self.draw_rect(rect(origin.x + caret, origin.y, 1, line), text_color);
        }
        self.pop_clip_rect();

        self.store_mut().set(id, state);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{keys, pointer, run, typed};

    fn editing(ctx: &Context, label: &str) -> bool { ctx.store().peek::<TextEditState>(Id::from_str(label)).is_some_and(|s| s.editing) }

    #[test]
    fn click_type_and_submit() {
        let mut ctx = Context::new();
        let mut name = String::new();
        let opts = Options::new();
        for input in [pointer(20, 5, false), pointer(20, 5, true), pointer(20, 5, false)] {
            run(&mut ctx, input, |ctx| ctx.text_input("name", &mut name, &opts));
        }
        assert!(editing(&ctx, "name"));

        let res = run(&mut ctx, typed("ab"), |ctx| ctx.text_input("name", &mut name, &opts));
        assert!(res.is_changed());
        assert_eq!(name, "ab");

        let res = run(&mut ctx, keys(KeyCode::RETURN, Modifiers::NONE), |ctx| ctx.text_input("name", &mut name, &opts));
        assert!(res.is_submitted());
        assert!(!editing(&ctx, "name"));
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn focus_option_enters_editing_and_escape_leaves() {
        let mut ctx = Context::new();
        let mut name = String::from("x");
        let focus = Options::new().with(&opt::FOCUS, true);
        let res = run(&mut ctx, typed("y"), |ctx| ctx.text_input("name", &mut name, &focus));
        assert!(res.is_changed());
        assert_eq!(name, "xy");
        run(&mut ctx, keys(KeyCode::ESCAPE, Modifiers::NONE), |ctx| ctx.text_input("name", &mut name, &focus));
        assert!(!editing(&ctx, "name"));
    }

    #[test]
    fn clicking_outside_leaves_editing() {
        let mut ctx = Context::new();
        let mut name = String::new();
        let opts = Options::new();
        for input in [pointer(20, 5, false), pointer(20, 5, true), pointer(20, 5, false)] {
            run(&mut ctx, input, |ctx| ctx.text_input("name", &mut name, &opts));
        }
        assert!(editing(&ctx, "name"));
        for input in [pointer(20, 150, false), pointer(20, 150, true)] {
            run(&mut ctx, input, |ctx| ctx.text_input("name", &mut name, &opts));
        }
        assert!(!editing(&ctx, "name"));
    }

    #[test]
    fn viewing_mode_ignores_typing() {
        let mut ctx = Context::new();
        let mut name = String::new();
        let opts = Options::new().with(&opt::PLACEHOLDER, Some("Name".to_string()));
        let res = run(&mut ctx, typed("zz"), |ctx| ctx.text_input("name", &mut name, &opts));
        assert!(res.is_none());
        assert!(name.is_empty());
        assert!(!ctx.draw_list().is_empty());
    }
}
