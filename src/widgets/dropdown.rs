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

use super::fill_color;

/// Persistent state of a dropdown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    /// The option list is shown.
    pub open: bool,
    /// Highlighted option of the open list.
    pub hovered: Option<usize>,
}

impl Context {
    /// Drop-down selector over `items` bound to the index `selected`.
    ///
    /// The open list is drawn on the overlay layer and covers widgets underneath it.
    /// Up/down move the highlight, return picks it and escape or a press outside the
    /// widget closes the list. Returns [`ResourceState::CHANGE`] when a new option was
    /// picked.
    pub fn dropdown<S: AsRef<str>>(&mut self, label: &str, items: &[S], selected: &mut usize, opts: &Options) -> ResourceState {
        let id = self.widget_id(label, opts);
        let mut state = self.store_mut().get(id, DropdownState::default());
        let height = self.widget_height();
        let widest = items.iter().map(|s| self.natural_width(s.as_ref())).max().unwrap_or(0);
        let natural = vec2(widest.max(self.natural_width(label)) + height, height);
        let r = self.item_rect(opts, natural);
        let control = self.update_control(id, r, opts, false);

        let mut res = ResourceState::NONE;
        if control.clicked {
            state.open = !state.open;
            state.hovered = Some(*selected).filter(|&s| s < items.len());
            log::trace!("dropdown {:?} {}", id, if state.open { "opened" } else { "closed" });
        }

        if state.open && !items.is_empty() {
            let list = rect(r.x, r.y + r.height, r.width, height * items.len() as i32);
            let last = items.len() - 1;
            if self.input().key_pressed(KeyCode::DOWN) {
                state.hovered = Some(state.hovered.map_or(0, |h| (h + 1).min(last)));
            }
            if self.input().key_pressed(KeyCode::UP) {
                state.hovered = Some(state.hovered.map_or(0, |h| h.saturating_sub(1)));
            }
            let mut picked = if self.input().key_pressed(KeyCode::RETURN) { state.hovered } else { None };

            let moved = self.input().mouse_delta();
            self.with_overlay(|ctx| {
                ctx.add_blocker(list);
                let base = ctx.style().color(ControlColor::Base);
                ctx.draw_rect(list, base);
                for (i, item) in items.iter().enumerate() {
                    let row = rect(list.x, list.y + i as i32 * height, list.width, height);
                    let row_control = ctx.update_control(id.child_index(i as u32), row, &Options::new(), false);
                    if row_control.hovered && (moved.x != 0 || moved.y != 0) {
                        state.hovered = Some(i);
                    }
                    if row_control.clicked {
                        picked = Some(i);
                    }
                    let fill = if i == *selected {
                        Some(ControlColor::Selection)
                    } else if state.hovered == Some(i) {
                        Some(ControlColor::ButtonHover)
                    } else {
                        None
                    };
                    if let Some(fill) = fill {
                        let color = ctx.style().color(fill);
                        ctx.draw_rect(row, color);
                    }
                    ctx.draw_control_text(item.as_ref(), row, ControlColor::Text, Align::Start);
                }
                let border = ctx.style().color(ControlColor::Border);
                ctx.draw_list_mut().add_rect_outline(list, border, 1);
            });

            let mouse = self.input().mouse_pos();
            let pressed_outside = !self.input().pressed_buttons().is_none() && !rect_contains(&list, mouse) && !rect_contains(&r, mouse);
            if let Some(i) = picked {
                if i != *selected {
                    *selected = i;
                    res |= ResourceState::CHANGE;
                }
                state.open = false;
            } else if pressed_outside || self.input().key_pressed(KeyCode::ESCAPE) {
                state.open = false;
            }
            if !state.open {
                log::trace!("dropdown {:?} closed", id);
            }
        }
        self.store_mut().set(id, state);

        self.draw_frame(r, fill_color(&control, ControlColor::Button));
        let text = items.get(*selected).map_or("", |s| s.as_ref());
        let text_rect = rect(r.x, r.y, r.width - height, r.height);
        self.draw_control_text(text, text_rect, ControlColor::Text, Align::Start);
        let arrow = rect(r.x + r.width - height, r.y, height, r.height);
        self.draw_control_text(if state.open { "^" } else { "v" }, arrow, ControlColor::Text, Align::Center);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{keys, pointer, run};

    const SIZES: [&str; 3] = ["small", "medium", "large"];

    fn open(ctx: &mut Context, selected: &mut usize) {
        for input in [pointer(20, 5, false), pointer(20, 5, true), pointer(20, 5, false)] {
            run(ctx, input, |ctx| ctx.dropdown("size", &SIZES, selected, &Options::new()));
        }
    }

    fn is_open(ctx: &Context) -> bool { ctx.store().peek::<DropdownState>(Id::from_str("size")).is_some_and(|s| s.open) }

    #[test]
    fn picking_an_option_with_the_pointer() {
        let mut ctx = Context::new();
        let mut selected = 0;
        open(&mut ctx, &mut selected);
        assert!(is_open(&ctx));
        run(&mut ctx, pointer(20, 60, false), |ctx| ctx.dropdown("size", &SIZES, &mut selected, &Options::new()));
        let res = run(&mut ctx, pointer(20, 60, true), |ctx| ctx.dropdown("size", &SIZES, &mut selected, &Options::new()));
        assert!(res.is_changed());
        assert_eq!(selected, 2);
        assert!(!is_open(&ctx));
    }

    #[test]
    fn open_list_covers_base_widgets() {
        let mut ctx = Context::new();
        let mut selected = 0;
        open(&mut ctx, &mut selected);
        let covered = run(&mut ctx, pointer(20, 35, false), |ctx| {
            ctx.dropdown("size", &SIZES, &mut selected, &Options::new());
            ctx.mouse_over(rect(0, 30, 100, 10))
        });
        assert!(!covered);
    }

    #[test]
    fn pressing_outside_closes_without_changing() {
        let mut ctx = Context::new();
        let mut selected = 1;
        open(&mut ctx, &mut selected);
        let res = run(&mut ctx, pointer(20, 150, true), |ctx| ctx.dropdown("size", &SIZES, &mut selected, &Options::new()));
        assert!(res.is_none());
        assert_eq!(selected, 1);
        assert!(!is_open(&ctx));
    }

    #[test]
    fn keyboard_navigation() {
        let mut ctx = Context::new();
        let mut selected = 0;
        open(&mut ctx, &mut selected);
        run(&mut ctx, keys(KeyCode::DOWN, Modifiers::NONE), |ctx| ctx.dropdown("size", &SIZES, &mut selected, &Options::new()));
        let res = run(&mut ctx, keys(KeyCode::RETURN, Modifiers::NONE), |ctx| ctx.dropdown("size", &SIZES, &mut selected, &Options::new()));
        assert!(res.is_changed());
        assert_eq!(selected, 1);
        assert!(!is_open(&ctx));
    }
}
