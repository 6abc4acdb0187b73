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

impl Context {
    /// Draws a line of text.
    pub fn label(&mut self, text: &str, opts: &Options) -> Recti {
        let natural = vec2(self.text_width(text) + 2 * self.style().padding, self.widget_height());
        let r = self.item_rect(opts, natural);
        self.draw_control_text(text, r, ControlColor::Text, Align::Start);
        r
    }

    /// Push button. Returns [`ResourceState::SUBMIT`] on the frame it is clicked.
    pub fn button(&mut self, label: &str, opts: &Options) -> ResourceState {
        let id = self.widget_id(label, opts);
        let natural = vec2(self.natural_width(label), self.widget_height());
        let r = self.item_rect(opts, natural);
        let control = self.update_control(id, r, opts, false);

        let mut res = ResourceState::NONE;
        if control.clicked {
            res |= ResourceState::SUBMIT;
        }
        self.draw_frame(r, fill_color(&control, ControlColor::Button));
        self.draw_control_text(label, r, ControlColor::Text, Align::Center);
        res
    }

    /// Check box bound to `value`. Returns [`ResourceState::CHANGE`] when toggled.
    pub fn checkbox(&mut self, label: &str, value: &mut bool, opts: &Options) -> ResourceState {
        let id = self.widget_id(label, opts);
        let height = self.widget_height();
        let natural = vec2(height + self.text_width(label) + 2 * self.style().padding, height);
        let bounds = self.item_rect(opts, natural);
        let box_rect = rect(bounds.x, bounds.y, bounds.height, bounds.height);
        let control = self.update_control(id, bounds, opts, false);

        let mut res = ResourceState::NONE;
        if control.clicked {
            *value = !*value;
            res |= ResourceState::CHANGE;
        }
        self.draw_widget_frame(&control, box_rect, ControlColor::Base);
        if *value {
            let mark = expand_rect(box_rect, -(box_rect.height / 4).max(1));
            let text = self.style().color(ControlColor::Text);
            self.draw_rect(mark, text);
        }
        let text_rect = rect(bounds.x + box_rect.width, bounds.y, bounds.width - box_rect.width, bounds.height);
        self.draw_control_text(label, text_rect, ControlColor::Text, Align::Start);
        res
    }

    /// One pixel rule across the available width, padded vertically.
    pub fn separator(&mut self, opts: &Options) -> Recti {
        let pad = self.vertical_pad();
        let natural = vec2(self.remaining().x, 1 + 2 * pad);
        let r = self.item_rect(opts, natural);
        let border = self.style().color(ControlColor::Border);
        self.draw_rect(rect(r.x, r.y + r.height / 2, r.width, 1), border);
        r
    }

    /// Empty item of `opt::WIDTH` × `opt::HEIGHT` (zero by default).
    pub fn spacer(&mut self, opts: &Options) -> Recti {
        let size = vec2(opts.get(&opt::WIDTH).unwrap_or(0), opts.get(&opt::HEIGHT).unwrap_or(0));
        self.allocate(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pointer, run};

    #[test]
    fn button_submits_once_per_click() {
        let mut ctx = Context::new();
        let opts = Options::new();
        let frames = [pointer(20, 10, false), pointer(20, 10, true), pointer(20, 10, true), pointer(20, 10, false)];
        let results: Vec<bool> = frames.into_iter().map(|input| run(&mut ctx, input, |ctx| ctx.button("Save", &opts).is_submitted())).collect();
        assert_eq!(results, vec![false, true, false, false]);
    }

    #[test]
    fn buttons_with_the_same_label_are_independent() {
        let mut ctx = Context::new();
        let opts = Options::new();
        let h = ctx.widget_height();
        let spacing = ctx.style().spacing;
        let second_y = h + spacing + 2;
        let mut clicks = Vec::new();
        for input in [pointer(20, second_y, false), pointer(20, second_y, true)] {
            clicks = run(&mut ctx, input, |ctx| vec![ctx.button("Delete", &opts).is_submitted(), ctx.button("Delete", &opts).is_submitted()]);
        }
        assert_eq!(clicks, vec![false, true]);
    }

    #[test]
    fn checkbox_toggles_on_click() {
        let mut ctx = Context::new();
        let mut value = false;
        for input in [pointer(5, 5, false), pointer(5, 5, true), pointer(5, 5, false)] {
            run(&mut ctx, input, |ctx| ctx.checkbox("Enabled", &mut value, &Options::new()));
        }
        assert!(value);
    }

    #[test]
    fn spacer_and_label_sizes() {
        let mut ctx = Context::new();
        run(&mut ctx, InputSnapshot::default(), |ctx| {
            let s = ctx.spacer(&Options::new().with(&opt::HEIGHT, Some(12)));
            assert_eq!((s.width, s.height), (0, 12));
            let l = ctx.label("hi", &Options::new().with(&opt::WIDTH, Some(40)));
            assert_eq!(l.width, 40);
            assert_eq!(l.y, 12 + ctx.style().spacing);
            let sep = ctx.separator(&Options::new());
            assert_eq!(sep.width, 400);
        });
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::DISABLED, true);
        let mut submitted = false;
        for input in [pointer(20, 10, false), pointer(20, 10, true)] {
            submitted |= run(&mut ctx, input, |ctx| ctx.button("Save", &opts).is_submitted());
        }
        assert!(!submitted);
    }
}
