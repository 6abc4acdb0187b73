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

/// Persistent state of a toast notification.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    /// Text shown.
    pub message: String,
    /// Seconds left before the toast starts fading out.
    pub remaining: f32,
    /// Opacity, faded in and out.
    pub alpha: Smooth,
}

impl ToastState {
    /// Returns `true` while the toast is shown or fading.
    pub fn is_visible(&self) -> bool { self.remaining > 0.0 || self.alpha.value() > 0.0 }
}

impl Context {
    fn toast_id(&self, label: &str, opts: &Options) -> Id { opts.get(&opt::ID).unwrap_or_else(|| self.ids.current_scope().child(label)) }

    /// Shows `message` in the toast `label` for `opt::DURATION` seconds.
    pub fn push_toast(&mut self, label: &str, message: &str, opts: &Options) {
        let id = self.toast_id(label, opts);
        let duration = opts.get(&opt::DURATION).max(0.0);
        self.store_mut().update(id, ToastState::default(), |state| {
            state.message = message.to_string();
            state.remaining = duration;
            state.alpha.set_target(1.0);
        });
    }

    /// Draws the toast `label` centered at the bottom of the display, on the overlay
    /// layer. Returns `true` while it is visible.
    pub fn toast(&mut self, label: &str, opts: &Options) -> bool {
        let id = self.toast_id(label, opts);
        let dt = self.dt();
        let Some(mut state) = self.store().peek::<ToastState>(id).cloned() else {
            return false;
        };
        if state.remaining > 0.0 {
            state.remaining = (state.remaining - dt).max(0.0);
            if state.remaining == 0.0 {
                state.alpha.set_target(0.0);
            }
        }
        state.alpha.update_with(dt, self.style().smoothing_rate);
        let visible = state.is_visible();
        if visible {
            let pad = self.style().padding;
            let height = self.widget_height();
            let width = self.text_width(&state.message) + 2 * pad;
            let display = self.display();
            let r = rect((display.width - width) / 2, display.height - height - 2 * pad, width, height);
            let alpha = state.alpha.value().clamp(0.0, 1.0);
            let (background, text) = (self.style().color(ControlColor::WindowBG).fade(alpha), self.style().color(ControlColor::Text).fade(alpha));
            self.with_overlay(|ctx| {
                ctx.draw_rect(r, background);
                let y = r.y + (r.height - ctx.font().line_height()) / 2;
                ctx.draw_text(&state.message, vec2(r.x + pad, y), text);
            });
        }
        self.store_mut().set(id, state);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run;

    fn alpha(ctx: &Context) -> f32 { ctx.store().peek::<ToastState>(Id::from_str("status")).map_or(0.0, |s| s.alpha.value()) }

    #[test]
    fn unknown_toasts_draw_nothing() {
        let mut ctx = Context::new();
        assert!(!run(&mut ctx, InputSnapshot::default(), |ctx| ctx.toast("status", &Options::new())));
        assert!(ctx.draw_list().is_empty());
    }

    #[test]
    fn toast_fades_in_holds_and_fades_out() {
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::DURATION, 0.5);
        run(&mut ctx, InputSnapshot::default(), |ctx| ctx.push_toast("status", "Saved", &opts));

        let mut last = 0.0;
        for _ in 0..10 {
            assert!(run(&mut ctx, InputSnapshot::default(), |ctx| ctx.toast("status", &opts)));
            assert!(alpha(&ctx) > last);
            last = alpha(&ctx);
        }
        assert!(!ctx.draw_list().is_empty());

        let mut frames = 0;
        while run(&mut ctx, InputSnapshot::default(), |ctx| ctx.toast("status", &opts)) {
            frames += 1;
            assert!(frames < 600);
        }
        assert!(frames > 20);
        assert_eq!(alpha(&ctx), 0.0);
        assert!(ctx.draw_list().is_empty());
    }
}
