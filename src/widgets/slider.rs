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

/// Persistent state of a slider.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SliderState {
    /// The thumb follows the pointer until the button is released.
    pub dragging: bool,
}

/// Snaps `v` to `min + k * step` and clamps it to `[min, max]`.
fn quantize(v: f32, min: f32, max: f32, step: f32) -> f32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let v = if step > 0.0 { min + ((v - min) / step).round() * step } else { v };
    if v.is_finite() { v.clamp(lo, hi) } else { lo }
}

impl Context {
    /// Horizontal slider bound to `value` in `[opt::MIN, opt::MAX]`, snapped to
    /// `opt::STEP` when non-zero. Arrow keys nudge the value while the slider has focus.
    pub fn slider(&mut self, label: &str, value: &mut f32, opts: &Options) -> ResourceState {
        let id = self.widget_id(label, opts);
        let (min, max, step) = (opts.get(&opt::MIN), opts.get(&opt::MAX), opts.get(&opt::STEP));
        let mut state = self.store_mut().get(id, SliderState::default());

        let natural = vec2(self.style().default_cell_width * 2, self.widget_height());
        let base = self.item_rect(opts, natural);
        let control = self.update_control(id, base, opts, true);

        let last = *value;
        let mut v = last;
        let range = max - min;
        if control.clicked {
            state.dragging = true;
        }
        if state.dragging {
            if self.input().mouse_down(MouseButton::LEFT) && base.width > 0 {
                v = min + (self.input().mouse_pos().x - base.x) as f32 * range / base.width as f32;
            } else {
                state.dragging = false;
            }
        }
        if control.focused && !state.dragging {
            let nudge = if step > 0.0 { step } else { range / 100.0 };
            if self.input().key_pressed(KeyCode::LEFT) || self.input().key_pressed(KeyCode::DOWN) {
                v -= nudge;
            }
            if self.input().key_pressed(KeyCode::RIGHT) || self.input().key_pressed(KeyCode::UP) {
                v += nudge;
            }
        }
        v = if range == 0.0 { min } else { quantize(v, min, max, step) };
        *value = v;
        self.store_mut().set(id, state);

        let mut res = ResourceState::NONE;
        if last != v {
            res |= ResourceState::CHANGE;
        }
        if state.dragging {
            res |= ResourceState::ACTIVE;
        }

        self.draw_widget_frame(&control, base, ControlColor::Base);
        let w = self.style().thumb_size;
        let available = (base.width - w).max(0);
        let x = if range != 0.0 { ((v - min) * available as f32 / range) as i32 } else { 0 };
        let thumb = rect(base.x + x, base.y, w, base.height);
        self.draw_frame(thumb, fill_color(&control, ControlColor::Button));
        let text = if step >= 1.0 { format!("{v:.0}") } else { format!("{v:.2}") };
        self.draw_control_text(&text, base, ControlColor::Text, Align::Center);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{keys, pointer, run};

    fn opts() -> Options { Options::new().with(&opt::MIN, 0.0).with(&opt::MAX, 100.0).with(&opt::WIDTH, Some(200)) }

    #[test]
    fn quantize_snaps_and_clamps() {
        assert_eq!(quantize(12.6, 0.0, 100.0, 5.0), 15.0);
        assert_eq!(quantize(-3.0, 0.0, 100.0, 0.0), 0.0);
        assert_eq!(quantize(130.0, 0.0, 100.0, 0.0), 100.0);
        assert_eq!(quantize(f32::NAN, 0.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn dragging_follows_the_pointer_outside_the_track() {
        let mut ctx = Context::new();
        let mut value = 0.0;
        let frames = [pointer(10, 5, false), pointer(10, 5, true), pointer(100, 5, true), pointer(300, 40, true)];
        let mut results = Vec::new();
        for input in frames {
            results.push(run(&mut ctx, input, |ctx| ctx.slider("volume", &mut value, &opts())));
            if results.len() == 3 {
                assert_eq!(value, 50.0);
            }
        }
        assert_eq!(value, 100.0);
        assert!(results[2].is_changed() && results[2].is_active());
        run(&mut ctx, pointer(300, 40, false), |ctx| ctx.slider("volume", &mut value, &opts()));
        let state = ctx.store().peek::<SliderState>(Id::from_str("volume")).copied();
        assert_eq!(state, Some(SliderState { dragging: false }));
    }

    #[test]
    fn arrow_keys_nudge_a_focused_slider() {
        let mut ctx = Context::new();
        let mut value = 50.0;
        let step = opts().with(&opt::STEP, 10.0);
        for input in [pointer(100, 5, false), pointer(100, 5, true), pointer(100, 5, false)] {
            run(&mut ctx, input, |ctx| ctx.slider("volume", &mut value, &step));
        }
        let mut press = keys(KeyCode::RIGHT, Modifiers::NONE);
        press.mouse_pos = vec2(100, 5);
        let res = run(&mut ctx, press, |ctx| ctx.slider("volume", &mut value, &step));
        assert!(res.is_changed());
        assert_eq!(value, 60.0);
    }
}
