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
use crate::layout::LayoutParams;
use crate::scope::ScopeEnd;
use crate::scrollbar::{drag_to_scroll, max_scroll, scrollbar_geometry, scrollbar_track};
use crate::*;

/// Persistent state of a vertical scroll area.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScrollState {
    /// Displayed scroll offset following its target.
    pub offset: Smooth,
    /// Content size measured at the end of the last frame.
    pub content: Vec2i,
    /// Visible rectangle of the last frame.
    pub visible: Recti,
}

impl ScrollState {
    /// Largest valid scroll offset for the last measured content.
    pub fn max_offset(&self) -> i32 { max_scroll(self.content.y, self.visible.height) }
}

/// Data carried from `begin_scroll_area` to its end.
pub(crate) struct ScrollFrame {
    id: Id,
    visible: Recti,
    show_scrollbar: bool,
    scroll_to: Option<f32>,
    stick_to_bottom: bool,
}

impl Context {
    /// Opens a vertically scrolling area of `opt::HEIGHT` (default: the remaining
    /// height). Widgets placed in the returned scope are clipped to the area and
    /// shifted by the scroll offset.
    pub fn begin_scroll_area(&mut self, label: &str, opts: &Options) -> Scope<'_> {
        let id = self.widget_id(label, opts);
        self.ids.push_id(id);
        let state = self.store_mut().get(id, ScrollState::default());

        let natural = self.remaining();
        let visible = self.item_rect(opts, natural);
        let show_scrollbar = opts.get(&opt::SHOW_SCROLLBAR);
        let bar = if show_scrollbar && state.max_offset() > 0 { self.style().scrollbar_size } else { 0 };

        let params = LayoutParams { width: None, height: None, ..LayoutParams::resolve(Direction::Vertical, opts, self.style().spacing) };
        let origin = vec2(visible.x, visible.y - state.offset.value().round() as i32);
        self.push_clip_rect(visible);
        self.layout.push_detached(Direction::Vertical, origin, vec2((visible.width - bar).max(0), visible.height), params);

        let frame = ScrollFrame {
            id,
            visible,
            show_scrollbar,
            scroll_to: opts.get(&opt::SCROLL_TO),
            stick_to_bottom: opts.get(&opt::STICK_TO_BOTTOM),
        };
        Scope::new(self, ScopeEnd::Scroll(frame))
    }

    /// Runs `f` inside a scroll area. Returns the visible rectangle.
    pub fn scroll_area<F: FnOnce(&mut Context)>(&mut self, label: &str, opts: &Options, f: F) -> Recti {
        let mut scope = self.begin_scroll_area(label, opts);
        f(&mut scope);
        scope.end()
    }
}

pub(crate) fn end_scroll_area(ctx: &mut Context, frame: ScrollFrame) -> Recti {
    let content = ctx.layout.pop();
    ctx.pop_clip_rect();

    let ScrollFrame { id, visible, show_scrollbar, scroll_to, stick_to_bottom } = frame;
    let mut state = ctx.store_mut().get(id, ScrollState::default());
    state.content = vec2(content.width, content.height);
    state.visible = visible;
    let max = state.max_offset() as f32;
    let mut target = state.offset.target();
    let mut user_scrolled = false;

    let wheel = ctx.input.pending_scroll();
    if wheel.y != 0 && ctx.mouse_over(visible) {
        target -= (wheel.y * ctx.style().scroll_step) as f32;
        ctx.input.consume_scroll();
        user_scrolled = true;
    }

    let (bar_size, thumb_size) = (ctx.style().scrollbar_size, ctx.style().thumb_size);
    let track = scrollbar_track(Direction::Vertical, visible, bar_size);
    let has_bar = show_scrollbar && max > 0.0;
    if has_bar {
        let geometry = scrollbar_geometry(Direction::Vertical, track, visible.height, state.content.y, state.offset.value(), thumb_size);
        let control = ctx.update_control(id.child("!thumb"), geometry.thumb, &Options::new(), false);
        if control.active && !control.clicked {
            target += drag_to_scroll(Direction::Vertical, ctx.input.mouse_delta(), &geometry, state.content.y, visible.height);
            user_scrolled = true;
        }
    }

    if !user_scrolled {
        if let Some(to) = scroll_to {
            target = to;
        }
        if stick_to_bottom {
            target = max;
        }
    }
    state.offset.set_target(target.clamp(0.0, max));
    state.offset.update_with(ctx.dt(), ctx.style().smoothing_rate);

    if has_bar {
        let geometry = scrollbar_geometry(Direction::Vertical, track, visible.height, state.content.y, state.offset.value(), thumb_size);
        ctx.draw_frame(geometry.track, ControlColor::ScrollBase);
        ctx.draw_frame(geometry.thumb, ControlColor::ScrollThumb);
    }

    ctx.store_mut().set(id, state);
    ctx.pop_id();
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pointer, run};

    fn wheel(x: i32, y: i32, dy: i32) -> InputSnapshot { InputSnapshot { scroll: vec2(0, dy), ..pointer(x, y, false) } }

    fn rows(ctx: &mut Context, n: usize) {
        for _ in 0..n {
            ctx.allocate(vec2(50, 20));
        }
    }

    fn state(ctx: &Context, label: &str) -> ScrollState { ctx.store().peek::<ScrollState>(Id::from_str(label)).copied().unwrap_or_default() }

    fn height(h: i32) -> Options { Options::new().with(&opt::HEIGHT, Some(h)) }

    #[test]
    fn wheel_moves_the_target_within_bounds() {
        let mut ctx = Context::new();
        let area = |ctx: &mut Context| ctx.scroll_area("log", &height(100), |ui| rows(ui, 10));
        run(&mut ctx, pointer(10, 10, false), area);
        // 10 rows of 20 with 9 gaps of 4
        assert_eq!(state(&ctx, "log").content.y, 236);
        assert_eq!(state(&ctx, "log").max_offset(), 136);

        run(&mut ctx, wheel(10, 10, -1), area);
        assert_eq!(state(&ctx, "log").offset.target(), 30.0);
        run(&mut ctx, wheel(10, 10, -10), area);
        assert_eq!(state(&ctx, "log").offset.target(), 136.0);
        run(&mut ctx, wheel(10, 10, 20), area);
        assert_eq!(state(&ctx, "log").offset.target(), 0.0);
        run(&mut ctx, wheel(10, 150, -1), area);
        assert_eq!(state(&ctx, "log").offset.target(), 0.0);
    }

    #[test]
    fn displayed_offset_follows_the_target() {
        let mut ctx = Context::new();
        let area = |ctx: &mut Context| ctx.scroll_area("log", &height(100), |ui| rows(ui, 10));
        run(&mut ctx, pointer(10, 10, false), area);
        run(&mut ctx, wheel(10, 10, -2), area);
        let first = state(&ctx, "log").offset.value();
        assert!(first > 0.0 && first < 60.0);
        for _ in 0..120 {
            run(&mut ctx, pointer(10, 10, false), area);
        }
        assert_eq!(state(&ctx, "log").offset.value(), 60.0);
    }

    #[test]
    fn style_rate_drives_the_offset() {
        let area = |ctx: &mut Context| ctx.scroll_area("log", &height(100), |ui| rows(ui, 10));

        let mut default = Context::new();
        run(&mut default, pointer(10, 10, false), area);
        run(&mut default, wheel(10, 10, -1), area);
        assert!(state(&default, "log").offset.value() < 30.0);

        let mut fast = Context::new();
        fast.set_style(Style { smoothing_rate: 1e6, ..Style::default() });
        run(&mut fast, pointer(10, 10, false), area);
        run(&mut fast, wheel(10, 10, -1), area);
        assert_eq!(state(&fast, "log").offset.value(), 30.0);
    }

    #[test]
    fn content_is_shifted_by_the_offset() {
        let mut ctx = Context::new();
        let mut first_row = Recti::default();
        let mut area = |ctx: &mut Context| {
            ctx.scroll_area("log", &height(100), |ui| {
                first_row = ui.allocate(vec2(50, 20));
                rows(ui, 9);
            })
        };
        run(&mut ctx, pointer(10, 10, false), &mut area);
        run(&mut ctx, wheel(10, 10, -1), &mut area);
        for _ in 0..120 {
            run(&mut ctx, pointer(10, 10, false), &mut area);
        }
        assert_eq!(first_row.y, -30);
    }

    #[test]
    fn innermost_area_consumes_the_wheel() {
        let mut ctx = Context::new();
        let nested = |ctx: &mut Context| {
            ctx.scroll_area("outer", &height(150), |ui| {
                ui.scroll_area("inner", &height(60), |ui| rows(ui, 10));
                rows(ui, 10);
            })
        };
        run(&mut ctx, pointer(10, 10, false), nested);
        run(&mut ctx, wheel(10, 10, -1), nested);
        let inner = ctx.store().peek::<ScrollState>(Id::from_str("outer").child("inner")).copied().unwrap_or_default();
        assert_eq!(inner.offset.target(), 30.0);
        assert_eq!(state(&ctx, "outer").offset.target(), 0.0);
    }

    #[test]
    fn programmatic_requests_yield_to_the_user() {
        let mut ctx = Context::new();
        let stick = height(100).with(&opt::STICK_TO_BOTTOM, true);
        run(&mut ctx, pointer(10, 10, false), |ctx| ctx.scroll_area("log", &stick, |ui| rows(ui, 10)));
        run(&mut ctx, pointer(10, 10, false), |ctx| ctx.scroll_area("log", &stick, |ui| rows(ui, 10)));
        assert_eq!(state(&ctx, "log").offset.target(), 136.0);

        let to = height(100).with(&opt::SCROLL_TO, Some(40.0));
        run(&mut ctx, wheel(10, 10, 1), |ctx| ctx.scroll_area("log", &to, |ui| rows(ui, 10)));
        assert_eq!(state(&ctx, "log").offset.target(), 106.0);
        run(&mut ctx, pointer(10, 10, false), |ctx| ctx.scroll_area("log", &to, |ui| rows(ui, 10)));
        assert_eq!(state(&ctx, "log").offset.target(), 40.0);
    }

    #[test]
    fn dragging_the_thumb_scrolls() {
        let mut ctx = Context::new();
        let area = |ctx: &mut Context| ctx.scroll_area("log", &height(100), |ui| rows(ui, 10));
        run(&mut ctx, pointer(395, 5, false), area);
        run(&mut ctx, pointer(395, 5, false), area);
        run(&mut ctx, pointer(395, 5, true), area);
        run(&mut ctx, pointer(395, 25, true), area);
        assert!(state(&ctx, "log").offset.target() > 0.0);
    }
}
