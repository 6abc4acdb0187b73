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
use crate::*;

/// Pointer interaction of a panel.
#[derive(Copy, Clone, Debug, Default)]
pub enum PanelDrag {
    /// No interaction.
    #[default]
    Idle,
    /// Moving by the title bar. `anchor` is the pointer position relative to the panel origin.
    Dragging {
        /// Grab offset inside the panel.
        anchor: Vec2i,
    },
    /// Resizing by the grip. `anchor` is the pointer position relative to the bottom-right corner.
    Resizing {
        /// Grab offset from the corner.
        anchor: Vec2i,
    },
}

/// Persistent state of a floating panel.
#[derive(Copy, Clone, Debug, Default)]
pub struct PanelState {
    /// Position the panel settles at.
    pub pos: Vec2i,
    /// Panel size including the title bar.
    pub size: Vec2i,
    /// Displayed x coordinate.
    pub display_x: Smooth,
    /// Displayed y coordinate.
    pub display_y: Smooth,
    /// Current pointer interaction.
    pub drag: PanelDrag,
    initialized: bool,
}

impl PanelState {
    /// Displayed rectangle.
    pub fn rect(&self) -> Recti { rect(self.display_x.value().round() as i32, self.display_y.value().round() as i32, self.size.x, self.size.y) }
}

pub(crate) struct PanelFrame {
    id: Id,
    rect: Recti,
    mark: DrawMark,
    grip: Option<Recti>,
    parent_z: u32,
}

/// Keeps at least `min_visible` pixels of the panel horizontally on the display and its
/// title bar reachable: `x ∈ [min_visible - w, W - min_visible]`, `y ∈ [0, H - min_visible]`.
pub fn clamp_panel_position(pos: Vec2i, size: Vec2i, display: Dimensioni, min_visible: i32) -> Vec2i {
    let x = pos.x.min(display.width - min_visible).max(min_visible - size.x);
    let y = pos.y.min(display.height - min_visible).max(0);
    vec2(x, y)
}

/// Rounds `pos` to the nearest multiple of `grid`. Non-positive grids leave it unchanged.
pub fn snap_to_grid(pos: Vec2i, grid: i32) -> Vec2i {
    if grid <= 0 {
        return pos;
    }
    let snap = |v: i32| (v as f32 / grid as f32).round() as i32 * grid;
    vec2(snap(pos.x), snap(pos.y))
}

/// Clamps like [`clamp_panel_position`], then moves each coordinate to the nearest
/// multiple of `grid` that stays inside the clamp range. A coordinate whose range holds
/// no multiple keeps the clamped value.
pub fn clamp_to_grid(pos: Vec2i, size: Vec2i, display: Dimensioni, min_visible: i32, grid: i32) -> Vec2i {
    let clamped = clamp_panel_position(pos, size, display, min_visible);
    if grid <= 0 {
        return clamped;
    }
    let align = |v: i32, lo: i32, hi: i32| {
        let below = v.div_euclid(grid) * grid;
        if below == v {
            return v;
        }
        let above = below + grid;
        let nearest = if v - below < above - v { [below, above] } else { [above, below] };
        nearest.into_iter().find(|c| (lo..=hi).contains(c)).unwrap_or(v)
    };
    let x = align(clamped.x, min_visible - size.x, (display.width - min_visible).max(min_visible - size.x));
    let y = align(clamped.y, 0, (display.height - min_visible).max(0));
    vec2(x, y)
}

/// Moves a panel flush with a display edge when it is within `margin` pixels of it.
pub fn snap_to_edges(pos: Vec2i, size: Vec2i, display: Dimensioni, margin: i32) -> Vec2i {
    let snap = |v: i32, len: i32, total: i32| {
        if v.abs() <= margin {
            0
        } else if (v + len - total).abs() <= margin {
            total - len
        } else {
            v
        }
    };
    vec2(snap(pos.x, size.x, display.width), snap(pos.y, size.y, display.height))
}

impl Context {
    /// Opens a floating panel first placed at `initial`. The title bar (`opt::TITLE`,
    /// default `label`) moves it; `opt::RESIZABLE` adds a resize grip; `opt::SNAP_EDGES`
    /// and `opt::SNAP_GRID` snap the position when the drag ends.
    pub fn begin_panel(&mut self, label: &str, initial: Recti, opts: &Options) -> Scope<'_> {
        let id = self.widget_id(label, opts);
        self.ids.push_id(id);
        let mut state = self.store_mut().get(id, PanelState::default());
        let style = *self.style();
        let display = self.display();
        if !state.initialized {
            state.pos = vec2(initial.x, initial.y);
            state.size = vec2(initial.width, initial.height);
            state.display_x.jump_to(initial.x as f32);
            state.display_y.jump_to(initial.y as f32);
            state.initialized = true;
        }

        let parent_z = self.z;
        self.z = self.next_depth();

        let shown = state.rect();
        let title = rect(shown.x, shown.y, shown.width, style.title_height);
        let title_control = self.update_control(id.child("!title"), title, &Options::new(), false);
        let grip = opts.get(&opt::RESIZABLE).then(|| rect(shown.x + shown.width - style.scrollbar_size, shown.y + shown.height - style.scrollbar_size, style.scrollbar_size, style.scrollbar_size));
        let grip_control = match grip {
            Some(g) => self.update_control(id.child("!resize"), g, &Options::new(), false),
            None => ControlState::default(),
        };

        let mouse = self.input().mouse_pos();
        let held = self.input().mouse_down(MouseButton::LEFT);
        match state.drag {
            PanelDrag::Idle if grip_control.clicked => {
                log::trace!("panel {:?} starts resizing", id);
                state.drag = PanelDrag::Resizing { anchor: mouse - state.pos - state.size };
            }
            PanelDrag::Idle if title_control.clicked => {
                log::trace!("panel {:?} starts dragging", id);
                state.drag = PanelDrag::Dragging { anchor: mouse - state.pos };
            }
            PanelDrag::Dragging { anchor } if held => {
                state.pos = clamp_panel_position(mouse - anchor, state.size, display, style.min_visible);
            }
            PanelDrag::Resizing { anchor } if held => {
                let min = style.min_visible.max(style.title_height);
                let size = mouse - anchor - state.pos;
                state.size = vec2(size.x.max(min), size.y.max(min));
            }
            PanelDrag::Dragging { .. } => {
                let grid = opts.get(&opt::SNAP_GRID);
                let mut pos = state.pos;
                if let Some(grid) = grid {
                    pos = snap_to_grid(pos, grid);
                }
                if opts.get(&opt::SNAP_EDGES) {
                    pos = snap_to_edges(pos, state.size, display, style.snap_margin);
                }
                state.pos = match grid {
                    Some(grid) => clamp_to_grid(pos, state.size, display, style.min_visible, grid),
                    None => clamp_panel_position(pos, state.size, display, style.min_visible),
                };
                state.drag = PanelDrag::Idle;
                log::trace!("panel {:?} dropped at {:?}", id, (state.pos.x, state.pos.y));
            }
            PanelDrag::Resizing { .. } => {
                log::trace!("panel {:?} stops resizing", id);
                state.drag = PanelDrag::Idle;
            }
            PanelDrag::Idle => (),
        }

        state.display_x.set_target(state.pos.x as f32);
        state.display_y.set_target(state.pos.y as f32);
        let dt = self.dt();
        state.display_x.update_with(dt, style.smoothing_rate);
        state.display_y.update_with(dt, style.smoothing_rate);
        if matches!(state.drag, PanelDrag::Resizing { .. }) {
            state.display_x.jump_to(state.pos.x as f32);
            state.display_y.jump_to(state.pos.y as f32);
        }
        self.store_mut().set(id, state);

        let r = state.rect();
        self.add_blocker(r);
        let mark = self.draw_list_mut().mark();
        let title = rect(r.x, r.y, r.width, style.title_height);
        self.draw_frame(title, ControlColor::TitleBG);
        let text = opts.get(&opt::TITLE).unwrap_or_else(|| label.to_string());
        self.draw_control_text(&text, title, ControlColor::TitleText, Align::Start);

        let body = rect(r.x, r.y + style.title_height, r.width, (r.height - style.title_height).max(0));
        let params = LayoutParams {
            padding: opts.get(&opt::PADDING).unwrap_or(style.padding).max(0),
            width: None,
            height: None,
            ..LayoutParams::resolve(Direction::Vertical, opts, style.spacing)
        };
        self.push_clip_rect(body);
        self.layout.push_detached(Direction::Vertical, vec2(body.x, body.y), vec2(body.width, body.height), params);

        let grip = grip.map(|_| rect(r.x + r.width - style.scrollbar_size, r.y + r.height - style.scrollbar_size, style.scrollbar_size, style.scrollbar_size));
        Scope::new(self, ScopeEnd::Panel(PanelFrame { id, rect: r, mark, grip, parent_z }))
    }

    /// Runs `f` inside a floating panel. Returns the displayed panel rectangle.
    pub fn panel<F: FnOnce(&mut Context)>(&mut self, label: &str, initial: Recti, opts: &Options, f: F) -> Recti {
        let mut scope = self.begin_panel(label, initial, opts);
        f(&mut scope);
        scope.end()
    }
}

pub(crate) fn end_panel(ctx: &mut Context, frame: PanelFrame) -> Recti {
    ctx.layout.pop();
    ctx.pop_clip_rect();
    let PanelFrame { id, rect: r, mark, grip, parent_z } = frame;

    let background = ctx.style().color(ControlColor::WindowBG);
    ctx.draw_list_mut().insert_rect_at(mark, r, background);
    if let Some(g) = grip {
        let thumb = ctx.style().color(ControlColor::ScrollThumb);
        ctx.draw_rect(g, thumb);
    }
    let border = ctx.style().color(ControlColor::Border);
    if border.a != 0 {
        ctx.draw_list_mut().add_rect_outline(r, border, 1);
    }

    log::trace!("panel {:?} closed at depth {}", id, ctx.z);
    ctx.z = parent_z;
    ctx.pop_id();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pointer, run};

    fn xy(v: Vec2i) -> (i32, i32) { (v.x, v.y) }

    #[test]
    fn clamp_keeps_part_of_the_panel_on_screen() {
        let display = Dimensioni::new(800, 600);
        let size = vec2(200, 150);
        assert_eq!(xy(clamp_panel_position(vec2(-500, -20), size, display, 50)), (-150, 0));
        assert_eq!(xy(clamp_panel_position(vec2(900, 900), size, display, 50)), (750, 550));
        assert_eq!(xy(clamp_panel_position(vec2(300, 200), size, display, 50)), (300, 200));
    }

    #[test]
    fn snapping() {
        assert_eq!(xy(snap_to_grid(vec2(87, 107), 20)), (80, 100));
        assert_eq!(xy(snap_to_grid(vec2(87, 107), 0)), (87, 107));
        let display = Dimensioni::new(800, 600);
        let size = vec2(200, 150);
        assert_eq!(xy(snap_to_edges(vec2(10, 440), size, display, 16)), (0, 450));
        assert_eq!(xy(snap_to_edges(vec2(590, 100), size, display, 16)), (600, 100));
        assert_eq!(xy(snap_to_edges(vec2(40, 100), size, display, 16)), (40, 100));
    }

    #[test]
    fn grid_survives_the_clamp() {
        let display = Dimensioni::new(800, 600);
        let size = vec2(200, 150);
        assert_eq!(xy(clamp_to_grid(vec2(760, 580), size, display, 50, 20)), (740, 540));
        assert_eq!(xy(clamp_to_grid(vec2(-160, -20), size, display, 50, 20)), (-140, 0));
        assert_eq!(xy(clamp_to_grid(vec2(120, 40), size, display, 50, 20)), (120, 40));
        assert_eq!(xy(clamp_to_grid(vec2(760, 580), size, display, 50, 0)), (750, 550));
    }

    fn state(ctx: &Context, label: &str) -> PanelState { ctx.store().peek::<PanelState>(Id::from_str(label)).copied().unwrap_or_default() }

    #[test]
    fn dragging_the_title_moves_and_snaps_on_release() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::SNAP_GRID, Some(20));
        let initial = rect(100, 40, 200, 150);
        for input in [pointer(150, 50, false), pointer(150, 50, true), pointer(172, 55, true)] {
            run(&mut ctx, input, |ctx| ctx.panel("tools", initial, &opts, |_| ()));
        }
        assert_eq!(xy(state(&ctx, "tools").pos), (122, 45));
        assert!(matches!(state(&ctx, "tools").drag, PanelDrag::Dragging { .. }));
        run(&mut ctx, pointer(172, 55, false), |ctx| ctx.panel("tools", initial, &opts, |_| ()));
        assert_eq!(xy(state(&ctx, "tools").pos), (120, 40));
        assert!(matches!(state(&ctx, "tools").drag, PanelDrag::Idle));

        let mut shown = Recti::default();
        for _ in 0..120 {
            shown = run(&mut ctx, pointer(172, 55, false), |ctx| ctx.panel("tools", initial, &opts, |_| ()));
        }
        assert_eq!((shown.x, shown.y), (120, 40));
    }

    #[test]
    fn release_at_the_edge_stays_on_the_grid() {
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::SNAP_GRID, Some(20));
        let initial = rect(100, 40, 200, 150);
        for input in [pointer(150, 50, false), pointer(150, 50, true), pointer(395, 195, true), pointer(395, 195, false)] {
            run(&mut ctx, input, |ctx| ctx.panel("tools", initial, &opts, |_| ()));
        }
        assert_eq!(xy(state(&ctx, "tools").pos), (340, 140));
    }

    #[test]
    fn resize_grip_changes_the_size() {
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::RESIZABLE, true);
        let initial = rect(50, 20, 200, 150);
        for input in [pointer(245, 165, false), pointer(245, 165, true), pointer(265, 175, true), pointer(265, 175, false)] {
            run(&mut ctx, input, |ctx| ctx.panel("tools", initial, &opts, |_| ()));
        }
        assert_eq!(xy(state(&ctx, "tools").size), (220, 160));
        assert_eq!(xy(state(&ctx, "tools").pos), (50, 20));
    }

    #[test]
    fn panels_block_content_underneath() {
        let mut ctx = Context::new();
        let probe = rect(20, 30, 1, 1);
        let mut seen = Vec::new();
        for _ in 0..2 {
            run(&mut ctx, pointer(20, 30, false), |ctx| {
                seen.push(ctx.mouse_over(probe));
                ctx.panel("tools", rect(0, 0, 200, 150), &Options::new(), |ui| {
                    seen.push(ui.mouse_over(probe));
                });
            });
        }
        assert_eq!(seen, vec![true, true, false, true]);
    }

    #[test]
    fn background_is_drawn_behind_the_children() {
        let mut ctx = Context::new();
        let mut child = Recti::default();
        ctx.begin(InputSnapshot::default(), crate::testing::display(), 0.016);
        let r = ctx.panel("tools", rect(10, 10, 200, 150), &Options::new(), |ui| {
            child = ui.allocate(vec2(20, 20));
            ui.draw_rect(child, color(1, 2, 3, 255));
        });
        let list = ctx.end().unwrap();
        let at = |x: i32, y: i32| list.vertices().iter().position(|v| v.position().x == x as f32 && v.position().y == y as f32);
        let background = at(r.x + r.width, r.y + r.height).unwrap();
        let content = at(child.x + child.width, child.y + child.height).unwrap();
        assert!(background < content);
        assert_eq!(ctx.layout_depth(), 0);
    }
}
