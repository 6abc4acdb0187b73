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
use thiserror::Error;

use super::*;
use crate::input::InputState;
use crate::layout::{LayoutManager, LayoutParams};
use crate::widgets::table::TableLayout;

/// Errors reported by the frame API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// [`Context::end`] was called while no frame was open.
    #[error("no frame is open, call begin first")]
    NotStarted,
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
/// Interaction state of a widget for the current frame.
pub struct ControlState {
    /// The pointer rests on the widget.
    pub hovered: bool,
    /// The widget owns keyboard/pointer focus.
    pub focused: bool,
    /// The left button went down on the widget this frame.
    pub clicked: bool,
    /// The left button is held while the widget is focused.
    pub active: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Layer {
    Base,
    Overlay,
}

/// Depth of overlay content; overlay geometry sits above every panel.
pub(crate) const OVERLAY_Z: u32 = u32::MAX;

/// Owner of everything that persists between frames: widget state, focus, styles and
/// the draw lists of the last frame.
pub struct Context {
    style: Style,
    font: Box<dyn Font>,
    pub(crate) input: InputState,
    display: Dimensioni,
    dt: f32,
    time: f64,
    frame: u64,
    open: bool,
    pub(crate) layout: LayoutManager,
    pub(crate) ids: IdManager,
    store: StateStore,
    draw: DrawList,
    overlay: DrawList,
    layer: Layer,
    hover: Option<Id>,
    focus: Option<Id>,
    updated_focus: bool,
    blockers: Vec<(Recti, u32)>,
    next_blockers: Vec<(Recti, u32)>,
    pub(crate) z: u32,
    next_z: u32,
    pub(crate) tables: Vec<TableLayout>,
}

impl Default for Context {
    fn default() -> Self { Self::new() }
}

impl Context {
    /// Creates a context using [`FixedFont`] and the default [`Style`].
    pub fn new() -> Self { Self::with_font(Box::new(FixedFont::default())) }

    /// Creates a context measuring text with `font`.
    pub fn with_font(font: Box<dyn Font>) -> Self {
        let display = Dimensioni::new(0, 0);
        Self {
            style: Style::default(),
            font,
            input: InputState::default(),
            display,
            dt: 0.0,
            time: 0.0,
            frame: 0,
            open: false,
            layout: LayoutManager::default(),
            ids: IdManager::new(),
            store: StateStore::new(),
            draw: DrawList::new(display),
            overlay: DrawList::new(display),
            layer: Layer::Base,
            hover: None,
            focus: None,
            updated_focus: false,
            blockers: Vec::new(),
            next_blockers: Vec::new(),
            z: 0,
            next_z: 0,
            tables: Vec::new(),
        }
    }

    /// Starts a frame. A missing snapshot behaves like a frame without any input.
    ///
    /// Calling `begin` while a frame is open discards the open frame.
    pub fn begin(&mut self, input: impl Into<Option<InputSnapshot>>, display: Dimensioni, dt: f32) {
        if self.open {
            log::warn!("begin called while frame {} was still open, discarding it", self.frame);
        }
        self.input.advance(input.into());
        self.display = display;
        self.dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.time += self.dt as f64;
        self.frame += 1;
        self.layout.reset(display, self.style.spacing);
        self.ids.reset();
        self.draw.reset(display);
        self.overlay.reset(display);
        self.layer = Layer::Base;
        self.blockers = std::mem::take(&mut self.next_blockers);
        self.z = 0;
        self.next_z = 0;
        self.tables.clear();
        self.open = true;
    }

    /// Finishes the frame and returns its finalized draw list. Layouts, scopes or clip
    /// rectangles left open are reported and closed.
    pub fn end(&mut self) -> Result<&DrawList, FrameError> {
        if !self.open {
            return Err(FrameError::NotStarted);
        }
        if self.layout.depth() > 0 {
            log::error!("{} layout(s) still open at the end of frame {}", self.layout.depth(), self.frame);
            while self.layout.depth() > 0 {
                self.layout.pop();
            }
        }
        if self.ids.depth() > 0 {
            log::error!("{} id scope(s) still open at the end of frame {}", self.ids.depth(), self.frame);
        }
        for list in [&mut self.draw, &mut self.overlay] {
            if list.clip_depth() > 0 {
                log::error!("{} clip rectangle(s) still pushed at the end of the frame", list.clip_depth());
                while list.clip_depth() > 0 {
                    list.pop_clip_rect();
                }
            }
        }
        self.tables.clear();

        if !self.updated_focus {
            self.focus = None;
        }
        self.updated_focus = false;

        self.draw.append(&self.overlay);
        self.draw.finalize();
        self.open = false;
        Ok(&self.draw)
    }

    /// Runs `f` between [`Context::begin`] and [`Context::end`].
    pub fn frame<F: FnOnce(&mut Self)>(&mut self, input: impl Into<Option<InputSnapshot>>, display: Dimensioni, dt: f32, f: F) -> Result<&DrawList, FrameError> {
        self.begin(input, display, dt);
        f(self);
        self.end()
    }

    /// Draw list of the frame being built, or of the last finished frame.
    pub fn draw_list(&self) -> &DrawList { &self.draw }

    /// Returns `true` between `begin` and `end`.
    pub fn is_frame_open(&self) -> bool { self.open }

    /// Number of frames started so far.
    pub fn frame_count(&self) -> u64 { self.frame }

    /// Seconds elapsed during the current frame.
    pub fn dt(&self) -> f32 { self.dt }

    /// Sum of all frame deltas.
    pub fn time(&self) -> f64 { self.time }

    /// Size of the display of the current frame.
    pub fn display(&self) -> Dimensioni { self.display }

    /// Active style.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the style. Takes effect for widgets drawn afterwards.
    pub fn set_style(&mut self, style: Style) { self.style = style; }

    /// Font used to measure and draw text.
    pub fn font(&self) -> &dyn Font { self.font.as_ref() }

    /// Replaces the font.
    pub fn set_font(&mut self, font: Box<dyn Font>) { self.font = font; }

    /// Input of the current frame.
    pub fn input(&self) -> &InputState { &self.input }

    /// Persistent widget state.
    pub fn store(&self) -> &StateStore { &self.store }

    /// Persistent widget state, mutably.
    pub fn store_mut(&mut self) -> &mut StateStore { &mut self.store }

    // ---------------------------------------------------------------------------
    // identity
    // ---------------------------------------------------------------------------

    /// Resolves `label` in the current naming scope.
    pub fn get_id(&mut self, label: &str) -> Id { self.ids.get_id_from_str(label) }

    /// Identifier for a widget: the `opt::ID` override, or `label` resolved in the
    /// current scope.
    pub fn widget_id(&mut self, label: &str, opts: &Options) -> Id {
        match opts.get(&opt::ID) {
            Some(id) => id,
            None => self.ids.get_id_from_str(label),
        }
    }

    /// Enters a naming scope derived from `label`.
    pub fn push_id(&mut self, label: &str) -> Id { self.ids.push_scope(label) }

    /// Leaves the innermost naming scope.
    pub fn pop_id(&mut self) {
        if !self.ids.pop_scope() {
            log::error!("pop_id called without an open id scope");
        }
    }

    // ---------------------------------------------------------------------------
    // layout
    // ---------------------------------------------------------------------------

    /// Opens a child layout at the cursor.
    pub fn push_layout(&mut self, direction: Direction, opts: &Options) {
        let params = LayoutParams::resolve(direction, opts, self.style.spacing);
        self.layout.push(direction, params);
    }

    /// Closes the innermost layout, folds it into its parent and returns its bounds.
    pub fn pop_layout(&mut self) -> Recti { self.layout.pop() }

    /// Places an item of `size` at the cursor.
    pub fn allocate(&mut self, size: Vec2i) -> Recti { self.layout.allocate(size) }

    /// Space left in the current layout.
    pub fn remaining(&self) -> Vec2i { self.layout.remaining() }

    /// Position the next item will be placed at.
    pub fn next_position(&self) -> Vec2i { self.layout.next_position() }

    /// Rectangle of the last placed item.
    pub fn last_rect(&self) -> Recti { self.layout.last_rect }

    /// Number of layouts pushed by the caller.
    pub fn layout_depth(&self) -> usize { self.layout.depth() }

    /// Allocates the rectangle of a leaf widget. `opt::WIDTH`/`opt::HEIGHT` override the
    /// natural size; in a start-aligned vertical layout the width stretches to the
    /// available width.
    pub(crate) fn item_rect(&mut self, opts: &Options, natural: Vec2i) -> Recti {
        let width = match opts.get(&opt::WIDTH) {
            Some(w) => w,
            None if self.layout.direction() == Direction::Vertical && self.layout.align() == Align::Start => self.layout.remaining().x,
            None => natural.x,
        };
        let height = opts.get(&opt::HEIGHT).unwrap_or(natural.y);
        self.layout.allocate(vec2(width, height))
    }

    /// Default height of single line widgets.
    pub fn widget_height(&self) -> i32 { self.font.line_height() + 2 * self.vertical_pad() }

    pub(crate) fn vertical_pad(&self) -> i32 { (self.style.padding / 2).max(1) }

    // ---------------------------------------------------------------------------
    // drawing
    // ---------------------------------------------------------------------------

    /// Draw list widgets currently emit into (the overlay inside [`Context::with_overlay`]).
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        match self.layer {
            Layer::Base => &mut self.draw,
            Layer::Overlay => &mut self.overlay,
        }
    }

    /// Runs `f` with drawing redirected to the overlay layer, which is composited after
    /// the base layer and never blocked by other content.
    pub fn with_overlay<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let (layer, z) = (self.layer, self.z);
        self.layer = Layer::Overlay;
        self.z = OVERLAY_Z;
        let res = f(self);
        self.layer = layer;
        self.z = z;
        res
    }

    /// Pushes a clip rectangle on the active draw list.
    pub fn push_clip_rect(&mut self, r: Recti) { self.draw_list_mut().push_clip_rect(r); }

    /// Pops the clip rectangle of the active draw list.
    pub fn pop_clip_rect(&mut self) { self.draw_list_mut().pop_clip_rect(); }

    /// Clip rectangle of the active draw list.
    pub fn current_clip_rect(&self) -> Recti {
        match self.layer {
            Layer::Base => self.draw.current_clip_rect(),
            Layer::Overlay => self.overlay.current_clip_rect(),
        }
    }

    /// Fills `r` with `color`.
    pub fn draw_rect(&mut self, r: Recti, color: Color) { self.draw_list_mut().add_rect(r, color); }

    /// Draws `text` with its top-left corner at `pos`. Returns the advance.
    pub fn draw_text(&mut self, text: &str, pos: Vec2i, color: Color) -> i32 {
        let list = match self.layer {
            Layer::Base => &mut self.draw,
            Layer::Overlay => &mut self.overlay,
        };
        list.add_text(self.font.as_ref(), text, pos, color)
    }

    /// Width of `text` in pixels.
    pub fn text_width(&self, text: &str) -> i32 { self.font.text_width(text) }

    /// Fills `r` with a palette color and outlines it with the border color.
    pub fn draw_frame(&mut self, r: Recti, colorid: ControlColor) {
        let fill = self.style.color(colorid);
        self.draw_rect(r, fill);
        if matches!(colorid, ControlColor::ScrollBase | ControlColor::ScrollThumb | ControlColor::TitleBG) {
            return;
        }
        let border = self.style.color(ControlColor::Border);
        if border.a != 0 {
            self.draw_list_mut().add_rect_outline(expand_rect(r, 1), border, 1);
        }
    }

    /// Draws a widget frame colored by its interaction state.
    pub fn draw_widget_frame(&mut self, control: &ControlState, r: Recti, mut colorid: ControlColor) {
        if control.focused {
            colorid.focus();
        } else if control.hovered {
            colorid.hover();
        }
        self.draw_frame(r, colorid);
    }

    /// Draws single line text inside `r`, vertically centered and clipped to `r`.
    pub fn draw_control_text(&mut self, text: &str, r: Recti, colorid: ControlColor, align: Align) {
        let color = self.style.color(colorid);
        let width = self.text_width(text);
        let pad = self.style.padding;
        let x = match align {
            Align::Start => r.x + pad,
            Align::Center => r.x + (r.width - width) / 2,
            Align::End => r.x + r.width - width - pad,
        };
        let y = r.y + (r.height - self.font.line_height()) / 2;
        self.push_clip_rect(r);
        self.draw_text(text, vec2(x, y), color);
        self.pop_clip_rect();
    }

    // ---------------------------------------------------------------------------
    // interaction
    // ---------------------------------------------------------------------------

    /// Widget under the pointer.
    pub fn hover(&self) -> Option<Id> { self.hover }

    /// Widget owning focus.
    pub fn focus(&self) -> Option<Id> { self.focus }

    /// Moves focus to `id` (or clears it).
    pub fn set_focus(&mut self, id: Option<Id>) {
        self.focus = id;
        self.updated_focus = true;
    }

    /// Returns `true` when the pointer is inside `r`, inside the current clip and not
    /// covered by content that sits above the current depth.
    pub fn mouse_over(&self, r: Recti) -> bool {
        let pos = self.input.mouse_pos();
        rect_contains(&r, pos) && rect_contains(&self.current_clip_rect(), pos) && !self.is_blocked(pos)
    }

    fn is_blocked(&self, pos: Vec2i) -> bool { self.blockers.iter().any(|(r, z)| *z > self.z && rect_contains(r, pos)) }

    /// Registers `r` as covering content below the current depth, effective next frame.
    pub(crate) fn add_blocker(&mut self, r: Recti) { self.next_blockers.push((r, self.z)); }

    /// Allocates a depth for a floating container.
    pub(crate) fn next_depth(&mut self) -> u32 {
        self.next_z += 1;
        self.next_z
    }

    /// Updates hover and focus for the widget `id` occupying `r`.
    ///
    /// A widget becomes hovered when the pointer rests on it with no button held and
    /// takes focus when a button goes down while hovered. Focus is dropped on a press
    /// elsewhere, and on release unless `hold_focus` is set.
    pub fn update_control(&mut self, id: Id, r: Recti, opts: &Options, hold_focus: bool) -> ControlState {
        if self.focus == Some(id) {
            self.updated_focus = true;
        }
        if opts.get(&opt::DISABLED) {
            return ControlState::default();
        }
        let mouseover = self.mouse_over(r);
        let pressed = !self.input.pressed_buttons().is_none();
        if mouseover && !self.input.any_mouse_down() {
            self.hover = Some(id);
        }
        if self.focus == Some(id) {
            if pressed && !mouseover {
                self.set_focus(None);
            }
            if !self.input.any_mouse_down() && !hold_focus {
                self.set_focus(None);
            }
        }
        if self.hover == Some(id) {
            if pressed {
                self.set_focus(Some(id));
            } else if !mouseover {
                self.hover = None;
            }
        }
        if opts.get(&opt::FOCUS) && self.focus != Some(id) {
            self.set_focus(Some(id));
        }

        let focused = self.focus == Some(id);
        ControlState {
            hovered: self.hover == Some(id),
            focused,
            clicked: focused && self.input.mouse_pressed(MouseButton::LEFT),
            active: focused && self.input.mouse_down(MouseButton::LEFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{display, pointer};

    #[test]
    fn three_items_in_a_gapped_vertical_layout() {
        let mut ctx = Context::new();
        ctx.begin(InputSnapshot::default(), display(), 1.0 / 60.0);
        ctx.push_layout(Direction::Vertical, &Options::new().with(&opt::GAP, Some(6)));
        let heights = [10, 20, 14];
        let rects: Vec<Recti> = heights.iter().map(|h| ctx.allocate(vec2(400, *h))).collect();
        assert_eq!(rects[2].y, 42);
        let bounds = ctx.pop_layout();
        assert_eq!(bounds.height, 56);
        assert_eq!(ctx.layout_depth(), 0);
        assert!(ctx.end().is_ok_and(|list| list.is_finalized()));
    }

    #[test]
    fn end_without_begin_fails() {
        let mut ctx = Context::new();
        assert_eq!(ctx.end().err(), Some(FrameError::NotStarted));
        ctx.begin(None, display(), 0.0);
        assert!(ctx.end().is_ok());
        assert_eq!(ctx.end().err(), Some(FrameError::NotStarted));
    }

    #[test]
    fn begin_while_open_discards_the_frame() {
        let mut ctx = Context::new();
        ctx.begin(None, display(), 0.0);
        ctx.draw_rect(rect(0, 0, 10, 10), color(255, 255, 255, 255));
        ctx.push_layout(Direction::Horizontal, &Options::new());
        ctx.begin(None, display(), 0.0);
        assert_eq!(ctx.layout_depth(), 0);
        let list = ctx.end().unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn unbalanced_frames_are_unwound() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ctx = Context::new();
        ctx.begin(None, display(), 0.0);
        ctx.push_layout(Direction::Vertical, &Options::new());
        ctx.push_clip_rect(rect(0, 0, 10, 10));
        ctx.push_id("leaked");
        assert!(ctx.end().is_ok());
        ctx.begin(None, display(), 0.0);
        assert_eq!(ctx.layout_depth(), 0);
        assert_eq!(ctx.ids.depth(), 0);
        assert_eq!(ctx.get_id("a"), Id::from_str("a"));
        ctx.end().unwrap();
    }

    #[test]
    fn hover_then_press_focuses_and_release_drops_focus() {
        let mut ctx = Context::new();
        let id = Id::from_str("target");
        let area = rect(10, 10, 50, 20);
        let mut step = |ctx: &mut Context, input: InputSnapshot| {
            ctx.begin(input, display(), 0.016);
            let state = ctx.update_control(id, area, &Options::new(), false);
            ctx.end().unwrap();
            state
        };
        let s = step(&mut ctx, pointer(20, 15, false));
        assert!(s.hovered && !s.focused);
        let s = step(&mut ctx, pointer(20, 15, true));
        assert!(s.focused && s.clicked && s.active);
        let s = step(&mut ctx, pointer(25, 15, true));
        assert!(s.focused && !s.clicked && s.active);
        let s = step(&mut ctx, pointer(25, 15, false));
        assert!(!s.focused);
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn disabled_controls_never_interact() {
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::DISABLED, true);
        for down in [false, true] {
            ctx.begin(pointer(5, 5, down), display(), 0.016);
            let s = ctx.update_control(Id::from_str("off"), rect(0, 0, 20, 20), &opts, false);
            assert_eq!(s, ControlState::default());
            ctx.end().unwrap();
        }
    }

    #[test]
    fn blockers_from_the_previous_frame_hide_lower_content() {
        let mut ctx = Context::new();
        let area = rect(0, 0, 100, 100);
        ctx.begin(pointer(50, 50, false), display(), 0.016);
        ctx.with_overlay(|ctx| ctx.add_blocker(rect(40, 40, 20, 20)));
        assert!(ctx.mouse_over(area));
        ctx.end().unwrap();

        ctx.begin(pointer(50, 50, false), display(), 0.016);
        assert!(!ctx.mouse_over(area));
        assert!(ctx.with_overlay(|ctx| ctx.mouse_over(area)));
        ctx.end().unwrap();

        ctx.begin(pointer(50, 50, false), display(), 0.016);
        assert!(ctx.mouse_over(area));
        ctx.end().unwrap();
    }

    #[test]
    fn overlay_geometry_is_composited_last() {
        let mut ctx = Context::new();
        ctx.begin(None, display(), 0.0);
        ctx.with_overlay(|ctx| ctx.draw_rect(rect(0, 0, 5, 5), color(0, 0, 255, 255)));
        ctx.draw_rect(rect(100, 100, 5, 5), color(255, 0, 0, 255));
        let list = ctx.end().unwrap();
        assert_eq!(list.vertices()[0].position().x, 100.0);
        assert_eq!(list.vertices()[4].position().x, 0.0);
    }
}
