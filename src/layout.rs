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

/// Main axis of a layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Items stack top to bottom.
    Vertical,
    /// Items stack left to right.
    Horizontal,
}

/// Placement of items on the cross axis of their layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Align {
    /// Items hug the left (vertical layouts) or top (horizontal layouts) edge. Items
    /// without an explicit width in a vertical layout stretch to the available width.
    #[default]
    Start,
    /// Items are centered.
    Center,
    /// Items hug the right or bottom edge.
    End,
}

/// Resolved parameters of a new layout.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct LayoutParams {
    pub gap: i32,
    pub padding: i32,
    pub align: Align,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl LayoutParams {
    /// Resolves layout options: axis specific gap, then generic gap, then `spacing`.
    pub fn resolve(direction: Direction, opts: &Options, spacing: i32) -> Self {
        let axis_gap = match direction {
            Direction::Horizontal => opts.get(&opt::GAP_X),
            Direction::Vertical => opts.get(&opt::GAP_Y),
        };
        Self {
            gap: axis_gap.or(opts.get(&opt::GAP)).unwrap_or(spacing).max(0),
            padding: opts.get(&opt::PADDING).unwrap_or(0).max(0),
            align: opts.get(&opt::ALIGN).unwrap_or_default(),
            width: opts.get(&opt::WIDTH).map(|w| w.max(0)),
            height: opts.get(&opt::HEIGHT).map(|h| h.max(0)),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Layout {
    direction: Direction,
    origin: Vec2i,
    extent: Vec2i,
    params: LayoutParams,
    main: i32,
    cross: i32,
    items: usize,
    detached: bool,
}

impl Layout {
    fn new(direction: Direction, origin: Vec2i, extent: Vec2i, params: LayoutParams, detached: bool) -> Self {
        Self { direction, origin, extent, params, main: 0, cross: 0, items: 0, detached }
    }

    fn inner_extent(&self) -> Vec2i {
        let pad = self.params.padding * 2;
        vec2((self.extent.x - pad).max(0), (self.extent.y - pad).max(0))
    }

    fn next_main(&self) -> i32 { if self.items > 0 { self.main + self.params.gap } else { self.main } }

    fn next_position(&self) -> Vec2i {
        let base = vec2(self.origin.x + self.params.padding, self.origin.y + self.params.padding);
        match self.direction {
            Direction::Vertical => vec2(base.x, base.y + self.next_main()),
            Direction::Horizontal => vec2(base.x + self.next_main(), base.y),
        }
    }

    fn remaining(&self) -> Vec2i {
        let inner = self.inner_extent();
        match self.direction {
            Direction::Vertical => vec2(inner.x, (inner.y - self.next_main()).max(0)),
            Direction::Horizontal => vec2((inner.x - self.next_main()).max(0), inner.y),
        }
    }

    fn place(&self, size: Vec2i) -> Recti {
        let pos = self.next_position();
        let inner = self.inner_extent();
        let (cross_avail, cross_size) = match self.direction {
            Direction::Vertical => (inner.x, size.x),
            Direction::Horizontal => (inner.y, size.y),
        };
        let offset = match self.params.align {
            Align::Start => 0,
            Align::Center => ((cross_avail - cross_size) / 2).max(0),
            Align::End => (cross_avail - cross_size).max(0),
        };
        match self.direction {
            Direction::Vertical => rect(pos.x + offset, pos.y, size.x, size.y),
            Direction::Horizontal => rect(pos.x, pos.y + offset, size.x, size.y),
        }
    }

    fn advance(&mut self, size: Vec2i) {
        let (main, cross) = match self.direction {
            Direction::Vertical => (size.y, size.x),
            Direction::Horizontal => (size.x, size.y),
        };
        self.main = self.next_main() + main.max(0);
        self.cross = self.cross.max(cross);
        self.items += 1;
    }

    fn measured(&self) -> Vec2i {
        let pad = self.params.padding * 2;
        let content = match self.direction {
            Direction::Vertical => vec2(self.cross, self.main),
            Direction::Horizontal => vec2(self.main, self.cross),
        };
        vec2(self.params.width.unwrap_or(content.x + pad), self.params.height.unwrap_or(content.y + pad))
    }
}

/// Stack of flow layouts. The root layout spans the display and is never popped, so
/// the user visible stack is empty at the start and the end of a frame.
pub(crate) struct LayoutManager {
    root: Layout,
    stack: Vec<Layout>,
    pub last_rect: Recti,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self {
            root: Layout::new(Direction::Vertical, vec2(0, 0), vec2(0, 0), LayoutParams::default(), true),
            stack: Vec::new(),
            last_rect: Recti::default(),
        }
    }
}

impl LayoutManager {
    pub fn reset(&mut self, display: Dimensioni, spacing: i32) {
        let params = LayoutParams { gap: spacing, ..LayoutParams::default() };
        self.root = Layout::new(Direction::Vertical, vec2(0, 0), vec2(display.width, display.height), params, true);
        self.stack.clear();
        self.last_rect = Recti::default();
    }

    fn top(&self) -> &Layout { self.stack.last().unwrap_or(&self.root) }

    fn top_mut(&mut self) -> &mut Layout { self.stack.last_mut().unwrap_or(&mut self.root) }

    pub fn depth(&self) -> usize { self.stack.len() }

    pub fn direction(&self) -> Direction { self.top().direction }

    pub fn align(&self) -> Align { self.top().params.align }

    /// Position of the next item, before cross-axis alignment.
    pub fn next_position(&self) -> Vec2i { self.top().next_position() }

    /// Space left for the next item inside the current layout.
    pub fn remaining(&self) -> Vec2i { self.top().remaining() }

    /// Opens a child layout at the next item position. Its footprint is folded into
    /// the parent when it is popped.
    pub fn push(&mut self, direction: Direction, params: LayoutParams) {
        let origin = self.next_position();
        let remaining = self.remaining();
        let extent = vec2(params.width.unwrap_or(remaining.x), params.height.unwrap_or(remaining.y));
        self.stack.push(Layout::new(direction, origin, extent, params, false));
    }

    /// Opens a layout at an explicit position that does not take part in the parent
    /// flow (scroll content, floating panels).
    pub fn push_detached(&mut self, direction: Direction, origin: Vec2i, extent: Vec2i, params: LayoutParams) {
        self.stack.push(Layout::new(direction, origin, extent, params, true));
    }

    /// Closes the innermost layout and returns its bounds. Attached layouts are folded
    /// into their parent exactly like a leaf of the same size.
    pub fn pop(&mut self) -> Recti {
        let Some(finished) = self.stack.pop() else {
            log::error!("pop_layout called without an open layout");
            return Recti::default();
        };
        let size = finished.measured();
        let bounds = rect(finished.origin.x, finished.origin.y, size.x, size.y);
        if !finished.detached {
            self.top_mut().advance(size);
            self.last_rect = bounds;
        }
        bounds
    }

    /// Places an item of `size` at the cursor and advances past it.
    pub fn allocate(&mut self, size: Vec2i) -> Recti {
        let size = vec2(size.x.max(0), size.y.max(0));
        let top = self.top_mut();
        let r = top.place(size);
        top.advance(size);
        self.last_rect = r;
        r
    }

    #[cfg(test)]
    fn top_snapshot(&self) -> Layout { self.top().clone() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn manager(w: i32, h: i32) -> LayoutManager {
        let mut layout = LayoutManager::default();
        layout.reset(Dimensioni::new(w, h), 4);
        layout
    }

    #[test]
    fn vertical_stack_with_gap() {
        let mut layout = manager(800, 600);
        let opts = Options::new().with(&opt::GAP, Some(6));
        layout.push(Direction::Vertical, LayoutParams::resolve(Direction::Vertical, &opts, 4));
        let a = layout.allocate(vec2(400, 10));
        let b = layout.allocate(vec2(400, 20));
        let c = layout.allocate(vec2(400, 14));
        assert_eq!((a.y, b.y, c.y), (0, 16, 42));
        let bounds = layout.pop();
        assert_eq!(bounds.height, 56);
        assert_eq!(bounds.width, 400);
        assert_eq!(layout.depth(), 0);
    }

    #[test]
    fn gap_priority_prefers_axis_specific_keys() {
        let opts = Options::new().with(&opt::GAP, Some(3)).with(&opt::GAP_X, Some(9));
        assert_eq!(LayoutParams::resolve(Direction::Horizontal, &opts, 4).gap, 9);
        assert_eq!(LayoutParams::resolve(Direction::Vertical, &opts, 4).gap, 3);
        assert_eq!(LayoutParams::resolve(Direction::Vertical, &Options::new(), 4).gap, 4);
    }

    #[test]
    fn horizontal_row_with_padding_and_alignment() {
        let mut layout = manager(300, 300);
        let params = LayoutParams { gap: 2, padding: 5, align: Align::Center, width: None, height: Some(40) };
        layout.push(Direction::Horizontal, params);
        let a = layout.allocate(vec2(20, 10));
        let b = layout.allocate(vec2(30, 30));
        assert_eq!((a.x, a.y), (5, 5 + 10));
        assert_eq!((b.x, b.y), (27, 5));
        let bounds = layout.pop();
        assert_eq!((bounds.width, bounds.height), (20 + 2 + 30 + 10, 40));
    }

    #[test]
    fn end_alignment_hugs_the_far_edge() {
        let mut layout = manager(200, 100);
        layout.push(Direction::Vertical, LayoutParams { align: Align::End, ..LayoutParams::default() });
        let r = layout.allocate(vec2(50, 10));
        assert_eq!(r.x, 150);
        layout.pop();
    }

    #[test]
    fn fixed_size_overrides_measurement() {
        let mut layout = manager(500, 500);
        layout.push(Direction::Vertical, LayoutParams { width: Some(120), ..LayoutParams::default() });
        layout.allocate(vec2(300, 10));
        let r = layout.pop();
        assert_eq!((r.width, r.height), (120, 10));
    }

    #[test]
    fn degenerate_layouts_yield_zero_bounds() {
        let mut layout = manager(0, 0);
        layout.push(Direction::Horizontal, LayoutParams::default());
        let r = layout.pop();
        assert_eq!((r.width, r.height), (0, 0));
        assert_eq!(layout.pop().width, 0);
    }

    #[test]
    fn detached_layouts_do_not_move_the_parent() {
        let mut layout = manager(500, 500);
        let before = layout.next_position();
        layout.push_detached(Direction::Vertical, vec2(100, 100), vec2(50, 50), LayoutParams::default());
        layout.allocate(vec2(40, 40));
        layout.pop();
        let after = layout.next_position();
        assert_eq!((before.x, before.y), (after.x, after.y));
    }

    fn random_params(rng: &mut StdRng) -> (Direction, LayoutParams) {
        let direction = if rng.random_bool(0.5) { Direction::Vertical } else { Direction::Horizontal };
        let align = match rng.random_range(0..3) {
            0 => Align::Start,
            1 => Align::Center,
            _ => Align::End,
        };
        let params = LayoutParams {
            gap: rng.random_range(0..8),
            padding: rng.random_range(0..6),
            align,
            width: if rng.random_bool(0.2) { Some(rng.random_range(0..200)) } else { None },
            height: if rng.random_bool(0.2) { Some(rng.random_range(0..200)) } else { None },
        };
        (direction, params)
    }

    fn random_tree(layout: &mut LayoutManager, rng: &mut StdRng, depth: usize) {
        for _ in 0..rng.random_range(0..5) {
            if depth < 4 && rng.random_bool(0.4) {
                let parent = layout.top_snapshot();
                let (direction, params) = random_params(rng);
                layout.push(direction, params);
                random_tree(layout, rng, depth + 1);
                let bounds = layout.pop();
                let mut expected = parent;
                expected.advance(vec2(bounds.width, bounds.height));
                let actual = layout.top_snapshot();
                assert_eq!(actual.main, expected.main);
                assert_eq!(actual.cross, expected.cross);
                assert_eq!(actual.items, expected.items);
            } else {
                layout.allocate(vec2(rng.random_range(0..120), rng.random_range(0..40)));
            }
        }
    }

    #[test]
    fn balanced_push_pop_folds_like_a_leaf() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut layout = manager(1024, 768);
            random_tree(&mut layout, &mut rng, 0);
            assert_eq!(layout.depth(), 0);
        }
    }
}
