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

/// Persistent state of a centered group.
#[derive(Copy, Clone, Debug, Default)]
pub struct CenteredState {
    /// Content size measured on the previous frame.
    pub last_size: Vec2i,
}

pub(crate) struct CenteredFrame {
    id: Id,
}

impl Context {
    /// Opens a group centered in the remaining space (or `opt::WIDTH` × `opt::HEIGHT`).
    ///
    /// Centering uses the content size measured on the previous frame: the first frame
    /// places the content at the top-left and a size change settles one frame later.
    pub fn begin_centered(&mut self, label: &str, opts: &Options) -> Scope<'_> {
        let id = self.widget_id(label, opts);
        self.ids.push_id(id);
        let state = self.store_mut().get(id, CenteredState::default());

        let natural = self.remaining();
        let area = self.item_rect(opts, natural);
        let last = state.last_size;
        let (origin, extent) = if last.x > 0 && last.y > 0 {
            (vec2(area.x + ((area.width - last.x) / 2).max(0), area.y + ((area.height - last.y) / 2).max(0)), last)
        } else {
            (vec2(area.x, area.y), vec2(area.width, area.height))
        };
        let params = LayoutParams { width: None, height: None, ..LayoutParams::resolve(Direction::Vertical, opts, self.style().spacing) };
        self.layout.push_detached(Direction::Vertical, origin, extent, params);
        Scope::new(self, ScopeEnd::Centered(CenteredFrame { id }))
    }

    /// Runs `f` inside a centered group. Returns the content bounds.
    pub fn centered<F: FnOnce(&mut Context)>(&mut self, label: &str, opts: &Options, f: F) -> Recti {
        let mut scope = self.begin_centered(label, opts);
        f(&mut scope);
        scope.end()
    }
}

pub(crate) fn end_centered(ctx: &mut Context, frame: CenteredFrame) -> Recti {
    let bounds = ctx.layout.pop();
    ctx.store_mut().set(frame.id, CenteredState { last_size: vec2(bounds.width, bounds.height) });
    ctx.pop_id();
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run;

    #[test]
    fn content_is_centered_one_frame_late() {
        let mut ctx = Context::new();
        let dialog = |ctx: &mut Context| ctx.centered("dialog", &Options::new(), |ui| {
            ui.allocate(vec2(100, 40));
        });
        let first = run(&mut ctx, InputSnapshot::default(), dialog);
        assert_eq!((first.x, first.y), (0, 0));
        let second = run(&mut ctx, InputSnapshot::default(), dialog);
        assert_eq!((second.x, second.y, second.width, second.height), (150, 80, 100, 40));
        let state = ctx.store().peek::<CenteredState>(Id::from_str("dialog")).copied().unwrap_or_default();
        assert_eq!((state.last_size.x, state.last_size.y), (100, 40));
    }

    #[test]
    fn resized_content_recenters_on_the_next_frame() {
        let mut ctx = Context::new();
        for size in [vec2(100, 40), vec2(100, 40), vec2(200, 100)] {
            run(&mut ctx, InputSnapshot::default(), |ctx| ctx.centered("dialog", &Options::new(), |ui| {
                ui.allocate(size);
            }));
        }
        let r = run(&mut ctx, InputSnapshot::default(), |ctx| ctx.centered("dialog", &Options::new(), |ui| {
            ui.allocate(vec2(200, 100));
        }));
        assert_eq!((r.x, r.y), (100, 50));
    }
}
