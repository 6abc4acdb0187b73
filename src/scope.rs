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
use std::ops::{Deref, DerefMut};

use super::*;
use crate::widgets::centered::CenteredFrame;
use crate::widgets::panel::PanelFrame;
use crate::widgets::scroll::ScrollFrame;
use crate::widgets::table::RowFrame;

/// Closing action of an open [`Scope`].
pub(crate) enum ScopeEnd {
    Layout,
    Id,
    Clip,
    Scroll(ScrollFrame),
    Panel(PanelFrame),
    Centered(CenteredFrame),
    Table,
    TableRow(RowFrame),
}

impl ScopeEnd {
    fn run(self, ctx: &mut Context) -> Recti {
        match self {
            ScopeEnd::Layout => ctx.pop_layout(),
            ScopeEnd::Id => {
                ctx.pop_id();
                Recti::default()
            }
            ScopeEnd::Clip => {
                ctx.pop_clip_rect();
                Recti::default()
            }
            ScopeEnd::Scroll(frame) => widgets::scroll::end_scroll_area(ctx, frame),
            ScopeEnd::Panel(frame) => widgets::panel::end_panel(ctx, frame),
            ScopeEnd::Centered(frame) => widgets::centered::end_centered(ctx, frame),
            ScopeEnd::Table => widgets::table::end_table(ctx),
            ScopeEnd::TableRow(frame) => widgets::table::end_table_row(ctx, frame),
        }
    }
}

/// An open begin/end pair. The scope dereferences to the [`Context`] so widgets can be
/// called on it; dropping it (or calling [`Scope::end`]) performs the matching end, so
/// early returns cannot leave a container open.
pub struct Scope<'a> {
    ctx: &'a mut Context,
    end: Option<ScopeEnd>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(ctx: &'a mut Context, end: ScopeEnd) -> Self { Self { ctx, end: Some(end) } }

    /// Closes the scope and returns the bounds it occupied (empty for scopes without a
    /// footprint such as id or clip scopes).
    pub fn end(mut self) -> Recti { self.finish() }

    fn finish(&mut self) -> Recti {
        match self.end.take() {
            Some(end) => end.run(self.ctx),
            None => Recti::default(),
        }
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) { self.finish(); }
}

impl Deref for Scope<'_> {
    type Target = Context;
    fn deref(&self) -> &Context { self.ctx }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Context { self.ctx }
}

impl Context {
    /// Opens a vertical layout at the cursor.
    pub fn begin_vertical(&mut self, opts: &Options) -> Scope<'_> {
        self.push_layout(Direction::Vertical, opts);
        Scope::new(self, ScopeEnd::Layout)
    }

    /// Opens a horizontal layout at the cursor.
    pub fn begin_horizontal(&mut self, opts: &Options) -> Scope<'_> {
        self.push_layout(Direction::Horizontal, opts);
        Scope::new(self, ScopeEnd::Layout)
    }

    /// Lays out the widgets of `f` top to bottom. Returns the bounds of the group.
    pub fn vertical<F: FnOnce(&mut Context)>(&mut self, opts: &Options, f: F) -> Recti {
        let mut scope = self.begin_vertical(opts);
        f(&mut scope);
        scope.end()
    }

    /// Lays out the widgets of `f` left to right. Returns the bounds of the group.
    pub fn horizontal<F: FnOnce(&mut Context)>(&mut self, opts: &Options, f: F) -> Recti {
        let mut scope = self.begin_horizontal(opts);
        f(&mut scope);
        scope.end()
    }

    /// Opens a naming scope so identical labels below it do not collide with labels
    /// elsewhere.
    pub fn begin_id_scope(&mut self, label: &str) -> Scope<'_> {
        self.push_id(label);
        Scope::new(self, ScopeEnd::Id)
    }

    /// Runs `f` inside a naming scope.
    pub fn id_scope<F: FnOnce(&mut Context)>(&mut self, label: &str, f: F) {
        let mut scope = self.begin_id_scope(label);
        f(&mut scope);
    }

    /// Clips everything drawn inside the scope to `r`.
    pub fn begin_clip(&mut self, r: Recti) -> Scope<'_> {
        self.push_clip_rect(r);
        Scope::new(self, ScopeEnd::Clip)
    }
}
