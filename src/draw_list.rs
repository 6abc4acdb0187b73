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

#[derive(Default, Copy, Clone, Debug)]
#[repr(C)]
/// Vertex emitted by the UI: 2×f32 position, 2×f32 texture coordinate, 4×u8 color.
pub struct Vertex {
    pos: Vec2f,
    tex: Vec2f,
    color: Color4b,
}

impl Vertex {
    /// Creates a vertex with the provided position, texture coordinate, and color.
    pub fn new(pos: Vec2f, tex: Vec2f, color: Color4b) -> Self { Self { pos, tex, color } }

    /// Returns the position of the vertex in screen space.
    pub fn position(&self) -> Vec2f { self.pos }

    /// Returns the texture coordinates associated with the vertex.
    pub fn tex_coord(&self) -> Vec2f { self.tex }

    /// Returns the vertex color.
    pub fn color(&self) -> Color4b { self.color }
}

#[derive(Copy, Clone, Debug)]
/// One batch of indexed triangles sharing a clip rectangle and a texture.
///
/// Indices are local: the vertex an index refers to is `vertex_offset + index`.
pub struct DrawCommand {
    /// Number of indices in the batch.
    pub elem_count: u32,
    /// Position of the first index in [`DrawList::indices`].
    pub index_offset: u32,
    /// Base vertex the batch's indices are relative to.
    pub vertex_offset: u32,
    /// Scissor rectangle in display pixels.
    pub clip: Recti,
    /// Sampled texture, [`TextureId::NONE`] for untextured geometry.
    pub texture: TextureId,
}

impl DrawCommand {
    /// Scissor rectangle as `[x, y, width, height]` floats.
    pub fn clip_rect(&self) -> [f32; 4] { [self.clip.x as f32, self.clip.y as f32, self.clip.width as f32, self.clip.height as f32] }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Position inside a [`DrawList`] recorded by [`DrawList::mark`].
pub struct DrawMark {
    command: usize,
}

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Backend neutral geometry for one frame.
///
/// Primitives are appended at the current clip rectangle (top of the clip stack,
/// the display by default). Once [`DrawList::finalize`] ran the list is read-only.
pub struct DrawList {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Recti>,
    display_clip: Recti,
    split_next: bool,
    finalized: bool,
}

impl Default for DrawList {
    fn default() -> Self { Self::new(Dimensioni::new(0, 0)) }
}

impl DrawList {
    /// Creates an empty list clipped to a display of the given size.
    pub fn new(display: Dimensioni) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            commands: Vec::new(),
            clip_stack: Vec::new(),
            display_clip: rect(0, 0, display.width, display.height),
            split_next: false,
            finalized: false,
        }
    }

    /// Clears the list for a new frame, keeping the allocations.
    pub fn reset(&mut self, display: Dimensioni) {
        self.vertices.clear();
        self.indices.clear();
        self.commands.clear();
        self.clip_stack.clear();
        self.display_clip = rect(0, 0, display.width, display.height);
        self.split_next = false;
        self.finalized = false;
    }

    /// Vertex buffer.
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Index buffer. Indices are relative to their command's `vertex_offset`.
    pub fn indices(&self) -> &[u16] { &self.indices }

    /// Draw commands in submission order.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Returns `true` once [`DrawList::finalize`] ran.
    pub fn is_finalized(&self) -> bool { self.finalized }

    /// Returns `true` when no geometry was emitted.
    pub fn is_empty(&self) -> bool { self.indices.is_empty() }

    /// Number of clip rectangles currently pushed.
    pub fn clip_depth(&self) -> usize { self.clip_stack.len() }

    /// Clip rectangle applied to new primitives.
    pub fn current_clip_rect(&self) -> Recti { self.clip_stack.last().copied().unwrap_or(self.display_clip) }

    /// Pushes the intersection of `r` and the current clip rectangle.
    pub fn push_clip_rect(&mut self, r: Recti) {
        let last = self.current_clip_rect();
        self.clip_stack.push(intersect_rect(&r, &last));
    }

    /// Restores the clip rectangle active before the matching push.
    pub fn pop_clip_rect(&mut self) {
        if self.clip_stack.pop().is_none() {
            log::error!("pop_clip_rect called with an empty clip stack");
        }
    }

    fn writable(&self) -> bool {
        if self.finalized {
            log::error!("draw call after the draw list was finalized, ignored");
        }
        !self.finalized
    }

    /// Appends a filled rectangle.
    pub fn add_rect(&mut self, r: Recti, color: Color) {
        if !self.writable() {
            return;
        }
        let clipped = intersect_rect(&r, &self.current_clip_rect());
        if is_empty_rect(&clipped) {
            return;
        }
        self.push_quad(quad(clipped, [0.0; 4], color), TextureId::NONE);
    }

    /// Appends the one-pixel-per-`thickness` outline of a rectangle.
    pub fn add_rect_outline(&mut self, r: Recti, color: Color, thickness: i32) {
        let t = thickness.max(1).min(r.width / 2).min(r.height / 2).max(1);
        self.add_rect(rect(r.x, r.y, r.width, t), color);
        self.add_rect(rect(r.x, r.y + r.height - t, r.width, t), color);
        self.add_rect(rect(r.x, r.y + t, t, r.height - 2 * t), color);
        self.add_rect(rect(r.x + r.width - t, r.y + t, t, r.height - 2 * t), color);
    }

    /// Appends a line segment of the given thickness.
    pub fn add_line(&mut self, from: Vec2f, to: Vec2f, thickness: f32, color: Color) {
        if !self.writable() {
            return;
        }
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let len = (dx * dx + dy * dy).sqrt();
        if !(len > 0.0) || !(thickness > 0.0) {
            return;
        }
        let pad = thickness.ceil() as i32;
        let bounds = rect(
            from.x.min(to.x).floor() as i32 - pad,
            from.y.min(to.y).floor() as i32 - pad,
            dx.abs().ceil() as i32 + 2 * pad + 1,
            dy.abs().ceil() as i32 + 2 * pad + 1,
        );
        if is_empty_rect(&intersect_rect(&bounds, &self.current_clip_rect())) {
            return;
        }
        let (nx, ny) = (-dy / len * thickness * 0.5, dx / len * thickness * 0.5);
        let c = color.to_color4b();
        let uv = Vec2f::new(0.0, 0.0);
        let v = [
            Vertex::new(Vec2f::new(from.x + nx, from.y + ny), uv, c),
            Vertex::new(Vec2f::new(to.x + nx, to.y + ny), uv, c),
            Vertex::new(Vec2f::new(to.x - nx, to.y - ny), uv, c),
            Vertex::new(Vec2f::new(from.x - nx, from.y - ny), uv, c),
        ];
        self.push_quad(v, TextureId::NONE);
    }

    /// Appends a textured rectangle. `uv` is `(u0, v0, u1, v1)`; the part outside the
    /// clip rectangle is cut off with matching texture coordinates.
    pub fn add_image(&mut self, r: Recti, texture: TextureId, uv: [f32; 4], color: Color) {
        if !self.writable() {
            return;
        }
        if let Some((dst, uv)) = clip_textured(r, uv, self.current_clip_rect()) {
            self.push_quad(quad(dst, uv, color), texture);
        }
    }

    /// Appends `text` with its top-left corner at `pos`. Returns the advance in pixels.
    pub fn add_text(&mut self, font: &dyn Font, text: &str, pos: Vec2i, color: Color) -> i32 {
        let mut x = pos.x;
        if !self.writable() {
            return 0;
        }
        let clip = self.current_clip_rect();
        let texture = font.texture();
        for c in text.chars() {
            let Some(glyph) = font.glyph(c) else { continue };
            let dst = rect(x + glyph.rect.x, pos.y + glyph.rect.y, glyph.rect.width, glyph.rect.height);
            if let Some((dst, uv)) = clip_textured(dst, glyph.uv, clip) {
                self.push_quad(quad(dst, uv, color), texture);
            }
            x += glyph.advance;
        }
        x - pos.x
    }

    /// Inserts a filled rectangle at the very start of the list, behind everything
    /// emitted so far.
    pub fn insert_rect(&mut self, r: Recti, color: Color) { self.insert_rect_at(DrawMark { command: 0 }, r, color); }

    /// Records the current end of the list. Geometry appended afterwards starts a new
    /// command, so [`DrawList::insert_rect_at`] can slide primitives in front of it.
    pub fn mark(&mut self) -> DrawMark {
        self.split_next = true;
        DrawMark { command: self.commands.len() }
    }

    /// Inserts a filled rectangle at `mark`: behind everything appended after the mark
    /// and in front of everything before it.
    pub fn insert_rect_at(&mut self, mark: DrawMark, r: Recti, color: Color) {
        if !self.writable() {
            return;
        }
        let clip = self.current_clip_rect();
        let clipped = intersect_rect(&r, &clip);
        if is_empty_rect(&clipped) {
            return;
        }
        let at = mark.command.min(self.commands.len());
        let (vertex_at, index_at) = match self.commands.get(at) {
            Some(cmd) => (cmd.vertex_offset as usize, cmd.index_offset as usize),
            None => (self.vertices.len(), self.indices.len()),
        };
        self.vertices.splice(vertex_at..vertex_at, quad(clipped, [0.0; 4], color));
        self.indices.splice(index_at..index_at, QUAD_INDICES);
        for cmd in &mut self.commands[at..] {
            cmd.vertex_offset += 4;
            cmd.index_offset += QUAD_INDICES.len() as u32;
        }
        self.commands.insert(
            at,
            DrawCommand {
                elem_count: QUAD_INDICES.len() as u32,
                index_offset: index_at as u32,
                vertex_offset: vertex_at as u32,
                clip,
                texture: TextureId::NONE,
            },
        );
        if at == self.commands.len() - 1 {
            self.split_next = true;
        }
    }

    /// Appends the finalized or unfinalized content of `other` after this list's content.
    pub fn append(&mut self, other: &DrawList) {
        if !self.writable() || other.commands.is_empty() {
            return;
        }
        let vertex_base = self.vertices.len() as u32;
        let index_base = self.indices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend_from_slice(&other.indices);
        self.commands.extend(other.commands.iter().map(|cmd| DrawCommand {
            vertex_offset: cmd.vertex_offset + vertex_base,
            index_offset: cmd.index_offset + index_base,
            ..*cmd
        }));
        self.split_next = true;
    }

    /// Drops empty commands and merges adjacent commands that share clip and texture.
    /// The visual output is unchanged. Calling it again has no effect.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        let mut merged: Vec<DrawCommand> = Vec::with_capacity(self.commands.len());
        for cmd in self.commands.drain(..).filter(|c| c.elem_count > 0) {
            if let Some(last) = merged.last_mut() {
                let contiguous = last.index_offset + last.elem_count == cmd.index_offset;
                if contiguous && last.texture == cmd.texture && same_rect(&last.clip, &cmd.clip) {
                    let shift = cmd.vertex_offset - last.vertex_offset;
                    let range = cmd.index_offset as usize..(cmd.index_offset + cmd.elem_count) as usize;
                    let highest = self.indices[range.clone()].iter().copied().max().unwrap_or(0) as u32;
                    if highest + shift <= u16::MAX as u32 {
                        for idx in &mut self.indices[range] {
                            *idx += shift as u16;
                        }
                        last.elem_count += cmd.elem_count;
                        continue;
                    }
                }
            }
            merged.push(cmd);
        }
        self.commands = merged;
        self.clip_stack.clear();
        self.finalized = true;
    }

    fn push_quad(&mut self, vertices: [Vertex; 4], texture: TextureId) {
        let clip = self.current_clip_rect();
        let reuse = !self.split_next
            && self.commands.last().is_some_and(|cmd| {
                cmd.texture == texture && same_rect(&cmd.clip, &clip) && self.vertices.len() - cmd.vertex_offset as usize + 4 <= u16::MAX as usize + 1
            });
        if !reuse {
            self.commands.push(DrawCommand {
                elem_count: 0,
                index_offset: self.indices.len() as u32,
                vertex_offset: self.vertices.len() as u32,
                clip,
                texture,
            });
            self.split_next = false;
        }
        let Some(cmd) = self.commands.last_mut() else { return };
        let base = (self.vertices.len() - cmd.vertex_offset as usize) as u16;
        self.vertices.extend_from_slice(&vertices);
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
        cmd.elem_count += QUAD_INDICES.len() as u32;
    }
}

fn quad(r: Recti, uv: [f32; 4], color: Color) -> [Vertex; 4] {
    let (x0, y0) = (r.x as f32, r.y as f32);
    let (x1, y1) = ((r.x + r.width) as f32, (r.y + r.height) as f32);
    let c = color.to_color4b();
    [
        Vertex::new(Vec2f::new(x0, y0), Vec2f::new(uv[0], uv[1]), c),
        Vertex::new(Vec2f::new(x1, y0), Vec2f::new(uv[2], uv[1]), c),
        Vertex::new(Vec2f::new(x1, y1), Vec2f::new(uv[2], uv[3]), c),
        Vertex::new(Vec2f::new(x0, y1), Vec2f::new(uv[0], uv[3]), c),
    ]
}

/// Clips a textured rectangle, interpolating the texture coordinates of the part kept.
fn clip_textured(dst: Recti, uv: [f32; 4], clip: Recti) -> Option<(Recti, [f32; 4])> {
    if is_empty_rect(&dst) {
        return None;
    }
    let kept = intersect_rect(&dst, &clip);
    if is_empty_rect(&kept) {
        return None;
    }
    if same_rect(&kept, &dst) {
        return Some((dst, uv));
    }
    let (dw, dh) = (dst.width as f32, dst.height as f32);
    let tx0 = (kept.x - dst.x) as f32 / dw;
    let ty0 = (kept.y - dst.y) as f32 / dh;
    let tx1 = (kept.x + kept.width - dst.x) as f32 / dw;
    let ty1 = (kept.y + kept.height - dst.y) as f32 / dh;
    let (du, dv) = (uv[2] - uv[0], uv[3] - uv[1]);
    Some((kept, [uv[0] + tx0 * du, uv[1] + ty0 * dv, uv[0] + tx1 * du, uv[1] + ty1 * dv]))
}
