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

#[derive(Copy, Clone, Debug)]
/// Placement of one glyph relative to the pen position (top-left of the line).
pub struct Glyph {
    /// Horizontal pen advance in pixels.
    pub advance: i32,
    /// Quad covered by the glyph, relative to the pen position.
    pub rect: Recti,
    /// Texture coordinates of the glyph as `(u0, v0, u1, v1)`.
    pub uv: [f32; 4],
}

/// Text measurement and glyph lookup supplied by the font collaborator.
pub trait Font {
    /// Returns the font's display name.
    fn name(&self) -> &str;
    /// Height of one line of text in pixels.
    fn line_height(&self) -> i32;
    /// Looks up the glyph for `c`. Characters without a glyph advance nothing.
    fn glyph(&self, c: char) -> Option<Glyph>;
    /// Texture the glyph quads sample from.
    fn texture(&self) -> TextureId { TextureId::NONE }
    /// Width of `text` in pixels.
    fn text_width(&self, text: &str) -> i32 { text.chars().map(|c| self.glyph(c).map_or(0, |g| g.advance)).sum() }
}

/// Monospaced font that renders every visible character as a solid block.
///
/// Intended for headless use and tests where only the metrics matter.
#[derive(Copy, Clone, Debug)]
pub struct FixedFont {
    advance: i32,
    line_height: i32,
}

impl Default for FixedFont {
    fn default() -> Self { Self::new(8, 14) }
}

impl FixedFont {
    /// Creates a font with the given cell size.
    pub fn new(advance: i32, line_height: i32) -> Self { Self { advance: advance.max(1), line_height: line_height.max(1) } }
}

impl Font for FixedFont {
    fn name(&self) -> &str { "fixed" }

    fn line_height(&self) -> i32 { self.line_height }

    fn glyph(&self, c: char) -> Option<Glyph> {
        if c.is_control() {
            return None;
        }
        let rect = if c.is_whitespace() {
            rect(0, 0, 0, 0)
        } else {
            rect(1, self.line_height / 7, (self.advance - 2).max(1), self.line_height - 2 * (self.line_height / 7))
        };
        Some(Glyph { advance: self.advance, rect, uv: [0.0, 0.0, 0.0, 0.0] })
    }
}
