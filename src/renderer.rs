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

/// Pixel layout of a texture handed to the backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureFormat {
    /// Four 8-bit channels.
    Rgba,
    /// One 8-bit coverage channel, used for glyph atlases.
    Alpha,
}

/// Failures reported by rendering backends.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A shader failed to compile.
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
    /// Shaders failed to link into a program.
    #[error("shader link failed: {0}")]
    ShaderLink(String),
    /// A GPU resource could not be created.
    #[error("resource allocation failed: {0}")]
    Allocation(String),
    /// A draw command referenced a texture the backend does not know.
    #[error("unknown texture {0:?}")]
    UnknownTexture(TextureId),
}

/// Consumer of finalized draw lists.
///
/// Each command is drawn as `elem_count` indices starting at `index_offset`, every
/// index offset by `vertex_offset`, scissored to the command's clip rectangle and
/// sampling its texture (none for [`TextureId::NONE`]).
pub trait Renderer {
    /// Associates a backend texture with `id` before draw lists reference it.
    fn register_texture(&mut self, id: TextureId, format: TextureFormat);
    /// Draws a finalized list onto a target of the given size.
    fn render(&mut self, display: Dimensioni, list: &DrawList) -> Result<(), BackendError>;
}
