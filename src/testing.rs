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

pub(crate) fn display() -> Dimensioni { Dimensioni::new(400, 200) }

pub(crate) fn pointer(x: i32, y: i32, down: bool) -> InputSnapshot {
    InputSnapshot {
        mouse_pos: vec2(x, y),
        mouse_down: if down { MouseButton::LEFT } else { MouseButton::NONE },
        ..InputSnapshot::default()
    }
}

pub(crate) fn keys(keys_down: KeyCode, modifiers: Modifiers) -> InputSnapshot { InputSnapshot { keys_down, modifiers, ..InputSnapshot::default() } }

pub(crate) fn typed(text: &str) -> InputSnapshot { InputSnapshot { text: text.to_string(), ..InputSnapshot::default() } }

/// Runs one frame of `f` against a context with the default font and style.
pub(crate) fn run<R>(ctx: &mut Context, input: InputSnapshot, f: impl FnOnce(&mut Context) -> R) -> R {
    ctx.begin(input, display(), 1.0 / 60.0);
    let res = f(ctx);
    ctx.end().expect("frame was opened above");
    res
}
