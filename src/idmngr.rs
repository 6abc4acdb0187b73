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
use std::collections::HashMap;

use super::*;

/// Derives widget identifiers from a stack of naming scopes.
///
/// The identifier of a label is the hash of the label folded into the identifier of
/// the innermost scope. When the same label appears several times in one scope during
/// a frame, the n-th repeat (n >= 1) additionally hashes `n`, so siblings stay distinct
/// while the first occurrence keeps the plain hash.
#[derive(Default)]
pub struct IdManager {
    id_stack: Vec<Id>,
    occurrences: HashMap<Id, u32>,
}

impl IdManager {
    /// Creates an empty manager rooted at [`Id::ROOT`].
    pub fn new() -> Self { Self::default() }

    /// Clears the scope stack and the per-frame occurrence counters.
    pub fn reset(&mut self) {
        self.id_stack.clear();
        self.occurrences.clear();
    }

    /// Identifier of the innermost scope.
    pub fn current_scope(&self) -> Id { self.id_stack.last().copied().unwrap_or(Id::ROOT) }

    /// Number of scopes currently pushed.
    pub fn depth(&self) -> usize { self.id_stack.len() }

    /// Resolves `label` inside the current scope, counting the occurrence.
    pub fn get_id_from_str(&mut self, label: &str) -> Id {
        let base = self.current_scope().child(label);
        let count = self.occurrences.entry(base).or_insert(0);
        let id = if *count == 0 { base } else { base.child_index(*count) };
        *count += 1;
        id
    }

    /// Resolves a numeric key inside the current scope. Numeric keys are not counted,
    /// callers use them for naturally unique values such as row indices.
    pub fn get_id_u32(&self, key: u32) -> Id { self.current_scope().child_index(key) }

    /// Resolves `label` and enters it as a new scope.
    pub fn push_scope(&mut self, label: &str) -> Id {
        let id = self.get_id_from_str(label);
        self.id_stack.push(id);
        id
    }

    /// Enters an already resolved identifier as a new scope.
    pub fn push_id(&mut self, id: Id) { self.id_stack.push(id); }

    /// Leaves the innermost scope. Returns `false` when no scope was open.
    pub fn pop_scope(&mut self) -> bool { self.id_stack.pop().is_some() }
}
