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
use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::*;

/// Persistent per-widget state keyed by [`Id`].
///
/// Values are type-erased; a read with a type that does not match the stored value
/// returns the caller's default and leaves the stored value untouched. Nothing is
/// evicted automatically.
#[derive(Default)]
pub struct StateStore {
    entries: HashMap<Id, Box<dyn Any>>,
}

impl StateStore {
    /// Creates an empty store.
    pub fn new() -> Self { Self::default() }

    /// Returns a copy of the value stored for `id`, inserting `default` when absent.
    pub fn get<T: Clone + 'static>(&mut self, id: Id, default: T) -> T {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => entry.get().downcast_ref::<T>().cloned().unwrap_or(default),
            Entry::Vacant(entry) => {
                entry.insert(Box::new(default.clone()));
                default
            }
        }
    }

    /// Borrows the stored value without inserting anything.
    pub fn peek<T: 'static>(&self, id: Id) -> Option<&T> { self.entries.get(&id).and_then(|v| v.downcast_ref::<T>()) }

    /// Stores `value` for `id`, replacing whatever was there.
    pub fn set<T: 'static>(&mut self, id: Id, value: T) { self.entries.insert(id, Box::new(value)); }

    /// Runs `f` on the stored value in place. A missing value is initialized with
    /// `default`; a value of another type is left alone and `f` sees a scratch copy of
    /// `default` instead.
    pub fn update<T: 'static, R>(&mut self, id: Id, default: T, f: impl FnOnce(&mut T) -> R) -> R {
        match self.entries.entry(id) {
            Entry::Occupied(mut entry) => match entry.get_mut().downcast_mut::<T>() {
                Some(value) => f(value),
                None => {
                    let mut scratch = default;
                    f(&mut scratch)
                }
            },
            Entry::Vacant(entry) => {
                let mut value = default;
                let res = f(&mut value);
                entry.insert(Box::new(value));
                res
            }
        }
    }

    /// Removes the value stored for `id`. Returns `true` when something was removed.
    pub fn delete(&mut self, id: Id) -> bool { self.entries.remove(&id).is_some() }

    /// Returns `true` when a value of any type is stored for `id`.
    pub fn contains(&self, id: Id) -> bool { self.entries.contains_key(&id) }

    /// Number of stored values.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when the store is empty.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Drops every stored value.
    pub fn clear(&mut self) { self.entries.clear(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_inserts_default_once() {
        let mut store = StateStore::new();
        let id = Id::from_str("counter");
        assert_eq!(store.get(id, 3i32), 3);
        store.set(id, 7i32);
        assert_eq!(store.get(id, 3i32), 7);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn mismatched_type_reads_fail_closed() {
        let mut store = StateStore::new();
        let id = Id::from_str("slot");
        store.set(id, String::from("kept"));
        assert_eq!(store.get(id, 5u32), 5);
        assert_eq!(store.peek::<String>(id).map(String::as_str), Some("kept"));
        let seen = store.update(id, 1u32, |v| {
            *v += 1;
            *v
        });
        assert_eq!(seen, 2);
        assert_eq!(store.peek::<String>(id).map(String::as_str), Some("kept"));
    }

    #[test]
    fn update_and_delete() {
        let mut store = StateStore::new();
        let id = Id::from_str("list");
        store.update(id, Vec::<u8>::new(), |v| v.push(1));
        store.update(id, Vec::<u8>::new(), |v| v.push(2));
        assert_eq!(store.peek::<Vec<u8>>(id), Some(&vec![1, 2]));
        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert!(store.is_empty());
    }
}
